//! Search request bookkeeping.
//!
//! Each search takes a ticket; only the response to the newest ticket may
//! touch the page. A failed search leaves the page as it was.

use crate::error::SearchError;
use crate::render::{self, RenderOptions};
use crate::search::SearchTerm;
use kd_api_types::SearchResults;
use tracing::debug;

/// Everything the page needs to show one set of results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchUpdate {
    pub header: String,
    pub content_html: String,
    /// Item count to page over, when the results need more than one page.
    pub paginate: Option<usize>,
}

#[derive(Debug)]
pub enum SearchOutcome {
    Apply(SearchUpdate),
    /// A newer search was started while this one was in flight.
    Stale,
    Failed(SearchError),
}

#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    latest: u64,
}

impl SearchSession {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn finish(
        &self,
        ticket: u64,
        term: &SearchTerm,
        response: Result<SearchResults, SearchError>,
        opts: &RenderOptions,
    ) -> SearchOutcome {
        if ticket != self.latest {
            debug!(ticket, latest = self.latest, "dropping stale search response");
            return SearchOutcome::Stale;
        }
        let results = match response {
            Ok(r) => r,
            Err(e) => return SearchOutcome::Failed(e),
        };
        let count = results.len();
        SearchOutcome::Apply(SearchUpdate {
            header: render::header_text(count),
            content_html: render::results_html(&results, term, opts),
            paginate: opts.needs_pagination(count).then_some(count),
        })
    }
}

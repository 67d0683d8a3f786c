//! Search box and alphabet index.
//!
//! Both fire the same request and replace `#glossary-content` with the
//! rendered result lists; pagination restarts when results overflow a page.
//! Responses to superseded searches are discarded.

use crate::api;
use crate::dom::{self, Elements};
use crate::pagination;
use crate::state;
use kd_glossary_core::render::RenderOptions;
use kd_glossary_core::search::SearchTerm;
use kd_glossary_core::session::SearchOutcome;

/// `#btn-search` clicked or Enter pressed in the query box.
pub fn on_search_form(els: &Elements) {
    let raw = els
        .query_input
        .as_ref()
        .map(dom::get_input_value)
        .unwrap_or_default();
    spawn(els, SearchTerm::from_query(&raw));
}

/// A `.alpha` letter in the index clicked.
pub fn on_letter(els: &Elements, letter: &str) {
    spawn(els, SearchTerm::from_letter(letter));
}

fn spawn(els: &Elements, term: SearchTerm) {
    let els = els.clone();
    wasm_bindgen_futures::spawn_local(async move {
        run(&els, &term).await;
    });
}

pub async fn run(els: &Elements, term: &SearchTerm) {
    let ticket = state::with_mut(|s| s.search.begin());
    gloo_console::log!(format!("search: {}", term));
    let response = api::search(term).await;

    let config = state::config();
    let opts = RenderOptions {
        items_per_page: config.items_per_page,
        enable_submissions: config.enable_submissions,
        tweeted_terms: &config.tweeted_terms,
    };
    let outcome = state::with(|s| s.search.finish(ticket, term, response, &opts));

    let update = match outcome {
        SearchOutcome::Apply(update) => update,
        SearchOutcome::Stale => return,
        SearchOutcome::Failed(e) => {
            gloo_console::error!(format!("search failed: {}", e));
            return;
        }
    };

    if let Some(header) = &els.glossary_header {
        dom::set_text(header, &update.header);
    }
    let Some(content) = &els.glossary_content else {
        return;
    };
    dom::set_inner_html(content, &update.content_html);

    match update.paginate {
        Some(count) => pagination::init(count),
        None => state::set_pager(None),
    }
}

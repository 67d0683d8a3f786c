//! HTTP client for the glossary search endpoint.

use gloo_net::http::Request;
use kd_api_types::SearchResults;
use kd_glossary_core::SearchError;
use kd_glossary_core::search::SearchTerm;

/// `GET /api?query=<term>` and decode the ordered result map.
pub async fn search(term: &SearchTerm) -> Result<SearchResults, SearchError> {
    let path = term.api_path();

    let resp = Request::get(&path)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SearchError::Transport {
            path: path.clone(),
            message: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(SearchError::Status {
            path,
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }

    let body = resp.text().await.map_err(|e| SearchError::Transport {
        path: path.clone(),
        message: e.to_string(),
    })?;

    Ok(SearchResults::from_json(&body)?)
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("itemsPerPage must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} answered {status} {status_text}")]
    Status {
        path: String,
        status: u16,
        status_text: String,
    },
    #[error("could not decode search results: {0}")]
    Decode(#[from] serde_json::Error),
}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatesError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request error: {url} returned {status}")]
    Status { status: StatusCode, url: String },

    #[error("HUMO rates section not found (no element with class '{class}')")]
    StructureNotFound { class: String },

    #[error("parsing error: invalid {field} value '{value}'")]
    Parsing { field: &'static str, value: String },
}

impl RatesError {
    pub fn is_transport(&self) -> bool {
        matches!(self, RatesError::Transport(_) | RatesError::Status { .. })
    }
}

use thiserror::Error;

pub mod types;
pub mod utils;
pub mod metrics;
pub mod upstream;

/// Failure of an outbound HTTP call to another service.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request to {0} timed out")]
    Timeout(String),
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

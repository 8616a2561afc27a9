use thiserror::Error;

/// Message shown when a success envelope carries no `data[0].url`.
pub const MISSING_URL_MESSAGE: &str = "响应中缺少结果 URL";

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Failure reported by the service through its `detail` field.
    #[error("{0}")]
    Service(String),

    #[error("{}", MISSING_URL_MESSAGE)]
    MalformedResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for StudioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StudioError::Decode(err.to_string())
        } else {
            StudioError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(err: serde_json::Error) -> Self {
        StudioError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudioError>;

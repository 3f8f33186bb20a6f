use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Remote photo service URL or API key is not configured")]
    Configuration,

    #[error("Failed to build request URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Remote service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode remote response: {0}")]
    Decode(#[from] serde_json::Error),
}

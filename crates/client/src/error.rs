use reqwest::StatusCode;

/// Errors surfaced by the notes client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request could not be sent or the response could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

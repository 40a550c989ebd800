use thiserror::Error;
use uuid::Uuid;

/// Node client errors
#[derive(Error, Debug)]
pub enum NodeClientError {
    /// HTTP request failed (connection refused, timeout, TLS, body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Node answered with a non-success status
    #[error("Node returned error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Endpoint could not be turned into a request URL
    #[error("Invalid node endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Node reported the get operation as failed
    #[error("Get operation {operation_id} failed ({error_type}): {message}")]
    OperationFailed {
        operation_id: Uuid,
        error_type: String,
        message: String,
    },

    /// Operation did not finish within the configured number of polls
    #[error("Get operation {operation_id} did not complete after {attempts} polls")]
    OperationTimeout { operation_id: Uuid, attempts: u32 },

    /// Response body did not have the expected shape
    #[error("Invalid node response: {0}")]
    InvalidResponse(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, NodeClientError>;

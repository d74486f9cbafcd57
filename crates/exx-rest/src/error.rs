//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected JSON shape
    #[error("Decode error: {message} (HTTP {status}, body: {snippet})")]
    Decode {
        /// HTTP status of the response
        status: u16,
        /// Underlying JSON error
        message: String,
        /// Truncated response body for diagnostics
        snippet: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credential or signing failure
    #[error(transparent)]
    Auth(#[from] exx_auth::AuthError),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Check if this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if this error came from response decoding
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

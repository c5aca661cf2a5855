//! Error type for task bank API calls.
//!
//! DESIGN
//! ======
//! `Display` for HTTP failures is the bare server message so views can put
//! `err.to_string()` straight into an error banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by the request client and the session manager.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A successful response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The login response carried no token.
    #[error("login response did not include a token")]
    MissingToken,
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for `401 Unauthorized` responses.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

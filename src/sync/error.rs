//! Sync Layer - Errors

use thiserror::Error;

/// Failure talking to the item store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The `error` text supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

/// Input rejected before any request is made. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a todo item")]
    Empty,

    #[error("Todo must be {max} characters or less")]
    TooLong { len: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no backend endpoint is configured")]
    Offline,
}

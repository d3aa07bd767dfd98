//! Dispatch error taxonomy.

use thiserror::Error;

/// Errors that abort a whole dispatch call before any recipient is attempted.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request error: {0}")]
    InvalidRequest(#[from] ValidationError),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("provider init error: {0}")]
    ProviderInit(String),
}

/// The provider rejected a whole batch before evaluating recipients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl std::fmt::Display) -> Self {
        Self(message.to_string())
    }
}

/// Delivery failure for a single recipient within an accepted batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct RecipientError {
    /// Provider error code, e.g. `UNREGISTERED`.
    pub code: String,
    pub message: String,
}

impl RecipientError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Request rejected by message validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the message must specify at least one registration ID")]
    MissingRecipients,
    #[error("the token must not be empty")]
    EmptyToken,
    #[error("the message may specify at most {0} registration IDs")]
    TooManyTokens(usize),
    #[error("the message's TimeToLive field must be an integer between 0 and {max} (4 weeks)")]
    InvalidTimeToLive { max: u32 },
}

//! Provider response types.

use crate::RecipientError;

/// Result of delivering to one recipient position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    /// Provider message ID (if delivered).
    pub message_id: Option<String>,
    /// Error (if failed).
    pub error: Option<RecipientError>,
}

impl SendResponse {
    /// Create a delivered response.
    pub fn success(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// Create a failed response.
    pub fn failure(error: RecipientError) -> Self {
        Self {
            message_id: None,
            error: Some(error),
        }
    }

    /// Check if delivery was successful.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Response to one multicast call.
///
/// `responses` holds one entry per token position, or a single entry for a
/// topic send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResponse {
    pub success_count: usize,
    pub failure_count: usize,
    pub responses: Vec<SendResponse>,
}

impl BatchResponse {
    /// Build a response, deriving the counts from the per-recipient results.
    pub fn from_responses(responses: Vec<SendResponse>) -> Self {
        let success_count = responses.iter().filter(|r| r.is_success()).count();
        Self {
            success_count,
            failure_count: responses.len() - success_count,
            responses,
        }
    }
}

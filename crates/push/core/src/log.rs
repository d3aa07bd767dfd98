//! Per-recipient outcome records.

use crate::PushRequest;
use crate::config::LogConfig;

/// Platform tag carried by every record.
pub const PLATFORM_ANDROID: &str = "android";

/// Number of characters masked at each end of a token.
const TOKEN_MARK_LEN: usize = 10;

/// Outcome of one recipient in one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum PushStatus {
    #[default]
    #[serde(rename = "succeeded-push")]
    Succeeded,
    #[serde(rename = "failed-push")]
    Failed,
}

impl std::fmt::Display for PushStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => f.write_str("succeeded-push"),
            Self::Failed => f.write_str("failed-push"),
        }
    }
}

/// A single succeeded/failed record attributable to one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogPushEntry {
    #[serde(rename = "type")]
    pub status: PushStatus,
    pub platform: String,
    pub token: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogPushEntry {
    /// Build a record for `token`, applying the configured masking.
    pub fn new(
        status: PushStatus,
        token: &str,
        req: &PushRequest,
        error: Option<&dyn std::fmt::Display>,
        opts: &LogConfig,
    ) -> Self {
        let token = if opts.hide_token {
            hide_token(token, TOKEN_MARK_LEN)
        } else {
            token.to_string()
        };

        let message = if opts.hide_messages {
            "(message redacted)".to_string()
        } else {
            req.message.clone()
        };

        Self {
            status,
            platform: PLATFORM_ANDROID.to_string(),
            token,
            message,
            error: error.map(|e| e.to_string()),
        }
    }

    /// Record for a delivered recipient.
    pub fn succeeded(token: &str, req: &PushRequest, opts: &LogConfig) -> Self {
        Self::new(PushStatus::Succeeded, token, req, None, opts)
    }

    /// Record for a failed recipient.
    pub fn failed(
        token: &str,
        req: &PushRequest,
        error: &dyn std::fmt::Display,
        opts: &LogConfig,
    ) -> Self {
        Self::new(PushStatus::Failed, token, req, Some(error), opts)
    }
}

/// Mask the first and last `mark_len` characters of a token.
///
/// Tokens too short to keep a visible middle are masked entirely.
pub fn hide_token(token: &str, mark_len: usize) -> String {
    let len = token.chars().count();
    if len < mark_len * 2 {
        return "*".repeat(len);
    }

    token
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < mark_len || i >= len - mark_len {
                '*'
            } else {
                c
            }
        })
        .collect()
}

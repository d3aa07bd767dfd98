//! Access log backed by `tracing`.

use push_core::{LogPushEntry, PushStatus};

use crate::PushLog;

/// Writes succeeded pushes at `info` and failed pushes at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPushLog;

impl PushLog for TracingPushLog {
    fn record(&self, entry: &LogPushEntry) {
        match entry.status {
            PushStatus::Succeeded => tracing::info!(
                platform = %entry.platform,
                token = %entry.token,
                body = %entry.message,
                "{}",
                entry.status
            ),
            PushStatus::Failed => tracing::error!(
                platform = %entry.platform,
                token = %entry.token,
                body = %entry.message,
                error = entry.error.as_deref().unwrap_or_default(),
                "{}",
                entry.status
            ),
        }
    }
}

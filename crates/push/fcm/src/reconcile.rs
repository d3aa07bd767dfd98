//! Mapping batch results back to recipients.

use push_core::config::LogConfig;
use push_core::{LogPushEntry, PushRequest};

use crate::{DispatchOutcome, NotificationBatch, StatStore};

/// Per-recipient results of one or more batches in a single attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Recipients to resend to in the next attempt.
    pub failed: Vec<String>,
    pub succeeded: Vec<LogPushEntry>,
    pub failures: Vec<LogPushEntry>,
}

impl Reconciliation {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Fold another batch's results into this one.
    pub fn merge(&mut self, other: Reconciliation) {
        self.failed.extend(other.failed);
        self.succeeded.extend(other.succeeded);
        self.failures.extend(other.failures);
    }
}

/// Attributes outcomes to recipients and updates the aggregate counters.
pub struct Reconciler<'a> {
    stats: &'a dyn StatStore,
    log: &'a LogConfig,
}

impl<'a> Reconciler<'a> {
    pub fn new(stats: &'a dyn StatStore, log: &'a LogConfig) -> Self {
        Self { stats, log }
    }

    /// Reconcile one batch's outcome.
    ///
    /// `recipients` is the attempt's full recipient list; result `k` of the
    /// batch belongs to `recipients[batch.offset + k]`, or to `req.to` when
    /// that position does not exist.
    pub fn reconcile(
        &self,
        req: &PushRequest,
        recipients: &[String],
        batch: &NotificationBatch<'_>,
        outcome: &DispatchOutcome,
    ) -> Reconciliation {
        let mut result = Reconciliation::default();

        match outcome {
            DispatchOutcome::Rejected(err) => {
                let targets = batch.targets();
                self.stats.add_android_error(targets.len() as u64);

                for to in targets {
                    result.failed.push(to.to_string());
                    result
                        .failures
                        .push(LogPushEntry::failed(to, req, err, self.log));
                }
            }
            DispatchOutcome::Delivered(response) => {
                self.stats.add_android_success(response.success_count as u64);
                self.stats.add_android_error(response.failure_count as u64);

                for (k, send) in response.responses.iter().enumerate() {
                    let to = recipient_at(req, recipients, batch.offset + k);

                    match &send.error {
                        Some(err) => {
                            result.failed.push(to.to_string());
                            result
                                .failures
                                .push(LogPushEntry::failed(to, req, err, self.log));
                        }
                        None => result
                            .succeeded
                            .push(LogPushEntry::succeeded(to, req, self.log)),
                    }
                }
            }
        }

        result
    }
}

fn recipient_at<'r>(
    req: &'r PushRequest,
    recipients: &'r [String],
    position: usize,
) -> &'r str {
    recipients
        .get(position)
        .map(String::as_str)
        .or(req.to.as_deref())
        .unwrap_or_default()
}

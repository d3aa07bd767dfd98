//! Batch, dispatch, reconcile and retry a push request.

use std::sync::Arc;

use push_core::{DispatchError, PushConfig, PushRequest, check_message};

use crate::{
    ClientCache, FeedbackNotifier, FeedbackTransport, HttpFeedback, MessageTemplate,
    MessagingFactory, PushLog, Reconciler, Reconciliation, StatStore, dispatch_all,
};

/// Result of a dispatch call. Per-recipient detail only goes to the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushSummary {
    /// Attempts made, including the first.
    pub attempts: u32,
    /// Whether any recipient still failed after the last attempt.
    pub has_failures: bool,
}

/// Progress of one dispatch call through its attempts.
#[derive(Debug)]
struct RetryState {
    attempt: u32,
    max_retry: u32,
    pending: Vec<String>,
}

impl RetryState {
    /// Move to the next attempt if failures remain and retries are left.
    fn advance(&mut self, round: Reconciliation) -> bool {
        if !round.has_failures() || self.attempt > self.max_retry {
            return false;
        }

        self.pending = round.failed;
        true
    }
}

/// Android push through FCM multicast.
pub struct FcmPusher<F: MessagingFactory, T = HttpFeedback> {
    config: PushConfig,
    cache: Arc<ClientCache<F>>,
    stats: Arc<dyn StatStore>,
    log: Arc<dyn PushLog>,
    feedback: FeedbackNotifier<T>,
}

impl<F, T> FcmPusher<F, T>
where
    F: MessagingFactory,
    T: FeedbackTransport,
{
    /// Create a pusher around a shared client cache.
    pub fn new(
        config: PushConfig,
        cache: Arc<ClientCache<F>>,
        stats: Arc<dyn StatStore>,
        log: Arc<dyn PushLog>,
        feedback: T,
    ) -> Self {
        let feedback = FeedbackNotifier::new(feedback, &config.core);

        Self {
            config,
            cache,
            stats,
            log,
            feedback,
        }
    }

    /// Send `req`, retrying failed recipients up to the effective ceiling.
    ///
    /// Invalid requests and configuration or client construction errors
    /// fail before anything is sent.
    pub async fn push(&self, req: &PushRequest) -> Result<PushSummary, DispatchError> {
        tracing::debug!("start push notification for android");

        if !self.config.android.enabled {
            tracing::error!("android notification is disabled");
            return Err(DispatchError::Config(
                "android notification is disabled".to_string(),
            ));
        }

        if let Err(e) = check_message(req, &self.config.android) {
            tracing::error!(error = %e, "request error");
            return Err(e.into());
        }

        if req.project_id.is_empty() {
            tracing::error!("FCM project id is empty");
            return Err(DispatchError::Config("FCM project id is empty".to_string()));
        }

        let template = MessageTemplate::from_request(req);
        let mut state = RetryState {
            attempt: 0,
            max_retry: self.config.android.max_retry_for(req.retry),
            pending: req.tokens.clone(),
        };

        loop {
            state.attempt += 1;

            let round = self.attempt(req, &template, &state.pending).await?;
            let has_failures = round.has_failures();

            if !state.advance(round) {
                return Ok(PushSummary {
                    attempts: state.attempt,
                    has_failures,
                });
            }

            tracing::info!(
                attempt = state.attempt,
                pending = state.pending.len(),
                "retrying failed recipients"
            );
        }
    }

    /// One full pass over the pending recipients.
    async fn attempt(
        &self,
        req: &PushRequest,
        template: &MessageTemplate,
        pending: &[String],
    ) -> Result<Reconciliation, DispatchError> {
        let credentials = req.credentials();
        let client = self
            .cache
            .acquire(&req.project_id, credentials.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "FCM server error"))?;

        let batches: Vec<_> = template
            .batches(pending, req.topic(), self.config.android.batch_limit)
            .collect();
        let outcomes = dispatch_all(client.as_ref(), &batches).await;

        let reconciler = Reconciler::new(self.stats.as_ref(), &self.config.log);
        let mut round = Reconciliation::default();
        for (batch, outcome) in batches.iter().zip(&outcomes) {
            round.merge(reconciler.reconcile(req, pending, batch, outcome));
        }

        for entry in &round.succeeded {
            self.log.record(entry);
        }
        for entry in &round.failures {
            self.log.record(entry);
            self.feedback.notify(req, entry.clone()).await;
        }

        Ok(round)
    }
}

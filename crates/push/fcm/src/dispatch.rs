//! Sending batches through a provider client.

use push_core::{BatchResponse, TransportError};

use crate::{Messaging, NotificationBatch};

/// What happened to one batch.
///
/// A rejected batch and a batch with individual failures are kept apart so
/// every recipient can still be attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The provider evaluated each recipient.
    Delivered(BatchResponse),
    /// The whole batch failed before any recipient was evaluated.
    Rejected(TransportError),
}

/// Send one batch in a single round trip.
pub async fn dispatch<M: Messaging>(client: &M, batch: &NotificationBatch<'_>) -> DispatchOutcome {
    match client.send_multicast(batch).await {
        Ok(response) => {
            if batch.topic.is_none() {
                tracing::debug!(
                    success_count = response.success_count,
                    failure_count = response.failure_count,
                    "android batch sent"
                );
            }
            DispatchOutcome::Delivered(response)
        }
        Err(e) => {
            tracing::error!(error = %e, recipients = batch.tokens.len(), "FCM send message error");
            DispatchOutcome::Rejected(e)
        }
    }
}

/// Send every batch concurrently; outcomes come back in batch order.
pub async fn dispatch_all<M: Messaging>(
    client: &M,
    batches: &[NotificationBatch<'_>],
) -> Vec<DispatchOutcome> {
    futures::future::join_all(batches.iter().map(|batch| dispatch(client, batch))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageTemplate;
    use crate::testing::{FakeClient, all_delivered, responder};

    #[tokio::test]
    async fn test_outcomes_in_batch_order() {
        let client = FakeClient::new(responder(|tokens, _| {
            if tokens.first().is_some_and(|t| t == "reject") {
                Err(TransportError::new("unavailable"))
            } else {
                Ok(all_delivered(tokens.len()))
            }
        }));

        let recipients: Vec<String> = vec!["ok-1".into(), "reject".into(), "ok-2".into()];
        let template = MessageTemplate::default();
        let batches: Vec<_> = template.batches(&recipients, None, 1).collect();

        let outcomes = dispatch_all(&client, &batches).await;
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], DispatchOutcome::Delivered(_)));
        assert_eq!(
            outcomes[1],
            DispatchOutcome::Rejected(TransportError::new("unavailable"))
        );
        assert!(matches!(outcomes[2], DispatchOutcome::Delivered(_)));
        assert_eq!(client.calls().len(), 3);
    }
}

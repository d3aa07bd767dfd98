//! Provider and collaborator traits.

use push_core::{BatchResponse, LogPushEntry, TransportError};

use crate::{NotificationBatch, ServiceAccountKey};

/// Provider client able to send one multicast batch.
#[trait_variant::make(Send)]
pub trait Messaging: Send + Sync {
    /// Send a batch in a single round trip.
    ///
    /// An `Err` means the whole batch was rejected before any recipient was
    /// evaluated.
    async fn send_multicast(
        &self,
        batch: &NotificationBatch<'_>,
    ) -> Result<BatchResponse, TransportError>;
}

/// Builds provider clients from service-account credentials.
#[trait_variant::make(Send)]
pub trait MessagingFactory: Send + Sync {
    type Client: Messaging;

    /// Construct a client for `project_id`.
    async fn connect(
        &self,
        project_id: &str,
        key: &ServiceAccountKey,
    ) -> color_eyre::eyre::Result<Self::Client>;
}

/// Aggregate delivery counters.
pub trait StatStore: Send + Sync {
    fn add_android_success(&self, count: u64);

    fn add_android_error(&self, count: u64);
}

/// Access log receiving one record per recipient per attempt.
pub trait PushLog: Send + Sync {
    fn record(&self, entry: &LogPushEntry);
}

/// Delivers a failure record to an external feedback endpoint.
#[trait_variant::make(Send)]
pub trait FeedbackTransport: Send + Sync + 'static {
    async fn deliver(&self, entry: &LogPushEntry, url: &str) -> color_eyre::eyre::Result<()>;
}

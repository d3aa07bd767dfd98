//! FCM Multicast Dispatch
//!
//! Batching, dispatch, reconciliation and retry of push requests against
//! Firebase Cloud Messaging, with asynchronous failure feedback.

mod access_log;
mod batch;
mod cache;
mod credentials;
mod dispatch;
mod feedback;
mod pusher;
mod reconcile;
mod stats;
mod traits;

#[cfg(test)]
mod testing;

pub use access_log::*;
pub use batch::*;
pub use cache::*;
pub use credentials::*;
pub use dispatch::*;
pub use feedback::*;
pub use pusher::*;
pub use reconcile::*;
pub use stats::*;
pub use traits::*;

// Re-export for convenience
pub use push_core;

//! Failure feedback, off the dispatch path.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::WrapErr as _;
use push_core::config::CoreConfig;
use push_core::{LogPushEntry, PushRequest};

use crate::FeedbackTransport;

/// Posts failure records as JSON.
#[derive(Debug, Clone)]
pub struct HttpFeedback {
    client: reqwest::Client,
}

impl HttpFeedback {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> color_eyre::eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("failed to build feedback HTTP client")?;

        Ok(Self { client })
    }
}

impl FeedbackTransport for HttpFeedback {
    async fn deliver(&self, entry: &LogPushEntry, url: &str) -> color_eyre::eyre::Result<()> {
        let response = self
            .client
            .post(url)
            .json(entry)
            .send()
            .await
            .wrap_err_with(|| format!("failed to send feedback to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            color_eyre::eyre::bail!("feedback endpoint {url} returned {status}");
        }

        Ok(())
    }
}

/// Where failure records go after the access log.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Append to the request's log collection inline.
    Sync,
    /// Deliver to an endpoint from a detached task.
    Hook { url: String, timeout: Duration },
    Drop,
}

/// Reports failed recipients to an external observer.
pub struct FeedbackNotifier<T> {
    transport: Arc<T>,
    mode: Mode,
}

impl<T: FeedbackTransport> FeedbackNotifier<T> {
    /// Create a notifier; synchronous-audit mode takes precedence over a hook.
    pub fn new(transport: T, core: &CoreConfig) -> Self {
        let mode = if core.sync {
            Mode::Sync
        } else if let Some(url) = core.feedback_url() {
            Mode::Hook {
                url: url.to_string(),
                timeout: core.feedback_timeout(),
            }
        } else {
            Mode::Drop
        };

        Self {
            transport: Arc::new(transport),
            mode,
        }
    }

    /// Report one failure. Never fails and never waits for delivery.
    pub async fn notify(&self, req: &PushRequest, entry: LogPushEntry) {
        match &self.mode {
            Mode::Sync => req.add_log(entry).await,
            Mode::Hook { url, timeout } => {
                let transport = Arc::clone(&self.transport);
                let url = url.clone();
                let timeout = *timeout;

                tokio::spawn(async move {
                    match tokio::time::timeout(timeout, transport.deliver(&entry, &url)).await {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            tracing::error!(
                                error = %format!("{e:#}"),
                                url = %url,
                                "feedback delivery failed"
                            );
                        }
                        Err(_) => {
                            tracing::error!(
                                url = %url,
                                timeout = ?timeout,
                                "feedback delivery timed out"
                            );
                        }
                    }
                });
            }
            Mode::Drop => {}
        }
    }
}

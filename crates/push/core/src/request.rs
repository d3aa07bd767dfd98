//! Push request types.

use std::path::PathBuf;
use std::sync::Arc;

use crate::{AndroidNotification, LogPushEntry, Priority};

/// Per-request log collection, filled in synchronous-audit mode.
pub type LogSink = Arc<tokio::sync::Mutex<Vec<LogPushEntry>>>;

/// Where provider credentials come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Path to a service-account JSON key file.
    File(PathBuf),
    /// Inline service-account JSON.
    Json(String),
}

/// One logical "send to N recipients" request.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PushRequest {
    /// Device registration tokens.
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Topic alias, or single target when no tokens are given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub image: String,

    /// Only string sounds are meaningful on Android.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<serde_json::Value>,

    /// Arbitrary payload; values are stringified before sending.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,

    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<u32>,

    /// Structured notification override, merged with the explicit fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<AndroidNotification>,

    /// Provider project id (client identity).
    #[serde(default)]
    pub project_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_json: Option<String>,

    /// Per-request retry ceiling; 0 means use the configured one.
    #[serde(default)]
    pub retry: u32,

    /// Log collection for synchronous-audit mode.
    #[serde(skip)]
    pub log: Option<LogSink>,
}

impl PushRequest {
    /// Create a request addressed to a list of tokens.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Create a request addressed to a topic.
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self {
            to: Some(topic.into()),
            ..Default::default()
        }
    }

    /// Set the provider project id.
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Supply inline service-account JSON.
    pub fn with_credentials_json(mut self, json: impl Into<String>) -> Self {
        self.credentials_json = Some(json.into());
        self
    }

    /// Set the message body.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the per-request retry ceiling.
    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    /// Attach a log collection for synchronous-audit mode.
    pub fn with_log(mut self, sink: LogSink) -> Self {
        self.log = Some(sink);
        self
    }

    /// The topic this request targets, if it has no explicit tokens.
    pub fn topic(&self) -> Option<&str> {
        if !self.tokens.is_empty() {
            return None;
        }
        self.to.as_deref().filter(|to| !to.is_empty())
    }

    /// Whether this request targets a topic instead of tokens.
    pub fn is_topic(&self) -> bool {
        self.topic().is_some()
    }

    /// Credential override carried by the request. A file path wins over inline JSON.
    pub fn credentials(&self) -> Option<CredentialSource> {
        let file = self
            .credentials_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(path) = file {
            return Some(CredentialSource::File(path.clone()));
        }
        self.credentials_json
            .as_ref()
            .filter(|json| !json.is_empty())
            .map(|json| CredentialSource::Json(json.clone()))
    }

    /// Sound name, when given as a string.
    pub fn sound_name(&self) -> Option<&str> {
        self.sound
            .as_ref()
            .and_then(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Append an entry to the request's log collection, if any.
    pub async fn add_log(&self, entry: LogPushEntry) {
        if let Some(sink) = &self.log {
            sink.lock().await.push(entry);
        }
    }
}

//! Dispatch configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::WrapErr as _;
use serde::{Deserialize, Serialize};

use crate::CredentialSource;

/// Provider per-call recipient limit.
pub const DEFAULT_BATCH_LIMIT: usize = 500;

/// Maximum tokens accepted in a single request.
pub const DEFAULT_MAX_TOKENS: usize = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushConfig {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub android: AndroidSettings,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Append failures to the request's log collection inline.
    #[serde(default)]
    pub sync: bool,
    #[serde(default)]
    pub feedback_hook_url: String,
    #[serde(default = "default_feedback_timeout")]
    pub feedback_timeout: u64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Default client identity.
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    #[serde(default)]
    pub max_retry: u32,
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_hide_token")]
    pub hide_token: bool,
    #[serde(default)]
    pub hide_messages: bool,
}

fn default_feedback_timeout() -> u64 {
    10
}

fn default_enabled() -> bool {
    true
}

fn default_batch_limit() -> usize {
    DEFAULT_BATCH_LIMIT
}

fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

fn default_hide_token() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            sync: false,
            feedback_hook_url: String::new(),
            feedback_timeout: default_feedback_timeout(),
        }
    }
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            project_id: String::new(),
            credentials_file: None,
            max_retry: 0,
            batch_limit: DEFAULT_BATCH_LIMIT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            hide_token: true,
            hide_messages: false,
        }
    }
}

impl PushConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> color_eyre::eyre::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> color_eyre::eyre::Result<Self> {
        let config: PushConfig = toml::from_str(content).wrap_err("failed to parse config")?;

        if config.android.batch_limit == 0 {
            color_eyre::eyre::bail!("android.batch_limit must be greater than zero");
        }

        Ok(config)
    }
}

impl CoreConfig {
    /// Feedback endpoint, if one is configured.
    pub fn feedback_url(&self) -> Option<&str> {
        Some(self.feedback_hook_url.as_str()).filter(|url| !url.is_empty())
    }

    pub fn feedback_timeout(&self) -> Duration {
        Duration::from_secs(self.feedback_timeout)
    }
}

impl AndroidSettings {
    /// Credential material for the default identity.
    pub fn credentials(&self) -> Option<CredentialSource> {
        self.credentials_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| CredentialSource::File(p.clone()))
    }

    /// Effective retry ceiling for a request asking for `requested` retries.
    pub fn max_retry_for(&self, requested: u32) -> u32 {
        if requested > 0 && requested < self.max_retry {
            requested
        } else {
            self.max_retry
        }
    }
}

//! Android message types.

use std::time::Duration;

/// Delivery priority hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

/// Android notification fields shown by the system tray.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AndroidNotification {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sound: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub click_action: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body_loc_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_loc_args: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title_loc_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_loc_args: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel_id: String,
    #[serde(default, rename = "image", skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

/// Android-specific delivery options shared by every batch of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidConfig {
    /// Only set when the request asked for high priority.
    pub priority: Option<Priority>,
    pub collapse_key: Option<String>,
    pub ttl: Option<Duration>,
    /// Present only when at least one notification field was set.
    pub notification: Option<AndroidNotification>,
}

//! Service-account credential loading.

use std::borrow::Cow;

use push_core::{CredentialSource, DispatchError};

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Google service-account key, as found in the downloaded JSON key file.
#[derive(Clone, serde::Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("key_type", &self.key_type)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"<redacted>")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountKey {
    /// Load a key from a file or inline JSON.
    pub async fn load(source: &CredentialSource) -> Result<Self, DispatchError> {
        let raw: Cow<'_, str> = match source {
            CredentialSource::File(path) => {
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    DispatchError::ProviderInit(format!(
                        "failed to read credentials file {}: {e}",
                        path.display()
                    ))
                })?;
                Cow::Owned(content)
            }
            CredentialSource::Json(json) => Cow::Borrowed(json.as_str()),
        };

        Self::from_json(&raw)
    }

    /// Parse a key from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, DispatchError> {
        let key: Self = serde_json::from_str(raw)
            .map_err(|e| DispatchError::ProviderInit(format!("malformed credentials: {e}")))?;

        if key.private_key.is_empty() || key.client_email.is_empty() {
            return Err(DispatchError::ProviderInit(
                "credentials missing private_key or client_email".to_string(),
            ));
        }

        Ok(key)
    }
}

//! Process-wide provider client with a per-request bypass.

use std::sync::Arc;

use push_core::config::AndroidSettings;
use push_core::{CredentialSource, DispatchError};
use tokio::sync::OnceCell;

use crate::{MessagingFactory, ServiceAccountKey};

/// Holds the single long-lived client for the default project.
///
/// Requests for any other project get a freshly built client that is never
/// stored here.
pub struct ClientCache<F: MessagingFactory> {
    factory: F,
    default_project: String,
    default_credentials: Option<CredentialSource>,
    shared: OnceCell<Arc<F::Client>>,
}

impl<F: MessagingFactory> ClientCache<F> {
    /// Create a cache for the configured default identity.
    pub fn new(factory: F, settings: &AndroidSettings) -> Self {
        Self {
            factory,
            default_project: settings.project_id.clone(),
            default_credentials: settings.credentials(),
            shared: OnceCell::new(),
        }
    }

    /// Get a client for `project_id`.
    ///
    /// The default project's client is constructed once, even under
    /// concurrent first use; later calls return the same instance.
    pub async fn acquire(
        &self,
        project_id: &str,
        credentials: Option<&CredentialSource>,
    ) -> Result<Arc<F::Client>, DispatchError> {
        if project_id.is_empty() {
            return Err(DispatchError::Config("FCM project id is empty".to_string()));
        }

        if project_id != self.default_project {
            let source = credentials.ok_or_else(|| {
                DispatchError::Config(format!("missing credentials for project {project_id}"))
            })?;

            tracing::debug!(project_id, "building request-scoped client");
            return self.connect(project_id, source).await.map(Arc::new);
        }

        let client = self
            .shared
            .get_or_try_init(|| async {
                let source = self
                    .default_credentials
                    .as_ref()
                    .or(credentials)
                    .ok_or_else(|| {
                        DispatchError::Config(format!(
                            "missing credentials for project {project_id}"
                        ))
                    })?;

                tracing::info!(project_id, "initializing shared FCM client");
                self.connect(project_id, source).await.map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(client))
    }

    /// Whether the shared client has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.shared.initialized()
    }

    async fn connect(
        &self,
        project_id: &str,
        source: &CredentialSource,
    ) -> Result<F::Client, DispatchError> {
        let key = ServiceAccountKey::load(source).await?;

        self.factory
            .connect(project_id, &key)
            .await
            .map_err(|e| DispatchError::ProviderInit(format!("{e:#}")))
    }
}

use crate::client::builder::GraphApiBuilder;
use crate::client::core::GraphClient;
use crate::config::GraphConfig;
use crate::endpoint;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::fmt::Display;
use std::sync::Arc;

/// Resolved, read-only settings shared by a factory and all of its clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub base_url: String,
    pub api_version: String,
    pub enabled: bool,
}

impl Settings {
    pub fn build_url(&self, path: &str) -> String {
        endpoint::build_url(&self.base_url, &self.api_version, path)
    }
}

/// Factory for per-token [`GraphClient`]s.
///
/// Configuration is fixed at construction; clones share it along with the
/// HTTP connection pool.
#[derive(Clone)]
pub struct GraphApi {
    pub(crate) settings: Arc<Settings>,
    pub(crate) transport: HttpTransport,
}

impl GraphApi {
    pub fn new(config: GraphConfig) -> Result<Self> {
        GraphApiBuilder::new().config(config).build()
    }

    pub fn builder() -> GraphApiBuilder {
        GraphApiBuilder::new()
    }

    /// Configuration taken from `GRAPH_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(GraphConfig::from_env()?)
    }

    /// Absolute URL for a path relative to the versioned API root.
    pub fn build_url(&self, path: &str) -> String {
        self.settings.build_url(path)
    }

    /// Bind a client to a user's access token.
    ///
    /// Fails before any network activity when the token is empty.
    pub fn client(&self, auth_token: impl Into<String>) -> Result<GraphClient> {
        let auth_token = auth_token.into();
        if auth_token.trim().is_empty() {
            return Err(Error::invalid_argument_with_context(
                "An auth token is required to initiate a client",
                ErrorContext::new()
                    .with_field_path("auth_token")
                    .with_source("graph_api"),
            ));
        }
        Ok(GraphClient::new(
            Arc::clone(&self.settings),
            self.transport.clone(),
            auth_token,
        ))
    }

    /// URL that redirects to a user's profile picture. No request is made.
    pub fn photo_redirect_url(&self, user_id: impl Display) -> String {
        self.build_url(&endpoint::picture_path(&user_id.to_string()))
    }

    /// Graph host, without the version segment.
    pub fn url(&self) -> &str {
        &self.settings.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.settings.api_version
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }
}

impl std::fmt::Debug for GraphApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphApi")
            .field("base_url", &self.settings.base_url)
            .field("api_version", &self.settings.api_version)
            .field("enabled", &self.settings.enabled)
            .finish()
    }
}

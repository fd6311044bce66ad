use crate::client::api::{GraphApi, Settings};
use crate::config::GraphConfig;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// Builder for [`GraphApi`].
///
/// Keep this surface area small and predictable: everything it sets can also
/// come from a [`GraphConfig`].
#[derive(Default)]
pub struct GraphApiBuilder {
    config: GraphConfig,
    http_client: Option<reqwest::Client>,
}

impl GraphApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (file, env or hand-built).
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// When disabled, every request resolves to an empty result without I/O.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Override the Graph host.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Share an existing `reqwest::Client` instead of building a new pool.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<GraphApi> {
        self.config.validate()?;

        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client),
            None => HttpTransport::new()?,
        };

        let settings = Settings {
            base_url: self
                .config
                .resolved_base_url()
                .trim_end_matches('/')
                .to_string(),
            api_version: self.config.resolved_api_version().to_string(),
            enabled: self.config.enabled,
        };
        debug!(
            base_url = %settings.base_url,
            api_version = %settings.api_version,
            enabled = settings.enabled,
            "graph api configured"
        );

        Ok(GraphApi {
            settings: Arc::new(settings),
            transport,
        })
    }
}

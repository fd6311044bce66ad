use crate::client::api::Settings;
use crate::endpoint;
use crate::transport::HttpTransport;
use crate::types::{GraphResponse, ResponseEnvelope};
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// Graph client bound to one access token.
///
/// Stateless apart from the token and the shared settings; concurrent calls
/// are independent.
#[derive(Clone)]
pub struct GraphClient {
    settings: Arc<Settings>,
    transport: HttpTransport,
    auth_token: Arc<str>,
}

impl GraphClient {
    pub(crate) fn new(
        settings: Arc<Settings>,
        transport: HttpTransport,
        auth_token: String,
    ) -> Self {
        Self {
            settings,
            transport,
            auth_token: auth_token.into(),
        }
    }

    /// `GET {base}/{version}/{path}` with the bound token.
    ///
    /// `path` may already carry a query string; `query` pairs are appended.
    /// HTTP error statuses resolve to a normal [`GraphResponse::Received`];
    /// only transport failures are returned as `Err`. A disabled client
    /// resolves to [`GraphResponse::Disabled`] without touching the network.
    pub async fn make_request(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<GraphResponse> {
        if !self.settings.enabled {
            debug!(path, "graph api disabled, skipping request");
            return Ok(GraphResponse::Disabled);
        }

        let url = self.settings.build_url(path);
        let query: Vec<(String, String)> = query
            .unwrap_or_default()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let raw = self.transport.get(&url, &self.auth_token, &query).await?;
        Ok(GraphResponse::Received(ResponseEnvelope::from_raw(raw)))
    }

    /// Profile picture redirect URL for a known user. No request is made.
    pub fn photo_redirect_url(&self, user_id: &str) -> String {
        self.settings.build_url(&endpoint::picture_path(user_id))
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

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("base_url", &self.settings.base_url)
            .field("api_version", &self.settings.api_version)
            .field("enabled", &self.settings.enabled)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

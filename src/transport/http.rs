use crate::{Error, ErrorContext, Result};
use reqwest::header::ACCEPT;
use std::collections::HashMap;
use tracing::debug;

/// Thin wrapper over a pooled `reqwest::Client` issuing authorized GETs.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

/// What came back over the wire, before any JSON handling.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub url: String,
    pub headers: HashMap<String, String>,
    /// Decoded per the response charset, lossy on invalid sequences.
    pub text: String,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("graph-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
        Ok(Self { client })
    }

    /// Reuse an existing client (shared pools, custom proxies or timeouts).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// `GET url` with bearer auth and a JSON `Accept` header.
    ///
    /// Any status code is a successful result here; only failures to obtain
    /// a response (DNS, connect, reset, body read) are errors.
    pub async fn get(
        &self,
        url: &str,
        bearer_token: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse> {
        let parsed = url::Url::parse(url).map_err(|e| {
            Error::invalid_argument_with_context(
                format!("Cannot build request URL {:?}", url),
                ErrorContext::new()
                    .with_field_path("path")
                    .with_details(e.to_string())
                    .with_source("http_transport"),
            )
        })?;

        let mut request = self
            .client
            .get(parsed)
            .bearer_auth(bearer_token)
            .header(ACCEPT, "application/json");

        // reqwest leaves a dangling `?` behind for an empty pair list.
        if !query.is_empty() {
            request = request.query(query);
        }

        debug!(target: "graph_client::http", url, query_params = query.len(), "GET");

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(RawResponse {
            status,
            url: final_url,
            headers,
            text,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

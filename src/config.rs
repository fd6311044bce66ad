//! Client configuration.
//!
//! A [`GraphConfig`] can be built in code, read from a YAML or JSON document,
//! and overridden from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `GRAPH_API_VERSION` | API version segment, e.g. `v2.5` |
//! | `GRAPH_API_ENABLED` | `1/true/yes/on` or `0/false/no/off` |
//! | `GRAPH_API_BASE_URL` | Replace the Graph host (mock servers, proxies) |

use crate::endpoint::{DEFAULT_API_VERSION, GRAPH_URL};
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_API_VERSION: &str = "GRAPH_API_VERSION";
pub const ENV_ENABLED: &str = "GRAPH_API_ENABLED";
pub const ENV_BASE_URL: &str = "GRAPH_API_BASE_URL";

/// Configuration accepted by [`crate::GraphApi::new`].
///
/// `enabled` defaults to `false`: a default configuration never touches the
/// network and every request resolves to [`crate::GraphResponse::Disabled`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    #[serde(alias = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    pub enabled: bool,
    /// Override the Graph host. Primarily for testing with mock servers.
    #[serde(alias = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Parse a YAML document. JSON is accepted as well since it is valid YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                "Failed to parse graph configuration",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("config_loader"),
            )
        })
    }

    /// Read a YAML or JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_field_path(path.display().to_string()),
            },
            other => other,
        })
    }

    /// Defaults overridden by `GRAPH_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `GRAPH_API_*` environment variables on top of this configuration.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(version) = lookup(ENV_API_VERSION) {
            self.api_version = Some(version);
        }
        if let Some(raw) = lookup(ENV_ENABLED) {
            self.enabled = parse_flag(&raw).ok_or_else(|| {
                Error::configuration_with_context(
                    "Expected a boolean flag",
                    ErrorContext::new()
                        .with_field_path(ENV_ENABLED)
                        .with_details(format!("got {:?}", raw))
                        .with_source("config_loader"),
                )
            })?;
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(base_url);
        }
        Ok(self)
    }

    /// Version segment used in URLs; blank or missing falls back to the default.
    pub fn resolved_api_version(&self) -> &str {
        self.api_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_VERSION)
    }

    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(GRAPH_URL)
    }

    /// Reject values that cannot form a request URL.
    pub fn validate(&self) -> Result<()> {
        let version = self.resolved_api_version();
        if version.contains('/') || version.chars().any(char::is_whitespace) {
            return Err(Error::configuration_with_context(
                "API version must be a single path segment",
                ErrorContext::new()
                    .with_field_path("api_version")
                    .with_details(format!("got {:?}", version)),
            ));
        }

        let base = self.resolved_base_url();
        let parsed = url::Url::parse(base).map_err(|e| {
            Error::configuration_with_context(
                "Base URL is not a valid absolute URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Base URL must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(format!("scheme {:?}", parsed.scheme())),
            ));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

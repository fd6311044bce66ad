//! Normalized request results.

use super::graph::GraphError;
use crate::transport::RawResponse;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, warn};

/// Result of a request that reached the Graph API, whatever its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    /// Parsed JSON body. Falls back to the raw text as a JSON string when the
    /// body is not JSON, and to `null` when it is empty.
    pub body: Value,
    /// Body text as decoded by the transport. Invalid UTF-8 sequences are
    /// replaced with U+FFFD.
    pub original_body: String,
    /// Final URL of the request, query string included.
    pub url: String,
    /// Response headers with lowercase names. Non-UTF-8 values are dropped.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ResponseEnvelope {
    pub(crate) fn from_raw(raw: RawResponse) -> Self {
        let body = parse_body(&raw.text, &raw.url);
        if raw.status >= 400 {
            info!(status = raw.status, url = %raw.url, "graph request returned error status");
        }
        Self {
            status_code: raw.status,
            body,
            original_body: raw.text,
            url: raw.url,
            headers: raw.headers,
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Deserialize the body into a typed model.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.body)?)
    }

    /// The Graph `error` object, when the body carries one.
    pub fn graph_error(&self) -> Option<GraphError> {
        self.body
            .get("error")
            .and_then(|e| GraphError::deserialize(e).ok())
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

fn parse_body(text: &str, url: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!(url, error = %e, "response body is not JSON, keeping raw text");
            Value::String(text.to_string())
        }
    }
}

/// Outcome of [`crate::GraphClient::make_request`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphResponse {
    /// The client is disabled; no request was sent. Renders as `{}`.
    Disabled,
    /// A response was received (any status code).
    Received(ResponseEnvelope),
}

impl GraphResponse {
    pub fn is_disabled(&self) -> bool {
        matches!(self, GraphResponse::Disabled)
    }

    pub fn envelope(&self) -> Option<&ResponseEnvelope> {
        match self {
            GraphResponse::Received(envelope) => Some(envelope),
            GraphResponse::Disabled => None,
        }
    }

    pub fn into_envelope(self) -> Option<ResponseEnvelope> {
        match self {
            GraphResponse::Received(envelope) => Some(envelope),
            GraphResponse::Disabled => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.envelope().map(|e| e.status_code)
    }

    pub fn body(&self) -> Option<&Value> {
        self.envelope().map(|e| &e.body)
    }

    /// JSON view of the result: `{}` when disabled, the envelope otherwise.
    pub fn to_json(&self) -> Value {
        match self {
            GraphResponse::Disabled => Value::Object(serde_json::Map::new()),
            GraphResponse::Received(e) => serde_json::json!({
                "status_code": e.status_code,
                "body": e.body,
                "original_body": e.original_body,
                "url": e.url,
                "headers": e.headers,
            }),
        }
    }
}

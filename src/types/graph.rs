//! Typed shapes of the Graph objects this client fetches.
//!
//! Only the commonly requested fields are named; anything else the API
//! returns lands in `extra` (profiles) or is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /me`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FriendsSummary {
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// `GET /me/friends`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FriendsPage {
    #[serde(default)]
    pub data: Vec<Friend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<FriendsSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureData {
    pub url: String,
    #[serde(default)]
    pub is_silhouette: Option<bool>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// `GET /me/picture?redirect=0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePicture {
    pub data: PictureData,
}

/// The `error` object Graph attaches to failed calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphError {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error_subcode: Option<i64>,
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}

impl GraphError {
    /// Token expired, revoked or malformed.
    pub fn is_oauth(&self) -> bool {
        self.kind.as_deref() == Some("OAuthException") || self.code == Some(190)
    }
}

/// Pull a user id out of a `/me` body.
///
/// Looks at `data.id` first, then a top-level `id`. Numeric ids are accepted.
pub(crate) fn user_id_from(body: &Value) -> Option<String> {
    body.get("data")
        .and_then(|d| d.get("id"))
        .or_else(|| body.get("id"))
        .and_then(|id| match id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

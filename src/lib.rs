//! # graph-client
//!
//! Small async client for the Facebook Graph API.
//!
//! A [`GraphApi`] factory is built once from a [`GraphConfig`] (API version,
//! enabled flag) and hands out [`GraphClient`]s bound to a user's access
//! token. Clients issue authorized `GET`s against
//! `https://graph.facebook.com/{version}/{path}` and normalize every reply
//! into a [`ResponseEnvelope`], including HTTP error statuses. Only transport
//! failures are returned as [`Error`].
//!
//! A disabled configuration (the default) never touches the network: every
//! request resolves to [`GraphResponse::Disabled`]. This is meant for tests
//! and dry runs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> graph_client::Result<()> {
//!     let api = GraphApi::new(GraphConfig::new().with_enabled(true))?;
//!     let client = api.client("user-access-token")?;
//!
//!     let resp = client.me(Some(&["first_name", "last_name"])).await?;
//!     if let Some(envelope) = resp.envelope() {
//!         println!("{} {}", envelope.status_code, envelope.body);
//!     }
//!
//!     let photo = client.profile_photo_redirect_url(None).await?;
//!     println!("{:?}", photo);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Factory, per-token client and endpoint helpers |
//! | [`config`] | Configuration from code, YAML/JSON files and env |
//! | [`endpoint`] | Versioned URL construction |
//! | [`transport`] | reqwest-backed HTTP transport |
//! | [`types`] | Response envelope and typed Graph models |

pub mod client;
pub mod config;
pub mod endpoint;
pub mod prelude;
pub mod transport;
pub mod types;

pub use client::{EndpointExt, GraphApi, GraphApiBuilder, GraphClient};
pub use config::GraphConfig;
pub use endpoint::{build_url, DEFAULT_API_VERSION, GRAPH_URL};
pub use types::{GraphResponse, ResponseEnvelope};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

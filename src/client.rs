//! Graph API factory, per-token client, and endpoint helpers.

mod api;
mod builder;
mod core;
mod endpoint;

pub use api::GraphApi;
pub use builder::GraphApiBuilder;
pub use self::core::GraphClient;
pub use endpoint::EndpointExt;

//! Minimal prelude for application code.
//!
//! Brings the factory, the client and the endpoint helper trait into scope.

pub use crate::client::{EndpointExt, GraphApi, GraphApiBuilder, GraphClient};
pub use crate::config::GraphConfig;
pub use crate::types::{GraphResponse, ResponseEnvelope};

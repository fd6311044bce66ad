//! Named Graph endpoints on top of [`GraphClient::make_request`].

use crate::types::graph::user_id_from;
use crate::types::GraphResponse;
use crate::Result;
use std::future::Future;
use tracing::debug;

use super::core::GraphClient;

pub trait EndpointExt {
    /// Current user's profile. With `fields`, only those fields are requested
    /// (`?fields=a,b`); Graph returns the ones the token is allowed to read.
    fn me(&self, fields: Option<&[&str]>) -> impl Future<Output = Result<GraphResponse>> + Send;

    /// Current user's friends (`me/friends`).
    fn friends(&self) -> impl Future<Output = Result<GraphResponse>> + Send;

    /// Current user's profile picture metadata (`me/picture?redirect=0`).
    fn profile_photo(&self) -> impl Future<Output = Result<GraphResponse>> + Send;

    /// URL redirecting to a user's picture.
    ///
    /// With a user id this is pure string building. Without one the id is
    /// discovered through [`EndpointExt::me`]; `Ok(None)` when the response
    /// carries no id.
    fn profile_photo_redirect_url(
        &self,
        user_id: Option<&str>,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

impl EndpointExt for GraphClient {
    async fn me(&self, fields: Option<&[&str]>) -> Result<GraphResponse> {
        match fields.filter(|f| !f.is_empty()) {
            Some(fields) => {
                let joined = fields.join(",");
                self.make_request("me", Some(&[("fields", joined.as_str())]))
                    .await
            }
            None => self.make_request("me", None).await,
        }
    }

    async fn friends(&self) -> Result<GraphResponse> {
        self.make_request("me/friends", None).await
    }

    async fn profile_photo(&self) -> Result<GraphResponse> {
        self.make_request("me/picture?redirect=0", None).await
    }

    async fn profile_photo_redirect_url(&self, user_id: Option<&str>) -> Result<Option<String>> {
        if let Some(id) = user_id.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(Some(self.photo_redirect_url(id)));
        }

        let resp = self.me(None).await?;
        let id = resp.body().and_then(user_id_from);
        if id.is_none() {
            debug!(status = ?resp.status_code(), "no user id in profile response");
        }
        Ok(id.map(|id| self.photo_redirect_url(&id)))
    }
}

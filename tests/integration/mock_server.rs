//! Mock HTTP server setup for integration tests

use graph_client::{GraphApi, GraphClient};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const TOKEN: &str = "token";

/// Test fixture that manages a mock Graph server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Factory pointed at the mock server.
    pub fn api(&self, enabled: bool) -> GraphApi {
        GraphApi::builder()
            .base_url_override(&self.base_url)
            .enabled(enabled)
            .build()
            .expect("Failed to build graph api")
    }

    /// Enabled client bound to [`TOKEN`].
    pub fn client(&self) -> GraphClient {
        self.api(true).client(TOKEN).expect("Failed to create client")
    }

    /// Path on the mock server for a Graph path under the default version.
    pub fn versioned(path: &str) -> String {
        format!("/{}/{}", graph_client::DEFAULT_API_VERSION, path)
    }

    /// Create a mock for a JSON response that checks the auth headers.
    pub async fn mock_json(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", Self::versioned(path).as_str())
            .match_header("authorization", Matcher::Exact(format!("Bearer {}", TOKEN)))
            .match_header("accept", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Like [`Self::mock_json`], additionally matching query parameters.
    pub async fn mock_json_with_query(
        &mut self,
        path: &str,
        query: Vec<(&str, &str)>,
        status: usize,
        body: &str,
    ) -> Mock {
        let matchers = query
            .into_iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect();
        self.server
            .mock("GET", Self::versioned(path).as_str())
            .match_query(Matcher::AllOf(matchers))
            .match_header("authorization", Matcher::Exact(format!("Bearer {}", TOKEN)))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that must never be hit.
    pub async fn mock_unreachable(&mut self, path: &str) -> Mock {
        self.server
            .mock("GET", Self::versioned(path).as_str())
            .expect(0)
            .create_async()
            .await
    }
}


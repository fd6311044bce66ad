//! Integration tests with mock HTTP server

pub mod make_request;
pub mod mock_server;

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for phorge-conduit-adapter tests

use phorge_conduit_adapter::{Capabilities, ClientConfig, ConduitClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "api-tvtesttoken0000000000000000";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the standard method table
pub fn client_for(server: &MockServer) -> ConduitClient {
    ConduitClient::new(&server.uri(), TEST_TOKEN).expect("client construction")
}

/// Client with a tight page bound for pagination-limit tests
pub fn bounded_client_for(server: &MockServer, max_pages: u32) -> ConduitClient {
    let config = ClientConfig {
        max_pages,
        ..ClientConfig::default()
    };
    ConduitClient::with_config(&server.uri(), TEST_TOKEN, config, Capabilities::standard())
        .expect("client construction")
}

/// Wrap a result payload in the Conduit response envelope
pub fn envelope(result: Value) -> Value {
    json!({
        "result": result,
        "error_code": null,
        "error_info": null
    })
}

/// A Conduit error envelope with no result
pub fn error_envelope(code: &str, info: &str) -> Value {
    json!({
        "result": null,
        "error_code": code,
        "error_info": info
    })
}

/// One search result page; `after: None` marks the final page
pub fn search_page(data: Value, after: Option<&str>) -> Value {
    envelope(json!({
        "data": data,
        "cursor": { "limit": 100, "after": after, "before": null, "order": null }
    }))
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for quadrigacx-adapter tests

use std::time::Duration;

use quadrigacx_adapter::{ClientConfig, Credentials, QuadrigaClient};
use wiremock::MockServer;

pub const TEST_CLIENT_ID: &str = "123456";
pub const TEST_API_KEY: &str = "test_key";
pub const TEST_API_SECRET: &str = "test_secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_CLIENT_ID, TEST_API_KEY, TEST_API_SECRET)
}

/// Client whose API root is `/v2/` on the given server
pub fn client_for(server: &MockServer) -> QuadrigaClient {
    QuadrigaClient::with_config(
        test_credentials(),
        ClientConfig::default().with_base_url(format!("{}/v2/", server.uri())),
    )
    .expect("client init")
}

/// Client pointed at a local port nothing listens on
#[allow(dead_code)]
pub fn unreachable_client() -> QuadrigaClient {
    QuadrigaClient::with_config(
        test_credentials(),
        ClientConfig::default()
            .with_base_url("http://127.0.0.1:1/v2/")
            .with_timeout(Duration::from_secs(2))
            .with_connect_timeout(Duration::from_secs(1)),
    )
    .expect("client init")
}

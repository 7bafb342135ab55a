//! Common test utilities for Scryfall client tests.

use serde::Serialize;
use spellbook::ScryfallClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client pointed at the mock server.
pub fn client_for_mock(server: &MockServer) -> ScryfallClient {
    ScryfallClient::builder().url(server.uri()).build()
}

/// Create a successful Scryfall response.
pub fn mock_scryfall_response<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create a Scryfall error response.
#[allow(dead_code)] // Not all test files use this
pub fn mock_scryfall_error(status: u16, code: &str, details: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "object": "error",
        "code": code,
        "status": status,
        "details": details
    }))
}

/// A minimal single-faced card object.
#[allow(dead_code)]
pub fn card_json(name: &str, set: &str, number: &str) -> serde_json::Value {
    serde_json::json!({
        "object": "card",
        "id": format!("00000000-0000-0000-0000-{:0>12}", number),
        "name": name,
        "layout": "normal",
        "set": set,
        "rarity": "common",
        "collector_number": number,
        "mana_cost": "{1}",
        "cmc": 1.0,
        "type_line": "Artifact",
        "colors": [],
        "color_identity": []
    })
}

/// Mount a GET mock for a path (expect exactly 1 call).
#[allow(dead_code)]
pub async fn mock_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

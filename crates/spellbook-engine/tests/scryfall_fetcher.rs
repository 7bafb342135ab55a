//! Tests for the blocking Scryfall fetcher against a mock server.
//!
//! The fetcher blocks on its own runtime, so these are plain `#[test]`s that
//! drive the mock server from a separate runtime.

#![cfg(feature = "scryfall")]

mod common;

use common::{basic_land, jukai_preserver, jukai_preserver_json};
use spellbook_engine::{Card, CardManager, Config, ImageSize, ScryfallClient, ScryfallFetcher};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap()
}

fn mount(rt: &Runtime, server: &MockServer, mock: Mock) {
    rt.block_on(mock.mount(server));
}

#[test]
fn test_fuzzy_lookup_through_manager() {
    let rt = mock_runtime();
    let server = rt.block_on(MockServer::start());
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .and(query_param("fuzzy", "jukai presrver"))
            .respond_with(ResponseTemplate::new(200).set_body_json(jukai_preserver_json()))
            .expect(1),
    );

    let client = ScryfallClient::builder().url(server.uri()).build();
    let manager = CardManager::new(ScryfallFetcher::from_client(client).unwrap());

    let card = manager.from_name("jukai presrver").unwrap().unwrap();
    assert_eq!(card.name(), "Jukai Preserver");
    assert_eq!(card.face1().mana_cost, "{3}{G}");

    // Served from the cache.
    let again = manager.from_name("Jukai Preserver").unwrap().unwrap();
    assert!(std::sync::Arc::ptr_eq(&card, &again));
}

#[test]
fn test_exact_lookup_from_config() {
    let rt = mock_runtime();
    let server = rt.block_on(MockServer::start());
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .and(query_param("exact", "Jukai Preserver"))
            .respond_with(ResponseTemplate::new(200).set_body_json(jukai_preserver_json()))
            .expect(1),
    );

    let config = Config::from_toml_str(&format!(
        "api_url = \"{}\"\ntimeout_secs = 5\nuser_agent = \"spellbook-tests/0.1\"\nfuzzy = false\n",
        server.uri()
    ))
    .unwrap();
    let manager = CardManager::new(ScryfallFetcher::from_config(&config).unwrap());

    let card = manager.from_name("Jukai Preserver").unwrap().unwrap();
    assert_eq!(card.set(), "neo");
}

#[test]
fn test_configured_image_base_reaches_card_images() {
    let rt = mock_runtime();
    let server = rt.block_on(MockServer::start());
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .respond_with(ResponseTemplate::new(200).set_body_json(jukai_preserver_json()))
            .expect(1),
    );

    let config = Config::from_toml_str(&format!(
        "api_url = \"{}\"\nimage_base = \"http://img.local/\"\n",
        server.uri()
    ))
    .unwrap();
    let manager = CardManager::new(ScryfallFetcher::from_config(&config).unwrap());

    let card = manager.from_name("Jukai Preserver").unwrap().unwrap();
    assert_eq!(card.image_base(), "http://img.local");
    assert_eq!(
        card.image(ImageSize::Normal),
        "http://img.local/normal/front/7/f/7fb3a4de-3e8f-4ae7-b2d8-0e3fd1c1fd73.jpg"
    );
}

#[test]
fn test_default_fetcher_uses_scryfall_images() {
    let fetcher = ScryfallFetcher::from_client(ScryfallClient::new()).unwrap();
    let card = Card::from_record(&jukai_preserver(), &fetcher).unwrap();
    assert!(card.image(ImageSize::Small).starts_with("https://cards.scryfall.io/small/"));

    let fetcher = fetcher.with_image_base("https://mirror.example/");
    let card = Card::from_record(&jukai_preserver(), &fetcher).unwrap();
    assert!(card.image(ImageSize::Small).starts_with("https://mirror.example/small/"));
}

#[test]
fn test_not_found_is_cached_as_unresolvable() {
    let rt = mock_runtime();
    let server = rt.block_on(MockServer::start());
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/cards/named"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "object": "error",
                "code": "not_found",
                "status": 404,
                "details": "No cards found matching “Jukia”"
            })))
            .expect(1),
    );

    let client = ScryfallClient::builder().url(server.uri()).build();
    let manager = CardManager::new(ScryfallFetcher::from_client(client).unwrap());

    assert!(manager.from_name("Jukia").unwrap().is_none());
    assert!(manager.from_name("Jukia").unwrap().is_none());
}

#[test]
fn test_set_load() {
    let rt = mock_runtime();
    let server = rt.block_on(MockServer::start());
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path("/cards/search"))
            .and(query_param("q", "e:neo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "object": "list",
                "total_cards": 2,
                "has_more": false,
                "data": [jukai_preserver_json(), basic_land("Forest", "301")]
            })))
            .expect(1),
    );

    let client = ScryfallClient::builder().url(server.uri()).build();
    let manager = CardManager::new(ScryfallFetcher::from_client(client).unwrap());

    let neo = manager.from_set("NEO").unwrap();
    assert_eq!(neo.len(), 1);
    assert!(neo.contains_key("Jukai Preserver"));

    manager.from_set("neo").unwrap();
}

//! The Scryfall client and builder.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::actions::{CardActions, SetActions};
use crate::error::Result;
use crate::response::decode;

/// Default URL for the Scryfall API.
const DEFAULT_URL: &str = "https://api.scryfall.com";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Scryfall asks every client to identify itself.
const DEFAULT_USER_AGENT: &str = concat!("spellbook/", env!("CARGO_PKG_VERSION"));

/// The main client for interacting with Scryfall.
///
/// # Example
///
/// ```no_run
/// use spellbook::ScryfallClient;
///
/// # async fn example() -> spellbook::Result<()> {
/// let client = ScryfallClient::new();
///
/// let card = client.cards().named("Jukai Preserver").await?;
/// println!("{} costs {:?}", card.name, card.mana_cost);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    http_client: Client,
    base_url: String,
}

impl ScryfallClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `https://api.scryfall.com` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access card lookups and searches.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access set-level operations.
    pub fn sets(&self) -> SetActions<'_> {
        SetActions { client: self }
    }

    /// GET a path relative to the API root.
    pub(crate) async fn get<R>(&self, path: &str, query: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http_client.get(url).query(query);
        self.send_request(request).await
    }

    /// GET an absolute URL, such as a `next_page` link.
    pub(crate) async fn get_url<R>(&self, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.http_client.get(url);
        self.send_request(request).await
    }

    /// Send a request to Scryfall and process the response.
    async fn send_request<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode(status, &body)
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`ScryfallClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use spellbook::ScryfallClient;
///
/// let client = ScryfallClient::builder()
///     .url("http://localhost:8080")
///     .user_agent("deckstats/1.0")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API root.
    ///
    /// Defaults to `https://api.scryfall.com`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the `User-Agent` sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> ScryfallClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        ScryfallClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

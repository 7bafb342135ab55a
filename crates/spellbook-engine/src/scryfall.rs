//! Blocking [`CardFetcher`] backed by the async Scryfall client.

use spellbook::{RawCard, ScryfallClient};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::face::DEFAULT_IMAGE_BASE;
use crate::fetch::CardFetcher;

/// Fetches records from Scryfall, blocking the calling thread.
///
/// The fetcher drives the async client on its own single-threaded runtime,
/// so it must not be used from inside another async runtime.
///
/// # Example
///
/// ```no_run
/// use spellbook_engine::{CardManager, Config, ScryfallFetcher};
///
/// # fn example() -> spellbook_engine::Result<()> {
/// let config = Config::from_file("spellbook.toml")?;
/// let manager = CardManager::new(ScryfallFetcher::from_config(&config)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScryfallFetcher {
    client: ScryfallClient,
    runtime: Runtime,
    fuzzy: bool,
    image_base: String,
}

impl ScryfallFetcher {
    /// A fetcher with the default client, resolving names fuzzily.
    pub fn new() -> Result<Self> {
        Self::from_client(ScryfallClient::new())
    }

    /// Wrap an existing client.
    pub fn from_client(client: ScryfallClient) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            client,
            runtime,
            fuzzy: true,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        })
    }

    /// Build the client from configuration.
    ///
    /// Cards built through this fetcher link their images to the configured
    /// `image_base`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = ScryfallClient::builder()
            .url(config.api_url.clone())
            .timeout(config.timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let mut fetcher = Self::from_client(builder.build())?;
        fetcher.fuzzy = config.fuzzy;
        fetcher.image_base = config.image_base.trim_end_matches('/').to_string();
        Ok(fetcher)
    }

    /// Choose between fuzzy and exact name lookups.
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set the image host for cards built through this fetcher.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn client(&self) -> &ScryfallClient {
        &self.client
    }
}

impl CardFetcher for ScryfallFetcher {
    fn fetch_card(&self, name: &str) -> spellbook::Result<RawCard> {
        debug!(name = %name, fuzzy = self.fuzzy, "fetching card from Scryfall");
        let cards = self.client.cards();
        if self.fuzzy {
            self.runtime.block_on(cards.fuzzy(name))
        } else {
            self.runtime.block_on(cards.named(name))
        }
    }

    fn fetch_set(&self, code: &str) -> spellbook::Result<Vec<RawCard>> {
        debug!(set = %code, "fetching set from Scryfall");
        self.runtime.block_on(self.client.sets().cards(code))
    }

    fn image_base(&self) -> &str {
        &self.image_base
    }
}

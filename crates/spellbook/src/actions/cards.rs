//! Card lookups and searches.
//!
//! # Example
//!
//! ```no_run
//! use spellbook::ScryfallClient;
//!
//! # async fn example() -> spellbook::Result<()> {
//! let client = ScryfallClient::new();
//!
//! // Misspellings are resolved by fuzzy lookup
//! let card = client.cards().fuzzy("bonecrusher gaint").await?;
//! assert_eq!(card.name, "Bonecrusher Giant // Stomp");
//!
//! // Every printing matching a query, across all result pages
//! let printings = client.cards().search("!\"Lightning Bolt\"").await?;
//! println!("{} printings", printings.len());
//! # Ok(())
//! # }
//! ```

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::types::{CardList, RawCard};

/// Provides access to card-related Scryfall operations.
///
/// Obtained via [`ScryfallClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> CardActions<'a> {
    /// Look up a card by its exact name.
    ///
    /// Either face name of a multi-faced card is accepted.
    pub async fn named(&self, name: &str) -> Result<RawCard> {
        self.client.get("/cards/named", &[("exact", name)]).await
    }

    /// Look up a card by an approximate name.
    ///
    /// Scryfall tolerates misspellings and partial words, and answers with an
    /// `ambiguous` error when more than one card fits.
    pub async fn fuzzy(&self, name: &str) -> Result<RawCard> {
        self.client.get("/cards/named", &[("fuzzy", name)]).await
    }

    /// Fetch a single printing by its Scryfall id.
    pub async fn by_id(&self, id: &str) -> Result<RawCard> {
        self.client.get(&format!("/cards/{}", id), &[]).await
    }

    /// Run a full-text search and collect every page of results.
    ///
    /// A query that matches nothing yields an empty list rather than an error.
    pub async fn search(&self, query: &str) -> Result<Vec<RawCard>> {
        self.search_with(query, &[("unique", "prints")]).await
    }

    pub(crate) async fn search_with(
        &self,
        query: &str,
        extra: &[(&str, &str)],
    ) -> Result<Vec<RawCard>> {
        let mut params = vec![("q", query)];
        params.extend_from_slice(extra);

        let first: CardList = match self.client.get("/cards/search", &params).await {
            Ok(page) => page,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut cards = first.data;
        let mut next = first.next_page.filter(|_| first.has_more);

        while let Some(url) = next {
            let page: CardList = self.client.get_url(&url).await?;
            cards.extend(page.data);
            next = page.next_page.filter(|_| page.has_more);
        }

        Ok(cards)
    }
}

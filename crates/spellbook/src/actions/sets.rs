//! Set-level operations.

use crate::client::ScryfallClient;
use crate::error::Result;
use crate::types::RawCard;

/// Provides access to set-related Scryfall operations.
///
/// Obtained via [`ScryfallClient::sets()`].
#[derive(Debug)]
pub struct SetActions<'a> {
    pub(crate) client: &'a ScryfallClient,
}

impl<'a> SetActions<'a> {
    /// Every printing in a set, in collector number order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use spellbook::ScryfallClient;
    /// # async fn example() -> spellbook::Result<()> {
    /// let client = ScryfallClient::new();
    ///
    /// let cards = client.sets().cards("neo").await?;
    /// for card in &cards {
    ///     println!("{} {}", card.collector_number, card.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn cards(&self, code: &str) -> Result<Vec<RawCard>> {
        let query = format!("e:{}", code.to_lowercase());
        self.client
            .cards()
            .search_with(&query, &[("unique", "prints"), ("order", "set")])
            .await
    }
}

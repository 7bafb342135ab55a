//! The identity-resolving card cache.
//!
//! The [`CardManager`] guarantees there is at most one [`Card`] per true card
//! name, however the name was spelled when it was looked up. Every searched
//! string is remembered in a redirect table pointing at the canonical name, so
//! repeated lookups (including misspelled ones and names Scryfall could not
//! resolve) never hit the network twice.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use spellbook_engine::{CardManager, ScryfallFetcher};
//!
//! # fn example() -> spellbook_engine::Result<()> {
//! let manager = CardManager::new(ScryfallFetcher::new()?);
//!
//! let a = manager.from_name("Bonecrusher Giant")?.unwrap();
//! let b = manager.from_name("bonecrusher gaint")?.unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let neo = manager.from_set("neo")?;
//! println!("{} distinct non-basic cards in NEO", neo.len());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::card::{BASIC_LAND_NAMES, Card};
use crate::error::{Error, Result};
use crate::fetch::CardFetcher;

/// The non-basic cards of one set, keyed by card name.
pub type SetCards = HashMap<String, Arc<Card>>;

/// Redirect target recorded for names that could not be resolved.
const UNRESOLVED: &str = "";

#[derive(Debug, Default)]
struct CacheState {
    /// Searched name to canonical name, or [`UNRESOLVED`].
    redirect: HashMap<String, String>,
    /// Canonical name to card.
    cards: HashMap<String, Arc<Card>>,
    /// Lowercased set code to that set's cards.
    sets: HashMap<String, Arc<SetCards>>,
}

impl CacheState {
    fn find_card(&self, name: &str) -> (Option<Arc<Card>>, bool) {
        match self.redirect.get(name) {
            None => (None, false),
            Some(target) if target == UNRESOLVED => (None, true),
            Some(target) => (self.cards.get(target).cloned(), true),
        }
    }

    /// Make `card` (or the instance already cached under its name) canonical
    /// and point every name it is known by at it.
    fn register(&mut self, searched: &str, card: Card, force: bool) -> Arc<Card> {
        let name = card.name().to_string();

        let canonical = match self.cards.get(&name) {
            Some(existing) if !force => Arc::clone(existing),
            _ => {
                let card = Arc::new(card);
                self.cards.insert(name.clone(), Arc::clone(&card));
                card
            }
        };

        self.redirect.insert(name.clone(), name.clone());
        self.redirect
            .insert(canonical.full_name().to_string(), name.clone());
        self.redirect.insert(searched.to_string(), name);

        canonical
    }

    fn mark_unresolved(&mut self, name: &str) {
        self.redirect
            .insert(name.to_string(), UNRESOLVED.to_string());
    }
}

/// A cache of canonical [`Card`]s backed by a [`CardFetcher`].
///
/// All state sits behind one lock that is held for the whole
/// lookup-fetch-insert sequence, so concurrent first lookups of the same
/// card cannot create two instances.
#[derive(Debug)]
pub struct CardManager<F> {
    fetcher: F,
    state: Mutex<CacheState>,
}

impl<F: CardFetcher> CardManager<F> {
    /// Create an empty cache.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look a name up in the cache without fetching.
    ///
    /// Returns the cached card (if any) and whether the name was searched
    /// before. `(None, true)` means the name is known to be unresolvable.
    pub fn find_card(&self, name: &str) -> (Option<Arc<Card>>, bool) {
        self.state().find_card(name)
    }

    /// Resolve a card by name, fetching it on first use.
    ///
    /// Returns `Ok(None)` when the fetcher cannot resolve the name; that
    /// outcome is cached too.
    ///
    /// # Errors
    ///
    /// Propagates record errors (unknown layout, missing meld result,
    /// malformed prototype text) for records that were fetched but cannot
    /// be modeled.
    pub fn from_name(&self, name: &str) -> Result<Option<Arc<Card>>> {
        let mut state = self.state();

        let (cached, searched) = state.find_card(name);
        if searched {
            debug!(name = %name, hit = cached.is_some(), "card cache hit");
            return Ok(cached);
        }

        debug!(name = %name, "card cache miss, fetching");
        let record = match self.fetcher.fetch_card(name) {
            Ok(record) => record,
            Err(e) => {
                warn!(name = %name, error = %e, "card name could not be resolved");
                state.mark_unresolved(name);
                return Ok(None);
            }
        };

        let card = match Card::from_record(&record, &self.fetcher) {
            Ok(card) => card,
            Err(Error::InvalidRecord(reason)) => {
                warn!(name = %name, reason = %reason, "fetched object is not a usable card");
                state.mark_unresolved(name);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        Ok(Some(state.register(name, card, false)))
    }

    /// Resolve several names in order.
    pub fn from_names<'n, I>(&self, names: I) -> Result<Vec<Option<Arc<Card>>>>
    where
        I: IntoIterator<Item = &'n str>,
    {
        names.into_iter().map(|name| self.from_name(name)).collect()
    }

    /// All non-basic cards of a set, keyed by card name.
    ///
    /// The set is fetched once; later calls for the same code (in any case)
    /// are served from the cache. Cards already resolved by name keep their
    /// identity: the map holds the same instances.
    ///
    /// # Errors
    ///
    /// - [`Error::SetUnavailable`] if the set could not be fetched (not cached)
    /// - record errors for printings that cannot be modeled
    pub fn from_set(&self, code: &str) -> Result<Arc<SetCards>> {
        let key = code.to_lowercase();
        let mut state = self.state();

        if let Some(cards) = state.sets.get(&key) {
            debug!(set = %key, "set cache hit");
            return Ok(Arc::clone(cards));
        }

        let records = self
            .fetcher
            .fetch_set(&key)
            .map_err(|source| Error::SetUnavailable {
                code: key.clone(),
                source,
            })?;

        let mut cards = SetCards::new();
        for record in &records {
            let card = match Card::from_record(record, &self.fetcher) {
                Ok(card) => card,
                Err(Error::InvalidRecord(reason)) => {
                    warn!(set = %key, reason = %reason, "skipping unusable object in set");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let card = state.register(&record.name, card, false);
            cards.insert(card.name().to_string(), card);
        }

        for basic in BASIC_LAND_NAMES {
            cards.remove(basic);
        }

        info!(set = %key, printings = records.len(), cards = cards.len(), "loaded set");

        let cards = Arc::new(cards);
        state.sets.insert(key, Arc::clone(&cards));
        Ok(cards)
    }

    /// Add an already-built card.
    ///
    /// With `force`, the card replaces any cached instance of the same name;
    /// otherwise the cached instance wins and is returned.
    pub fn insert(&self, card: Card, force: bool) -> Arc<Card> {
        let searched = card.full_name().to_string();
        self.state().register(&searched, card, force)
    }

    /// Drop every alias while keeping each canonical name mapped to itself.
    ///
    /// Unresolvable names are forgotten too, so they will be fetched again.
    pub fn reset_redirects(&self) {
        let mut state = self.state();
        let redirect = state
            .cards
            .keys()
            .map(|name| (name.clone(), name.clone()))
            .collect();
        state.redirect = redirect;
    }

    /// Forget everything.
    pub fn flush_cache(&self) {
        let mut state = self.state();
        state.redirect.clear();
        state.cards.clear();
        state.sets.clear();
    }

    /// Number of canonical cards.
    pub fn len(&self) -> usize {
        self.state().cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().cards.is_empty()
    }

    /// Whether a canonical card is cached under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.state().cards.contains_key(name)
    }

    /// Where a searched name redirects to.
    ///
    /// `Some("")` marks a name known to be unresolvable.
    pub fn redirect_target(&self, name: &str) -> Option<String> {
        self.state().redirect.get(name).cloned()
    }

    /// Codes of the sets loaded so far, sorted.
    pub fn cached_sets(&self) -> Vec<String> {
        let mut codes: Vec<_> = self.state().sets.keys().cloned().collect();
        codes.sort();
        codes
    }
}

impl Card {
    /// Resolve a card by name through `manager`.
    ///
    /// Shorthand for [`CardManager::from_name`].
    pub fn from_name<F: CardFetcher>(
        manager: &CardManager<F>,
        name: &str,
    ) -> Result<Option<Arc<Card>>> {
        manager.from_name(name)
    }

    /// A set's cards through `manager`.
    ///
    /// Shorthand for [`CardManager::from_set`].
    pub fn from_set<F: CardFetcher>(manager: &CardManager<F>, code: &str) -> Result<Arc<SetCards>> {
        manager.from_set(code)
    }
}

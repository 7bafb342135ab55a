//! Error types for spellbook-engine.
//!
//! Errors from the engine fall into three categories:
//!
//! 1. **Record errors**: a raw record cannot be modeled as a card
//!    ([`Error::InvalidRecord`], [`Error::UnknownLayout`],
//!    [`Error::MeldBackNotFound`], [`Error::MalformedPrototypeText`])
//! 2. **Fetch errors**: a set that could not be fetched, wrapping the
//!    underlying [`spellbook::Error`]
//! 3. **Setup errors**: configuration and runtime construction
//!
//! A name that Scryfall cannot resolve is *not* an error: the
//! [`CardManager`](crate::CardManager) caches it as unresolvable and answers `None`.
//!
//! # Example
//!
//! ```no_run
//! use spellbook_engine::{CardManager, Error, ScryfallFetcher};
//!
//! # fn example() -> spellbook_engine::Result<()> {
//! let manager = CardManager::new(ScryfallFetcher::new()?);
//!
//! match manager.from_name("Gisela, the Broken Blade") {
//!     Ok(Some(card)) => println!("{} melds", card.name()),
//!     Ok(None) => eprintln!("no such card"),
//!     Err(Error::MeldBackNotFound(name)) => eprintln!("{} has no meld result", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Result type for spellbook-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while modeling or caching cards.
#[derive(Debug, Error)]
pub enum Error {
    /// The record does not describe a usable card: its object kind is not
    /// `"card"` or it has no name.
    #[error("record is not a usable card: {0}")]
    InvalidRecord(String),

    /// The record's layout code is not one this model understands.
    #[error("unknown card layout '{0}'")]
    UnknownLayout(String),

    /// A meld card's linked meld result could not be located.
    #[error("meld result for '{0}' not found")]
    MeldBackNotFound(String),

    /// A prototype card's rules text lacks the `Prototype <cost> — <p>/<t>` line.
    #[error("prototype text of '{0}' does not match 'Prototype <cost> — <power>/<toughness>'")]
    MalformedPrototypeText(String),

    /// The printings of a set could not be fetched.
    #[error("set '{code}' unavailable: {source}")]
    SetUnavailable {
        /// The requested set code.
        code: String,
        /// The underlying fetch error.
        #[source]
        source: spellbook::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! An async Rust client for the Scryfall card database API.
//!
//! This crate provides typed access to the parts of Scryfall needed to resolve
//! card names and enumerate sets. Card objects are returned as [`RawCard`]s:
//! faithful, loosely-typed mirrors of Scryfall's JSON that higher layers turn
//! into a normalized model.
//!
//! # Quick Start
//!
//! ```no_run
//! use spellbook::ScryfallClient;
//!
//! # async fn example() -> spellbook::Result<()> {
//! let client = ScryfallClient::new();
//!
//! let card = client.cards().fuzzy("jukai preserver").await?;
//! println!("{} ({})", card.name, card.layout);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use spellbook::ScryfallClient;
//!
//! let client = ScryfallClient::builder()
//!     .user_agent("deckstats/1.0")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! - [`ScryfallClient::cards()`] - Exact and fuzzy name lookups, id lookups, searches
//! - [`ScryfallClient::sets()`] - Every printing in a set

pub mod actions;
pub mod client;
pub mod error;
mod response;
pub mod types;

pub use client::{ClientBuilder, ScryfallClient};
pub use error::{Error, Result};
pub use types::{CardList, RawCard, RawCardFace, RelatedCard};

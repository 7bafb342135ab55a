//! Normalized card model and identity-resolving card cache on top of Scryfall.
//!
//! This crate turns raw Scryfall records (see [`spellbook`]) into [`Card`]s
//! with one summary face and one or two playable faces, and caches them in a
//! [`CardManager`] so that every spelling of a card name resolves to the same
//! shared instance.
//!
//! # Quick Start
//!
//! ```no_run
//! use spellbook_engine::{CardManager, ImageSize, ScryfallFetcher};
//!
//! # fn example() -> spellbook_engine::Result<()> {
//! let manager = CardManager::new(ScryfallFetcher::new()?);
//!
//! if let Some(card) = manager.from_name("bonecrusher giant")? {
//!     println!("{} [{}]", card.full_name(), card.layout());
//!     for face in card.faces() {
//!         println!("  {} {} ({})", face.name, face.mana_cost, face.cmc);
//!     }
//!     println!("{}", card.image(ImageSize::Normal));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`layout`] - The layout taxonomy
//! - [`face`] - Building faces from raw records
//! - [`card`] - Cards and their face tables
//! - [`manager`] - The card cache
//! - [`color`] - Color sets and mana cost arithmetic
//! - [`typeline`] - Type line classification
//!
//! # Feature Flags
//!
//! - `scryfall` (default): [`ScryfallFetcher`], a blocking fetcher over the
//!   async [`spellbook`] client

mod error;

pub mod card;
pub mod color;
pub mod config;
pub mod face;
pub mod fetch;
pub mod layout;
pub mod manager;
pub mod typeline;

#[cfg(feature = "scryfall")]
mod scryfall;

pub use card::{BASIC_LAND_NAMES, Card, Rarity};
pub use color::ColorSet;
pub use config::Config;
pub use error::{Error, Result};
pub use face::{CardFace, ImageSide, ImageSize, Side};
pub use fetch::CardFetcher;
pub use layout::CardLayout;
pub use manager::{CardManager, SetCards};

#[cfg(feature = "scryfall")]
pub use scryfall::ScryfallFetcher;

// Re-export raw record types for convenience
pub use spellbook::{RawCard, RawCardFace, RelatedCard, ScryfallClient};

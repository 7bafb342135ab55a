//! Type definitions for Scryfall API objects.

mod card;
mod list;

pub use card::{RawCard, RawCardFace, RelatedCard};
pub use list::CardList;

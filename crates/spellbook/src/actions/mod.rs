//! Scryfall action groups.

mod cards;
mod sets;

pub use cards::CardActions;
pub use sets::SetActions;

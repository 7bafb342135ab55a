//! The record source used by the card cache.

use spellbook::RawCard;

use crate::face::DEFAULT_IMAGE_BASE;

/// A blocking source of raw card records.
///
/// The [`CardManager`](crate::CardManager) calls into this while resolving
/// names; implementations own any retry or timeout policy. Any error is
/// treated as "this name cannot be resolved".
pub trait CardFetcher {
    /// Fetch the record for a (possibly misspelled) card name.
    fn fetch_card(&self, name: &str) -> spellbook::Result<RawCard>;

    /// Fetch every record printed in a set.
    fn fetch_set(&self, code: &str) -> spellbook::Result<Vec<RawCard>>;

    /// Host that cards built from these records link their images to.
    fn image_base(&self) -> &str {
        DEFAULT_IMAGE_BASE
    }
}

impl<F: CardFetcher + ?Sized> CardFetcher for &F {
    fn fetch_card(&self, name: &str) -> spellbook::Result<RawCard> {
        (**self).fetch_card(name)
    }

    fn fetch_set(&self, code: &str) -> spellbook::Result<Vec<RawCard>> {
        (**self).fetch_set(code)
    }

    fn image_base(&self) -> &str {
        (**self).image_base()
    }
}

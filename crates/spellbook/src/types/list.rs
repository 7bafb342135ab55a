//! Paginated list objects.

use serde::Deserialize;

use crate::types::RawCard;

/// One page of a card search.
///
/// Scryfall pages search results; follow `next_page` while `has_more` is set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub data: Vec<RawCard>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

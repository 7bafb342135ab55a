//! Card-related types.
//!
//! These mirror Scryfall's card objects closely. Gameplay fields are optional
//! because which of them are present depends on the card's layout: a transform
//! card keeps its mana cost on each face, a split card on each face *and* on
//! the card itself, and so on.

use serde::{Deserialize, Serialize};

/// A card object as returned by Scryfall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    /// Object kind. `"card"` for cards, `"error"` for error objects.
    #[serde(default)]
    pub object: String,
    /// Scryfall id of this printing.
    #[serde(default)]
    pub id: String,
    /// Oracle id, shared across reprints.
    #[serde(default)]
    pub oracle_id: Option<String>,
    /// MTG Arena id, if the card is on Arena.
    #[serde(default)]
    pub arena_id: Option<u64>,
    /// Full card name, e.g. `"Bonecrusher Giant // Stomp"`.
    #[serde(default)]
    pub name: String,
    /// Layout code, e.g. `"normal"` or `"modal_dfc"`.
    #[serde(default)]
    pub layout: String,
    /// API link to this object.
    #[serde(default)]
    pub uri: Option<String>,
    /// Link to the card's page on scryfall.com.
    #[serde(default)]
    pub scryfall_uri: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Colors of mana this card can produce.
    #[serde(default)]
    pub produced_mana: Option<Vec<String>>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    /// Set code, e.g. `"neo"`.
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub set_name: Option<String>,
    /// Rarity word: `common`, `uncommon`, `rare`, `mythic`, `special` or `bonus`.
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub collector_number: String,
    /// Per-face data for multi-faced cards.
    #[serde(default)]
    pub card_faces: Option<Vec<RawCardFace>>,
    /// Closely related cards (meld parts, tokens, combo pieces).
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedCard>>,
}

impl RawCard {
    /// Whether this object describes a card (as opposed to an error or list).
    pub fn is_card(&self) -> bool {
        self.object == "card"
    }

    /// The listed sub-faces, empty for single-faced cards.
    pub fn faces(&self) -> &[RawCardFace] {
        self.card_faces.as_deref().unwrap_or_default()
    }

    /// The related part this card melds into, if any.
    pub fn meld_result(&self) -> Option<&RelatedCard> {
        self.all_parts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|part| part.component == "meld_result")
    }
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCardFace {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub oracle_id: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub produced_mana: Option<Vec<String>>,
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
}

/// A card related to another card, listed in `all_parts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    #[serde(default)]
    pub id: String,
    /// Relation kind: `token`, `meld_part`, `meld_result` or `combo_piece`.
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

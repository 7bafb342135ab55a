//! Card layout taxonomy.
//!
//! The layout decides how many logical faces a card has and where each face's
//! attributes live in the raw record.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// The physical layout of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    /// A single-faced card.
    Normal,
    /// Two half-cards printed side by side, e.g. `Fire // Ice`.
    Split,
    /// A card whose bottom half is used after it flips (Kamigawa flip cards).
    Flip,
    /// A double-faced card that transforms from front to back.
    Transform,
    /// A double-faced card where either face can be cast.
    #[serde(rename = "modal_dfc")]
    ModalDoubleFaced,
    /// One half of a meld pair.
    Meld,
    /// A card with level up bands.
    Leveler,
    /// A class enchantment.
    Class,
    /// A saga enchantment.
    Saga,
    /// A creature with an attached adventure spell.
    Adventure,
    /// An artifact creature with an alternate prototype cost.
    Prototype,
}

impl CardLayout {
    /// Every layout, in declaration order.
    pub const ALL: [CardLayout; 11] = [
        CardLayout::Normal,
        CardLayout::Split,
        CardLayout::Flip,
        CardLayout::Transform,
        CardLayout::ModalDoubleFaced,
        CardLayout::Meld,
        CardLayout::Leveler,
        CardLayout::Class,
        CardLayout::Saga,
        CardLayout::Adventure,
        CardLayout::Prototype,
    ];

    /// Classify a Scryfall layout code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLayout`] for any code outside the taxonomy.
    pub fn classify(code: &str) -> Result<Self> {
        let layout = match code {
            "normal" => CardLayout::Normal,
            "split" => CardLayout::Split,
            "flip" => CardLayout::Flip,
            "transform" => CardLayout::Transform,
            "modal_dfc" => CardLayout::ModalDoubleFaced,
            "meld" => CardLayout::Meld,
            "leveler" => CardLayout::Leveler,
            "class" => CardLayout::Class,
            "saga" => CardLayout::Saga,
            "adventure" => CardLayout::Adventure,
            "prototype" => CardLayout::Prototype,
            other => return Err(Error::UnknownLayout(other.to_string())),
        };
        Ok(layout)
    }

    /// The Scryfall layout code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardLayout::Normal => "normal",
            CardLayout::Split => "split",
            CardLayout::Flip => "flip",
            CardLayout::Transform => "transform",
            CardLayout::ModalDoubleFaced => "modal_dfc",
            CardLayout::Meld => "meld",
            CardLayout::Leveler => "leveler",
            CardLayout::Class => "class",
            CardLayout::Saga => "saga",
            CardLayout::Adventure => "adventure",
            CardLayout::Prototype => "prototype",
        }
    }

    /// Printed on two physical sides (transform and modal double-faced cards).
    pub fn is_two_sided(&self) -> bool {
        matches!(self, CardLayout::Transform | CardLayout::ModalDoubleFaced)
    }

    /// Two faces sharing one physical side (adventure, split and flip cards).
    pub fn is_fused(&self) -> bool {
        matches!(
            self,
            CardLayout::Adventure | CardLayout::Split | CardLayout::Flip
        )
    }
}

impl FromStr for CardLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::classify(s)
    }
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

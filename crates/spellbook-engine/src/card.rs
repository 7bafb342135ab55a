//! Cards.
//!
//! A [`Card`] aggregates one printing: its identity, a default face used for
//! summaries (`"Bonecrusher Giant // Stomp"`), and one or two playable faces.
//!
//! Which faces exist depends on the layout:
//!
//! | Layout | face 1 | face 2 |
//! |---|---|---|
//! | normal, saga, class, leveler | the default face | none |
//! | meld | the default face | the melded result |
//! | prototype | `default` | `prototype` |
//! | adventure | `main` | `adventure` |
//! | split | `left` | `right` |
//! | flip | `main` | `flipped` |
//! | transform, modal_dfc | `front` | `back` |

use std::fmt;

use serde::{Serialize, Serializer};
use spellbook::RawCard;
use tracing::debug;

use crate::color::{ColorSet, color_identity_of, colors_of_cost};
use crate::error::{Error, Result};
use crate::face::{CardFace, ImageSize, Side, build_face};
use crate::fetch::CardFetcher;
use crate::layout::CardLayout;

const API_BASE: &str = "https://api.scryfall.com";
const PAGE_BASE: &str = "https://scryfall.com";

/// Names of the five basic lands.
pub const BASIC_LAND_NAMES: [&str; 5] = ["Plains", "Island", "Swamp", "Mountain", "Forest"];

/// Printed rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    /// Map a Scryfall rarity word.
    ///
    /// `special` and `bonus` printings (and anything newer) count as mythic.
    pub fn from_scryfall(word: &str) -> Self {
        match word {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            _ => Rarity::Mythic,
        }
    }

    /// The one-letter code: `C`, `U`, `R` or `M`.
    pub fn letter(&self) -> char {
        match self {
            Rarity::Common => 'C',
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
            Rarity::Mythic => 'M',
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for Rarity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.letter())
    }
}

/// One printing of a card.
///
/// Cards are immutable once built; the [`CardManager`](crate::CardManager)
/// hands them out behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    id: String,
    arena_id: Option<u64>,
    oracle_id: Option<String>,
    set: String,
    set_name: Option<String>,
    rarity: Rarity,
    collector_number: String,
    color_identity: ColorSet,
    cast_identity: ColorSet,
    cmc: f64,
    layout: CardLayout,
    default_face: CardFace,
    /// `None` when the first playable face is the default face.
    face1: Option<CardFace>,
    face2: Option<CardFace>,
    api_uri: Option<String>,
    page_uri: Option<String>,
    #[serde(skip)]
    image_base: String,
}

impl Card {
    /// Build a card from a raw record.
    ///
    /// The fetcher is consulted for meld cards, whose melded back half is a
    /// separate record, and supplies the host used by [`Card::image`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRecord`] if the record is not a card or has no name
    /// - [`Error::UnknownLayout`] if its layout is outside the taxonomy
    /// - [`Error::MeldBackNotFound`] if a meld card has no retrievable meld result
    /// - [`Error::MalformedPrototypeText`] if a prototype card lacks its prototype line
    pub fn from_record<F>(record: &RawCard, fetcher: &F) -> Result<Self>
    where
        F: CardFetcher + ?Sized,
    {
        if !record.is_card() {
            return Err(Error::InvalidRecord(format!(
                "object kind '{}'",
                record.object
            )));
        }
        if record.name.trim().is_empty() {
            return Err(Error::InvalidRecord(format!("card {} has no name", record.id)));
        }

        let layout = CardLayout::classify(&record.layout)?;
        let default_face = build_face(record, layout, Side::Default)?;

        let (face1, face2) = match layout {
            CardLayout::Normal | CardLayout::Saga | CardLayout::Class | CardLayout::Leveler => {
                (None, None)
            }
            CardLayout::Meld => (None, Some(melded_face(record, fetcher)?)),
            CardLayout::Prototype => pair(record, layout, Side::Default, Side::Prototype)?,
            CardLayout::Adventure => pair(record, layout, Side::Main, Side::Adventure)?,
            CardLayout::Split => pair(record, layout, Side::Left, Side::Right)?,
            CardLayout::Flip => pair(record, layout, Side::Main, Side::Flipped)?,
            CardLayout::Transform | CardLayout::ModalDoubleFaced => {
                pair(record, layout, Side::Front, Side::Back)?
            }
        };

        let cast_identity = color_identity_of(
            colors_of_cost(&default_face.mana_cost)
                .iter()
                .map(String::from),
        );

        debug!(card = %record.name, layout = %layout, "built card");

        Ok(Self {
            id: record.id.clone(),
            arena_id: record.arena_id,
            oracle_id: record.oracle_id.clone(),
            set: record.set.clone(),
            set_name: record.set_name.clone(),
            rarity: Rarity::from_scryfall(&record.rarity),
            collector_number: record.collector_number.clone(),
            color_identity: ColorSet::from_letters(
                record.color_identity.as_deref().unwrap_or_default(),
            ),
            cast_identity,
            cmc: default_face.cmc,
            layout,
            default_face,
            face1,
            face2,
            api_uri: record.uri.clone(),
            page_uri: record.scryfall_uri.clone(),
            image_base: fetcher.image_base().to_string(),
        })
    }

    /// The card's short name.
    ///
    /// Split cards go by their combined name (`"Fire // Ice"`); every other
    /// layout goes by its first face (`"Bonecrusher Giant"`).
    pub fn name(&self) -> &str {
        if self.layout == CardLayout::Split {
            &self.default_face.name
        } else {
            &self.face1().name
        }
    }

    /// The full name, including every face.
    pub fn full_name(&self) -> &str {
        &self.default_face.name
    }

    /// Scryfall id of this printing.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arena_id(&self) -> Option<u64> {
        self.arena_id
    }

    pub fn oracle_id(&self) -> Option<&str> {
        self.oracle_id.as_deref()
    }

    /// Set code, e.g. `"neo"`.
    pub fn set(&self) -> &str {
        &self.set
    }

    pub fn set_name(&self) -> Option<&str> {
        self.set_name.as_deref()
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn collector_number(&self) -> &str {
        &self.collector_number
    }

    /// Color identity as annotated on the record.
    pub fn color_identity(&self) -> ColorSet {
        self.color_identity
    }

    /// Colors found in the default face's mana cost.
    pub fn cast_identity(&self) -> ColorSet {
        self.cast_identity
    }

    pub fn cmc(&self) -> f64 {
        self.cmc
    }

    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    pub fn is_two_sided(&self) -> bool {
        self.layout.is_two_sided()
    }

    pub fn is_split(&self) -> bool {
        self.layout.is_fused()
    }

    /// The summary face.
    pub fn default_face(&self) -> &CardFace {
        &self.default_face
    }

    /// The first playable face.
    pub fn face1(&self) -> &CardFace {
        self.face1.as_ref().unwrap_or(&self.default_face)
    }

    /// The second playable face, if the layout has one.
    pub fn face2(&self) -> Option<&CardFace> {
        self.face2.as_ref()
    }

    /// The playable faces in order.
    pub fn faces(&self) -> impl Iterator<Item = &CardFace> {
        std::iter::once(self.face1()).chain(self.face2())
    }

    /// Image of the first face on the image host this card was built with.
    pub fn image(&self, size: ImageSize) -> String {
        self.face1().image_url_from(&self.image_base, size)
    }

    /// The image host used by [`Card::image`].
    pub fn image_base(&self) -> &str {
        &self.image_base
    }

    /// Image of the first face on a custom image host.
    pub fn image_from(&self, base: &str, size: ImageSize) -> String {
        self.face1().image_url_from(base, size)
    }

    /// API link for this printing.
    pub fn api_link(&self) -> String {
        self.api_uri
            .clone()
            .unwrap_or_else(|| format!("{}/cards/{}", API_BASE, self.id))
    }

    /// The printing's page on scryfall.com.
    pub fn canonical_page_link(&self) -> String {
        self.page_uri.clone().unwrap_or_else(|| {
            format!("{}/card/{}/{}", PAGE_BASE, self.set, self.collector_number)
        })
    }

    pub fn is_basic_land(&self) -> bool {
        BASIC_LAND_NAMES.contains(&self.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.full_name(),
            self.set.to_uppercase(),
            self.collector_number
        )
    }
}

fn pair(
    record: &RawCard,
    layout: CardLayout,
    first: Side,
    second: Side,
) -> Result<(Option<CardFace>, Option<CardFace>)> {
    Ok((
        Some(build_face(record, layout, first)?),
        Some(build_face(record, layout, second)?),
    ))
}

fn melded_face<F>(record: &RawCard, fetcher: &F) -> Result<CardFace>
where
    F: CardFetcher + ?Sized,
{
    let part = record
        .meld_result()
        .ok_or_else(|| Error::MeldBackNotFound(record.name.clone()))?;

    if part.name == record.name {
        return build_face(record, CardLayout::Meld, Side::Melded);
    }

    debug!(card = %record.name, meld_result = %part.name, "fetching meld result");
    let back = fetcher
        .fetch_card(&part.name)
        .map_err(|_| Error::MeldBackNotFound(record.name.clone()))?;

    build_face(&back, CardLayout::Meld, Side::Melded)
}

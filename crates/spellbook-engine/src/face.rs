//! Card faces.
//!
//! A [`CardFace`] is one logical side of a card with its own name, cost, text
//! and stats. Faces are built from a [`RawCard`] in three steps:
//!
//! 1. pick the attribute source for the requested [`Side`] (the whole record
//!    or one of its `card_faces`)
//! 2. read every attribute through an ordered fallback chain, face first and
//!    then the whole record, before settling on a default
//! 3. apply the override registered for the `(layout, side)` pair, if any
//!
//! # Example
//!
//! ```no_run
//! use spellbook_engine::face::{build_face, ImageSize, Side};
//! use spellbook_engine::CardLayout;
//!
//! # fn example(record: &spellbook::RawCard) -> spellbook_engine::Result<()> {
//! let stomp = build_face(record, CardLayout::Adventure, Side::Adventure)?;
//! println!("{} costs {} ({})", stomp.name, stomp.mana_cost, stomp.cmc);
//! println!("{}", stomp.image_url(ImageSize::Normal));
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;
use spellbook::{RawCard, RawCardFace};
use tracing::warn;

use crate::color::{ColorSet, calculate_cmc, colors_of_cost};
use crate::error::{Error, Result};
use crate::layout::CardLayout;
use crate::typeline;

/// Default host for card images.
pub const DEFAULT_IMAGE_BASE: &str = "https://cards.scryfall.io";

static PROTOTYPE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Prototype\s+((?:\{[^}]+\})+)\s+[—-]\s+([^/\s]+)/([^\s(]+)")
        .expect("prototype pattern is valid")
});

/// Which logical face of a card to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The whole-card summary view.
    Default,
    Front,
    Back,
    Left,
    Right,
    Main,
    Adventure,
    Flipped,
    Prototype,
    /// The melded back half of a meld pair.
    Melded,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Default => "default",
            Side::Front => "front",
            Side::Back => "back",
            Side::Left => "left",
            Side::Right => "right",
            Side::Main => "main",
            Side::Adventure => "adventure",
            Side::Flipped => "flipped",
            Side::Prototype => "prototype",
            Side::Melded => "melded",
        }
    }

    /// The physical side this face is printed on.
    pub fn image_side(&self) -> ImageSide {
        match self {
            Side::Back | Side::Melded => ImageSide::Back,
            _ => ImageSide::Front,
        }
    }

    /// Whether this side reads from the second listed sub-face.
    fn is_second_face(&self) -> bool {
        matches!(
            self,
            Side::Back | Side::Adventure | Side::Right | Side::Flipped
        )
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The physical side of the printed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    Front,
    Back,
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageSide::Front => "front",
            ImageSide::Back => "back",
        })
    }
}

/// Image variants served by Scryfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    Small,
    #[default]
    Normal,
    Large,
    Png,
    ArtCrop,
    BorderCrop,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "small",
            ImageSize::Normal => "normal",
            ImageSize::Large => "large",
            ImageSize::Png => "png",
            ImageSize::ArtCrop => "art_crop",
            ImageSize::BorderCrop => "border_crop",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ImageSize::Png => "png",
            _ => "jpg",
        }
    }
}

/// One playable (or summary) face of a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFace {
    /// Scryfall id of the printing this face belongs to.
    pub scryfall_id: String,
    /// Oracle id, shared across reprints.
    pub oracle_id: Option<String>,
    pub layout: CardLayout,
    pub side: Side,
    pub image_side: ImageSide,

    pub name: String,
    /// Mana cost in brace notation; empty when the face has no cost.
    pub mana_cost: String,
    pub cmc: f64,
    pub colors: ColorSet,
    pub color_identity: ColorSet,

    pub type_line: String,
    /// Every type token of the type line.
    pub all_types: BTreeSet<String>,
    pub supertypes: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub subtypes: BTreeSet<String>,
    /// Type tokens that matched no known vocabulary.
    pub unclassified_types: BTreeSet<String>,
    pub oracle_text: Option<String>,
    pub keywords: BTreeSet<String>,
    /// Colors of mana this face can produce.
    pub mana_produced: BTreeSet<String>,
    pub flavor_text: Option<String>,

    pub power: Option<String>,
    pub toughness: Option<String>,
}

impl CardFace {
    /// Image URL on the default image host.
    pub fn image_url(&self, size: ImageSize) -> String {
        self.image_url_from(DEFAULT_IMAGE_BASE, size)
    }

    /// Image URL on a custom image host.
    ///
    /// Images are laid out as `<base>/<size>/<side>/<id[0]>/<id[1]>/<id>.jpg`.
    pub fn image_url_from(&self, base: &str, size: ImageSize) -> String {
        let id = &self.scryfall_id;
        format!(
            "{}/{}/{}/{}/{}/{}.{}",
            base.trim_end_matches('/'),
            size.as_str(),
            self.image_side,
            id.get(0..1).unwrap_or_default(),
            id.get(1..2).unwrap_or_default(),
            id,
            size.extension()
        )
    }

    /// Whether every type token is a known supertype, type or subtype.
    pub fn types_consistent(&self) -> bool {
        self.all_types.iter().all(|t| {
            self.supertypes.contains(t) || self.types.contains(t) || self.subtypes.contains(t)
        })
    }

    pub fn is_creature(&self) -> bool {
        self.types.contains("Creature")
    }

    pub fn is_land(&self) -> bool {
        self.types.contains("Land")
    }
}

/// Build one face of a card.
///
/// # Errors
///
/// Returns [`Error::MalformedPrototypeText`] when a prototype face is requested
/// and the card's rules text has no parseable prototype line.
pub fn build_face(record: &RawCard, layout: CardLayout, side: Side) -> Result<CardFace> {
    let source = select_source(record, layout, side);
    let mut face = read_attributes(record, source, layout, side);

    if let Some(apply) = override_for(layout, side) {
        apply(&mut face, record)?;
    }

    if !face.types_consistent() {
        warn!(
            card = %face.name,
            side = %side,
            unclassified = ?face.unclassified_types,
            "type line has tokens outside the known vocabularies"
        );
    }

    Ok(face)
}

/// Pick the sub-face to read attributes from. `None` means the whole record.
fn select_source(record: &RawCard, layout: CardLayout, side: Side) -> Option<&RawCardFace> {
    if matches!(side, Side::Default | Side::Prototype) || layout == CardLayout::Meld {
        return None;
    }

    let faces = record.faces();
    if side.is_second_face() {
        faces.get(1)
    } else {
        faces.first()
    }
}

/// Values that count as missing when empty.
trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for [String] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// The first present, non-empty value of an ordered lookup chain.
fn first_present<'a, T>(chain: [Option<&'a T>; 2]) -> Option<&'a T>
where
    T: Blank + ?Sized,
{
    chain.into_iter().flatten().find(|value| !value.is_blank())
}

fn to_set(values: Option<&[String]>) -> BTreeSet<String> {
    values.unwrap_or_default().iter().cloned().collect()
}

fn read_attributes(
    record: &RawCard,
    face: Option<&RawCardFace>,
    layout: CardLayout,
    side: Side,
) -> CardFace {
    let name = first_present([face.and_then(|f| f.name.as_deref()), Some(record.name.as_str())])
        .unwrap_or_default()
        .to_string();
    let oracle_id = first_present([
        face.and_then(|f| f.oracle_id.as_deref()),
        record.oracle_id.as_deref(),
    ])
    .map(str::to_string);

    let mana_cost = first_present([
        face.and_then(|f| f.mana_cost.as_deref()),
        record.mana_cost.as_deref(),
    ])
    .unwrap_or_default()
    .to_string();

    let explicit_cmc = match face {
        Some(f) => f.cmc,
        None => record.cmc,
    };
    let cmc = explicit_cmc.unwrap_or_else(|| calculate_cmc(&mana_cost));

    let colors = first_present([
        face.and_then(|f| f.colors.as_deref()),
        record.colors.as_deref(),
    ])
    .map(ColorSet::from_letters)
    .unwrap_or_default();
    let color_identity = first_present([
        face.and_then(|f| f.color_identity.as_deref()),
        record.color_identity.as_deref(),
    ])
    .map(ColorSet::from_letters)
    .unwrap_or_default();

    let type_line = first_present([
        face.and_then(|f| f.type_line.as_deref()),
        record.type_line.as_deref(),
    ])
    .unwrap_or_default()
    .to_string();
    let breakdown = typeline::classify(&type_line, layout);

    let text = |on_face: Option<&str>, on_card: Option<&str>| {
        first_present([on_face, on_card]).map(str::to_string)
    };

    CardFace {
        scryfall_id: record.id.clone(),
        oracle_id,
        layout,
        side,
        image_side: side.image_side(),
        name,
        mana_cost,
        cmc,
        colors,
        color_identity,
        type_line,
        all_types: breakdown.all,
        supertypes: breakdown.supertypes,
        types: breakdown.types,
        subtypes: breakdown.subtypes,
        unclassified_types: breakdown.unclassified,
        oracle_text: text(
            face.and_then(|f| f.oracle_text.as_deref()),
            record.oracle_text.as_deref(),
        ),
        keywords: to_set(first_present([
            face.and_then(|f| f.keywords.as_deref()),
            record.keywords.as_deref(),
        ])),
        mana_produced: to_set(first_present([
            face.and_then(|f| f.produced_mana.as_deref()),
            record.produced_mana.as_deref(),
        ])),
        flavor_text: text(
            face.and_then(|f| f.flavor_text.as_deref()),
            record.flavor_text.as_deref(),
        ),
        power: text(face.and_then(|f| f.power.as_deref()), record.power.as_deref()),
        toughness: text(
            face.and_then(|f| f.toughness.as_deref()),
            record.toughness.as_deref(),
        ),
    }
}

/// A layout-specific adjustment applied after the generic attribute read.
type Override = fn(&mut CardFace, &RawCard) -> Result<()>;

const OVERRIDES: &[(CardLayout, Side, Override)] = &[
    (CardLayout::Flip, Side::Flipped, flipped_inherits_cost),
    (CardLayout::Transform, Side::Default, transform_summary),
    (CardLayout::Transform, Side::Back, transform_back),
    (CardLayout::ModalDoubleFaced, Side::Default, modal_summary),
    (CardLayout::ModalDoubleFaced, Side::Back, modal_back),
    (CardLayout::Prototype, Side::Prototype, prototype_cost),
];

fn override_for(layout: CardLayout, side: Side) -> Option<Override> {
    OVERRIDES
        .iter()
        .find(|(l, s, _)| *l == layout && *s == side)
        .map(|(_, _, apply)| *apply)
}

fn front(record: &RawCard) -> Option<&RawCardFace> {
    record.faces().first()
}

/// The flipped half is paid for with the unflipped half's cost.
fn flipped_inherits_cost(face: &mut CardFace, record: &RawCard) -> Result<()> {
    let cost = record
        .mana_cost
        .as_deref()
        .or_else(|| front(record).and_then(|f| f.mana_cost.as_deref()))
        .unwrap_or_default();

    face.mana_cost = cost.to_string();
    face.cmc = record.cmc.unwrap_or_else(|| calculate_cmc(cost));
    Ok(())
}

/// The summary of a transform card shows the front's cost, text and stats
/// next to the combined type line.
fn transform_summary(face: &mut CardFace, record: &RawCard) -> Result<()> {
    let Some(front) = front(record) else {
        return Ok(());
    };

    face.colors = front
        .colors
        .as_deref()
        .map(ColorSet::from_letters)
        .unwrap_or_default();
    face.mana_cost = front.mana_cost.clone().unwrap_or_default();
    face.oracle_text = front.oracle_text.clone();
    face.power = front.power.clone();
    face.toughness = front.toughness.clone();
    Ok(())
}

/// Back faces cannot be cast but count the front's mana value.
fn transform_back(face: &mut CardFace, record: &RawCard) -> Result<()> {
    face.mana_cost = String::new();
    face.cmc = record.cmc.unwrap_or_else(|| {
        front(record)
            .and_then(|f| f.mana_cost.as_deref())
            .map(calculate_cmc)
            .unwrap_or_default()
    });
    Ok(())
}

fn modal_summary(face: &mut CardFace, record: &RawCard) -> Result<()> {
    if let Some(front) = front(record) {
        face.mana_cost = front.mana_cost.clone().unwrap_or_default();
        face.oracle_text = front.oracle_text.clone();
    }
    // Downstream color filters expect the summary of a modal card to carry
    // its full identity rather than the front's colors.
    face.colors = face.color_identity;
    Ok(())
}

fn modal_back(face: &mut CardFace, record: &RawCard) -> Result<()> {
    face.mana_produced = to_set(record.produced_mana.as_deref());
    Ok(())
}

/// The prototype face is the card cast for its alternate cost and stats.
fn prototype_cost(face: &mut CardFace, record: &RawCard) -> Result<()> {
    let text = record.oracle_text.as_deref().unwrap_or_default();
    let caps = PROTOTYPE_LINE
        .captures(text)
        .ok_or_else(|| Error::MalformedPrototypeText(record.name.clone()))?;

    face.mana_cost = caps[1].to_string();
    face.power = Some(caps[2].to_string());
    face.toughness = Some(caps[3].to_string());
    face.cmc = calculate_cmc(&face.mana_cost);
    face.colors = colors_of_cost(&face.mana_cost);
    Ok(())
}

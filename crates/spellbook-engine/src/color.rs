//! Color and mana cost algebra.
//!
//! Colors are handled as sets over the five-letter alphabet `WUBRG` and are
//! always rendered in that canonical order, so `"GW"` and `"WG"` both display
//! as `"WG"`.
//!
//! # Example
//!
//! ```
//! use spellbook_engine::color::{calculate_cmc, colors_of_cost, ColorSet};
//!
//! assert_eq!(calculate_cmc("{2}{R} // {1}{R}"), 5.0);
//! assert_eq!(colors_of_cost("{X}{W/U}{B/P}").to_string(), "WUB");
//! assert_eq!("gw".parse::<ColorSet>().unwrap().to_string(), "WG");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Serialize, Serializer};

/// The color alphabet in canonical order.
pub const WUBRG: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

static MANA_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("mana symbol pattern is valid"));

/// A subset of the five colors.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set.
    pub const COLORLESS: ColorSet = ColorSet(0);

    /// Build a set from color letters, e.g. Scryfall's `["G", "W"]`.
    ///
    /// Only the first character of each entry is considered; anything that
    /// isn't a color letter (such as `"C"` for colorless mana) is skipped.
    pub fn from_letters<I, S>(letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = ColorSet::COLORLESS;
        for letter in letters {
            if let Some(c) = letter.as_ref().chars().next() {
                set.insert(c);
            }
        }
        set
    }

    /// Add a color. Returns false if `color` is not a color letter.
    pub fn insert(&mut self, color: char) -> bool {
        match bit(color) {
            Some(b) => {
                self.0 |= b;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, color: char) -> bool {
        bit(color).is_some_and(|b| self.0 & b != 0)
    }

    pub fn union(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 | other.0)
    }

    pub fn is_subset(&self, other: &ColorSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The colors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        WUBRG.into_iter().filter(move |c| self.contains(*c))
    }
}

fn bit(color: char) -> Option<u8> {
    WUBRG
        .iter()
        .position(|c| *c == color.to_ascii_uppercase())
        .map(|i| 1 << i)
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorSet({:?})", self.to_string())
    }
}

impl FromStr for ColorSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = ColorSet::COLORLESS;
        for c in s.chars() {
            if !set.insert(c) {
                return Err(format!("'{}' is not a color letter", c));
            }
        }
        Ok(set)
    }
}

impl FromIterator<char> for ColorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = ColorSet::COLORLESS;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The color identity spanned by a list of colors.
pub fn color_identity_of<I, S>(colors: I) -> ColorSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ColorSet::from_letters(colors)
}

/// The symbols of a mana cost, without braces.
///
/// `"{2}{R} // {1}{R}"` yields `["2", "R", "1", "R"]`.
pub fn mana_symbols(cost: &str) -> Vec<&str> {
    MANA_SYMBOL
        .captures_iter(cost)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// The converted mana cost of a cost string.
///
/// Numeric symbols count their value, `X`, `Y` and `Z` count zero, numeric
/// hybrids like `{2/W}` count their number, and every other symbol (colored,
/// hybrid, phyrexian, `{C}`, `{S}`, colorless hybrids like `{C/W}`) counts one.
pub fn calculate_cmc(cost: &str) -> f64 {
    mana_symbols(cost).into_iter().map(symbol_value).sum()
}

fn symbol_value(symbol: &str) -> f64 {
    if let Ok(n) = symbol.parse::<f64>() {
        return n;
    }
    match symbol {
        "X" | "Y" | "Z" => 0.0,
        "½" => 0.5,
        "∞" => 0.0,
        // Unhinged half mana, e.g. {HW}
        s if s.len() == 2 && s.starts_with('H') => 0.5,
        s => match s.split_once('/') {
            Some((left, _)) => left.parse::<f64>().unwrap_or(1.0),
            None => 1.0,
        },
    }
}

/// The colors appearing in a cost's symbols.
pub fn colors_of_cost(cost: &str) -> ColorSet {
    mana_symbols(cost)
        .into_iter()
        .flat_map(str::chars)
        .collect()
}

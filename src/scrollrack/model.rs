use crate::error::{Result, ScrollError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five colors in canonical order.
pub const COLOR_ORDER: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// Separator between the two faces of a split or double-faced card.
pub const FACE_SEPARATOR: &str = " // ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "C")]
    Common,
    #[serde(rename = "U")]
    Uncommon,
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "M")]
    Mythic,
}

impl Rarity {
    pub fn code(self) -> &'static str {
        match self {
            Rarity::Common => "C",
            Rarity::Uncommon => "U",
            Rarity::Rare => "R",
            Rarity::Mythic => "M",
        }
    }

    /// Parses a rarity as reported by the search API (`common`, `mythic`, ...).
    /// One-letter codes are accepted too, so already-normalized values pass through.
    pub fn from_search_name(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "common" | "c" => Ok(Rarity::Common),
            "uncommon" | "u" => Ok(Rarity::Uncommon),
            "rare" | "r" => Ok(Rarity::Rare),
            "mythic" | "m" => Ok(Rarity::Mythic),
            _ => Err(ScrollError::UnknownRarity(raw.to_string())),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rarity {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "C" => Ok(Rarity::Common),
            "U" => Ok(Rarity::Uncommon),
            "R" => Ok(Rarity::Rare),
            "M" => Ok(Rarity::Mythic),
            _ => Err(ScrollError::UnknownRarity(s.to_string())),
        }
    }
}

/// One row of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRecord {
    // Transient editing flag, never persisted
    pub selected: bool,
    pub name: String,
    pub cost: String,
    pub set: String,
    pub rarity: Option<Rarity>,
    pub mana_value: u32,
    pub color_identity: String,
    pub released: String,
}

impl CardRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Text shown for this record in the given column.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Sel => if self.selected { "*" } else { "" }.to_string(),
            Column::Name => self.name.clone(),
            Column::Cost => self.cost.clone(),
            Column::Set => self.set.clone(),
            Column::Rarity => self.rarity.map(|r| r.code().to_string()).unwrap_or_default(),
            Column::Mv => self.mana_value.to_string(),
            Column::Color => self.color_identity.clone(),
            Column::Released => self.released.clone(),
        }
    }
}

/// The collection schema, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Sel,
    Name,
    Cost,
    Set,
    Rarity,
    Mv,
    Color,
    Released,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Sel,
        Column::Name,
        Column::Cost,
        Column::Set,
        Column::Rarity,
        Column::Mv,
        Column::Color,
        Column::Released,
    ];

    /// Columns written to disk. `Sel` is transient.
    pub const PERSISTED: [Column; 7] = [
        Column::Name,
        Column::Cost,
        Column::Set,
        Column::Rarity,
        Column::Mv,
        Column::Color,
        Column::Released,
    ];

    /// Columns every persisted file must carry (the original four-column schema).
    pub const REQUIRED: [Column; 4] = [Column::Name, Column::Cost, Column::Set, Column::Rarity];

    pub fn header(self) -> &'static str {
        match self {
            Column::Sel => "Sel",
            Column::Name => "Name",
            Column::Cost => "Cost",
            Column::Set => "Set",
            Column::Rarity => "Rarity",
            Column::Mv => "MV",
            Column::Color => "Color",
            Column::Released => "Released",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sel" | "selected" => Ok(Column::Sel),
            "name" => Ok(Column::Name),
            "cost" => Ok(Column::Cost),
            "set" => Ok(Column::Set),
            "rarity" => Ok(Column::Rarity),
            "mv" | "cmc" | "mana-value" => Ok(Column::Mv),
            "color" | "colour" => Ok(Column::Color),
            "released" | "date" => Ok(Column::Released),
            _ => Err(ScrollError::UnknownColumn(s.to_string())),
        }
    }
}

/// Deduplicates color letters and orders them W, U, B, R, G.
///
/// Letters are matched case-insensitively. Anything that is not one of the five
/// colors is returned separately so callers can decide how loudly to complain.
pub fn canonical_colors<I, S>(letters: I) -> (String, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut present = [false; 5];
    let mut rejected = Vec::new();
    for letter in letters {
        let letter = letter.as_ref();
        for ch in letter.chars() {
            match COLOR_ORDER
                .iter()
                .position(|c| *c == ch.to_ascii_uppercase())
            {
                Some(idx) => present[idx] = true,
                None => rejected.push(letter.to_string()),
            }
        }
    }
    let canonical = COLOR_ORDER
        .iter()
        .zip(present)
        .filter(|(_, on)| *on)
        .map(|(c, _)| *c)
        .collect();
    (canonical, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_colors_orders_and_dedupes() {
        let (colors, rejected) = canonical_colors(["G", "w", "U", "G"]);
        assert_eq!(colors, "WUG");
        assert!(rejected.is_empty());
    }

    #[test]
    fn canonical_colors_reports_unknown_letters() {
        let (colors, rejected) = canonical_colors(["R", "X"]);
        assert_eq!(colors, "R");
        assert_eq!(rejected, vec!["X".to_string()]);
    }

    #[test]
    fn empty_colors_are_colorless() {
        let (colors, _) = canonical_colors(Vec::<String>::new());
        assert_eq!(colors, "");
    }

    #[test]
    fn rarity_from_search_name() {
        assert_eq!(Rarity::from_search_name("mythic").unwrap(), Rarity::Mythic);
        assert_eq!(Rarity::from_search_name("U").unwrap(), Rarity::Uncommon);
        assert!(matches!(
            Rarity::from_search_name("special"),
            Err(ScrollError::UnknownRarity(_))
        ));
    }

    #[test]
    fn column_parsing_is_case_insensitive() {
        assert_eq!("RARITY".parse::<Column>().unwrap(), Column::Rarity);
        assert_eq!("mv".parse::<Column>().unwrap(), Column::Mv);
        assert!("power".parse::<Column>().is_err());
    }

    #[test]
    fn cell_renders_missing_rarity_as_empty() {
        let card = CardRecord::new("Ornithopter");
        assert_eq!(card.cell(Column::Rarity), "");
        assert_eq!(card.cell(Column::Mv), "0");
        assert_eq!(card.cell(Column::Sel), "");
    }
}

//! Semicolon-delimited persistence format.
//!
//! ```text
//! Name;Cost;Set;Rarity;MV;Color;Released
//! Fire // Ice;{1}{R} // {1}{U};APC;U;2;R;2001-06-11
//! ```
//!
//! One header row, one row per card, in collection order. The transient
//! selection flag is never written and comes back as `false`. Blank cells are
//! empty strings in both directions.
//!
//! Older files carry only `Name;Cost;Set;Rarity`. Those columns are required;
//! the rest default when absent. Columns may appear in any order and unknown
//! columns are ignored. Older files may also spell rarities out or carry tiers
//! we do not know (`special`, `bonus`); the latter load with an empty rarity.

use crate::error::{Result, ScrollError};
use crate::model::{CardRecord, Column, Rarity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

pub const DELIMITER: u8 = b';';

#[derive(Debug, Serialize, Deserialize)]
struct PersistedRow {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Cost", default)]
    cost: String,
    #[serde(rename = "Set", default)]
    set: String,
    #[serde(rename = "Rarity", default)]
    rarity: String,
    #[serde(rename = "MV", default)]
    mana_value: Option<u32>,
    #[serde(rename = "Color", default)]
    color: String,
    #[serde(rename = "Released", default)]
    released: String,
}

impl From<&CardRecord> for PersistedRow {
    fn from(card: &CardRecord) -> Self {
        Self {
            name: card.name.clone(),
            cost: card.cost.clone(),
            set: card.set.clone(),
            rarity: card.rarity.map(|r| r.code().to_string()).unwrap_or_default(),
            mana_value: Some(card.mana_value),
            color: card.color_identity.clone(),
            released: card.released.clone(),
        }
    }
}

impl PersistedRow {
    /// `line` is the 1-based data row, used in warnings.
    fn into_card(self, line: usize) -> CardRecord {
        let rarity = match self.rarity.trim() {
            "" => None,
            raw => match Rarity::from_search_name(raw) {
                Ok(rarity) => Some(rarity),
                Err(_) => {
                    tracing::warn!(row = line, rarity = raw, "Unknown rarity, leaving it empty");
                    None
                }
            },
        };
        CardRecord {
            selected: false,
            name: self.name,
            cost: self.cost,
            set: self.set,
            rarity,
            mana_value: self.mana_value.unwrap_or_default(),
            color_identity: self.color,
            released: self.released,
        }
    }
}

pub fn write_cards<W: Write>(writer: W, cards: &[CardRecord]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(writer);
    // Header is written even for empty collections
    out.write_record(Column::PERSISTED.iter().map(|c| c.header()))?;
    for card in cards {
        out.serialize(PersistedRow::from(card))?;
    }
    out.flush()?;
    Ok(())
}

pub fn read_cards<R: Read>(reader: R) -> Result<Vec<CardRecord>> {
    let mut input = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(reader);

    let headers = input
        .headers()
        .map_err(|e| ScrollError::Parse(format!("unreadable header: {e}")))?
        .clone();
    check_headers(&headers)?;

    let mut cards = Vec::new();
    for (i, row) in input.deserialize::<PersistedRow>().enumerate() {
        let row = row.map_err(|e| ScrollError::Parse(format!("row {}: {e}", i + 1)))?;
        cards.push(row.into_card(i + 1));
    }
    Ok(cards)
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<&str> = Column::REQUIRED
        .iter()
        .map(|c| c.header())
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();
    if !missing.is_empty() {
        return Err(ScrollError::Parse(format!(
            "header is missing required columns: {}",
            missing.join(", ")
        )));
    }

    for header in headers.iter() {
        if !Column::PERSISTED.iter().any(|c| c.header() == header) {
            tracing::debug!(column = header, "Ignoring unknown column");
        }
    }
    Ok(())
}

pub fn read_file(path: &Path) -> Result<Vec<CardRecord>> {
    tracing::debug!(path = %path.display(), "Reading collection");
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScrollError::FileNotFound(path.to_path_buf())
        } else {
            ScrollError::Io(e)
        }
    })?;
    read_cards(file).map_err(|e| match e {
        ScrollError::Parse(msg) => ScrollError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Overwrites `path` with `cards`, creating the parent directory if needed.
pub fn write_file(path: &Path, cards: &[CardRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ScrollError::Io)?;
        }
    }
    tracing::debug!(path = %path.display(), rows = cards.len(), "Writing collection");
    let file = fs::File::create(path).map_err(ScrollError::Io)?;
    write_cards(file, cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CardRecord> {
        vec![
            CardRecord {
                selected: true,
                name: "Fire // Ice".into(),
                cost: "{1}{R} // {1}{U}".into(),
                set: "APC".into(),
                rarity: Some(Rarity::Uncommon),
                mana_value: 2,
                color_identity: "R".into(),
                released: "2001-06-11".into(),
            },
            CardRecord {
                name: "Ornithopter".into(),
                cost: "{0}".into(),
                set: "ATQ".into(),
                ..Default::default()
            },
        ]
    }

    fn encode(cards: &[CardRecord]) -> String {
        let mut buf = Vec::new();
        write_cards(&mut buf, cards).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_rows_without_selection() {
        let text = encode(&sample());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Name;Cost;Set;Rarity;MV;Color;Released"));
        assert_eq!(
            lines.next(),
            Some("Fire // Ice;{1}{R} // {1}{U};APC;U;2;R;2001-06-11")
        );
        assert_eq!(lines.next(), Some("Ornithopter;{0};ATQ;;0;;"));
    }

    #[test]
    fn round_trip_resets_selection() {
        let cards = sample();
        let loaded = read_cards(encode(&cards).as_bytes()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(!loaded[0].selected);
        let mut expected = cards.clone();
        expected[0].selected = false;
        assert_eq!(loaded, expected);
    }

    #[test]
    fn empty_collection_keeps_header() {
        let text = encode(&[]);
        assert_eq!(text.trim_end(), "Name;Cost;Set;Rarity;MV;Color;Released");
        assert!(read_cards(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn loads_legacy_four_column_files() {
        let text = "Name;Cost;Set;Rarity\nBirds of Paradise;{G};LEA;R\n";
        let cards = read_cards(text.as_bytes()).unwrap();
        assert_eq!(cards[0].name, "Birds of Paradise");
        assert_eq!(cards[0].rarity, Some(Rarity::Rare));
        assert_eq!(cards[0].mana_value, 0);
        assert_eq!(cards[0].color_identity, "");
    }

    #[test]
    fn ignores_column_order_and_extra_columns() {
        let text = "Sel;Rarity;Name;Set;Cost\ntrue;C;Llanowar Elves;M19;{G}\n";
        let cards = read_cards(text.as_bytes()).unwrap();
        assert_eq!(cards[0].name, "Llanowar Elves");
        assert_eq!(cards[0].cost, "{G}");
        assert!(!cards[0].selected);
    }

    #[test]
    fn unknown_rarity_keeps_the_rest_of_the_file() {
        let text = "Name;Cost;Set;Rarity\nLightning Bolt;{R};SLD;special\nShock;{R};M19;C\nOpt;{U};XLN;rare\n";
        let cards = read_cards(text.as_bytes()).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "Lightning Bolt");
        assert_eq!(cards[0].rarity, None);
        assert_eq!(cards[1].rarity, Some(Rarity::Common));
        assert_eq!(cards[2].rarity, Some(Rarity::Rare));
    }

    #[test]
    fn rejects_missing_required_columns() {
        let text = "Name;Cost\nShock;{R}\n";
        let err = read_cards(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ScrollError::Parse(msg) if msg.contains("Set, Rarity")));
    }

    #[test]
    fn rejects_non_numeric_mana_value() {
        let text = "Name;Cost;Set;Rarity;MV\nShock;{R};M19;C;one\n";
        assert!(matches!(
            read_cards(text.as_bytes()),
            Err(ScrollError::Parse(_))
        ));
    }

    #[test]
    fn names_with_delimiters_survive() {
        let cards = vec![CardRecord::new("Semi;colon")];
        let loaded = read_cards(encode(&cards).as_bytes()).unwrap();
        assert_eq!(loaded[0].name, "Semi;colon");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ScrollError::FileNotFound(_)));
    }
}

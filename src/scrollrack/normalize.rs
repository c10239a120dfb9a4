//! Conversion of raw search results into the flat [`CardRecord`] schema.
//!
//! Search entries are heterogeneous: split and double-faced cards carry their
//! costs and colors per face under `card_faces`, everything else carries them
//! at the top level. Normalization flattens both shapes into one row.
//!
//! Bad values never abort a batch. Unknown rarities, stray color letters and
//! unparseable dates normalize to an empty value and log a warning.

use crate::model::{canonical_colors, CardRecord, Rarity, FACE_SEPARATOR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One face of a multi-faced search entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub cmc: Option<f64>,
}

/// A search entry as returned by the card database.
///
/// Only the fields the collection uses are modeled; everything else in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub card_faces: Option<Vec<RawFace>>,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub released_at: Option<String>,
}

impl From<&CardRecord> for RawCard {
    fn from(card: &CardRecord) -> Self {
        Self {
            name: card.name.clone(),
            mana_cost: Some(card.cost.clone()),
            card_faces: None,
            set: card.set.clone(),
            rarity: card.rarity.map(|r| r.code().to_string()).unwrap_or_default(),
            cmc: Some(f64::from(card.mana_value)),
            colors: Some(card.color_identity.chars().map(String::from).collect()),
            released_at: Some(card.released.clone()),
        }
    }
}

pub fn normalize(raw: &RawCard) -> CardRecord {
    let faces = raw.card_faces.as_deref().filter(|faces| faces.len() == 2);

    let (name, cost, colors, cmc) = match faces {
        Some([front, back]) => {
            let name = if raw.name.is_empty() {
                format!("{}{}{}", front.name, FACE_SEPARATOR, back.name)
            } else {
                raw.name.clone()
            };
            let cost = format!(
                "{}{}{}",
                front.mana_cost.as_deref().unwrap_or_default(),
                FACE_SEPARATOR,
                back.mana_cost.as_deref().unwrap_or_default()
            );
            let colors = front.colors.as_ref().or(raw.colors.as_ref());
            (name, cost, colors, front.cmc.or(raw.cmc))
        }
        _ => {
            let front = raw.card_faces.as_ref().and_then(|faces| faces.first());
            let cost = raw
                .mana_cost
                .clone()
                .or_else(|| front.and_then(|f| f.mana_cost.clone()))
                .unwrap_or_default();
            let colors = raw.colors.as_ref().or(front.and_then(|f| f.colors.as_ref()));
            (raw.name.clone(), cost, colors, raw.cmc)
        }
    };

    CardRecord {
        selected: false,
        name,
        cost,
        set: raw.set.to_uppercase(),
        rarity: normalize_rarity(&raw.name, &raw.rarity),
        mana_value: mana_value(cmc),
        color_identity: normalize_colors(&raw.name, colors.map(Vec::as_slice).unwrap_or_default()),
        released: normalize_date(&raw.name, raw.released_at.as_deref().unwrap_or_default()),
    }
}

/// Normalizes a batch without touching the input.
pub fn normalize_all(raw: &[RawCard]) -> Vec<CardRecord> {
    raw.iter().map(normalize).collect()
}

fn normalize_rarity(card: &str, raw: &str) -> Option<Rarity> {
    if raw.is_empty() {
        return None;
    }
    match Rarity::from_search_name(raw) {
        Ok(rarity) => Some(rarity),
        Err(e) => {
            tracing::warn!(card, "{e}; leaving rarity empty");
            None
        }
    }
}

// Truncating cast; mana values are never negative, so this floors.
fn mana_value(cmc: Option<f64>) -> u32 {
    match cmc {
        Some(v) if v.is_finite() && v > 0.0 => v as u32,
        _ => 0,
    }
}

fn normalize_colors(card: &str, raw: &[String]) -> String {
    let (colors, rejected) = canonical_colors(raw);
    if !rejected.is_empty() {
        tracing::warn!(card, ?rejected, "Ignoring unknown color codes");
    }
    colors
}

fn normalize_date(card: &str, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            tracing::warn!(card, released_at = raw, "Unparseable release date: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_ice() -> RawCard {
        serde_json::from_value(serde_json::json!({
            "name": "Fire // Ice",
            "card_faces": [
                {"name": "Fire", "mana_cost": "{1}{R}", "colors": ["R"]},
                {"name": "Ice", "mana_cost": "{1}{U}", "colors": ["U"]}
            ],
            "cmc": 2,
            "set": "apc",
            "rarity": "uncommon",
            "released_at": "2001-06-11"
        }))
        .unwrap()
    }

    #[test]
    fn flattens_double_faced_cards() {
        let card = normalize(&fire_ice());
        assert_eq!(card.name, "Fire // Ice");
        assert_eq!(card.cost, "{1}{R} // {1}{U}");
        assert_eq!(card.color_identity, "R");
        assert_eq!(card.mana_value, 2);
        assert_eq!(card.set, "APC");
        assert_eq!(card.rarity, Some(Rarity::Uncommon));
        assert_eq!(card.released, "2001-06-11");
        assert!(!card.selected);
    }

    #[test]
    fn single_faced_cards_use_top_level_fields() {
        let raw: RawCard = serde_json::from_value(serde_json::json!({
            "name": "Lightning Helix",
            "mana_cost": "{R}{W}",
            "cmc": 2.0,
            "colors": ["R", "W"],
            "set": "rav",
            "rarity": "common",
            "released_at": "2005-10-07",
            "oracle_text": "ignored"
        }))
        .unwrap();
        let card = normalize(&raw);
        assert_eq!(card.cost, "{R}{W}");
        assert_eq!(card.color_identity, "WR");
        assert_eq!(card.rarity, Some(Rarity::Common));
        assert_eq!(card.set, "RAV");
    }

    #[test]
    fn normalizing_a_flat_record_is_identity() {
        let original = normalize(&fire_ice());
        let again = normalize(&RawCard::from(&original));
        assert_eq!(again, original);
    }

    #[test]
    fn unknown_rarity_becomes_empty() {
        let raw = RawCard {
            name: "Mox Lotus".into(),
            rarity: "special".into(),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).rarity, None);
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let card = normalize(&RawCard::default());
        assert_eq!(card.cost, "");
        assert_eq!(card.color_identity, "");
        assert_eq!(card.released, "");
        assert_eq!(card.mana_value, 0);
    }

    #[test]
    fn fractional_mana_values_are_floored() {
        let raw = RawCard {
            cmc: Some(0.5),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).mana_value, 0);
        let raw = RawCard {
            cmc: Some(3.9),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).mana_value, 3);
    }

    #[test]
    fn bad_dates_are_dropped() {
        let raw = RawCard {
            released_at: Some("someday".into()),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).released, "");
    }

    #[test]
    fn batch_preserves_order() {
        let batch = vec![
            RawCard {
                name: "A".into(),
                ..Default::default()
            },
            fire_ice(),
        ];
        let cards = normalize_all(&batch);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "A");
        assert_eq!(cards[1].name, "Fire // Ice");
        assert_eq!(batch[1], fire_ice());
    }
}

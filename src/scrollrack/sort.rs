//! Sort keys per column.
//!
//! Several columns do not sort by their own text: `Set` sorts by release date,
//! `Color` follows the color pie rather than the alphabet, and `Cost` combines
//! mana value with the color ordinal so equal-cost cards cluster by color.

use crate::model::{canonical_colors, CardRecord, Column, Rarity};
use std::cmp::Ordering;

/// Color identities in color-pie order: colorless, mono, allied and enemy
/// guilds, shards, wedges, four-color (named by missing color), five-color.
const COLOR_PIE: [&str; 32] = [
    "", //
    "W", "U", "B", "R", "G", //
    "WU", "UB", "BR", "RG", "WG", //
    "WB", "UR", "BG", "WR", "UG", //
    "WUB", "UBR", "BRG", "WRG", "WUG", //
    "WBG", "WUR", "UBG", "WBR", "URG", //
    "UBRG", "WBRG", "WURG", "WUBG", "WUBR", //
    "WUBRG",
];

#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            // Keys for one column are always the same variant
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        }
    }
}

/// Position of a color identity on the color pie, as a fraction in `[0, 1)`.
///
/// The input is canonicalized first, so `"GW"` and `"WG"` land in the same
/// bucket. Identities containing no valid colors count as colorless.
pub fn color_key(identity: &str) -> f64 {
    let (canonical, _) = canonical_colors(identity.chars().map(String::from));
    let ordinal = COLOR_PIE
        .iter()
        .position(|c| *c == canonical)
        .unwrap_or_default();
    ordinal as f64 / COLOR_PIE.len() as f64
}

/// Rarity tier; an unset rarity sorts before common.
pub fn rarity_key(rarity: Option<Rarity>) -> f64 {
    match rarity {
        None => -1.0,
        Some(Rarity::Common) => 0.0,
        Some(Rarity::Uncommon) => 1.0,
        Some(Rarity::Rare) => 2.0,
        Some(Rarity::Mythic) => 3.0,
    }
}

pub fn sort_key(card: &CardRecord, column: Column) -> SortKey {
    match column {
        Column::Sel => SortKey::Number(if card.selected { 1.0 } else { 0.0 }),
        Column::Name => SortKey::Text(card.name.clone()),
        Column::Cost => {
            SortKey::Number(f64::from(card.mana_value) + color_key(&card.color_identity))
        }
        Column::Set | Column::Released => SortKey::Text(card.released.clone()),
        Column::Rarity => SortKey::Number(rarity_key(card.rarity)),
        Column::Mv => SortKey::Number(f64::from(card.mana_value)),
        Column::Color => SortKey::Number(color_key(&card.color_identity)),
    }
}

/// Stable sort of `cards` by `column`.
///
/// Descending order flips the comparison only, so rows with equal keys keep
/// their relative order in both directions.
pub fn sort_cards(cards: &mut [CardRecord], column: Column, ascending: bool) {
    let mut keyed: Vec<(SortKey, CardRecord)> = cards
        .iter_mut()
        .map(|card| (sort_key(card, column), std::mem::take(card)))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        if ascending {
            a.compare(b)
        } else {
            b.compare(a)
        }
    });
    for (slot, (_, card)) in cards.iter_mut().zip(keyed) {
        *slot = card;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, color: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            color_identity: color.into(),
            ..Default::default()
        }
    }

    fn names(cards: &[CardRecord]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn color_pie_has_every_identity_once() {
        for (i, a) in COLOR_PIE.iter().enumerate() {
            let (canonical, _) = canonical_colors(a.chars().map(String::from));
            assert_eq!(&canonical, a, "entry {} is not canonical", a);
            assert!(!COLOR_PIE[i + 1..].contains(a), "duplicate entry {}", a);
        }
    }

    #[test]
    fn sorts_by_color_pie_not_alphabet() {
        let mut cards = vec![
            card("WUBRG", "WUBRG"),
            card("colorless", ""),
            card("W", "W"),
            card("WU", "WU"),
        ];
        sort_cards(&mut cards, Column::Color, true);
        assert_eq!(names(&cards), vec!["colorless", "W", "WU", "WUBRG"]);
    }

    #[test]
    fn color_key_canonicalizes_input() {
        assert_eq!(color_key("GW"), color_key("WG"));
        assert!(color_key("G") < color_key("WU"));
    }

    #[test]
    fn cost_clusters_equal_mana_values_by_color() {
        let mut cards = vec![
            CardRecord {
                name: "3G".into(),
                mana_value: 3,
                color_identity: "G".into(),
                ..Default::default()
            },
            CardRecord {
                name: "2WU".into(),
                mana_value: 2,
                color_identity: "WU".into(),
                ..Default::default()
            },
            CardRecord {
                name: "2W".into(),
                mana_value: 2,
                color_identity: "W".into(),
                ..Default::default()
            },
        ];
        sort_cards(&mut cards, Column::Cost, true);
        assert_eq!(names(&cards), vec!["2W", "2WU", "3G"]);
    }

    #[test]
    fn set_sorts_by_release_date() {
        let mut cards = vec![
            CardRecord {
                name: "newer".into(),
                set: "AAA".into(),
                released: "2020-01-01".into(),
                ..Default::default()
            },
            CardRecord {
                name: "older".into(),
                set: "ZZZ".into(),
                released: "1999-01-01".into(),
                ..Default::default()
            },
        ];
        sort_cards(&mut cards, Column::Set, true);
        assert_eq!(names(&cards), vec!["older", "newer"]);
    }

    #[test]
    fn unset_rarity_sorts_before_common() {
        assert!(rarity_key(None) < rarity_key(Some(Rarity::Common)));
        assert!(rarity_key(Some(Rarity::Rare)) < rarity_key(Some(Rarity::Mythic)));
    }

    #[test]
    fn descending_sort_stays_stable() {
        let mut cards = vec![
            CardRecord {
                name: "first".into(),
                mana_value: 1,
                ..Default::default()
            },
            CardRecord {
                name: "big".into(),
                mana_value: 5,
                ..Default::default()
            },
            CardRecord {
                name: "second".into(),
                mana_value: 1,
                ..Default::default()
            },
        ];
        sort_cards(&mut cards, Column::Mv, false);
        assert_eq!(names(&cards), vec!["big", "first", "second"]);
    }
}

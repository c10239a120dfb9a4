use colored::*;
use scrollrack::api::{CmdMessage, MessageLevel};
use scrollrack::collection::Collection;
use scrollrack::config::{ScrollRackConfig, KEYS};
use scrollrack::model::{Column, Rarity};
use scrollrack::store::CollectionSummary;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 36;
const COST_WIDTH: usize = 24;

// Sel is rendered as the row marker instead of a column
const SHOWN: [Column; 7] = Column::PERSISTED;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_listing(listed: &[CollectionSummary]) {
    if listed.is_empty() {
        println!("No collections found.");
        return;
    }
    let width = listed.iter().map(|s| s.name.width()).max().unwrap_or(0);
    for summary in listed {
        let padding = width.saturating_sub(summary.name.width());
        println!(
            "  {}{}  {}",
            summary.name.bold(),
            " ".repeat(padding),
            format!("{} cards", summary.rows).dimmed()
        );
    }
}

pub fn print_collection(collection: &Collection) {
    println!("{}", collection.name().bold());
    if collection.is_empty() {
        println!("{}", "(empty)".dimmed());
        return;
    }

    let rows: Vec<Vec<String>> = collection
        .rows()
        .iter()
        .map(|card| SHOWN.iter().map(|c| clip(*c, card.cell(*c))).collect())
        .collect();
    let widths: Vec<usize> = SHOWN
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(column.header().width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let index_width = collection.row_count().to_string().len() + 2;

    let header: Vec<String> = SHOWN
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c.header(), *w))
        .collect();
    println!("{}{}", " ".repeat(index_width), header.join("  ").underline());

    for (i, (card, cells)) in collection.rows().iter().zip(&rows).enumerate() {
        let marker = if card.selected { "*" } else { " " };
        let idx = format!("{:>width$}.", i + 1, width = index_width - 2);
        let line: Vec<String> = SHOWN
            .iter()
            .zip(cells.iter().zip(&widths))
            .map(|(column, (cell, w))| {
                let padded = pad(cell, *w);
                match column {
                    Column::Rarity => color_rarity(card.rarity, padded),
                    _ => padded,
                }
            })
            .collect();
        println!("{}{} {}", marker, idx.dimmed(), line.join("  "));
    }
}

pub fn print_config(config: &ScrollRackConfig) {
    for key in KEYS {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
    }
}

fn color_rarity(rarity: Option<Rarity>, text: String) -> String {
    match rarity {
        Some(Rarity::Mythic) => text.red().to_string(),
        Some(Rarity::Rare) => text.yellow().to_string(),
        Some(Rarity::Uncommon) => text.cyan().to_string(),
        _ => text,
    }
}

fn clip(column: Column, text: String) -> String {
    match column {
        Column::Name => truncate_to_width(&text, NAME_WIDTH),
        Column::Cost => truncate_to_width(&text, COST_WIDTH),
        _ => text,
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

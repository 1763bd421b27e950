//! Per-row cleaning: drop junk rows, repair numbers, split name and type

use crate::catalog::{SetConfig, TITLE_OVERRIDES};
use crate::model::{leading_number, CardType, CleanedRecord, RawRecord};
use crate::text::{normalize_punctuation, strip_accents};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARENTHETICAL: Regex = Regex::new(r"\(([^()]*)\)").unwrap();
}

/// Clean one raw row; `None` means the row is not a card and is dropped
pub fn clean_row(raw: &RawRecord, set: &SetConfig) -> Option<CleanedRecord> {
    // Headers, notes and footers picked up by the scraper have no card number
    if !raw.number.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let number = truncate_number(&repair_number(&raw.number, set));
    let card_type = extract_type(&raw.product_name);
    let name = apply_title_override(display_name(&raw.product_name));

    Some(CleanedRecord::new(&name, card_type, raw.rarity.trim(), &number))
}

/// Rewrite "020 // T01" to "020/<total>" for sets whose source puts a
/// variant index where the set total belongs. Numbers of 100 and up keep
/// their suffix until truncation.
pub fn repair_number(number: &str, set: &SetConfig) -> String {
    let Some(total) = set.card_total else {
        return number.to_string();
    };
    if !number.contains("//") {
        return number.to_string();
    }

    match leading_number(number) {
        Some(n) if n < 100 => format!("{:03}/{}", n, total),
        _ => number.to_string(),
    }
}

/// Keep only the text before any "//"
pub fn truncate_number(number: &str) -> String {
    number
        .split_once("//")
        .map_or(number, |(head, _)| head)
        .trim()
        .to_string()
}

/// Type from the first parenthetical, e.g. "Boba Fett (Hyperspace)"
pub fn extract_type(product_name: &str) -> CardType {
    PARENTHETICAL
        .captures(product_name)
        .and_then(|caps| caps.get(1))
        .map_or(CardType::Normal, |m| CardType::from_marker(m.as_str()))
}

/// Product name without parentheticals, punctuation and accents normalized
pub fn display_name(product_name: &str) -> String {
    let stripped = PARENTHETICAL.replace_all(product_name, "");
    strip_accents(&normalize_punctuation(stripped.trim()))
}

fn apply_title_override(name: String) -> String {
    let lowered = name.to_lowercase();
    TITLE_OVERRIDES
        .iter()
        .find(|(from, _)| *from == lowered)
        .map_or(name, |(_, canonical)| canonical.to_string())
}

/// Split rows whose Printing says "Normal and Foil" into two rows.
///
/// Only sets with a `combined_printing` marker are touched: unaffected sets
/// could carry the same text by coincidence, and the plain " (Foil)" append
/// would corrupt them. Must run before the Printing column is discarded.
pub fn expand_combined_printings(rows: Vec<RawRecord>, set: &SetConfig) -> Vec<RawRecord> {
    let Some(marker) = set.combined_printing else {
        return rows;
    };

    let mut expanded = Vec::with_capacity(rows.len());
    let mut duplicated = 0;

    for row in rows {
        let combined = row
            .printing
            .as_deref()
            .is_some_and(|p| p.contains(marker));

        if combined {
            let mut foil = row.clone();
            foil.product_name = foil_name(&row.product_name);
            expanded.push(row);
            expanded.push(foil);
            duplicated += 1;
        } else {
            expanded.push(row);
        }
    }

    if duplicated > 0 {
        log::info!("{}: split {} combined Normal/Foil rows", set.key, duplicated);
    }
    expanded
}

fn foil_name(product_name: &str) -> String {
    if product_name.contains("(Hyperspace)") {
        product_name.replacen("(Hyperspace)", "(Hyperspace Foil)", 1)
    } else {
        format!("{} (Foil)", product_name)
    }
}

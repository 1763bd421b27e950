//! Text clean-up for product names scraped from price guides

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Smart punctuation and its ASCII replacement
const PUNCTUATION: &[(char, &str)] = &[
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201B}', "'"),
    ('\u{201A}', "'"),
    ('\u{2032}', "'"),
    ('\u{02BC}', "'"),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{2013}', "-"),
    ('\u{2014}', "-"),
    ('\u{2015}', "-"),
    ('\u{2026}', "..."),
];

/// Currency and trademark symbols that are dropped outright
const DROPPED_SYMBOLS: &[char] = &['\u{00A3}', '\u{00A9}', '\u{00AE}', '\u{20AC}', '\u{2122}'];

/// Undo UTF-8 text that was decoded as Latin-1 ("SabÃ©" -> "Sabé").
///
/// The chars are taken as Latin-1 bytes and decoded as UTF-8. If any char is
/// outside Latin-1, or the bytes are not valid UTF-8, the input is returned
/// unchanged.
pub fn repair_encoding(text: &str) -> String {
    let bytes: Option<Vec<u8>> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect();

    match bytes.map(String::from_utf8) {
        Some(Ok(repaired)) => repaired,
        _ => text.to_string(),
    }
}

/// Repair encoding, map smart quotes/dashes/ellipsis to ASCII and drop
/// currency and trademark symbols.
pub fn normalize_punctuation(text: &str) -> String {
    let repaired = repair_encoding(text);
    let mut out = String::with_capacity(repaired.len());

    for c in repaired.chars() {
        if DROPPED_SYMBOLS.contains(&c) {
            continue;
        }
        match PUNCTUATION.iter().find(|(bad, _)| *bad == c) {
            Some((_, good)) => out.push_str(good),
            None => out.push(c),
        }
    }

    out
}

/// NFKD-decompose and drop combining marks, so "Padmé" == "Padme"
pub fn strip_accents(text: &str) -> String {
    text.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Key used to cluster near-identical names into one sort group.
///
/// `aliases` are literal `(find, replace)` pairs applied in order after
/// lowercasing and whitespace collapsing.
pub fn normalize_for_grouping(text: &str, aliases: &[(&str, &str)]) -> String {
    let cleaned = strip_accents(&normalize_punctuation(text));
    let lowered = cleaned.trim().to_lowercase();
    let mut key = WHITESPACE.replace_all(&lowered, " ").into_owned();

    for (find, replace) in aliases {
        if key.contains(find) {
            key = key.replace(find, replace);
        }
    }

    key
}

use super::card_type::CardType;
use serde::Serialize;

/// Sort number given to groups where no row has a parseable number;
/// above any printed number
pub const UNNUMBERED: u64 = u64::MAX;

/// Separator between a location and its alternate-art sub-card
pub const NAME_SEPARATOR: &str = " // ";

/// One row as scraped from the price guide table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub product_name: String,
    pub rarity: String,
    pub number: String,
    /// Only present in sets whose table has a Printing column
    pub printing: Option<String>,
}

impl RawRecord {
    pub fn new(product_name: &str, rarity: &str, number: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            rarity: rarity.to_string(),
            number: number.to_string(),
            printing: None,
        }
    }

    pub fn with_printing(mut self, printing: &str) -> Self {
        self.printing = Some(printing.to_string());
        self
    }
}

/// A cleaned card row plus the keys used to order it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    pub name: String,
    pub card_type: CardType,
    pub rarity: String,
    pub number: String,

    // Derived sort keys, never written out
    pub group_name: String,
    pub base_num: Option<u64>,
    pub sort_number: u64,
}

impl CleanedRecord {
    pub fn new(name: &str, card_type: CardType, rarity: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            card_type,
            rarity: rarity.to_string(),
            base_num: leading_number(number),
            number: number.to_string(),
            group_name: String::new(),
            sort_number: UNNUMBERED,
        }
    }

    /// Part of the name before " // "
    pub fn name_prefix(&self) -> &str {
        self.name
            .split_once(NAME_SEPARATOR)
            .map_or(self.name.as_str(), |(prefix, _)| prefix)
    }

    pub fn has_suffix(&self) -> bool {
        self.name.contains(NAME_SEPARATOR)
    }

    /// Full text after "//", so multi-word suffixes compare as one unit
    pub fn variant_suffix(&self) -> &str {
        self.name
            .split_once("//")
            .map_or("", |(_, suffix)| suffix.trim_start())
    }

    pub fn to_output(&self) -> OutputRow<'_> {
        OutputRow {
            name: &self.name,
            card_type: self.card_type.as_str(),
            rarity: &self.rarity,
            number: &self.number,
            quantity: "",
        }
    }
}

/// Row layout of the cleaned CSV
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Type")]
    pub card_type: &'a str,
    #[serde(rename = "Rarity")]
    pub rarity: &'a str,
    #[serde(rename = "Number")]
    pub number: &'a str,
    /// Filled in by hand later
    #[serde(rename = "Quantity")]
    pub quantity: &'a str,
}

/// Leading run of ASCII digits as a number ("020/252" -> 20)
pub fn leading_number(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("020/252"), Some(20));
        assert_eq!(leading_number("150"), Some(150));
        assert_eq!(leading_number("N/A"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn test_name_parts() {
        let base = CleanedRecord::new("Tatooine", CardType::Normal, "Common", "021/252");
        assert_eq!(base.name_prefix(), "Tatooine");
        assert!(!base.has_suffix());
        assert_eq!(base.variant_suffix(), "");

        let alt = CleanedRecord::new("Tatooine // Moisture Farm", CardType::Normal, "Common", "300");
        assert_eq!(alt.name_prefix(), "Tatooine");
        assert!(alt.has_suffix());
        assert_eq!(alt.variant_suffix(), "Moisture Farm");
        assert_eq!(alt.base_num, Some(300));
    }

    #[test]
    fn test_output_row_has_empty_quantity() {
        let rec = CleanedRecord::new("Boba Fett", CardType::Hyperspace, "Rare", "301/252");
        let row = rec.to_output();
        assert_eq!(row.card_type, "Hyperspace");
        assert_eq!(row.quantity, "");
    }
}

//! Sort-number derivation and final ordering of cleaned rows.
//!
//! A card and all its prints share one sort number. It is derived in two
//! passes: first the minimum printed number within each normalized name
//! group, then widened to every row sharing the literal " // " prefix so a
//! location and its alternate-art sub-cards land together.

use crate::model::{CleanedRecord, UNNUMBERED};
use crate::text::normalize_for_grouping;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Fill in `group_name` for every row
pub fn assign_group_names(rows: &mut [CleanedRecord], aliases: &[(&str, &str)]) {
    for row in rows.iter_mut() {
        row.group_name = normalize_for_grouping(&row.name, aliases);
    }
}

/// Pass one: each group gets the lowest printed number among its rows
pub fn assign_group_sort_numbers(rows: &mut [CleanedRecord]) {
    let mut group_min: HashMap<String, Option<u64>> = HashMap::new();
    for row in rows.iter() {
        let entry = group_min.entry(row.group_name.clone()).or_insert(None);
        *entry = match (*entry, row.base_num) {
            (Some(current), Some(num)) => Some(current.min(num)),
            (current, num) => current.or(num),
        };
    }

    for row in rows.iter_mut() {
        row.sort_number = group_min[&row.group_name].unwrap_or(UNNUMBERED);
    }
}

/// Pass two: rows sharing a name prefix take the lowest sort number among them
pub fn widen_by_prefix(rows: &mut [CleanedRecord]) {
    let mut prefix_min: HashMap<String, u64> = HashMap::new();
    for row in rows.iter() {
        let entry = prefix_min
            .entry(row.name_prefix().to_string())
            .or_insert(row.sort_number);
        *entry = (*entry).min(row.sort_number);
    }

    for row in rows.iter_mut() {
        row.sort_number = prefix_min[row.name_prefix()];
    }
}

/// Final ordering: sort number, prefix, base before " // " variants,
/// variant suffix, printing in gameplay order, then name.
pub fn compare_rows(a: &CleanedRecord, b: &CleanedRecord) -> Ordering {
    a.sort_number
        .cmp(&b.sort_number)
        .then_with(|| a.name_prefix().cmp(b.name_prefix()))
        .then_with(|| a.has_suffix().cmp(&b.has_suffix()))
        .then_with(|| a.variant_suffix().cmp(b.variant_suffix()))
        .then_with(|| a.card_type.rank().cmp(&b.card_type.rank()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Derive all sort keys and order the rows of one set
pub fn sort_records(rows: &mut Vec<CleanedRecord>, aliases: &[(&str, &str)]) {
    assign_group_names(rows, aliases);
    assign_group_sort_numbers(rows);
    widen_by_prefix(rows);
    rows.sort_by(compare_rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardType;

    fn rec(name: &str, card_type: CardType, number: &str) -> CleanedRecord {
        CleanedRecord::new(name, card_type, "Common", number)
    }

    fn names(rows: &[CleanedRecord]) -> Vec<String> {
        rows.iter()
            .map(|r| format!("{} ({})", r.name, r.card_type))
            .collect()
    }

    #[test]
    fn test_group_pass_takes_minimum() {
        let mut rows = vec![
            rec("Boba Fett", CardType::Hyperspace, "301/252"),
            rec("Boba Fett", CardType::Normal, "030/252"),
            rec("Padmé Amidala", CardType::Normal, "040/252"),
            rec("Padme  Amidala", CardType::Foil, "041/252"),
        ];
        assign_group_names(&mut rows, &[]);
        assign_group_sort_numbers(&mut rows);
        assert_eq!(rows[0].sort_number, 30);
        assert_eq!(rows[1].sort_number, 30);
        assert_eq!(rows[2].sort_number, 40);
        assert_eq!(rows[3].sort_number, 40);
    }

    #[test]
    fn test_group_without_numbers_gets_sentinel() {
        let mut rows = vec![rec("Mystery", CardType::Normal, "")];
        assign_group_names(&mut rows, &[]);
        assign_group_sort_numbers(&mut rows);
        assert_eq!(rows[0].sort_number, UNNUMBERED);
    }

    #[test]
    fn test_large_numbers_sort_before_unnumbered() {
        let mut rows = vec![
            rec("Mystery", CardType::Normal, ""),
            rec("Big", CardType::Normal, "1234567890"),
        ];
        sort_records(&mut rows, &[]);
        assert_eq!(rows[0].name, "Big");
        assert_eq!(rows[0].sort_number, 1_234_567_890);
        assert_eq!(rows[1].sort_number, UNNUMBERED);
    }

    #[test]
    fn test_prefix_pass_joins_location_variants() {
        let mut rows = vec![
            rec("Tatooine // Moisture Farm", CardType::Normal, "021/252"),
            rec("Tatooine", CardType::Normal, "250/252"),
            rec("Tatooine // Mos Eisley", CardType::Normal, "300/252"),
        ];
        assign_group_names(&mut rows, &[]);
        assign_group_sort_numbers(&mut rows);
        // Different group names, so pass one keeps them apart
        assert_eq!(rows[1].sort_number, 250);

        widen_by_prefix(&mut rows);
        assert!(rows.iter().all(|r| r.sort_number == 21));
    }

    #[test]
    fn test_base_row_precedes_suffixed_row() {
        let mut rows = vec![
            rec("Tatooine // Moisture Farm", CardType::Normal, "021/252"),
            rec("Tatooine", CardType::Normal, "021/252"),
        ];
        sort_records(&mut rows, &[]);
        assert_eq!(rows[0].sort_number, rows[1].sort_number);
        assert_eq!(rows[0].name, "Tatooine");
        assert_eq!(rows[1].name, "Tatooine // Moisture Farm");
    }

    #[test]
    fn test_type_order_is_gameplay_order() {
        let mut rows = vec![
            rec("Luke Skywalker", CardType::Serialized, "005"),
            rec("Luke Skywalker", CardType::Foil, "005"),
            rec("Luke Skywalker", CardType::Showcase, "005"),
            rec("Luke Skywalker", CardType::Hyperspace, "005"),
            rec("Luke Skywalker", CardType::PrestigeFoil, "005"),
            rec("Luke Skywalker", CardType::Normal, "005"),
            rec("Luke Skywalker", CardType::HyperspaceFoil, "005"),
            rec("Luke Skywalker", CardType::Prestige, "005"),
        ];
        sort_records(&mut rows, &[]);
        let types: Vec<CardType> = rows.iter().map(|r| r.card_type.clone()).collect();
        assert_eq!(types, CardType::ALL.to_vec());
    }

    #[test]
    fn test_multi_word_suffix_sorts_as_unit() {
        let mut rows = vec![
            rec("Hangar // TIE Fighter", CardType::Normal, "100"),
            rec("Hangar // TIE Bomber", CardType::Foil, "100"),
            rec("Hangar // TIE Bomber", CardType::Normal, "100"),
            rec("Hangar", CardType::Normal, "100"),
        ];
        sort_records(&mut rows, &[]);
        assert_eq!(
            names(&rows),
            vec![
                "Hangar (Normal)",
                "Hangar // TIE Bomber (Normal)",
                "Hangar // TIE Bomber (Foil)",
                "Hangar // TIE Fighter (Normal)",
            ]
        );
    }

    #[test]
    fn test_full_ordering() {
        let mut rows = vec![
            rec("Darth Vader", CardType::Hyperspace, "270/252"),
            rec("Boba Fett", CardType::Foil, "030/252"),
            rec("Darth Vader", CardType::Normal, "010/252"),
            rec("Boba Fett", CardType::Normal, "030/252"),
            rec("Pilot - Wisecracking Wheelman", CardType::Normal, "050/252"),
            rec("Pilot - Wisecrack Wheelman", CardType::Hyperspace, "320/252"),
        ];
        let aliases = [("wisecracking wheelman", "wisecrack wheelman")];
        sort_records(&mut rows, &aliases);
        assert_eq!(
            names(&rows),
            vec![
                "Darth Vader (Normal)",
                "Darth Vader (Hyperspace)",
                "Boba Fett (Normal)",
                "Boba Fett (Foil)",
                "Pilot - Wisecrack Wheelman (Hyperspace)",
                "Pilot - Wisecracking Wheelman (Normal)",
            ]
        );
        assert_eq!(rows[4].sort_number, 50);
    }

    #[test]
    fn test_shared_prefix_shares_sort_number() {
        let mut rows = vec![
            rec("Coruscant // Senate", CardType::Normal, "090"),
            rec("Coruscant", CardType::Hyperspace, "400"),
            rec("Coruscant // Jedi Temple", CardType::Foil, "012"),
            rec("Naboo", CardType::Normal, "050"),
        ];
        sort_records(&mut rows, &[]);
        let mut by_prefix: HashMap<String, u64> = HashMap::new();
        for row in &rows {
            let shared = by_prefix
                .entry(row.name_prefix().to_string())
                .or_insert(row.sort_number);
            assert_eq!(*shared, row.sort_number);
        }
        assert_eq!(by_prefix["Coruscant"], 12);
    }
}

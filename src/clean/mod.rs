pub mod reader;
pub mod rows;
pub mod sort;

pub use reader::{read_raw, read_raw_file};
pub use rows::{clean_row, expand_combined_printings};
pub use sort::sort_records;

use crate::catalog::{SetConfig, GROUP_ALIASES};
use crate::error::Result;
use crate::model::{CleanedRecord, RawRecord};
use std::io::Write;
use std::path::Path;

/// Counts reported after cleaning one set
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    /// Rows after splitting combined printings
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub rows_written: usize,
}

/// Clean and order the raw rows of one set
pub fn clean_records(raw: Vec<RawRecord>, set: &SetConfig) -> (Vec<CleanedRecord>, usize) {
    let raw = expand_combined_printings(raw, set);
    let total = raw.len();

    let mut cleaned: Vec<CleanedRecord> = raw.iter().filter_map(|r| clean_row(r, set)).collect();
    let dropped = total - cleaned.len();

    sort_records(&mut cleaned, GROUP_ALIASES);
    (cleaned, dropped)
}

/// Write cleaned rows as `Name,Type,Rarity,Number,Quantity`
pub fn write_cleaned<W: Write>(rows: &[CleanedRecord], output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows {
        writer.serialize(row.to_output())?;
    }
    if rows.is_empty() {
        writer.write_record(["Name", "Type", "Rarity", "Number", "Quantity"])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a raw CSV, clean it, and write the sorted result
pub fn clean_file(input: &Path, output: &Path, set: &SetConfig) -> Result<CleanSummary> {
    let raw = read_raw_file(input)?;
    let (cleaned, dropped) = clean_records(raw, set);

    let file = std::fs::File::create(output)?;
    write_cleaned(&cleaned, file)?;

    if dropped > 0 {
        log::debug!("{}: dropped {} non-card rows", set.key, dropped);
    }

    Ok(CleanSummary {
        rows_read: cleaned.len() + dropped,
        rows_dropped: dropped,
        rows_written: cleaned.len(),
    })
}

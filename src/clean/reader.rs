use crate::error::{PriceGuideError, Result};
use crate::model::RawRecord;
use crate::text::normalize_punctuation;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

pub const PRODUCT_NAME: &str = "Product Name";
pub const RARITY: &str = "Rarity";
pub const NUMBER: &str = "Number";
pub const PRINTING: &str = "Printing";

/// Column positions of the fields we keep
struct Columns {
    product_name: usize,
    rarity: usize,
    number: usize,
    printing: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, source: &str) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| PriceGuideError::MissingColumn {
                file: source.to_string(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            product_name: require(PRODUCT_NAME)?,
            rarity: require(RARITY)?,
            number: require(NUMBER)?,
            printing: find(PRINTING),
        })
    }
}

/// Read raw price guide rows from any CSV source.
///
/// Product names are punctuation-normalized on the way in. Extra columns are
/// ignored and short rows yield empty fields.
pub fn read_raw<R: Read>(input: R, source: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers, source)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        records.push(RawRecord {
            product_name: normalize_punctuation(&field(columns.product_name)),
            rarity: field(columns.rarity),
            // Untrimmed, so the leading-digit check sees the raw value
            number: row.get(columns.number).unwrap_or("").to_string(),
            printing: columns.printing.map(field),
        });
    }

    log::debug!("{}: read {} raw rows", source, records.len());
    Ok(records)
}

/// Read a raw price guide CSV from disk
pub fn read_raw_file(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    read_raw(file, &path.display().to_string())
}

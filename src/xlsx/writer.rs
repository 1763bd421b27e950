use crate::error::Result;
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// One worksheet to be filled from a cleaned CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub title: String,
    pub csv_path: PathBuf,
}

impl SheetSource {
    pub fn new(title: &str, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.to_string(),
            csv_path: csv_path.into(),
        }
    }
}

/// Read every row of a CSV, header included, exactly as written
pub fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect());
    }
    Ok(rows)
}

/// Bundle cleaned CSVs into one workbook, one sheet per source, in order
pub fn write_workbook(sheets: &[SheetSource], path: &Path) -> Result<()> {
    let mut workbook = build_workbook(sheets)?;
    workbook.save(path)?;
    Ok(())
}

/// Build the workbook in memory; nothing is written if any sheet fails
pub fn build_workbook(sheets: &[SheetSource]) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    for source in sheets {
        let rows = read_csv_rows(&source.csv_path)?;
        let worksheet = workbook.add_worksheet();
        let cells = write_csv_sheet(worksheet, &source.title, &rows)?;
        log::debug!(
            "{}: {} rows, {} cells from {}",
            source.title,
            rows.len(),
            cells,
            source.csv_path.display()
        );
    }

    Ok(workbook)
}

/// Copy CSV rows to a worksheet; the first row is the header.
/// Returns the number of non-empty cells written.
fn write_csv_sheet(sheet: &mut Worksheet, title: &str, rows: &[Vec<String>]) -> Result<usize> {
    sheet.set_name(title)?;

    let header_format = Format::new()
        .set_bold()
        .set_border_bottom(FormatBorder::Thin);

    let Some((headers, body)) = rows.split_first() else {
        return Ok(0);
    };

    let mut cells = 0;
    for (col, header) in headers.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, column_width(header))?;
        sheet.write_string_with_format(0, col, header, &header_format)?;
        cells += 1;
    }

    for (row_idx, row) in body.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            // Blank cells stay blank (Quantity is filled in by hand)
            if !value.is_empty() {
                sheet.write_string(row_num, col as u16, value)?;
                cells += 1;
            }
        }
    }

    Ok(cells)
}

fn column_width(header: &str) -> f64 {
    match header {
        "Name" => 45.0,
        "Type" => 16.0,
        "Rarity" => 12.0,
        "Number" => 10.0,
        "Quantity" => 10.0,
        _ => 14.0,
    }
}

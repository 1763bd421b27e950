//! Price guide page fetching and table extraction

use crate::catalog::SetConfig;
use crate::error::{PriceGuideError, Result};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use std::time::Duration;

/// Class of the price guide table; any other table is a fallback
const PRICE_TABLE_SELECTOR: &str = "table.tcg-table__table";

/// Single bounded wait for the page, no retry
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Header and body rows of one HTML table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Create an HTTP client with browser-like headers
fn create_browser_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| PriceGuideError::Http(format!("Failed to create HTTP client: {}", e)))
}

/// Fetch a page's HTML
pub fn fetch_page(url: &str) -> Result<String> {
    let url = url::Url::parse(url)?;
    let client = create_browser_client()?;

    let response = client
        .get(url)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .header("Upgrade-Insecure-Requests", "1")
        .send()
        .map_err(|e| PriceGuideError::Http(format!("Failed to fetch URL: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(PriceGuideError::Http(format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    response
        .text()
        .map_err(|e| PriceGuideError::Http(format!("Failed to read response: {}", e)))
}

fn selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| PriceGuideError::Selector(format!("{}: {:?}", s, e)))
}

/// Text of an element with each text node trimmed
fn cell_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// Find the price guide table and pull out its headers and rows.
///
/// A page with no table at all is an error; the caller treats it as fatal.
pub fn extract_table(html: &str) -> Result<ScrapedTable> {
    let document = Html::parse_document(html);

    let table = document
        .select(&selector(PRICE_TABLE_SELECTOR)?)
        .next()
        .or_else(|| {
            log::warn!("No price guide table, falling back to first <table>");
            selector("table").ok().and_then(|s| document.select(&s).next())
        })
        .ok_or(PriceGuideError::NoTable)?;

    let th = selector("th")?;
    let td = selector("td")?;
    let tr = selector("tr")?;

    let headers: Vec<String> = match table.select(&selector("thead")?).next() {
        Some(thead) => thead.select(&th).map(cell_text).collect(),
        None => Vec::new(),
    };

    // The parser inserts an implied <tbody>, so only trust one the page wrote
    let explicit_tbody = html.to_ascii_lowercase().contains("<tbody");
    let tbody = table.select(&selector("tbody")?).next().filter(|_| explicit_tbody);

    let body_rows: Vec<ElementRef> = match tbody {
        Some(tbody) => tbody.select(&tr).collect(),
        None => table.select(&tr).skip(1).collect(),
    };

    let rows = body_rows
        .into_iter()
        .map(|row| row.select(&td).map(cell_text).collect::<Vec<String>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(ScrapedTable { headers, rows })
}

/// Write a scraped table as CSV; rows keep whatever width they had
pub fn write_table_csv(table: &ScrapedTable, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Fetch a set's price guide and save it as its raw CSV
pub fn scrape_set(set: &SetConfig, dir: &Path) -> Result<ScrapedTable> {
    let url = set.url();
    log::info!("Fetching {}", url);
    let html = fetch_page(&url)?;
    save_table(&html, &dir.join(set.raw_file()))
}

/// Extract the table from a page saved to disk
pub fn scrape_html_file(html_path: &Path, output: &Path) -> Result<ScrapedTable> {
    let html = std::fs::read_to_string(html_path)?;
    save_table(&html, output)
}

fn save_table(html: &str, output: &Path) -> Result<ScrapedTable> {
    let table = extract_table(html)?;
    log::debug!("Headers: {:?}", table.headers);
    write_table_csv(&table, output)?;
    log::info!("Wrote {} data rows to {}", table.rows.len(), output.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<table class="other"><tr><td>ignore me</td></tr></table>
<table class="tcg-table__table">
  <thead><tr><th> Product Name </th><th>Rarity</th><th>Number</th><th>Market Price</th></tr></thead>
  <tbody>
    <tr><td><a href="/p/1"> Boba Fett </a> (Hyperspace)</td><td>Rare</td><td>301/252</td><td>$1.25</td></tr>
    <tr><td>Tatooine</td><td>Common</td><td>021/252</td><td>$0.10</td></tr>
    <tr></tr>
  </tbody>
</table>
</body></html>
"#;

    #[test]
    fn test_extract_price_table() {
        let table = extract_table(PAGE).unwrap();
        assert_eq!(table.headers, vec!["Product Name", "Rarity", "Number", "Market Price"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Boba Fett(Hyperspace)");
        assert_eq!(table.rows[1], vec!["Tatooine", "Common", "021/252", "$0.10"]);
    }

    #[test]
    fn test_fallback_to_first_table() {
        let html = "<table><tr><th>Product Name</th></tr><tr><td>Rey</td></tr></table>";
        let table = extract_table(html).unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![vec!["Rey".to_string()]]);
    }

    #[test]
    fn test_no_tbody_skips_first_row() {
        let html = "<table>\
            <tr><td>Product Name</td><td>Rarity</td><td>Number</td></tr>\
            <tr><td>Rey</td><td>Rare</td><td>010/262</td></tr>\
            </table>";
        let table = extract_table(html).unwrap();
        assert_eq!(table.rows, vec![vec!["Rey", "Rare", "010/262"]]);
    }

    #[test]
    fn test_explicit_tbody_keeps_first_row() {
        let html = "<table><tbody>\
            <tr><td>Rey</td><td>Rare</td><td>010/262</td></tr>\
            <tr><td>Finn</td><td>Common</td><td>011/262</td></tr>\
            </tbody></table>";
        let table = extract_table(html).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Rey");
    }

    #[test]
    fn test_no_table_is_error() {
        let result = extract_table("<html><body><p>Loading...</p></body></html>");
        assert!(matches!(result, Err(PriceGuideError::NoTable)));
    }

    #[test]
    fn test_scrape_html_file_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("page.html");
        let out = dir.path().join("spark_of_rebellion_raw.csv");
        std::fs::write(&html_path, PAGE).unwrap();

        scrape_html_file(&html_path, &out).unwrap();
        let csv = std::fs::read_to_string(&out).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Product Name,Rarity,Number,Market Price"));
        assert_eq!(lines.next(), Some("Boba Fett(Hyperspace),Rare,301/252,$1.25"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(fetch_page("not a url"), Err(PriceGuideError::Url(_))));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_live_page() {
        let set = crate::catalog::find_set("spark_of_rebellion").unwrap();
        let html = fetch_page(&set.url()).unwrap();
        assert!(!html.is_empty());
    }
}

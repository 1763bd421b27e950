use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use swu_price_guide::catalog::{self, SetConfig, SETS, WORKBOOK_FILE};
use swu_price_guide::clean;
use swu_price_guide::scrape;
use swu_price_guide::xlsx::{self, SheetSource};

#[derive(Parser)]
#[command(name = "swu-price-guide")]
#[command(about = "Scrape and clean Star Wars Unlimited price guides into inventory sheets", long_about = None)]
struct Cli {
    /// Directory holding the raw and cleaned CSV files
    #[arg(short, long, global = true, env = "SWU_DATA_DIR", default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch price guide tables into <set>_raw.csv
    Scrape {
        /// Only this set (key or URL slug, e.g. spark_of_rebellion)
        #[arg(long)]
        set: Option<String>,

        /// Read the page from a saved HTML file instead of fetching (requires --set)
        #[arg(long, requires = "set")]
        html: Option<PathBuf>,
    },

    /// Clean <set>_raw.csv into sorted <set>.csv
    Clean {
        /// Only this set (key or URL slug)
        #[arg(long, conflicts_with = "file")]
        set: Option<String>,

        /// Clean one raw CSV at any path; its set is recognised from the file name
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output for --file (default: <set>.csv next to it)
        #[arg(short, long, requires = "file")]
        output: Option<PathBuf>,
    },

    /// Combine the cleaned CSVs into one workbook, one sheet per set
    Combine {
        /// Output Excel file (default: star_wars_unlimited_inventory.xlsx in --dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scrape, clean and combine every set
    All,

    /// List the known sets
    Sets,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { set, html } => {
            scrape_sets(&cli.dir, set.as_deref(), html.as_deref())?;
        }
        Commands::Clean { set, file, output } => match file {
            Some(file) => clean_one_file(&file, output)?,
            None => clean_sets(&cli.dir, set.as_deref())?,
        },
        Commands::Combine { output } => {
            let output = output.unwrap_or_else(|| cli.dir.join(WORKBOOK_FILE));
            combine(&cli.dir, &output)?;
        }
        Commands::All => {
            scrape_sets(&cli.dir, None, None)?;
            clean_sets(&cli.dir, None)?;
            combine(&cli.dir, &cli.dir.join(WORKBOOK_FILE))?;
        }
        Commands::Sets => {
            list_sets();
        }
    }

    Ok(())
}

/// Resolve --set, or every set when absent
fn selected_sets(set: Option<&str>) -> Result<Vec<&'static SetConfig>> {
    match set {
        Some(name) => {
            let found = catalog::find_set(name).with_context(|| {
                let known: Vec<&str> = SETS.iter().map(|s| s.key).collect();
                format!("Unknown set '{}' (known: {})", name, known.join(", "))
            })?;
            Ok(vec![found])
        }
        None => Ok(SETS.iter().collect()),
    }
}

fn scrape_sets(dir: &Path, set: Option<&str>, html: Option<&Path>) -> Result<()> {
    let sets = selected_sets(set)?;

    if let (Some(html), [set]) = (html, sets.as_slice()) {
        let output = dir.join(set.raw_file());
        println!("Reading saved page: {}", html.display());
        let table = scrape::scrape_html_file(html, &output)
            .with_context(|| format!("Failed to extract table from {}", html.display()))?;
        println!("Wrote {} data rows to {}", table.rows.len(), output.display());
        return Ok(());
    }

    for set in sets {
        println!("Scraping {} -> {}", set.url(), set.raw_file());
        // A page without a table stops the whole run
        let table = scrape::scrape_set(set, dir)
            .with_context(|| format!("Failed to scrape {}", set.title))?;
        println!("Wrote {} data rows to {}", table.rows.len(), set.raw_file());
    }

    Ok(())
}

fn clean_sets(dir: &Path, set: Option<&str>) -> Result<()> {
    let single = set.is_some();

    for set in selected_sets(set)? {
        let input = dir.join(set.raw_file());
        let output = dir.join(set.clean_file());

        if !input.exists() {
            if single {
                anyhow::bail!("Raw file not found: {}", input.display());
            }
            log::warn!("Skipping {}: {} not found", set.title, input.display());
            continue;
        }

        let summary = clean::clean_file(&input, &output, set)
            .with_context(|| format!("Failed to clean {}", input.display()))?;

        println!(
            "Wrote cleaned file: {} ({} rows, {} dropped)",
            output.display(),
            summary.rows_written,
            summary.rows_dropped
        );
    }

    Ok(())
}

fn clean_one_file(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let set = catalog::set_for_source(input);
    let output = output.unwrap_or_else(|| catalog::clean_path_for(input));

    println!("Cleaning {} as {}", input.display(), set.title);
    let summary = clean::clean_file(input, &output, &set)
        .with_context(|| format!("Failed to clean {}", input.display()))?;

    println!(
        "Wrote cleaned file: {} ({} rows, {} dropped)",
        output.display(),
        summary.rows_written,
        summary.rows_dropped
    );
    Ok(())
}

fn combine(dir: &Path, output: &Path) -> Result<()> {
    let sheets: Vec<SheetSource> = SETS
        .iter()
        .map(|set| SheetSource::new(set.title, dir.join(set.clean_file())))
        .collect();

    println!("Writing Excel file: {}", output.display());
    xlsx::write_workbook(&sheets, output).context("Failed to write Excel file")?;

    println!("Created {} with {} sheets", output.display(), sheets.len());
    Ok(())
}

fn list_sets() {
    for set in SETS {
        let mut notes = Vec::new();
        if let Some(total) = set.card_total {
            notes.push(format!("numbers fixed to /{}", total));
        }
        if set.combined_printing.is_some() {
            notes.push("splits Normal/Foil rows".to_string());
        }

        println!("{:<26} {}", set.key, set.title);
        if !notes.is_empty() {
            println!("{:<26} ({})", "", notes.join("; "));
        }
    }
}

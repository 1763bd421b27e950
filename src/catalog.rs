//! Known card sets and the per-set fixes for defects in the upstream data.
//!
//! Everything here is data: adding a set or a new exception means adding an
//! entry, not another branch in the cleaner.

use std::path::{Path, PathBuf};

/// Price guide pages live under this path, one per set slug
pub const PRICE_GUIDE_BASE_URL: &str =
    "https://www.tcgplayer.com/categories/trading-and-collectible-card-games/star-wars-unlimited/price-guides/";

/// File name of the combined workbook
pub const WORKBOOK_FILE: &str = "star_wars_unlimited_inventory.xlsx";

pub const RAW_SUFFIX: &str = "_raw.csv";
pub const CLEAN_SUFFIX: &str = ".csv";

/// Literal `(find, replace)` fixes applied to grouping keys
pub const GROUP_ALIASES: &[(&str, &str)] = &[
    ("wisecracking wheelman", "wisecrack wheelman"),
    // Replacement is identical to the pattern; left untouched until the data owner confirms the intended key
    (" razor crest - ride for hire", " razor crest - ride for hire"),
];

/// Display names forced to a canonical capitalization (matched ignoring case)
pub const TITLE_OVERRIDES: &[(&str, &str)] = &[("tie/ln fighter", "TIE/ln Fighter")];

/// Configuration for one card set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetConfig {
    /// File stem, e.g. "spark_of_rebellion"
    pub key: &'static str,
    /// Human-readable title, used as the sheet name
    pub title: &'static str,
    /// Path segment of the price guide URL
    pub slug: &'static str,
    /// Cards in the set; numbers like "020 // T01" are rewritten to "020/<total>"
    pub card_total: Option<u32>,
    /// Printing value meaning "exists as Normal and Foil" in a single row
    pub combined_printing: Option<&'static str>,
}

impl SetConfig {
    /// Config for a source that isn't in the catalog: no repairs at all
    pub const fn unknown() -> Self {
        Self {
            key: "unknown",
            title: "Unknown",
            slug: "unknown",
            card_total: None,
            combined_printing: None,
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", PRICE_GUIDE_BASE_URL, self.slug)
    }

    pub fn raw_file(&self) -> String {
        format!("{}{}", self.key, RAW_SUFFIX)
    }

    pub fn clean_file(&self) -> String {
        format!("{}{}", self.key, CLEAN_SUFFIX)
    }
}

/// All sets, in workbook sheet order
pub const SETS: &[SetConfig] = &[
    SetConfig {
        key: "spark_of_rebellion",
        title: "Spark of Rebellion",
        slug: "spark-of-rebellion",
        card_total: Some(252),
        combined_printing: None,
    },
    SetConfig {
        key: "shadows_of_the_galaxy",
        title: "Shadows of the Galaxy",
        slug: "shadows-of-the-galaxy",
        card_total: Some(262),
        combined_printing: None,
    },
    SetConfig {
        key: "twilight_of_the_republic",
        title: "Twilight of the Republic",
        slug: "twilight-of-the-republic",
        card_total: None,
        combined_printing: None,
    },
    SetConfig {
        key: "jump_to_lightspeed",
        title: "Jump to Lightspeed",
        slug: "jump-to-lightspeed",
        card_total: None,
        combined_printing: Some(COMBINED_PRINTING),
    },
    SetConfig {
        key: "legends_of_the_force",
        title: "Legends of the Force",
        slug: "legends-of-the-force",
        card_total: None,
        combined_printing: Some(COMBINED_PRINTING),
    },
    SetConfig {
        key: "secrets_of_power",
        title: "Secrets of Power",
        slug: "secrets-of-power",
        card_total: None,
        combined_printing: Some(COMBINED_PRINTING),
    },
];

const COMBINED_PRINTING: &str = "Normal, Foil";

/// Look up a set by key ("spark_of_rebellion") or slug ("spark-of-rebellion")
pub fn find_set(name: &str) -> Option<&'static SetConfig> {
    let name = name.trim().to_lowercase();
    SETS.iter().find(|s| s.key == name || s.slug == name)
}

/// Identify the set a raw or cleaned CSV belongs to from its file name
pub fn set_for_path(path: &Path) -> Option<&'static SetConfig> {
    let file_name = path.file_name()?.to_str()?.to_lowercase();
    let stem = file_name
        .strip_suffix(RAW_SUFFIX)
        .or_else(|| file_name.strip_suffix(CLEAN_SUFFIX))?;
    find_set(stem)
}

/// Config for an arbitrary source file; unrecognised names get no repairs
pub fn set_for_source(path: &Path) -> SetConfig {
    match set_for_path(path) {
        Some(set) => *set,
        None => {
            log::warn!("{} is not a known set, applying no set fixes", path.display());
            SetConfig::unknown()
        }
    }
}

/// Where the cleaned CSV for `raw_path` goes: "<set>_raw.csv" -> "<set>.csv"
/// next to it, or "<stem>_clean.csv" when the name doesn't follow the convention
pub fn clean_path_for(raw_path: &Path) -> PathBuf {
    let file_name = raw_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let clean = clean_name_for(file_name).unwrap_or_else(|| {
        let stem = raw_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        format!("{}_clean{}", stem, CLEAN_SUFFIX)
    });
    raw_path.with_file_name(clean)
}

/// Output name for a raw file: "<set>_raw.csv" -> "<set>.csv"
pub fn clean_name_for(raw_file: &str) -> Option<String> {
    raw_file
        .strip_suffix(RAW_SUFFIX)
        .map(|stem| format!("{}{}", stem, CLEAN_SUFFIX))
}

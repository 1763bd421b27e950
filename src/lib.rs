pub mod catalog;
pub mod clean;
pub mod error;
pub mod model;
pub mod scrape;
pub mod text;
pub mod xlsx;

pub use catalog::{find_set, SetConfig, SETS};
pub use error::{PriceGuideError, Result};
pub use model::*;

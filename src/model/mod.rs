pub mod card_type;
pub mod record;

pub use card_type::CardType;
pub use record::{leading_number, CleanedRecord, OutputRow, RawRecord, NAME_SEPARATOR, UNNUMBERED};

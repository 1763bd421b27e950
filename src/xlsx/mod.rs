pub mod writer;

pub use writer::read_csv_rows;
pub use writer::{build_workbook, write_workbook};
pub use writer::SheetSource;

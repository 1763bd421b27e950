use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceGuideError {
    #[error("Missing column in {file}: {column}")]
    MissingColumn { file: String, column: String },

    #[error("No <table> found on page - inspect the page structure")]
    NoTable,

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, PriceGuideError>;

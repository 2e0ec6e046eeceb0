use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrfError {
    #[error("invalid location: start {start} > end {end}")]
    InvalidLocation { start: usize, end: usize },

    #[error("invalid strand: {strand} (must be -1 or 1)")]
    InvalidStrand { strand: i8 },

    #[error("feature type must not be empty")]
    InvalidFeatureType,

    #[error("compound location needs at least one part")]
    EmptyLocation,

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("genbank parse error in {path}: {message}")]
    GenbankParse { path: String, message: String },

    #[error("csv missing column '{name}' in {path}. headers: {headers:?}")]
    CsvMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("csv column index {index} out of range (ncols={ncols}) in {path}")]
    CsvColumnIndexOutOfRange {
        index: usize,
        ncols: usize,
        path: String,
    },

    #[error("csv missing field at row {row} for column {column} in {path}")]
    CsvMissingField {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv parse error in {path}: {source}")]
    CsvParse {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write orf table: {0}")]
    TableWrite(#[from] io::Error),
}

pub type OrfResult<T> = Result<T, OrfError>;

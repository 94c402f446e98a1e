use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Catalog is empty: no vocabulary can be derived")]
    EmptyCatalog,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid catalog row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Feature matrix has {rows} rows but catalog has {items} items")]
    CatalogMismatch { rows: usize, items: usize },

    #[error("No preference selected: pick at least one mode, language or genre")]
    NoPreferenceSelected,

    #[error("Minimum rating {0} is outside 0.0..=5.0")]
    InvalidMinRating(f32),
}

pub type Result<T> = std::result::Result<T, Error>;

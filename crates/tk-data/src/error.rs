//! Error types for tk-data.

use thiserror::Error;

/// Errors that can occur loading stops or exporting routes.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("stop parse error: {0}")]
    Parse(String),

    #[cfg(feature = "geojson")]
    #[error("GeoJSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;

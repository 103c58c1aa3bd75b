// src/error.rs
//! Error types. Loading failures are fatal for the whole dashboard; export
//! failures only abort the one export action. Empty or undefined metric results
//! are not errors; they live in `metrics::Stat` and `metrics::Ranking`.
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    /// Required columns are absent from the header row.
    #[error("schema mismatch in {table} table: missing column(s) {}", .missing.join(", "))]
    SchemaMismatch {
        table: &'static str,
        missing: Vec<String>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("nothing to export")]
    Empty,
}

// src/error.rs
use thiserror::Error;

/// Failure kinds. Item-level kinds (`StructuralMismatch`, `UnparsableDate`)
/// are absorbed where they occur; the rest abort the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    #[error("unparsable date: {0:?}")]
    UnparsableDate(String),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Item-level errors are skipped; everything else ends the run.
    pub fn is_item_level(&self) -> bool {
        matches!(self, Error::StructuralMismatch(_) | Error::UnparsableDate(_))
    }
}

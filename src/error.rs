use thiserror::Error;

use crate::store::EntryKind;

#[derive(Error, Debug)]
pub enum BudgetError {
    /// Bad user input: non-positive amount or empty description.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Edit/delete aimed at a position that no longer exists.
    #[error("No {kind} entry at position {index}")]
    OutOfBounds { kind: EntryKind, index: usize },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Snapshot format {0} is newer than this version understands")]
    UnsupportedFormat(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BudgetError>;

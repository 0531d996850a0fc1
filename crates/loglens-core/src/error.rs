//! Error types shared across the engine.
//!
//! Parsing itself never fails — malformed lines are folded into the previous
//! entry's stack. Errors only surface at the filter/display boundaries, at
//! random sampling, and from the storage collaborator.

use chrono::NaiveDate;

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level token outside the registry, at a filter/display boundary.
    /// During raw parsing unknown tokens are treated as non-header text.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// A locale with no registered display-name table.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Random sampling asked for more entries than the collection holds.
    #[error("requested {requested} random entries, collection holds {available}")]
    InsufficientEntries { requested: usize, available: usize },

    /// No log file backs the given date.
    #[error("no log file found for date {0}")]
    LogNotFound(NaiveDate),

    /// Any failure from the storage collaborator. Never swallowed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

//! Storage collaborator seam.
//!
//! The factory never touches the filesystem itself; it talks to whatever
//! implements [`LogStorage`]. The production implementation lives in
//! `loglens-storage`; tests use in-memory fakes.

use crate::error::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Source of dated raw log files.
///
/// Implementations surface a missing date as [`Error::LogNotFound`] and any
/// other failure as [`Error::Storage`]; the caller decides whether to abort
/// or skip.
///
/// [`Error::LogNotFound`]: crate::Error::LogNotFound
/// [`Error::Storage`]: crate::Error::Storage
pub trait LogStorage: Send + Sync {
    /// Dates with a backing log file, most recent first.
    fn dates(&self) -> Result<Vec<NaiveDate>>;

    /// Raw text of the log file for `date`.
    fn read(&self, date: NaiveDate) -> Result<String>;

    /// Delete the log file for `date`.
    fn delete(&self, date: NaiveDate) -> Result<()>;

    /// Resolve the filesystem path backing `date`.
    fn path(&self, date: NaiveDate) -> Result<PathBuf>;
}

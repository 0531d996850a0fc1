//! Log record — one dated log file and its parsed entries.

use crate::collection::{EntryCollection, SummaryItem};
use crate::error::Result;
use crate::levels::Level;
use crate::parser;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single log file: its date, source path, raw text, and parsed entries.
///
/// Immutable after construction. If the underlying file changes, a new `Log`
/// must be parsed to see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub date: NaiveDate,
    path: PathBuf,
    entries: EntryCollection,
    #[serde(skip)]
    raw: String,
}

impl Log {
    /// Parse raw file text into a log record.
    pub fn parse(date: NaiveDate, path: impl Into<PathBuf>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            date,
            path: path.into(),
            entries: parser::parse(&raw),
            raw,
        }
    }

    /// Filesystem path the log was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw text the entries were parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Entries, optionally restricted to one level. `None` means all.
    pub fn entries(&self, level: Option<Level>) -> EntryCollection {
        match level {
            None => self.entries.clone(),
            Some(level) => self.entries.filter_by_level(level),
        }
    }

    /// Per-level counts for this log. Sums to `entries(None).total()`.
    pub fn stats(&self) -> BTreeMap<Level, usize> {
        self.entries.count_by_level()
    }

    pub fn tree(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        self.entries.tree(translate, locale)
    }

    pub fn menu(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        self.entries.menu(translate, locale)
    }
}

//! loglens-storage — filesystem storage collaborator for loglens.
//!
//! Scans a directory for date-stamped log files named
//! `<prefix>-YYYY-MM-DD.log` and implements the core's
//! [`LogStorage`](loglens_core::LogStorage) trait over them.

use chrono::NaiveDate;
use loglens_core::config::Config;
use loglens_core::{Error, LogStorage, Result};
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Directory of date-stamped log files.
pub struct LocalStorage {
    dir: PathBuf,
    prefix: String,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.storage.path, &config.storage.filename_prefix)
    }

    /// The scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}-{}.log", self.prefix, date))
    }

    /// Path for `date`, verified to exist.
    fn resolve(&self, date: NaiveDate) -> Result<PathBuf> {
        let path = self.file_path(date);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::LogNotFound(date))
        }
    }

    /// Extract the date from a `<prefix>-YYYY-MM-DD.log` file name.
    fn date_of(&self, file_name: &str) -> Option<NaiveDate> {
        let stem = file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix('-')?
            .strip_suffix(".log")?;
        NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
    }
}

impl LogStorage for LocalStorage {
    /// Dates with a backing file, most recent first. Files that do not match
    /// the naming scheme are ignored.
    fn dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        for dir_entry in std::fs::read_dir(&self.dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            let name = dir_entry.file_name();
            if let Some(date) = name.to_str().and_then(|name| self.date_of(name)) {
                dates.push(date);
            }
        }
        dates.sort_unstable_by(|a, b| b.cmp(a));
        tracing::debug!(dir = %self.dir.display(), found = dates.len(), "scanned log directory");
        Ok(dates)
    }

    fn read(&self, date: NaiveDate) -> Result<String> {
        let path = self.resolve(date)?;
        Ok(std::fs::read_to_string(path)?)
    }

    fn delete(&self, date: NaiveDate) -> Result<()> {
        let path = self.resolve(date)?;
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "deleted log file");
        Ok(())
    }

    fn path(&self, date: NaiveDate) -> Result<PathBuf> {
        self.resolve(date)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

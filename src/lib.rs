//! loglens — structured log-file parsing, filtering, and aggregation.
//!
//! This crate ties the engine (`loglens-core`) to the filesystem storage
//! collaborator (`loglens-storage`) behind one facade, [`LogViewer`], and
//! re-exports the core types so that consumers and integration tests can
//! import everything from here.
//!
//! # Architecture
//!
//! ```text
//! LocalStorage ──► LogFactory ──► LogViewer ──► consumer / CLI
//! ```

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

pub use loglens_core::config::Config;
pub use loglens_core::{
    Entry, EntryCollection, Error, Level, Log, LogFactory, LogStorage, Result, StatsRow,
    StatsTable, SummaryItem,
};
pub use loglens_storage::LocalStorage;

/// Facade pairing a [`LogFactory`] with the storage collaborator it reads
/// from. One instance per log directory; the factory caches parsed logs for
/// the viewer's lifetime.
pub struct LogViewer {
    factory: LogFactory,
    storage: Arc<dyn LogStorage>,
}

impl LogViewer {
    pub fn new(storage: Arc<dyn LogStorage>) -> Self {
        Self {
            factory: LogFactory::new(Arc::clone(&storage)),
            storage,
        }
    }

    /// Viewer over the directory named by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(LocalStorage::from_config(config)))
    }

    /// The registered severity levels, in canonical order.
    pub fn levels(&self) -> &'static [Level] {
        Level::all()
    }

    /// Dates with a backing log file, most recent first.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        self.factory.dates()
    }

    /// Every known log record, keyed by date.
    pub fn all(&self) -> Result<BTreeMap<NaiveDate, Arc<Log>>> {
        self.factory.all()
    }

    /// The log record for one date.
    pub fn get(&self, date: NaiveDate) -> Result<Arc<Log>> {
        self.factory.get(date)
    }

    /// Entries for one date, optionally restricted to a level.
    pub fn entries(&self, date: NaiveDate, level: Option<Level>) -> Result<EntryCollection> {
        self.factory.entries(date, level)
    }

    /// Number of known log files.
    pub fn count(&self) -> Result<usize> {
        self.factory.count()
    }

    /// Entry count across all dates, for one level or (`None`) overall.
    pub fn total(&self, level: Option<Level>) -> Result<usize> {
        self.factory.total(level)
    }

    /// Per-date navigation trees.
    pub fn tree(
        &self,
        translate: bool,
        locale: &str,
    ) -> Result<BTreeMap<NaiveDate, Vec<SummaryItem>>> {
        self.factory.tree(translate, locale)
    }

    /// Per-date level menus.
    pub fn menu(
        &self,
        translate: bool,
        locale: &str,
    ) -> Result<BTreeMap<NaiveDate, Vec<SummaryItem>>> {
        self.factory.menu(translate, locale)
    }

    /// Combined tree across all dates.
    pub fn global_tree(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        self.factory.global_tree(translate, locale)
    }

    /// Combined menu across all dates.
    pub fn global_menu(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        self.factory.global_menu(translate, locale)
    }

    /// Per-date, per-level stats table.
    pub fn stats_table(&self, locale: &str) -> Result<StatsTable> {
        self.factory.stats_table(locale)
    }

    /// Delete the log file for `date`. The factory cache is not invalidated;
    /// build a fresh viewer to observe the deletion.
    pub fn delete(&self, date: NaiveDate) -> Result<()> {
        self.storage.delete(date)
    }

    /// Filesystem path backing `date`, for download-style consumers.
    pub fn file_path(&self, date: NaiveDate) -> Result<PathBuf> {
        self.storage.path(date)
    }
}

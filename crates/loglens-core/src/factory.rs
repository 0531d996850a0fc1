//! Log factory — builds, caches, and aggregates log records across dates.
//!
//! The factory owns the date → [`Log`] cache; logs never reference the
//! factory back. The cache is built lazily under a single writer lock
//! (build-if-absent); reads of already-built logs take the read lock only.
//! Aggregation is fail-fast: the first storage error aborts the call.

use crate::collection::{self, EntryCollection, SummaryItem};
use crate::error::Result;
use crate::levels::Level;
use crate::log::Log;
use crate::storage::LogStorage;
use crate::table::StatsTable;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Discovers, parses, caches, and aggregates dated log records.
pub struct LogFactory {
    storage: Arc<dyn LogStorage>,
    cache: RwLock<BTreeMap<NaiveDate, Arc<Log>>>,
}

impl LogFactory {
    pub fn new(storage: Arc<dyn LogStorage>) -> Self {
        Self {
            storage,
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    /// Dates known to the storage collaborator, most recent first.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        self.storage.dates()
    }

    /// The log record for `date`, parsed on first access and cached for the
    /// factory's lifetime. Fails with `LogNotFound` if no file backs `date`.
    pub fn get(&self, date: NaiveDate) -> Result<Arc<Log>> {
        if let Some(log) = self.cache.read().expect("log cache poisoned").get(&date) {
            return Ok(Arc::clone(log));
        }

        let mut cache = self.cache.write().expect("log cache poisoned");
        // another writer may have built it while we waited
        if let Some(log) = cache.get(&date) {
            return Ok(Arc::clone(log));
        }

        let raw = self.storage.read(date)?;
        let path = self.storage.path(date)?;
        let log = Arc::new(Log::parse(date, path, raw));
        tracing::debug!(%date, entries = log.entries(None).total(), "parsed log file");
        cache.insert(date, Arc::clone(&log));
        Ok(log)
    }

    /// Every known log record, keyed by date.
    pub fn all(&self) -> Result<BTreeMap<NaiveDate, Arc<Log>>> {
        let mut logs = BTreeMap::new();
        for date in self.dates()? {
            logs.insert(date, self.get(date)?);
        }
        Ok(logs)
    }

    /// Entries for one date, optionally restricted to a level.
    pub fn entries(&self, date: NaiveDate, level: Option<Level>) -> Result<EntryCollection> {
        Ok(self.get(date)?.entries(level))
    }

    /// Number of known log files.
    pub fn count(&self) -> Result<usize> {
        Ok(self.dates()?.len())
    }

    /// Entry count across all dates, for one level or (`None`) overall.
    pub fn total(&self, level: Option<Level>) -> Result<usize> {
        let counts = self.combined_counts()?;
        Ok(match level {
            None => counts.values().sum(),
            Some(level) => counts.get(&level).copied().unwrap_or(0),
        })
    }

    /// Per-date navigation trees, keyed by date.
    pub fn tree(
        &self,
        translate: bool,
        locale: &str,
    ) -> Result<BTreeMap<NaiveDate, Vec<SummaryItem>>> {
        self.per_date(|log| log.tree(translate, locale))
    }

    /// Per-date level menus, keyed by date.
    pub fn menu(
        &self,
        translate: bool,
        locale: &str,
    ) -> Result<BTreeMap<NaiveDate, Vec<SummaryItem>>> {
        self.per_date(|log| log.menu(translate, locale))
    }

    /// Combined tree across all dates: per-level counts summed, zero-count
    /// levels omitted.
    pub fn global_tree(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        collection::tree_items(&self.combined_counts()?, translate, locale)
    }

    /// Combined menu across all dates: every level listed, zero-count ones
    /// disabled.
    pub fn global_menu(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        collection::menu_items(&self.combined_counts()?, translate, locale)
    }

    /// Stats table: one row per date in `dates()` order, one column per level
    /// in registry order, plus totals.
    pub fn stats_table(&self, locale: &str) -> Result<StatsTable> {
        let mut rows = Vec::new();
        for date in self.dates()? {
            rows.push((date, self.get(date)?.stats()));
        }
        StatsTable::build(rows, locale)
    }

    fn combined_counts(&self) -> Result<BTreeMap<Level, usize>> {
        let mut counts: BTreeMap<Level, usize> =
            Level::all().iter().map(|&level| (level, 0)).collect();
        for log in self.all()?.values() {
            for (level, count) in log.stats() {
                *counts.entry(level).or_insert(0) += count;
            }
        }
        Ok(counts)
    }

    fn per_date<T>(
        &self,
        mut view: impl FnMut(&Log) -> Result<T>,
    ) -> Result<BTreeMap<NaiveDate, T>> {
        let mut out = BTreeMap::new();
        for (date, log) in self.all()? {
            out.insert(date, view(&log)?);
        }
        Ok(out)
    }
}

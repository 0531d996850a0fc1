//! In-memory fake storage for factory and facade tests.

use chrono::NaiveDate;
use loglens::{Error, LogStorage, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// `LogStorage` backed by a date → raw-text map. `fail_reads` turns every
/// `read` into a storage error, for fail-fast aggregation tests.
#[derive(Default)]
pub struct FakeStorage {
    files: Mutex<BTreeMap<NaiveDate, String>>,
    pub fail_reads: bool,
}

impl FakeStorage {
    pub fn new(files: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        Self {
            files: Mutex::new(files.into_iter().collect()),
            fail_reads: false,
        }
    }

    pub fn failing(files: impl IntoIterator<Item = (NaiveDate, String)>) -> Self {
        Self {
            fail_reads: true,
            ..Self::new(files)
        }
    }
}

impl LogStorage for FakeStorage {
    fn dates(&self) -> Result<Vec<NaiveDate>> {
        let mut dates: Vec<NaiveDate> = self.files.lock().unwrap().keys().copied().collect();
        dates.reverse(); // most recent first
        Ok(dates)
    }

    fn read(&self, date: NaiveDate) -> Result<String> {
        if self.fail_reads {
            return Err(Error::Storage(std::io::Error::other("injected failure")));
        }
        self.files
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .ok_or(Error::LogNotFound(date))
    }

    fn delete(&self, date: NaiveDate) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .remove(&date)
            .map(|_| ())
            .ok_or(Error::LogNotFound(date))
    }

    fn path(&self, date: NaiveDate) -> Result<PathBuf> {
        if self.files.lock().unwrap().contains_key(&date) {
            Ok(PathBuf::from(format!("/fake/laravel-{date}.log")))
        } else {
            Err(Error::LogNotFound(date))
        }
    }
}

/// Shorthand for test dates.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

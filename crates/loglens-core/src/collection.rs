//! Entry collection — an ordered, read-only container of parsed entries.
//!
//! Built once by the parser and never mutated afterwards. Filtering returns a
//! new collection; the parent is untouched. Order is always the order of
//! appearance in the source file.

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::levels::Level;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered sequence of parsed entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

/// One row of a tree or menu summary.
///
/// `disabled` replaces the original key-presence convention: menus list every
/// registered level and mark zero-count ones disabled, trees omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryItem {
    pub level: Level,
    pub name: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub disabled: bool,
}

impl EntryCollection {
    pub(crate) fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Total entry count.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// New collection holding only entries at `level`, relative order kept.
    pub fn filter_by_level(&self, level: Level) -> EntryCollection {
        EntryCollection::new(
            self.entries
                .iter()
                .filter(|entry| entry.level == level)
                .cloned()
                .collect(),
        )
    }

    /// Per-level counts. Every registered level is present, zeros included.
    pub fn count_by_level(&self) -> BTreeMap<Level, usize> {
        let mut counts: BTreeMap<Level, usize> =
            Level::all().iter().map(|&level| (level, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.level).or_insert(0) += 1;
        }
        counts
    }

    /// Sample `n` entries without replacement. Selection is non-deterministic;
    /// callers may rely on count and membership only.
    pub fn random(&self, n: usize) -> Result<Vec<Entry>> {
        if n > self.entries.len() {
            return Err(Error::InsufficientEntries {
                requested: n,
                available: self.entries.len(),
            });
        }
        let mut rng = rand::thread_rng();
        Ok(self
            .entries
            .choose_multiple(&mut rng, n)
            .cloned()
            .collect())
    }

    /// Navigation tree: levels with at least one entry, in registry order.
    pub fn tree(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        tree_items(&self.count_by_level(), translate, locale)
    }

    /// Level menu: every registered level, zero-count ones marked disabled.
    pub fn menu(&self, translate: bool, locale: &str) -> Result<Vec<SummaryItem>> {
        menu_items(&self.count_by_level(), translate, locale)
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Summary construction (shared with the factory's global views)
// ---------------------------------------------------------------------------

pub(crate) fn tree_items(
    counts: &BTreeMap<Level, usize>,
    translate: bool,
    locale: &str,
) -> Result<Vec<SummaryItem>> {
    Level::all()
        .iter()
        .filter_map(|&level| {
            let count = counts.get(&level).copied().unwrap_or(0);
            if count == 0 {
                return None;
            }
            Some(item_name(level, translate, locale).map(|name| SummaryItem {
                level,
                name,
                count,
                icon: None,
                disabled: false,
            }))
        })
        .collect()
}

pub(crate) fn menu_items(
    counts: &BTreeMap<Level, usize>,
    translate: bool,
    locale: &str,
) -> Result<Vec<SummaryItem>> {
    Level::all()
        .iter()
        .map(|&level| {
            let count = counts.get(&level).copied().unwrap_or(0);
            item_name(level, translate, locale).map(|name| SummaryItem {
                level,
                name,
                count,
                icon: Some(level.style_key().to_string()),
                disabled: count == 0,
            })
        })
        .collect()
}

fn item_name(level: Level, translate: bool, locale: &str) -> Result<String> {
    if translate {
        Ok(level.display_name(locale)?.to_string())
    } else {
        Ok(level.as_str().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

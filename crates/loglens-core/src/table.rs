//! Stats table — per-date, per-level counts in a fixed tabular shape.
//!
//! Column order is the registry's canonical order; row order is whatever the
//! caller supplies (the factory passes dates most recent first). A totals
//! column is appended to every row and a totals footer closes the table.

use crate::error::Result;
use crate::levels::{self, Level};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tabular per-date, per-level counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsTable {
    /// Column labels: date, one per level in registry order, then the
    /// all-levels total.
    pub header: Vec<String>,
    pub rows: Vec<StatsRow>,
    /// Per-column totals across all rows. `date` is `None`.
    pub footer: StatsRow,
}

/// One table row: counts in registry order plus the row total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub date: Option<NaiveDate>,
    pub counts: Vec<usize>,
    pub total: usize,
}

impl StatsTable {
    /// Build a table from per-date stats, keeping the given row order.
    pub fn build(
        stats: impl IntoIterator<Item = (NaiveDate, BTreeMap<Level, usize>)>,
        locale: &str,
    ) -> Result<StatsTable> {
        let mut header = Vec::with_capacity(Level::all().len() + 2);
        header.push("date".to_string());
        for &level in Level::all() {
            header.push(level.display_name(locale)?.to_string());
        }
        header.push(levels::all_label(locale)?.to_string());

        let mut rows = Vec::new();
        let mut footer_counts = vec![0usize; Level::all().len()];
        for (date, per_level) in stats {
            let counts: Vec<usize> = Level::all()
                .iter()
                .map(|level| per_level.get(level).copied().unwrap_or(0))
                .collect();
            for (sum, count) in footer_counts.iter_mut().zip(&counts) {
                *sum += count;
            }
            let total = counts.iter().sum();
            rows.push(StatsRow {
                date: Some(date),
                counts,
                total,
            });
        }

        let footer_total = footer_counts.iter().sum();
        Ok(StatsTable {
            header,
            rows,
            footer: StatsRow {
                date: None,
                counts: footer_counts,
                total: footer_total,
            },
        })
    }
}

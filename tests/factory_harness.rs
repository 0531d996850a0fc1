//! Factory / facade integration harness.
//!
//! # What this covers
//!
//! - **Caching**: `get` parses each date once; repeated calls return the same
//!   record within one factory lifetime.
//! - **Missing dates**: `get` on a date with no backing file fails with
//!   `LogNotFound`.
//! - **Aggregation**: `count`, `total`, global tree/menu, and the stats table
//!   sum per-level counts across all dates; row order follows `dates()`
//!   (most recent first), column order follows the registry.
//! - **Fail-fast**: a storage read failure aborts `all()` instead of being
//!   swallowed.
//!
//! # Running
//!
//! ```sh
//! cargo test --test factory_harness
//! ```

mod common;
use common::*;

use loglens::{Error, Level, LogViewer};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn viewer() -> LogViewer {
    let storage = FakeStorage::new([
        (
            date(2023, 4, 1),
            raw_with_counts(&[(Level::Error, 2), (Level::Info, 1)]),
        ),
        (
            date(2023, 4, 2),
            raw_with_counts(&[(Level::Warning, 3)]),
        ),
        (
            date(2023, 4, 3),
            raw_with_counts(&[(Level::Error, 1), (Level::Debug, 4)]),
        ),
    ]);
    LogViewer::new(Arc::new(storage))
}

// ---------------------------------------------------------------------------
// Dates and lookup
// ---------------------------------------------------------------------------

#[test]
fn dates_are_most_recent_first() {
    let dates = viewer().dates().unwrap();
    assert_eq!(
        dates,
        vec![date(2023, 4, 3), date(2023, 4, 2), date(2023, 4, 1)]
    );
    assert_eq!(viewer().count().unwrap(), 3);
}

#[test]
fn get_returns_the_cached_record_on_repeat_calls() {
    let viewer = viewer();
    let first = viewer.get(date(2023, 4, 2)).unwrap();
    let second = viewer.get(date(2023, 4, 2)).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.entries(None).total(), 3);
}

#[test]
fn get_unknown_date_is_log_not_found() {
    let missing = date(2099, 12, 31);
    let err = viewer().get(missing).unwrap_err();
    assert!(matches!(err, Error::LogNotFound(d) if d == missing));
}

#[test]
fn all_builds_every_known_record() {
    let logs = viewer().all().unwrap();
    assert_eq!(logs.len(), 3);
    assert!(logs.contains_key(&date(2023, 4, 1)));
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn totals_sum_across_dates() {
    let viewer = viewer();
    assert_eq!(viewer.total(None).unwrap(), 11);
    assert_eq!(viewer.total(Some(Level::Error)).unwrap(), 3);
    assert_eq!(viewer.total(Some(Level::Warning)).unwrap(), 3);
    assert_eq!(viewer.total(Some(Level::Emergency)).unwrap(), 0);
}

#[test]
fn per_date_trees_and_menus_are_keyed_by_date() {
    let viewer = viewer();
    let trees = viewer.tree(false, "en").unwrap();
    assert_eq!(trees.len(), 3);
    let april_second = &trees[&date(2023, 4, 2)];
    assert_eq!(april_second.len(), 1);
    assert_eq!(april_second[0].level, Level::Warning);

    let menus = viewer.menu(false, "en").unwrap();
    assert!(menus
        .values()
        .all(|menu| menu.len() == Level::all().len()));
}

#[test]
fn global_views_sum_counts_per_level() {
    let viewer = viewer();

    let tree = viewer.global_tree(false, "en").unwrap();
    let error = tree.iter().find(|item| item.level == Level::Error).unwrap();
    assert_eq!(error.count, 3);
    assert!(tree.iter().all(|item| item.count > 0));

    let menu = viewer.global_menu(true, "en").unwrap();
    assert_eq!(menu.len(), Level::all().len());
    let emergency = menu
        .iter()
        .find(|item| item.level == Level::Emergency)
        .unwrap();
    assert!(emergency.disabled);
    assert_eq!(emergency.name, "Emergency");
}

#[test]
fn stats_table_rows_follow_dates_order_and_totals_add_up() {
    let table = viewer().stats_table("en").unwrap();

    let row_dates: Vec<_> = table.rows.iter().map(|row| row.date.unwrap()).collect();
    assert_eq!(
        row_dates,
        vec![date(2023, 4, 3), date(2023, 4, 2), date(2023, 4, 1)]
    );

    // column order is the registry order
    assert_eq!(table.header[0], "date");
    assert_eq!(table.header[1], "Emergency");
    assert_eq!(table.header.last().map(String::as_str), Some("All"));

    assert_eq!(table.footer.total, 11);
    let error_col = Level::all()
        .iter()
        .position(|&l| l == Level::Error)
        .unwrap();
    assert_eq!(table.footer.counts[error_col], 3);
    for row in &table.rows {
        assert_eq!(row.counts.iter().sum::<usize>(), row.total);
    }
}

// ---------------------------------------------------------------------------
// Failure semantics
// ---------------------------------------------------------------------------

#[test]
fn storage_read_failure_aborts_aggregation() {
    let storage = FakeStorage::failing([(date(2023, 4, 1), String::new())]);
    let viewer = LogViewer::new(Arc::new(storage));

    assert!(matches!(viewer.all().unwrap_err(), Error::Storage(_)));
    assert!(matches!(viewer.total(None).unwrap_err(), Error::Storage(_)));
    // listing dates does not read files and still works
    assert_eq!(viewer.dates().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Storage pass-throughs on the facade
// ---------------------------------------------------------------------------

#[test]
fn facade_exposes_paths_and_deletion() {
    let viewer = viewer();
    let day = date(2023, 4, 2);

    let path = viewer.file_path(day).unwrap();
    assert!(path.to_string_lossy().contains("2023-04-02"));

    viewer.delete(day).unwrap();
    assert!(matches!(
        viewer.file_path(day).unwrap_err(),
        Error::LogNotFound(_)
    ));
}

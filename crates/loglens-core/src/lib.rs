//! loglens-core — log parsing and aggregation engine.
//!
//! Turns line-oriented application log files (a header line carrying a
//! timestamp and severity level, followed by continuation lines such as stack
//! traces) into structured, queryable records.
//!
//! # Architecture
//!
//! ```text
//! LogStorage ──► parser ──► EntryCollection ──► Log ──► LogFactory
//!                                                          │
//!                                          trees / menus / stats tables
//! ```
//!
//! The engine is synchronous and free of shared mutable state except for the
//! factory's date → log cache. Raw bytes come from a [`storage::LogStorage`]
//! collaborator; everything downstream is pure CPU-bound text processing.

pub mod collection;
pub mod config;
pub mod entry;
pub mod error;
pub mod factory;
pub mod levels;
pub mod log;
pub mod parser;
pub mod storage;
pub mod table;

pub use collection::{EntryCollection, SummaryItem};
pub use entry::Entry;
pub use error::{Error, Result};
pub use factory::LogFactory;
pub use levels::Level;
pub use log::Log;
pub use storage::LogStorage;
pub use table::{StatsRow, StatsTable};

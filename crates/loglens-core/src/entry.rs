//! A single parsed log entry.

use crate::levels::Level;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One parsed log record: a header line plus its continuation text.
///
/// An `Entry` is only ever constructed from a header line that carried a
/// registered level token and a parseable timestamp; a raw segment that has
/// neither is folded into the previous entry's stack by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Severity level extracted from the header line.
    pub level: Level,
    /// Timestamp parsed from the header line.
    pub datetime: NaiveDateTime,
    /// Environment tag from the header line (`local`, `production`, …).
    pub env: String,
    /// The full header line, without its line terminator. Never empty.
    pub header: String,
    /// Continuation lines (stack traces and the like), internal formatting
    /// preserved, exactly one trailing newline trimmed. May be empty.
    pub stack: String,
}

impl Entry {
    /// Whether any continuation text followed the header line.
    pub fn has_stack(&self) -> bool {
        !self.stack.is_empty()
    }
}

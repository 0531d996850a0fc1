//! Entry parser — splits one raw log file into discrete entries.
//!
//! Boundary detection is driven solely by the header-line pattern
//! `[YYYY-MM-DD HH:MM:SS] <env>.<LEVEL>: <message>`. The split is an explicit
//! two-state loop over lines (no entry open / entry open) rather than a regex
//! split, so the boundary contract stays auditable: every line either opens a
//! new entry or is appended verbatim to the open one.

use crate::collection::EntryCollection;
use crate::entry::Entry;
use crate::levels::Level;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] (\w+)\.([A-Z]+): ")
        .expect("header pattern must compile")
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An entry whose header has been matched but whose stack is still
/// accumulating lines.
struct OpenEntry {
    level: Level,
    datetime: NaiveDateTime,
    env: String,
    header: String,
    stack: String,
}

impl OpenEntry {
    /// Finalize: trim exactly one trailing newline from the accumulated
    /// stack, preserving all internal formatting.
    fn close(mut self) -> Entry {
        if self.stack.ends_with('\n') {
            self.stack.pop();
            if self.stack.ends_with('\r') {
                self.stack.pop();
            }
        }
        Entry {
            level: self.level,
            datetime: self.datetime,
            env: self.env,
            header: self.header,
            stack: self.stack,
        }
    }
}

/// Parse raw log text into an ordered collection of entries.
///
/// Lines before the first header are discarded. A line that looks like a
/// header but carries an unregistered level token, or a timestamp chrono
/// rejects, is a non-header line and is folded into the open entry's stack.
/// Text with zero header matches parses to an empty collection, not an error.
pub fn parse(raw: &str) -> EntryCollection {
    let mut entries = Vec::new();
    let mut open: Option<OpenEntry> = None;

    for line in raw.split_inclusive('\n') {
        let bare = strip_terminator(line);
        match match_header(bare) {
            Some(next) => {
                if let Some(previous) = open.take() {
                    entries.push(previous.close());
                }
                open = Some(next);
            }
            None => {
                // Appended with its terminator so internal blank lines and
                // CRLF endings survive intact.
                if let Some(current) = open.as_mut() {
                    current.stack.push_str(line);
                }
            }
        }
    }
    if let Some(last) = open.take() {
        entries.push(last.close());
    }

    EntryCollection::new(entries)
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Try to open an entry from one terminator-stripped line.
fn match_header(line: &str) -> Option<OpenEntry> {
    let caps = HEADER_RE.captures(line)?;
    let level = Level::from_token(&caps[3])?;
    let datetime = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT).ok()?;
    Some(OpenEntry {
        level,
        datetime,
        env: caps[2].to_string(),
        header: line.to_string(),
        stack: String::new(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

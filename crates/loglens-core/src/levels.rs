//! Level registry — the fixed, ordered vocabulary of severity levels.
//!
//! The registry is a set of process-wide read-only tables built at compile
//! time (`phf` maps for the locale-dependent parts). Levels follow the PSR-3
//! ordering, most severe first. Nothing here is ever mutated at runtime.

use crate::error::{Error, Result};
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Log severity level, ordered most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

/// Canonical registry order. Summary views and stats columns follow this.
static ALL: [Level; 8] = [
    Level::Emergency,
    Level::Alert,
    Level::Critical,
    Level::Error,
    Level::Warning,
    Level::Notice,
    Level::Info,
    Level::Debug,
];

// ---------------------------------------------------------------------------
// Locale tables
// ---------------------------------------------------------------------------

/// Display names per locale, indexed by registry order.
static DISPLAY_NAMES: phf::Map<&'static str, [&'static str; 8]> = phf_map! {
    "en" => [
        "Emergency", "Alert", "Critical", "Error",
        "Warning", "Notice", "Info", "Debug",
    ],
    "fr" => [
        "Urgence", "Alerte", "Critique", "Erreur",
        "Avertissement", "Notice", "Info", "Débogage",
    ],
};

/// Localized label for the "all levels" pseudo-column in stats tables.
static ALL_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => "All",
    "fr" => "Tous",
};

// ---------------------------------------------------------------------------
// Registry API
// ---------------------------------------------------------------------------

impl Level {
    /// All registered levels in canonical order.
    pub fn all() -> &'static [Level] {
        &ALL
    }

    /// Lowercase canonical token, as used in filters and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Emergency => "emergency",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Uppercase token as written in log file header lines.
    pub fn token(self) -> &'static str {
        match self {
            Level::Emergency => "EMERGENCY",
            Level::Alert => "ALERT",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Resolve an uppercase header-line token. Case-sensitive: `Error` and
    /// `error` are not header tokens and yield `None`.
    pub fn from_token(token: &str) -> Option<Level> {
        ALL.iter().copied().find(|level| level.token() == token)
    }

    /// Localized display name for menus and stats headers.
    pub fn display_name(self, locale: &str) -> Result<&'static str> {
        DISPLAY_NAMES
            .get(locale)
            .map(|names| names[self as usize])
            .ok_or_else(|| Error::UnknownLocale(locale.to_string()))
    }

    /// Stable style/icon key for presentation layers.
    pub fn style_key(self) -> &'static str {
        match self {
            Level::Emergency => "fire",
            Level::Alert => "bullhorn",
            Level::Critical => "heartbeat",
            Level::Error => "times-circle",
            Level::Warning => "exclamation-triangle",
            Level::Notice => "exclamation-circle",
            Level::Info => "info-circle",
            Level::Debug => "life-ring",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = Error;

    /// Parse the lowercase canonical token. Unrecognized tokens are rejected,
    /// never coerced.
    fn from_str(s: &str) -> Result<Level> {
        ALL.iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

/// Localized label for the "all levels" column.
pub fn all_label(locale: &str) -> Result<&'static str> {
    ALL_LABELS
        .get(locale)
        .copied()
        .ok_or_else(|| Error::UnknownLocale(locale.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

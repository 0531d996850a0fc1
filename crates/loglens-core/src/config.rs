//! Configuration types for loglens.
//!
//! [`Config::load`] reads `~/.config/loglens/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[storage]
path            = "storage/logs"
filename_prefix = "laravel"

[display]
locale    = "en"
translate = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/loglens/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// `[storage]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory scanned for dated log files.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Filename prefix: files are named `<prefix>-YYYY-MM-DD.log`.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

fn default_path() -> PathBuf { PathBuf::from("storage/logs") }
fn default_filename_prefix() -> String { "laravel".to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_translate")]
    pub translate: bool,
}

fn default_locale() -> String { "en".to_string() }
fn default_translate() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            translate: default_translate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/loglens/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("loglens")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

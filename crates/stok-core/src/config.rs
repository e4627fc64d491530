//! Configuration types for stok.
//!
//! [`Config::load`] reads `~/.config/stok/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
url          = "https://api.sheetbest.com/sheets/aba461f9-f680-4184-96a7-1a1405627cac"
timeout_secs = 30

[query]
filterable = ["DIVISI", "KATEGORI", "SUPPLIER"]
searchable = ["BARCODE", "NAMA PRODUK"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/stok/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Sheet endpoint URL, or a path to a local JSON export.
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String { "https://api.sheetbest.com/sheets/aba461f9-f680-4184-96a7-1a1405627cac".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[query]` section of `config.toml`. Field names are sheet column keys or
/// snake-case identifiers.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_filterable")]
    pub filterable: Vec<String>,
    #[serde(default = "default_searchable")]
    pub searchable: Vec<String>,
}

fn default_filterable() -> Vec<String> {
    ["DIVISI", "KATEGORI", "SUPPLIER"].map(String::from).to_vec()
}
fn default_searchable() -> Vec<String> {
    ["BARCODE", "NAMA PRODUK"].map(String::from).to_vec()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            filterable: default_filterable(),
            searchable: default_searchable(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/stok/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit file, layered on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
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
        .join("stok")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

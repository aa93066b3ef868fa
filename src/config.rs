//! YAML configuration: credentials and per-user entry defaults.

use crate::{error::{Result, TrackerError}, page::PageMap};
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};

/// Settle ceiling applied when the configuration names none, in milliseconds
pub const DEFAULT_LATENCY_MS: u64 = 200;

/// Login credentials for the time tracker. Read from the configuration file,
/// held in memory for the one run, never written anywhere.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-user defaults for the entry form, the `options` block of the
/// configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDefaults {
    /// Fragment of the project option's label
    pub project: String,

    /// Fragment of the assignment-type option's label
    pub assignment: String,

    /// Fragment of the focal point option's label
    pub focal: String,

    /// Hours to load, verbatim as the form expects it
    pub hours: String,

    /// Milliseconds to allow the page to settle after each field commit
    #[serde(default = "default_latency")]
    pub latency: u64,
}

fn default_latency() -> u64 {
    DEFAULT_LATENCY_MS
}

/// The whole configuration document
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub options: EntryDefaults,

    /// Optional overrides for the target page's URLs and selectors
    #[serde(default)]
    pub page: PageMap,
}

impl AppConfig {
    /// Conventional configuration location: `~/.timetracker/config.yml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(TrackerError::HomeDirUnavailable)?;
        Ok(home.join(".timetracker").join("config.yml"))
    }

    /// Load the configuration from the conventional location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TrackerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| TrackerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! User settings for wallets
//!
//! Preferences shared by every namespace under one base directory: which user
//! to open when none is named, the currency symbol used for display and the
//! frequency given to new funding templates.

use serde::{Deserialize, Serialize};

use super::paths::WalletsPaths;
use crate::error::WalletsError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Settings for wallets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// User opened when no `--user` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Frequency for new funding templates
    #[serde(default = "default_frequency")]
    pub default_frequency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_frequency() -> String {
    "Monthly".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_user: None,
            currency_symbol: default_currency(),
            default_frequency: default_frequency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &WalletsPaths) -> Result<Self, WalletsError> {
        read_json(paths.settings_file())
            .map_err(|e| WalletsError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletsPaths) -> Result<(), WalletsError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

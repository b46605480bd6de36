//! Path management for wallets
//!
//! Every user namespace lives in its own directory under the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `WALLETS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/wallets` or `~/.config/wallets`
//! 3. Windows: `%APPDATA%\wallets`

use std::path::{Path, PathBuf};

use crate::error::WalletsError;

/// File holding a user's accounts
pub const ACCOUNTS_FILE: &str = "accounts.csv";
/// File holding a user's wallets
pub const WALLETS_FILE: &str = "wallets.csv";
/// File holding a user's funding templates
pub const FUNDING_FILE: &str = "funding.csv";

/// Manages all paths used by wallets
#[derive(Debug, Clone)]
pub struct WalletsPaths {
    /// Base directory for all wallets data
    base_dir: PathBuf,
}

impl WalletsPaths {
    /// Create a new WalletsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, WalletsError> {
        let base_dir = if let Ok(custom) = std::env::var("WALLETS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WalletsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory (~/.config/wallets/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the directory holding every user namespace
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("users")
    }

    /// Get the namespace directory of one user
    pub fn user_dir(&self, user: &str) -> PathBuf {
        self.data_dir().join(user)
    }

    /// Get the path to a user's accounts.csv
    pub fn accounts_file(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(ACCOUNTS_FILE)
    }

    /// Get the path to a user's wallets.csv
    pub fn wallets_file(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(WALLETS_FILE)
    }

    /// Get the path to a user's funding.csv
    pub fn funding_file(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(FUNDING_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WalletsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WalletsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WalletsError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WalletsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| WalletsError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("wallets"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WalletsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WalletsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("wallets"))
}

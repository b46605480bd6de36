//! Configuration module for wallets
//!
//! - XDG-compliant path resolution for the data root and user namespaces
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::WalletsPaths;
pub use settings::Settings;

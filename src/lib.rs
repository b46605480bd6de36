//! wallets - personal envelope budgeting
//!
//! Tracks a user's accounts (where money really is) and wallets (what the
//! money is for), moves money between them, and applies funding templates
//! that split recurring income across wallets.
//!
//! # Architecture
//!
//! - `config`: data root resolution and settings
//! - `error`: the error type shared by every operation
//! - `models`: money, ledger entries, funding templates
//! - `storage`: CSV stores, keyed collections, user namespaces
//! - `engine`: the [`App`] that owns a user's budget and enforces its rules
//! - `cli` / `display`: the command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use wallets::{App, TransferKind, WalletsPaths};
//!
//! let paths = WalletsPaths::new()?;
//! App::create_user(&paths, "steve")?;
//! let mut app = App::open(&paths, "steve")?;
//! app.create_account("cash", "325")?;
//! app.create_account("bank account", 2475.0)?;
//! app.transfer_funds(225.0, "bank account", "cash", TransferKind::Account)?;
//! app.save()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;

pub use config::{Settings, WalletsPaths};
pub use engine::{App, TransferKind};
pub use error::{WalletsError, WalletsResult};

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine.

pub mod account;
pub mod template;
pub mod transfer;
pub mod user;

pub use account::{handle_account_command, handle_wallet_command, AccountCommands, WalletCommands};
pub use template::{handle_template_command, TemplateCommands};
pub use transfer::{handle_expense_command, handle_transfer_command};
pub use user::{handle_user_command, UserCommands};

//! User CLI commands
//!
//! Namespace lifecycle and the default user setting.

use clap::Subcommand;

use crate::config::{Settings, WalletsPaths};
use crate::engine::App;
use crate::error::{WalletsError, WalletsResult};
use crate::storage::init::{namespace_exists, validate_user_name};

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new user with empty accounts, wallets and templates
    Create {
        /// User name
        name: String,
        /// Also make this the default user
        #[arg(short, long)]
        default: bool,
    },
    /// Delete a user and all of their data
    Remove {
        /// User name
        name: String,
    },
    /// Set the user opened when --user is not given
    Default {
        /// User name
        name: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    paths: &WalletsPaths,
    settings: &mut Settings,
    cmd: UserCommands,
) -> WalletsResult<()> {
    match cmd {
        UserCommands::Create { name, default } => {
            App::create_user(paths, &name)?;
            println!("Created user: {}", name);

            if default {
                settings.default_user = Some(name.clone());
                settings.save(paths)?;
                println!("Default user is now {}", name);
            }
        }

        UserCommands::Remove { name } => {
            App::remove_user(paths, &name)?;
            println!("Removed user: {}", name);

            if settings.default_user.as_deref() == Some(name.as_str()) {
                settings.default_user = None;
                settings.save(paths)?;
            }
        }

        UserCommands::Default { name } => {
            validate_user_name(&name)?;
            if !namespace_exists(paths, &name) {
                return Err(WalletsError::UserNotFound(name));
            }
            settings.default_user = Some(name.clone());
            settings.save(paths)?;
            println!("Default user is now {}", name);
        }
    }

    Ok(())
}

//! Account and wallet CLI commands
//!
//! Accounts and wallets take the same commands; only the collection differs.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_balance_list;
use crate::engine::App;
use crate::error::WalletsResult;
use crate::models::Balance;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Opening balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Remove an account, moving its balance and templates to another account
    Remove {
        /// Account name
        name: String,
        /// Account that receives the balance
        #[arg(short, long)]
        transfer: String,
    },
    /// List all accounts
    List,
}

/// Wallet subcommands
#[derive(Subcommand)]
pub enum WalletCommands {
    /// Create a new wallet
    Create {
        /// Wallet name
        name: String,
        /// Opening balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Remove a wallet, moving its balance and allocations to another wallet
    Remove {
        /// Wallet name
        name: String,
        /// Wallet that receives the balance
        #[arg(short, long)]
        transfer: String,
    },
    /// List all wallets
    List,
}

/// Handle an account command
pub fn handle_account_command(app: &mut App, settings: &Settings, cmd: AccountCommands) -> WalletsResult<()> {
    match cmd {
        AccountCommands::Create { name, balance } => {
            app.create_account(&name, &balance)?;
            let account = app.accounts().get(&name)?;
            println!("Created account: {}", name);
            println!(
                "  Opening Balance: {}",
                account.balance().format_with_symbol(&settings.currency_symbol)
            );
        }

        AccountCommands::Remove { name, transfer } => {
            app.remove_account(&name, &transfer)?;
            println!("Removed account: {} (balance moved to {})", name, transfer);
        }

        AccountCommands::List => {
            println!("{}", format_balance_list(app.accounts(), &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle a wallet command
pub fn handle_wallet_command(app: &mut App, settings: &Settings, cmd: WalletCommands) -> WalletsResult<()> {
    match cmd {
        WalletCommands::Create { name, balance } => {
            app.create_wallet(&name, &balance)?;
            let wallet = app.wallets().get(&name)?;
            println!("Created wallet: {}", name);
            println!(
                "  Opening Balance: {}",
                wallet.balance().format_with_symbol(&settings.currency_symbol)
            );
        }

        WalletCommands::Remove { name, transfer } => {
            app.remove_wallet(&name, &transfer)?;
            println!("Removed wallet: {} (balance and allocations moved to {})", name, transfer);
        }

        WalletCommands::List => {
            println!("{}", format_balance_list(app.wallets(), &settings.currency_symbol));
        }
    }

    Ok(())
}

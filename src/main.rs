use anyhow::Result;
use clap::{Parser, Subcommand};

use wallets::cli::{
    handle_account_command, handle_expense_command, handle_template_command, handle_transfer_command,
    handle_user_command, handle_wallet_command,
};
use wallets::config::{paths::WalletsPaths, settings::Settings};
use wallets::logging::init_tracing;
use wallets::{App, WalletsError};

#[derive(Parser)]
#[command(
    name = "wallets",
    version,
    about = "Envelope budgeting from the command line",
    long_about = "wallets tracks where your money is (accounts) and what it is for \
                  (wallets). Funding templates split each paycheck across your \
                  wallets in one step."
)]
struct Cli {
    /// User whose budget to open (defaults to the configured default user)
    #[arg(short, long, global = true, env = "WALLETS_USER")]
    user: Option<String>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and remove users
    #[command(subcommand)]
    User(wallets::cli::UserCommands),

    /// Account management commands
    #[command(subcommand)]
    Account(wallets::cli::AccountCommands),

    /// Wallet management commands
    #[command(subcommand)]
    Wallet(wallets::cli::WalletCommands),

    /// Funding template commands
    #[command(subcommand, alias = "tpl")]
    Template(wallets::cli::TemplateCommands),

    /// Move money between two accounts or two wallets
    Transfer {
        /// Amount to move
        amount: String,
        /// Source account or wallet
        from: String,
        /// Destination account or wallet
        to: String,
        /// What to transfer between: account or wallet
        #[arg(short, long, default_value = "account")]
        kind: String,
    },

    /// Record spending from a wallet, paid out of an account
    Expense {
        /// Wallet the spending comes out of
        wallet: String,
        /// Account that paid
        account: String,
        /// Amount spent
        amount: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = WalletsPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("wallets - envelope budgeting from the command line");
            println!();
            println!("Run 'wallets --help' for usage information.");
            println!("Run 'wallets user create <name> --default' to get started.");
            return Ok(());
        }
    };

    match command {
        Commands::User(cmd) => {
            handle_user_command(&paths, &mut settings, cmd)?;
        }
        Commands::Config => {
            println!("wallets Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Default user:      {}",
                settings.default_user.as_deref().unwrap_or("(none)")
            );
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default frequency: {}", settings.default_frequency);
        }
        Commands::Account(cmd) => {
            let mut app = open_app(&paths, &settings, cli.user)?;
            handle_account_command(&mut app, &settings, cmd)?;
        }
        Commands::Wallet(cmd) => {
            let mut app = open_app(&paths, &settings, cli.user)?;
            handle_wallet_command(&mut app, &settings, cmd)?;
        }
        Commands::Template(cmd) => {
            let mut app = open_app(&paths, &settings, cli.user)?;
            handle_template_command(&mut app, &settings, cmd)?;
        }
        Commands::Transfer { amount, from, to, kind } => {
            let mut app = open_app(&paths, &settings, cli.user)?;
            handle_transfer_command(&mut app, &settings, &amount, &from, &to, &kind)?;
        }
        Commands::Expense { wallet, account, amount } => {
            let mut app = open_app(&paths, &settings, cli.user)?;
            handle_expense_command(&mut app, &settings, &wallet, &account, &amount)?;
        }
    }

    Ok(())
}

fn open_app(paths: &WalletsPaths, settings: &Settings, user: Option<String>) -> Result<App> {
    let user = user.or_else(|| settings.default_user.clone()).ok_or_else(|| {
        WalletsError::Config(
            "No user given. Pass --user <name> or run 'wallets user default <name>'".into(),
        )
    })?;
    Ok(App::open(paths, &user)?)
}

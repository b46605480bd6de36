//! Funding template CLI commands

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_template_details, format_template_list};
use crate::engine::App;
use crate::error::{WalletsError, WalletsResult};
use crate::models::Balance;

/// Fields shared by template create and update
#[derive(Args)]
pub struct TemplateArgs {
    /// Template name
    pub name: String,
    /// Income amount per period
    pub amount: String,
    /// Account the income arrives in
    #[arg(short, long)]
    pub account: String,
    /// How often the income arrives (defaults to the configured frequency)
    #[arg(short, long)]
    pub frequency: Option<String>,
    /// Wallet share as WALLET=AMOUNT; repeat for each wallet
    #[arg(long = "allocate", value_name = "WALLET=AMOUNT", required = true)]
    pub allocation: Vec<String>,
}

/// Funding template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Create a new funding template
    Create(TemplateArgs),
    /// Replace an existing funding template
    Update(TemplateArgs),
    /// Remove a funding template
    Remove {
        /// Template name
        name: String,
    },
    /// List all funding templates
    List,
    /// Show a template and its allocation
    Show {
        /// Template name
        name: String,
    },
    /// Apply a template: credit its account and fund its wallets
    Fund {
        /// Template name
        name: String,
    },
}

/// Split `WALLET=AMOUNT` into its parts
///
/// Splits on the last `=`, so wallet names may themselves contain one.
pub fn parse_allocation(entry: &str) -> WalletsResult<(String, String)> {
    match entry.rsplit_once('=') {
        Some((wallet, amount)) if !wallet.trim().is_empty() => {
            Ok((wallet.trim().to_string(), amount.trim().to_string()))
        }
        _ => Err(WalletsError::Validation(format!(
            "Invalid allocation '{}'. Use WALLET=AMOUNT",
            entry
        ))),
    }
}

fn parse_allocations(entries: &[String]) -> WalletsResult<Vec<(String, String)>> {
    entries.iter().map(|e| parse_allocation(e)).collect()
}

/// Handle a template command
pub fn handle_template_command(app: &mut App, settings: &Settings, cmd: TemplateCommands) -> WalletsResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        TemplateCommands::Create(args) => {
            let allocation = parse_allocations(&args.allocation)?;
            let frequency = args.frequency.as_deref().unwrap_or(&settings.default_frequency);
            app.create_funding_template(&args.name, &args.amount, &args.account, frequency, allocation)?;
            println!("Created funding template: {}", args.name);
        }

        TemplateCommands::Update(args) => {
            let allocation = parse_allocations(&args.allocation)?;
            let frequency = args.frequency.as_deref().unwrap_or(&settings.default_frequency);
            app.update_funding_template(&args.name, &args.amount, &args.account, frequency, allocation)?;
            println!("Updated funding template: {}", args.name);
        }

        TemplateCommands::Remove { name } => {
            app.remove_funding_template(&name)?;
            println!("Removed funding template: {}", name);
        }

        TemplateCommands::List => {
            print!("{}", format_template_list(app.funding_templates(), symbol));
        }

        TemplateCommands::Show { name } => {
            let template = app.funding_templates().get(&name)?;
            print!("{}", format_template_details(template, symbol));
        }

        TemplateCommands::Fund { name } => {
            app.fund_wallets(&name)?;
            let template = app.funding_templates().get(&name)?;

            println!(
                "Funded {} from {}:",
                template.amount().format_with_symbol(symbol),
                template.name()
            );
            println!(
                "  {} is now {}",
                template.account(),
                app.accounts().get(template.account())?.balance().format_with_symbol(symbol)
            );
            for wallet in template.allocation().wallets() {
                println!(
                    "  {} is now {}",
                    wallet,
                    app.wallets().get(wallet)?.balance().format_with_symbol(symbol)
                );
            }
        }
    }

    Ok(())
}

//! CLI command handlers for transfers and expenses
//!
//! Both operations only change balances in memory, so the handlers save the
//! budget once the engine accepts them.

use crate::config::Settings;
use crate::engine::{App, TransferKind};
use crate::error::WalletsResult;
use crate::models::{Balance, Money};

/// Handle the transfer command
pub fn handle_transfer_command(
    app: &mut App,
    settings: &Settings,
    amount: &str,
    from: &str,
    to: &str,
    kind: &str,
) -> WalletsResult<()> {
    let kind: TransferKind = kind.parse()?;
    let amount = Money::parse(amount)?;

    app.transfer_funds(amount, from, to, kind)?;
    app.save()?;

    let collection = match kind {
        TransferKind::Account => app.accounts(),
        TransferKind::Wallet => app.wallets(),
    };
    let symbol = &settings.currency_symbol;

    println!("Transferred {} between {}s:", amount.format_with_symbol(symbol), kind);
    println!("  From: {} ({})", from, collection.get(from)?.balance().format_with_symbol(symbol));
    println!("  To:   {} ({})", to, collection.get(to)?.balance().format_with_symbol(symbol));

    Ok(())
}

/// Handle the expense command
pub fn handle_expense_command(
    app: &mut App,
    settings: &Settings,
    wallet: &str,
    account: &str,
    amount: &str,
) -> WalletsResult<()> {
    app.add_expense(wallet, account, amount)?;
    app.save()?;

    let symbol = &settings.currency_symbol;
    println!("Expense recorded:");
    println!(
        "  Wallet:  {} ({})",
        wallet,
        app.wallets().get(wallet)?.balance().format_with_symbol(symbol)
    );
    println!(
        "  Account: {} ({})",
        account,
        app.accounts().get(account)?.balance().format_with_symbol(symbol)
    );

    Ok(())
}

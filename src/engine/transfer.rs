//! Moving money: transfers within a collection and expenses

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::error::{WalletsError, WalletsResult};
use crate::models::{Balance, IntoMoney};

use super::App;

/// Which collection a transfer moves money within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Account,
    Wallet,
}

impl FromStr for TransferKind {
    type Err = WalletsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "account" => Ok(Self::Account),
            "wallet" => Ok(Self::Wallet),
            _ => Err(WalletsError::InvalidTransferType(s.to_string())),
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Wallet => write!(f, "wallet"),
        }
    }
}

impl App {
    /// Move `amount` from one account to another, or one wallet to another
    ///
    /// The amount may not be negative and the source may not go below its
    /// current balance. Not persisted until [`App::save`].
    pub fn transfer_funds(
        &mut self,
        amount: impl IntoMoney,
        from: &str,
        to: &str,
        kind: TransferKind,
    ) -> WalletsResult<()> {
        let amount = amount.into_money()?;
        if amount.is_negative() {
            return Err(WalletsError::Validation(format!(
                "Cannot transfer a negative amount: {}",
                amount.amount()
            )));
        }
        let collection = match kind {
            TransferKind::Account => &mut self.accounts,
            TransferKind::Wallet => &mut self.wallets,
        };

        let available = collection.get(from)?.balance();
        collection.ensure_contains(to)?;
        if available < amount {
            return Err(WalletsError::InsufficientFunds {
                key: from.to_string(),
                requested: amount.amount(),
            });
        }

        collection.get_mut(from)?.add(-amount);
        collection.get_mut(to)?.add(amount);

        info!(user = %self.user, %kind, from, to, %amount, "transferred funds");
        Ok(())
    }

    /// Record spending: `amount` leaves both the wallet and the account
    ///
    /// Not persisted until [`App::save`].
    pub fn add_expense(&mut self, wallet: &str, account: &str, amount: impl IntoMoney) -> WalletsResult<()> {
        self.wallets.ensure_contains(wallet)?;
        self.accounts.ensure_contains(account)?;
        let amount = amount.into_money()?;

        self.wallets.get_mut(wallet)?.add(-amount);
        self.accounts.get_mut(account)?.add(-amount);

        info!(user = %self.user, wallet, account, %amount, "added expense");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WalletsPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn money(v: f64) -> Money {
        Money::new(v).unwrap()
    }

    fn open_fixture() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletsPaths::with_base_dir(temp_dir.path());
        App::create_user(&paths, "steve").unwrap();

        let mut app = App::open(&paths, "steve").unwrap();
        app.create_account("cash", 325.0).unwrap();
        app.create_account("bank account", 2475.0).unwrap();
        app.create_wallet("mobile", 100.0).unwrap();
        app.create_wallet("savings", 350.0).unwrap();
        (temp_dir, app)
    }

    #[test]
    fn test_parse_transfer_kind() {
        assert_eq!("account".parse::<TransferKind>().unwrap(), TransferKind::Account);
        assert_eq!(" Wallet ".parse::<TransferKind>().unwrap(), TransferKind::Wallet);

        let err = "fake".parse::<TransferKind>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid transfer type: fake");
    }

    #[test]
    fn test_account_transfer() {
        let (_temp_dir, mut app) = open_fixture();
        app.transfer_funds(225.0, "bank account", "cash", TransferKind::Account)
            .unwrap();

        assert_eq!(app.accounts().get("bank account").unwrap().balance(), money(2250.0));
        assert_eq!(app.accounts().get("cash").unwrap().balance(), money(550.0));
    }

    #[test]
    fn test_transfer_exact_balance() {
        let (_temp_dir, mut app) = open_fixture();
        app.transfer_funds("350", "savings", "mobile", TransferKind::Wallet)
            .unwrap();
        assert_eq!(app.wallets().get("savings").unwrap().balance(), Money::zero());
    }

    #[test]
    fn test_transfer_missing_endpoints() {
        let (_temp_dir, mut app) = open_fixture();

        let err = app
            .transfer_funds(10.0, "credit card", "cash", TransferKind::Account)
            .unwrap_err();
        assert_eq!(err.to_string(), "Accounts does not contain account credit card");

        let err = app
            .transfer_funds(10.0, "savings", "fake", TransferKind::Wallet)
            .unwrap_err();
        assert_eq!(err.to_string(), "Wallets does not contain wallet fake");
    }

    #[test]
    fn test_transfer_rejects_negative_amount() {
        let (_temp_dir, mut app) = open_fixture();
        let err = app
            .transfer_funds(-1000.0, "savings", "mobile", TransferKind::Wallet)
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(app.wallets().get("savings").unwrap().balance(), money(350.0));
        assert_eq!(app.wallets().get("mobile").unwrap().balance(), money(100.0));
    }

    #[test]
    fn test_transfer_bad_amount() {
        let (_temp_dir, mut app) = open_fixture();
        let err = app
            .transfer_funds("x", "bank account", "cash", TransferKind::Account)
            .unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(ref s) if s == "x"));
    }

    #[test]
    fn test_expense_moves_both_balances() {
        let (_temp_dir, mut app) = open_fixture();
        app.add_expense("mobile", "cash", 50.0).unwrap();

        assert_eq!(app.wallets().get("mobile").unwrap().balance(), money(50.0));
        assert_eq!(app.accounts().get("cash").unwrap().balance(), money(275.0));
    }

    #[test]
    fn test_expense_checks_before_mutating() {
        let (_temp_dir, mut app) = open_fixture();

        let err = app.add_expense("captain", "cash", 50.0).unwrap_err();
        assert_eq!(err.to_string(), "Wallets does not contain wallet captain");

        let err = app.add_expense("mobile", "people", 50.0).unwrap_err();
        assert_eq!(err.to_string(), "Accounts does not contain account people");

        let err = app.add_expense("mobile", "cash", "x").unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(_)));

        assert_eq!(app.wallets().get("mobile").unwrap().balance(), money(100.0));
        assert_eq!(app.accounts().get("cash").unwrap().balance(), money(325.0));
    }
}

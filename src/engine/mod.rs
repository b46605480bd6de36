//! Budgeting engine
//!
//! [`App`] owns one user's accounts, wallets and funding templates and is the
//! only way to change them. Every operation checks all of its preconditions
//! before touching state. Operations that must persist stage their changes on
//! copies of the affected collections, save the copies, and only then swap
//! them in, so an error never leaves the in-memory ledger half-changed.
//!
//! Persistence policy: structural changes (creating, removing or updating an
//! account, wallet or template) persist immediately. Balance-only changes
//! (`transfer_funds`, `add_expense`) wait for [`App::save`].
//! [`App::fund_wallets`] persists accounts and wallets.

mod funding;
mod transfer;

pub use transfer::TransferKind;

use tracing::{info, warn};

use crate::config::paths::WalletsPaths;
use crate::error::{WalletsError, WalletsResult};
use crate::models::{Balance, EntityKind, IntoMoney, Wallet};
use crate::storage::init::{create_namespace, namespace_exists, remove_namespace, validate_user_name};
use crate::storage::{Accounts, FundingTemplates, Wallets};

/// One user's budget
#[derive(Debug)]
pub struct App {
    user: String,
    accounts: Accounts,
    wallets: Wallets,
    funding_templates: FundingTemplates,
}

impl App {
    /// Create a user's namespace with empty stores
    pub fn create_user(paths: &WalletsPaths, user: &str) -> WalletsResult<()> {
        create_namespace(paths, user)
    }

    /// Delete a user's namespace
    pub fn remove_user(paths: &WalletsPaths, user: &str) -> WalletsResult<()> {
        remove_namespace(paths, user)
    }

    /// Open a user's budget
    ///
    /// Each store is validated as it loads; every funding template must add
    /// up. Templates pointing at accounts or wallets that no longer exist are
    /// loaded but reported.
    pub fn open(paths: &WalletsPaths, user: &str) -> WalletsResult<Self> {
        validate_user_name(user)?;
        if !namespace_exists(paths, user) {
            return Err(WalletsError::UserNotFound(user.to_string()));
        }

        let app = Self {
            user: user.to_string(),
            accounts: Accounts::load(EntityKind::Account, paths.accounts_file(user))?,
            wallets: Wallets::load(EntityKind::Wallet, paths.wallets_file(user))?,
            funding_templates: FundingTemplates::load(
                EntityKind::FundingTemplate,
                paths.funding_file(user),
            )?,
        };
        app.report_dangling_references();
        Ok(app)
    }

    fn report_dangling_references(&self) {
        for (name, template) in self.funding_templates.iter() {
            if !self.accounts.contains(template.account()) {
                warn!(template = name, account = template.account(), "funding template draws from a missing account");
            }
            for wallet in template.allocation().wallets() {
                if !self.wallets.contains(wallet) {
                    warn!(template = name, wallet, "funding template allocates to a missing wallet");
                }
            }
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn wallets(&self) -> &Wallets {
        &self.wallets
    }

    pub fn funding_templates(&self) -> &FundingTemplates {
        &self.funding_templates
    }

    /// Persist all three collections
    pub fn save(&self) -> WalletsResult<()> {
        self.accounts.save()?;
        self.wallets.save()?;
        self.funding_templates.save()
    }

    /// Create a wallet with an opening balance
    pub fn create_wallet(&mut self, name: &str, opening_balance: impl IntoMoney) -> WalletsResult<()> {
        let balance = opening_balance.into_money()?;
        self.wallets.create_item(name, Wallet::new(balance))?;
        info!(user = %self.user, wallet = name, %balance, "created wallet");
        Ok(())
    }

    /// Create an account with an opening balance
    pub fn create_account(&mut self, name: &str, opening_balance: impl IntoMoney) -> WalletsResult<()> {
        let balance = opening_balance.into_money()?;
        self.accounts.create_item(name, Wallet::new(balance))?;
        info!(user = %self.user, account = name, %balance, "created account");
        Ok(())
    }

    /// Remove a wallet, moving its balance and allocations onto `transfer`
    pub fn remove_wallet(&mut self, wallet: &str, transfer: &str) -> WalletsResult<()> {
        self.wallets.ensure_contains(wallet)?;
        self.wallets.ensure_contains(transfer)?;
        ensure_distinct(EntityKind::Wallet, wallet, transfer)?;

        let mut wallets = self.wallets.clone();
        let removed = wallets.remove(wallet)?;
        wallets.get_mut(transfer)?.add(removed.balance());

        let mut templates = self.funding_templates.clone();
        let mut folded = 0;
        for template in templates.values_mut() {
            if template.allocates(wallet) {
                template.remove_wallet_from_allocation(wallet, transfer)?;
                folded += 1;
            }
        }

        // A failure on the second save leaves the first file already written.
        wallets.save()?;
        if folded > 0 {
            templates.save()?;
        }
        self.wallets = wallets;
        self.funding_templates = templates;

        info!(user = %self.user, wallet, transfer, templates = folded, "removed wallet");
        Ok(())
    }

    /// Remove an account, moving its balance and templates onto `transfer`
    pub fn remove_account(&mut self, account: &str, transfer: &str) -> WalletsResult<()> {
        self.accounts.ensure_contains(account)?;
        self.accounts.ensure_contains(transfer)?;
        ensure_distinct(EntityKind::Account, account, transfer)?;

        let mut accounts = self.accounts.clone();
        let removed = accounts.remove(account)?;
        accounts.get_mut(transfer)?.add(removed.balance());

        let mut templates = self.funding_templates.clone();
        let mut rebound = 0;
        for template in templates.values_mut() {
            if template.draws_from(account) {
                template.update_account(transfer);
                rebound += 1;
            }
        }

        // A failure on the second save leaves the first file already written.
        accounts.save()?;
        if rebound > 0 {
            templates.save()?;
        }
        self.accounts = accounts;
        self.funding_templates = templates;

        info!(user = %self.user, account, transfer, templates = rebound, "removed account");
        Ok(())
    }
}

/// Removing an entry onto itself would destroy its balance
fn ensure_distinct(kind: EntityKind, removed: &str, transfer: &str) -> WalletsResult<()> {
    if removed == transfer {
        return Err(WalletsError::Validation(format!(
            "Cannot remove {} {} onto itself",
            kind.noun(),
            removed
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn money(v: f64) -> Money {
        Money::new(v).unwrap()
    }

    fn open_fixture() -> (TempDir, WalletsPaths, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletsPaths::with_base_dir(temp_dir.path());
        App::create_user(&paths, "steve").unwrap();

        let mut app = App::open(&paths, "steve").unwrap();
        app.create_account("cash", 325.0).unwrap();
        app.create_account("bank account", 2475.0).unwrap();
        app.create_wallet("mobile", 100.0).unwrap();
        app.create_wallet("savings", 350.0).unwrap();
        app.create_wallet("shares", 2350.0).unwrap();
        app.create_funding_template(
            "salary",
            3000.0,
            "bank account",
            "Monthly",
            [("mobile", 50.0), ("savings", 1500.0), ("shares", 1450.0)],
        )
        .unwrap();
        (temp_dir, paths, app)
    }

    #[test]
    fn test_open_missing_user() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WalletsPaths::with_base_dir(temp_dir.path());
        let err = App::open(&paths, "john").unwrap_err();
        assert!(matches!(err, WalletsError::UserNotFound(ref u) if u == "john"));
    }

    #[test]
    fn test_balances() {
        let (_temp_dir, _paths, app) = open_fixture();
        assert_eq!(app.user(), "steve");
        assert_eq!(app.accounts().balance(), money(2800.0));
        assert_eq!(app.wallets().balance(), money(2800.0));
    }

    #[test]
    fn test_create_account_rejects_bad_balance() {
        let (_temp_dir, _paths, mut app) = open_fixture();
        let err = app.create_account("x", "not-a-number").unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(ref s) if s == "not-a-number"));
        assert_eq!(app.accounts().len(), 2);
    }

    #[test]
    fn test_remove_wallet_folds_allocation() {
        let (_temp_dir, _paths, mut app) = open_fixture();
        app.remove_wallet("shares", "savings").unwrap();

        assert!(!app.wallets().contains("shares"));
        assert_eq!(app.wallets().get("savings").unwrap().balance(), money(2700.0));

        let salary = app.funding_templates().get("salary").unwrap();
        assert!(!salary.allocates("shares"));
        assert_eq!(salary.allocation().get("savings"), Some(money(2950.0)));
        assert!(salary.valid());
    }

    #[test]
    fn test_remove_wallet_onto_itself() {
        let (_temp_dir, _paths, mut app) = open_fixture();
        let err = app.remove_wallet("mobile", "mobile").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(app.wallets().len(), 3);
    }

    #[test]
    fn test_remove_account_rebinds_templates() {
        let (_temp_dir, _paths, mut app) = open_fixture();
        app.remove_account("bank account", "cash").unwrap();

        assert_eq!(app.accounts().len(), 1);
        assert_eq!(app.accounts().get("cash").unwrap().balance(), money(2800.0));
        assert_eq!(app.funding_templates().get("salary").unwrap().account(), "cash");
    }

    #[test]
    fn test_failed_save_leaves_state_untouched() {
        let (_temp_dir, paths, mut app) = open_fixture();
        std::fs::remove_dir_all(paths.user_dir("steve")).unwrap();

        assert!(app.remove_wallet("shares", "savings").is_err());
        assert!(app.wallets().contains("shares"));
        assert!(app.funding_templates().get("salary").unwrap().allocates("shares"));
    }
}

//! Funding template model
//!
//! A funding template is a recurring-income rule: a fixed amount arriving in
//! one account, split across wallets by an allocation. A template is valid
//! when its allocation adds up to its amount within [`EPSILON`].
//!
//! [`EPSILON`]: super::money::EPSILON

use crate::error::{WalletsError, WalletsResult};

use super::keyed::OrderedMap;
use super::kind::EntityKind;
use super::money::{IntoMoney, Money};

/// Wallet to share mapping inside a funding template
///
/// Only the owning [`FundingTemplate`] can change an allocation. Values handed
/// out by [`FundingTemplate::allocation`] are copies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation {
    shares: OrderedMap<Money>,
}

impl Allocation {
    /// Share allocated to a wallet
    pub fn get(&self, wallet: &str) -> Option<Money> {
        self.shares.get(wallet).copied()
    }

    pub fn contains(&self, wallet: &str) -> bool {
        self.shares.contains_key(wallet)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Allocated wallets in insertion order
    pub fn wallets(&self) -> impl Iterator<Item = &str> + '_ {
        self.shares.keys().map(String::as_str)
    }

    /// `(wallet, share)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> + '_ {
        self.shares.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all shares
    pub fn total(&self) -> Money {
        self.shares.values().copied().sum()
    }
}

/// A recurring-income rule
#[derive(Debug, Clone, PartialEq)]
pub struct FundingTemplate {
    name: String,
    amount: Money,
    account: String,
    frequency: String,
    allocation: Allocation,
}

impl FundingTemplate {
    /// Create a template with an empty allocation
    pub fn new(
        name: impl Into<String>,
        amount: impl IntoMoney,
        account: impl Into<String>,
        frequency: impl Into<String>,
    ) -> WalletsResult<Self> {
        Ok(Self {
            amount: amount.into_money()?,
            name: name.into(),
            account: account.into(),
            frequency: frequency.into(),
            allocation: Allocation::default(),
        })
    }

    /// Allocate a share of the amount to a wallet
    pub fn add_wallet_to_allocation(
        &mut self,
        wallet: impl Into<String>,
        amount: impl IntoMoney,
    ) -> WalletsResult<()> {
        let wallet = wallet.into();
        if self.allocation.contains(&wallet) {
            return Err(WalletsError::DuplicateAllocation {
                template: self.name.clone(),
                wallet,
            });
        }

        let share = amount.into_money()?;
        self.allocation.shares.insert(wallet, share);
        Ok(())
    }

    /// Fold a wallet's share into `transfer` and drop the wallet
    ///
    /// `transfer` is added to the allocation if it is not there yet. The
    /// allocation total does not change.
    pub fn remove_wallet_from_allocation(&mut self, wallet: &str, transfer: &str) -> WalletsResult<()> {
        if !self.allocation.contains(wallet) {
            return Err(WalletsError::NotFound {
                kind: EntityKind::Allocation,
                key: wallet.to_string(),
            });
        }
        if wallet == transfer {
            return Ok(());
        }

        let shares = &mut self.allocation.shares;
        let moved = shares.shift_remove(wallet).unwrap_or_default();
        match shares.get_mut(transfer) {
            Some(share) => *share += moved,
            None => {
                shares.insert(transfer.to_string(), moved);
            }
        }
        Ok(())
    }

    /// Rebind the source account; the caller checks it exists
    pub fn update_account(&mut self, account: impl Into<String>) {
        self.account = account.into();
    }

    /// True when the template draws from `account`
    pub fn draws_from(&self, account: &str) -> bool {
        self.account == account
    }

    /// True when the allocation names `wallet`
    pub fn allocates(&self, wallet: &str) -> bool {
        self.allocation.contains(wallet)
    }

    /// Current allocation total
    pub fn allocated(&self) -> Money {
        self.allocation.total()
    }

    /// True iff the allocation adds up to the amount
    pub fn valid(&self) -> bool {
        self.allocated().approx_eq(self.amount)
    }

    /// Like [`valid`](Self::valid) but reports the mismatch
    pub fn validate(&self) -> WalletsResult<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(WalletsError::AllocationMismatch {
                template: self.name.clone(),
                allocated: self.allocated().amount(),
                amount: self.amount.amount(),
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    /// A copy of the allocation
    pub fn allocation(&self) -> Allocation {
        self.allocation.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary() -> FundingTemplate {
        let mut template = FundingTemplate::new("salary", 3000.0, "bank account", "Monthly").unwrap();
        template.add_wallet_to_allocation("mobile", 50.0).unwrap();
        template.add_wallet_to_allocation("savings", 1500.0).unwrap();
        template.add_wallet_to_allocation("shares", 1450.0).unwrap();
        template
    }

    #[test]
    fn test_new_rejects_non_numeric_amount() {
        let err = FundingTemplate::new("salary", "lots", "bank account", "Monthly").unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(ref s) if s == "lots"));
    }

    #[test]
    fn test_new_template_has_empty_allocation() {
        let template = FundingTemplate::new("bonus", "500", "cash", "Yearly").unwrap();
        assert!(template.allocation().is_empty());
        assert_eq!(template.amount().amount(), 500.0);
        assert_eq!(template.frequency(), "Yearly");
        assert!(!template.valid());
    }

    #[test]
    fn test_valid_allocation() {
        let template = salary();
        assert!(template.valid());
        assert!(template.validate().is_ok());
        assert_eq!(template.allocated().amount(), 3000.0);
    }

    #[test]
    fn test_mismatched_allocation() {
        let mut template = FundingTemplate::new("wife", 1000.0, "bank account", "Monthly").unwrap();
        template.add_wallet_to_allocation("mobile", 100.0).unwrap();
        template.add_wallet_to_allocation("savings", 250.0).unwrap();

        assert!(!template.valid());
        let err = template.validate().unwrap_err();
        assert!(matches!(
            err,
            WalletsError::AllocationMismatch { allocated, amount, .. }
                if allocated == 350.0 && amount == 1000.0
        ));
    }

    #[test]
    fn test_tolerance_on_fractional_shares() {
        let mut template = FundingTemplate::new("t", 0.3, "cash", "Weekly").unwrap();
        template.add_wallet_to_allocation("a", 0.1).unwrap();
        template.add_wallet_to_allocation("b", 0.2).unwrap();
        assert!(template.valid());
    }

    #[test]
    fn test_duplicate_allocation() {
        let mut template = salary();
        let err = template.add_wallet_to_allocation("mobile", 1.0).unwrap_err();
        assert!(matches!(err, WalletsError::DuplicateAllocation { ref wallet, .. } if wallet == "mobile"));
    }

    #[test]
    fn test_add_rejects_non_numeric_share() {
        let mut template = salary();
        let err = template.add_wallet_to_allocation("bonds", "x").unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(_)));
        assert!(!template.allocates("bonds"));
    }

    #[test]
    fn test_fold_into_existing_wallet() {
        let mut template = salary();
        template.remove_wallet_from_allocation("shares", "savings").unwrap();

        let alloc = template.allocation();
        assert!(!alloc.contains("shares"));
        assert_eq!(alloc.get("savings").unwrap().amount(), 2950.0);
        assert!(template.valid());
    }

    #[test]
    fn test_fold_into_new_wallet() {
        let mut template = salary();
        template.remove_wallet_from_allocation("mobile", "phone").unwrap();

        let alloc = template.allocation();
        assert!(!alloc.contains("mobile"));
        assert_eq!(alloc.get("phone").unwrap().amount(), 50.0);
        assert_eq!(alloc.len(), 3);
        assert!(template.valid());
    }

    #[test]
    fn test_fold_keeps_wallet_order() {
        let mut template = salary();
        template.remove_wallet_from_allocation("mobile", "phone").unwrap();

        let alloc = template.allocation();
        assert_eq!(alloc.wallets().collect::<Vec<_>>(), vec!["savings", "shares", "phone"]);
    }

    #[test]
    fn test_fold_missing_wallet() {
        let mut template = salary();
        let err = template.remove_wallet_from_allocation("bonds", "savings").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Allocation does not contain wallet bonds");
    }

    #[test]
    fn test_update_account() {
        let mut template = salary();
        template.update_account("cash");
        assert_eq!(template.account(), "cash");
        assert!(template.draws_from("cash"));
        assert!(!template.draws_from("bank account"));
    }

    #[test]
    fn test_allocation_is_a_copy() {
        let template = salary();
        let first = template.allocation();
        let mut second = template.allocation();

        second.shares.insert("mobile".to_string(), Money::zero());
        second.shares.shift_remove("savings");

        assert_eq!(first, template.allocation());
        assert_eq!(template.allocation().get("mobile").unwrap().amount(), 50.0);
        assert!(template.allocates("savings"));
    }
}

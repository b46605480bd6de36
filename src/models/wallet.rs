//! Ledger entry model
//!
//! A single named balance. Accounts and wallets are both stored as ledger
//! entries; the collection holding them supplies the name.

use super::money::Money;

/// Anything that carries a balance and can be summed by a collection
pub trait Balance {
    fn balance(&self) -> Money;
}

/// A balance that only changes through [`Wallet::add`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Wallet {
    balance: Money,
}

impl Wallet {
    /// Create an entry with an opening balance
    pub fn new(opening_balance: Money) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    /// Apply a delta; negative deltas withdraw
    pub fn add(&mut self, delta: Money) {
        self.balance += delta;
    }
}

impl Balance for Wallet {
    fn balance(&self) -> Money {
        self.balance
    }
}

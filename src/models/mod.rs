//! Core data models for wallets
//!
//! Money, ledger entries and funding templates, plus the ordered map and
//! entity tags the storage layer builds on.

pub mod funding;
pub mod keyed;
pub mod kind;
pub mod money;
pub mod wallet;

pub use funding::{Allocation, FundingTemplate};
pub use keyed::OrderedMap;
pub use kind::EntityKind;
pub use money::{IntoMoney, Money, EPSILON};
pub use wallet::{Balance, Wallet};

//! Entity kinds
//!
//! Tags a keyed container with the kind of thing it holds so lookups can
//! report which container missed which key.

use std::fmt;

/// The kind of entity a key refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    Wallet,
    FundingTemplate,
    /// A wallet inside a funding template's allocation
    Allocation,
}

impl EntityKind {
    /// Name of the container holding this kind, as shown in messages
    pub fn container(&self) -> &'static str {
        match self {
            Self::Account => "Accounts",
            Self::Wallet => "Wallets",
            Self::FundingTemplate => "Funding templates",
            Self::Allocation => "Allocation",
        }
    }

    /// Lowercase noun for a single entry of this kind
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Wallet | Self::Allocation => "wallet",
            Self::FundingTemplate => "template",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "Account"),
            Self::Wallet => write!(f, "Wallet"),
            Self::FundingTemplate => write!(f, "Funding template"),
            Self::Allocation => write!(f, "Allocated wallet"),
        }
    }
}

//! Custom error types for wallets
//!
//! This module defines the error hierarchy for the engine using thiserror.
//! Every failed precondition carries the offending key so callers can branch
//! on the variant instead of matching message text.

use thiserror::Error;

use crate::models::EntityKind;

/// The main error type for wallets operations
#[derive(Error, Debug)]
pub enum WalletsError {
    /// A keyed lookup missed
    #[error("{} does not contain {} {key}", .kind.container(), .kind.noun())]
    NotFound { kind: EntityKind, key: String },

    /// A key is already taken
    #[error("{kind} {key} already exists")]
    AlreadyExists { kind: EntityKind, key: String },

    /// Input that cannot be read as a monetary amount
    #[error("Invalid amount: could not convert '{0}' to a number")]
    InvalidAmount(String),

    /// A funding template whose allocation does not add up to its amount
    #[error("Funding template {template}: allocation amount {allocated} != funding amount {amount}")]
    AllocationMismatch {
        template: String,
        allocated: f64,
        amount: f64,
    },

    /// The same wallet allocated twice in one template
    #[error("Wallet {wallet} already exists in allocation of {template}")]
    DuplicateAllocation { template: String, wallet: String },

    /// Insufficient funds for a transfer
    #[error("{key} has insufficient funds to transfer {requested}")]
    InsufficientFunds { key: String, requested: f64 },

    /// Transfer kind other than account or wallet
    #[error("Invalid transfer type: {0}")]
    InvalidTransferType(String),

    /// User namespace is missing
    #[error("User does not exist: {0}")]
    UserNotFound(String),

    /// User namespace is already present
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    /// Validation errors for requests that are well-formed but not allowed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Collection store errors (unreadable, malformed or unwritable files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl WalletsError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Account,
            key: key.into(),
        }
    }

    /// Create a "not found" error for wallets
    pub fn wallet_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Wallet,
            key: key.into(),
        }
    }

    /// Create a "not found" error for funding templates
    pub fn template_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::FundingTemplate,
            key: key.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for WalletsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for WalletsError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for wallets operations
pub type WalletsResult<T> = Result<T, WalletsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = WalletsError::account_not_found("cash");
        assert_eq!(err.to_string(), "Accounts does not contain account cash");
        assert!(err.is_not_found());

        let err = WalletsError::wallet_not_found("mobile");
        assert_eq!(err.to_string(), "Wallets does not contain wallet mobile");

        let err = WalletsError::template_not_found("salary");
        assert_eq!(
            err.to_string(),
            "Funding templates does not contain template salary"
        );
    }

    #[test]
    fn test_already_exists_message() {
        let err = WalletsError::AlreadyExists {
            kind: EntityKind::Wallet,
            key: "mobile".into(),
        };
        assert_eq!(err.to_string(), "Wallet mobile already exists");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = WalletsError::InsufficientFunds {
            key: "savings".into(),
            requested: 1350.0,
        };
        assert_eq!(
            err.to_string(),
            "savings has insufficient funds to transfer 1350"
        );
    }

    #[test]
    fn test_invalid_amount_echoes_literal() {
        let err = WalletsError::InvalidAmount("not-a-number".into());
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WalletsError = io_err.into();
        assert!(matches!(err, WalletsError::Io(_)));
    }
}

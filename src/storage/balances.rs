//! Balance stores
//!
//! Accounts and wallets share one row format: `name,balance`.

use std::path::Path;

use csv::StringRecord;

use crate::error::{WalletsError, WalletsResult};
use crate::models::{Balance, Money, Wallet};

use super::collection::Record;

impl Record for Wallet {
    fn from_rows(path: &Path, records: Vec<StringRecord>) -> WalletsResult<Vec<(String, Self)>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if record.len() != 2 {
                    return Err(WalletsError::Storage(format!(
                        "Malformed row {} in {}: expected 2 fields, found {}",
                        i + 1,
                        path.display(),
                        record.len()
                    )));
                }
                let balance = Money::parse(&record[1])?;
                Ok((record[0].to_string(), Wallet::new(balance)))
            })
            .collect()
    }

    fn to_rows(key: &str, value: &Self) -> Vec<Vec<String>> {
        vec![vec![key.to_string(), value.balance().amount().to_string()]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;
    use crate::storage::collection::Accounts;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_keeps_fractions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(&path, "").unwrap();

        let mut accounts = Accounts::load(EntityKind::Account, &path).unwrap();
        accounts
            .create_item("cash", Wallet::new(Money::new(0.1 + 0.2).unwrap()))
            .unwrap();

        let reloaded = Accounts::load(EntityKind::Account, &path).unwrap();
        assert_eq!(reloaded.get("cash").unwrap().balance().amount(), 0.1 + 0.2);
    }

    #[test]
    fn test_bad_balance_is_invalid_amount() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(&path, "cash,lots\n").unwrap();

        let err = Accounts::load(EntityKind::Account, &path).unwrap_err();
        assert!(matches!(err, WalletsError::InvalidAmount(ref s) if s == "lots"));
    }

    #[test]
    fn test_wrong_field_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        fs::write(&path, "cash,1\nbank account\n").unwrap();

        let err = Accounts::load(EntityKind::Account, &path).unwrap_err();
        assert!(err.to_string().contains("Malformed row 2"));
    }
}

//! Funding template store
//!
//! One row per allocated wallet:
//! `template,amount,frequency,account,wallet,share`. Rows sharing a template
//! name are grouped back into one template; its amount, frequency and account
//! come from the first row of the group.

use std::path::Path;

use csv::StringRecord;

use crate::error::{WalletsError, WalletsResult};
use crate::models::{FundingTemplate, OrderedMap};

use super::collection::Record;

const FIELDS: usize = 6;

impl Record for FundingTemplate {
    fn from_rows(path: &Path, records: Vec<StringRecord>) -> WalletsResult<Vec<(String, Self)>> {
        let mut templates: OrderedMap<FundingTemplate> = OrderedMap::new();

        for (i, record) in records.iter().enumerate() {
            if record.len() != FIELDS {
                return Err(WalletsError::Storage(format!(
                    "Malformed row {} in {}: expected {} fields, found {}",
                    i + 1,
                    path.display(),
                    FIELDS,
                    record.len()
                )));
            }

            let name = &record[0];
            if !templates.contains_key(name) {
                let template = FundingTemplate::new(name, &record[1], &record[3], &record[2])?;
                templates.insert(name.to_string(), template);
            }
            if let Some(template) = templates.get_mut(name) {
                template.add_wallet_to_allocation(&record[4], &record[5])?;
            }
        }

        for (_, template) in templates.iter() {
            template.validate()?;
        }

        Ok(templates.into_iter().collect())
    }

    fn to_rows(key: &str, value: &Self) -> Vec<Vec<String>> {
        value
            .allocation()
            .iter()
            .map(|(wallet, share)| {
                vec![
                    key.to_string(),
                    value.amount().amount().to_string(),
                    value.frequency().to_string(),
                    value.account().to_string(),
                    wallet.to_string(),
                    share.amount().to_string(),
                ]
            })
            .collect()
    }
}

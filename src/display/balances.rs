//! Balance list formatting
//!
//! Formats accounts or wallets as an aligned name/balance table with a total.

use crate::models::Balance;
use crate::storage::Collection;

/// Format a balance-carrying collection as a table
pub fn format_balance_list<V: Balance>(collection: &Collection<V>, symbol: &str) -> String {
    if collection.is_empty() {
        return format!("No {} found.", collection.kind().container().to_lowercase());
    }

    let name_width = collection
        .keys()
        .map(str::len)
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "Name",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}\n",
        "",
        "",
        name_width = name_width,
    ));

    for (name, entry) in collection.iter() {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}\n",
            name,
            entry.balance().format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->14}\n",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "TOTAL",
        collection.balance().format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

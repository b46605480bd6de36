//! Funding template formatting

use crate::models::FundingTemplate;
use crate::storage::FundingTemplates;

/// Format all templates as a one-line-per-template summary
pub fn format_template_list(templates: &FundingTemplates, symbol: &str) -> String {
    if templates.is_empty() {
        return "No funding templates found.".to_string();
    }

    let mut output = String::new();
    for (_, template) in templates.iter() {
        output.push_str(&format!(
            "  {} - {} {} into {} ({} wallets)\n",
            template.name(),
            template.amount().format_with_symbol(symbol),
            template.frequency(),
            template.account(),
            template.allocation().len()
        ));
    }
    output
}

/// Format a single template with its allocation
pub fn format_template_details(template: &FundingTemplate, symbol: &str) -> String {
    let allocation = template.allocation();
    let wallet_width = allocation.wallets().map(str::len).max().unwrap_or(6).max(6);

    let mut output = String::new();
    output.push_str(&format!("Funding template: {}\n", template.name()));
    output.push_str(&format!(
        "  Amount:    {}\n",
        template.amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Frequency: {}\n", template.frequency()));
    output.push_str(&format!("  Account:   {}\n", template.account()));
    output.push('\n');
    output.push_str("  Allocation:\n");

    for (wallet, share) in allocation.iter() {
        output.push_str(&format!(
            "    {:<wallet_width$}  {:>14}\n",
            wallet,
            share.format_with_symbol(symbol),
            wallet_width = wallet_width,
        ));
    }

    if !template.valid() {
        output.push_str(&format!(
            "\n  Allocated {} of {}\n",
            template.allocated().format_with_symbol(symbol),
            template.amount().format_with_symbol(symbol)
        ));
    }

    output
}

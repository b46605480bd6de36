//! Display formatting for terminal output

pub mod balances;
pub mod template;

pub use balances::format_balance_list;
pub use template::{format_template_details, format_template_list};

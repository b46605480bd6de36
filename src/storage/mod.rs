//! Storage layer for wallets
//!
//! Headerless CSV stores with atomic whole-file rewrites, the generic keyed
//! [`Collection`] built on them, and user namespace lifecycle.

pub mod balances;
pub mod collection;
pub mod file_io;
pub mod funding;
pub mod init;

pub use collection::{Accounts, Collection, FundingTemplates, Record, Wallets};
pub use file_io::{read_json, read_records, write_json_atomic, write_records_atomic};
pub use init::{create_namespace, namespace_exists, remove_namespace};

//! Insertion-ordered map keyed by name
//!
//! Backs both the persisted collections and the allocation inside a funding
//! template. Keys enumerate in the order they were first inserted; replacing
//! a value keeps its position. Removal must go through `shift_remove` to keep
//! the remaining keys in order.

use indexmap::IndexMap;

/// Order-preserving map from entry name to value
pub type OrderedMap<V> = IndexMap<String, V>;

//! Keyed collections backed by a CSV store
//!
//! A [`Collection`] is an ordered name to entry map tied to one file. Lookups
//! that miss report the collection's [`EntityKind`], which is how accounts,
//! wallets and funding templates get their own messages from one type.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::debug;

use crate::error::{WalletsError, WalletsResult};
use crate::models::{Balance, EntityKind, FundingTemplate, Money, OrderedMap, Wallet};

use super::file_io::{read_records, write_records_atomic};

/// Conversion between an entry type and its rows in a store
pub trait Record: Sized {
    /// Rebuild `(key, entry)` pairs from every row of a store
    fn from_rows(path: &Path, records: Vec<StringRecord>) -> WalletsResult<Vec<(String, Self)>>;

    /// Rows written for one entry
    fn to_rows(key: &str, value: &Self) -> Vec<Vec<String>>;
}

/// The user's accounts
pub type Accounts = Collection<Wallet>;
/// The user's wallets
pub type Wallets = Collection<Wallet>;
/// The user's funding templates
pub type FundingTemplates = Collection<FundingTemplate>;

/// An ordered, keyed container of entries persisted as a whole
#[derive(Debug, Clone)]
pub struct Collection<V> {
    kind: EntityKind,
    path: PathBuf,
    items: OrderedMap<V>,
}

impl<V: Record> Collection<V> {
    /// Load a collection from its store
    ///
    /// Fails if the file is missing or malformed, or names a key twice.
    pub fn load(kind: EntityKind, path: impl Into<PathBuf>) -> WalletsResult<Self> {
        let path = path.into();
        let records = read_records(&path)?;

        let mut items = OrderedMap::new();
        for (key, value) in V::from_rows(&path, records)? {
            if items.contains_key(&key) {
                return Err(WalletsError::AlreadyExists { kind, key });
            }
            items.insert(key, value);
        }

        debug!(kind = %kind, path = %path.display(), count = items.len(), "loaded collection");
        Ok(Self { kind, path, items })
    }

    /// Rewrite the whole store
    pub fn save(&self) -> WalletsResult<()> {
        let rows: Vec<Vec<String>> = self
            .items
            .iter()
            .flat_map(|(key, value)| V::to_rows(key, value))
            .collect();

        write_records_atomic(&self.path, &rows)?;
        debug!(kind = %self.kind, path = %self.path.display(), rows = rows.len(), "saved collection");
        Ok(())
    }

    /// Insert a new entry and persist
    ///
    /// If the save fails the entry is taken back out again.
    pub fn create_item(&mut self, key: impl Into<String>, value: V) -> WalletsResult<()> {
        let key = key.into();
        if self.items.contains_key(&key) {
            return Err(WalletsError::AlreadyExists {
                kind: self.kind,
                key,
            });
        }

        self.items.insert(key.clone(), value);
        if let Err(e) = self.save() {
            self.items.shift_remove(&key);
            return Err(e);
        }
        Ok(())
    }
}

impl<V> Collection<V> {
    /// An empty collection bound to a store, without touching the file
    pub fn empty(kind: EntityKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            items: OrderedMap::new(),
        }
    }

    fn not_found(&self, key: &str) -> WalletsError {
        WalletsError::NotFound {
            kind: self.kind,
            key: key.to_string(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> WalletsResult<&V> {
        self.items.get(key).ok_or_else(|| self.not_found(key))
    }

    pub fn get_mut(&mut self, key: &str) -> WalletsResult<&mut V> {
        match self.items.get_mut(key) {
            Some(value) => Ok(value),
            None => Err(WalletsError::NotFound {
                kind: self.kind,
                key: key.to_string(),
            }),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Fail with this collection's "not found" error unless `key` is present
    pub fn ensure_contains(&self, key: &str) -> WalletsResult<()> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(self.not_found(key))
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Keys in load/insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }

    /// `(key, entry)` pairs in load/insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Delete an entry without persisting
    pub fn remove(&mut self, key: &str) -> WalletsResult<V> {
        match self.items.shift_remove(key) {
            Some(value) => Ok(value),
            None => Err(self.not_found(key)),
        }
    }

    /// Replace an existing entry in place without persisting
    pub fn replace(&mut self, key: &str, value: V) -> WalletsResult<V> {
        self.ensure_contains(key)?;
        self.items
            .insert(key.to_string(), value)
            .ok_or_else(|| self.not_found(key))
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.items.values_mut()
    }
}

impl<V: Balance> Collection<V> {
    /// Sum of every entry's balance
    pub fn balance(&self) -> Money {
        self.items.values().map(Balance::balance).sum()
    }
}

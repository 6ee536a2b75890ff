//! RecordCollection - an ordered, in-memory collection of records
//! addressed by a primary key.
//!
//! Records are JSON property bags. The collection assigns a key to any
//! record inserted without one, preserves insertion order, and supports
//! lookup and partial update by key. Everything lives in memory; there
//! is no persistence and no query surface beyond key equality.
//!
//! ## Example
//!
//! ```
//! use modeled_rust::{Record, RecordCollection};
//!
//! let mut heroes = RecordCollection::new();
//!
//! let mut batman = Record::new();
//! batman.insert("name".to_string(), "Batman".into());
//! heroes.record(batman);
//!
//! // The missing "id" field was assigned on insertion.
//! let stored = heroes.find(1).unwrap();
//! assert_eq!(stored["name"], "Batman");
//! ```

use std::fmt;

use serde_json::Value;

use crate::keys::{KeyGenerator, SequentialKeys};
use crate::options::CollectionOptions;
use crate::record::{merge, Record, RecordInput};

pub struct RecordCollection {
    records: Vec<Record>,
    options: CollectionOptions,
    keys: Box<dyn KeyGenerator + Send>,
}

impl Default for RecordCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCollection")
            .field("records", &self.records)
            .field("options", &self.options)
            .finish()
    }
}

impl RecordCollection {
    /// Create an empty collection keyed by `"id"`.
    pub fn new() -> Self {
        Self::with_options(CollectionOptions::default())
    }

    /// Create an empty collection with the given options.
    pub fn with_options(options: CollectionOptions) -> Self {
        RecordCollection {
            records: Vec::new(),
            options,
            keys: Box::new(SequentialKeys),
        }
    }

    /// Create a collection seeded with initial records.
    ///
    /// The seed flows through [`RecordCollection::record`], so key
    /// assignment behaves exactly as for records inserted later.
    pub fn with_records(data: impl Into<RecordInput>, options: CollectionOptions) -> Self {
        let mut collection = Self::with_options(options);
        collection.record(data);
        collection
    }

    /// Create an empty collection with a custom key-generation policy.
    pub fn with_generator(
        options: CollectionOptions,
        keys: Box<dyn KeyGenerator + Send>,
    ) -> Self {
        RecordCollection {
            records: Vec::new(),
            options,
            keys,
        }
    }

    pub fn options(&self) -> &CollectionOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the stored records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Append one record or a batch of records.
    ///
    /// A record whose key field is missing or null gets a fresh key from
    /// the collection's generator; a caller-supplied key is kept verbatim,
    /// duplicates included. Input order is preserved.
    pub fn record(&mut self, data: impl Into<RecordInput>) {
        for mut record in data.into().into_vec() {
            let needs_key = record
                .get(&self.options.primary_key)
                .map_or(true, |value| value.is_null());

            if needs_key {
                let key = self.keys.next_key(&self.records, &self.options.primary_key);
                record.insert(self.options.primary_key.clone(), key);
            }

            self.records.push(record);
        }
    }

    /// Snapshot of the full collection, in insertion order.
    ///
    /// The returned records are independent copies. Mutating them has no
    /// effect on the collection.
    pub fn all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// First record whose key field equals `key`, or `None`.
    ///
    /// The reference borrows the stored record directly; callers that
    /// need an isolated copy should go through [`RecordCollection::all`].
    pub fn find(&self, key: impl Into<Value>) -> Option<&Record> {
        let key = key.into();
        self.records
            .iter()
            .find(|record| record.get(&self.options.primary_key) == Some(&key))
    }

    /// Merge `patch` into the first record whose key field equals `key`.
    ///
    /// Fields present in the patch overwrite, fields absent are left
    /// untouched. Returns `false` and changes nothing when no record
    /// matches. The key field itself is not protected: a patch that
    /// contains it re-keys the record.
    pub fn update(&mut self, key: impl Into<Value>, patch: Record) -> bool {
        let key = key.into();
        let primary_key = &self.options.primary_key;

        match self
            .records
            .iter_mut()
            .find(|record| record.get(primary_key) == Some(&key))
        {
            Some(record) => {
                merge(record, patch);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let collection = RecordCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.options().primary_key, "id");
    }

    #[test]
    fn debug() {
        let collection = RecordCollection::new();
        let debug_str = format!("{:?}", collection);

        assert!(debug_str.contains("RecordCollection"));
        assert!(debug_str.contains("primary_key"));
    }
}

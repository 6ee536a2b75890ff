//! Typed veneer over [`RecordCollection`].
//!
//! Instead of JSON property bags, a `TypedCollection<M>` stores values of
//! one concrete type. Values round-trip through their serde
//! representation on the way in and out, so every read hands back an
//! independent copy and key assignment works on the serialized form: an
//! `Option` key field inserted as `None` comes back populated.
//!
//! ## Example
//!
//! ```ignore
//! use modeled_rust::{Keyed, TypedCollection};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Hero {
//!     id: Option<i64>,
//!     name: String,
//! }
//!
//! impl Keyed for Hero {}
//!
//! let mut heroes = TypedCollection::new();
//! heroes.record(&Hero { id: None, name: "Batman".into() })?;
//! let batman = heroes.find(1)?.unwrap();
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::collection::RecordCollection;
use crate::error::CollectionError;
use crate::keys::KeyGenerator;
use crate::options::CollectionOptions;
use crate::record::Record;

/// Capability for types stored in a [`TypedCollection`].
pub trait Keyed: Serialize + DeserializeOwned + Clone {
    /// Field used as the unique identifier (e.g. `"id"`, `"name"`).
    const PRIMARY_KEY: &'static str = "id";
}

pub struct TypedCollection<M> {
    inner: RecordCollection,
    _model: PhantomData<M>,
}

impl<M: Keyed> Default for TypedCollection<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Keyed> TypedCollection<M> {
    /// Create an empty collection keyed by `M::PRIMARY_KEY`.
    pub fn new() -> Self {
        TypedCollection {
            inner: RecordCollection::with_options(CollectionOptions::with_primary_key(
                M::PRIMARY_KEY,
            )),
            _model: PhantomData,
        }
    }

    /// Create an empty collection with a custom key-generation policy.
    pub fn with_generator(keys: Box<dyn KeyGenerator + Send>) -> Self {
        TypedCollection {
            inner: RecordCollection::with_generator(
                CollectionOptions::with_primary_key(M::PRIMARY_KEY),
                keys,
            ),
            _model: PhantomData,
        }
    }

    /// Insert one value.
    ///
    /// The value must serialize to a JSON object; key assignment then
    /// follows the same rules as the untyped collection.
    pub fn record(&mut self, model: &M) -> Result<(), CollectionError> {
        let value =
            serde_json::to_value(model).map_err(|e| CollectionError::Serde(e.to_string()))?;

        match value {
            Value::Object(record) => {
                self.inner.record(record);
                Ok(())
            }
            _ => Err(CollectionError::NotAnObject),
        }
    }

    /// Insert a batch of values, preserving order.
    pub fn record_all(&mut self, models: &[M]) -> Result<(), CollectionError> {
        for model in models {
            self.record(model)?;
        }
        Ok(())
    }

    /// Snapshot of all stored values, in insertion order.
    pub fn all(&self) -> Result<Vec<M>, CollectionError> {
        self.inner.all().into_iter().map(decode).collect()
    }

    /// First value whose key field equals `key`, or `None`.
    ///
    /// Unlike the untyped [`RecordCollection::find`], this is an isolated
    /// read: the value is deserialized fresh on every call.
    pub fn find(&self, key: impl Into<Value>) -> Result<Option<M>, CollectionError> {
        match self.inner.find(key) {
            Some(record) => decode(record.clone()).map(Some),
            None => Ok(None),
        }
    }

    /// Merge an untyped patch into the first value matching `key`.
    ///
    /// A patch that sets a field to a value the type cannot hold makes
    /// later typed reads of that record fail with
    /// [`CollectionError::Serde`].
    pub fn update(&mut self, key: impl Into<Value>, patch: Record) -> bool {
        self.inner.update(key, patch)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Access the underlying untyped collection.
    pub fn as_records(&self) -> &RecordCollection {
        &self.inner
    }
}

fn decode<M: Keyed>(record: Record) -> Result<M, CollectionError> {
    serde_json::from_value(Value::Object(record)).map_err(|e| CollectionError::Serde(e.to_string()))
}

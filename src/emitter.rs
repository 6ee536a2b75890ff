use event_emitter_rs::EventEmitter;
use serde_json::Value;

use crate::collection::RecordCollection;
use crate::record::{Record, RecordInput};

/// Extension wrapper that adds event callbacks to a collection.
///
/// Listeners registered with `on` run after a mutation takes effect:
/// `"recorded"` fires once per inserted record, `"updated"` fires when a
/// patch lands on an existing record. The payload is the stored record
/// serialized as a JSON string.
///
/// # Example
///
/// ```ignore
/// use modeled_rust::EmittableCollection;
///
/// let mut heroes = RecordCollection::new().with_emitter();
///
/// heroes.on("recorded", |data| {
///     println!("stored: {}", data);
/// });
///
/// heroes.record(batman);
/// ```
pub struct CollectionEmitter {
    collection: RecordCollection,
    event_emitter: EventEmitter,
}

impl CollectionEmitter {
    /// Wrap a collection with emitter capabilities.
    pub fn new(collection: RecordCollection) -> Self {
        Self {
            collection,
            event_emitter: EventEmitter::new(),
        }
    }

    /// Get a reference to the underlying collection.
    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    /// Get a mutable reference to the underlying collection.
    ///
    /// Mutations through this reference do not fire events.
    pub fn collection_mut(&mut self) -> &mut RecordCollection {
        &mut self.collection
    }

    /// Unwrap and return the underlying collection.
    pub fn into_collection(self) -> RecordCollection {
        self.collection
    }

    /// Register a listener for an event type.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    /// Insert records and fire `"recorded"` for each stored record.
    pub fn record(&mut self, data: impl Into<RecordInput>) {
        let before = self.collection.len();
        self.collection.record(data);

        let payloads: Vec<String> = self
            .collection
            .iter()
            .skip(before)
            .map(|record| Value::Object(record.clone()).to_string())
            .collect();

        for payload in payloads {
            self.event_emitter.emit("recorded", payload);
        }
    }

    /// Apply a patch and fire `"updated"` when a record matched.
    pub fn update(&mut self, key: impl Into<Value>, patch: Record) -> bool {
        let key = key.into();
        let updated = self.collection.update(key.clone(), patch);

        if updated {
            if let Some(record) = self.collection.find(key) {
                let payload = Value::Object(record.clone()).to_string();
                self.event_emitter.emit("updated", payload);
            }
        }

        updated
    }
}

/// Trait for collections that can be extended with emitter capabilities.
pub trait EmittableCollection {
    /// Wrap with emitter capabilities.
    fn with_emitter(self) -> CollectionEmitter;
}

impl EmittableCollection for RecordCollection {
    fn with_emitter(self) -> CollectionEmitter {
        CollectionEmitter::new(self)
    }
}

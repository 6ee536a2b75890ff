mod collection;
mod error;
mod keys;
mod options;
mod record;
mod typed;

#[cfg(feature = "emitter")]
mod emitter;

pub use collection::RecordCollection;
pub use error::CollectionError;
#[cfg(feature = "uuid")]
pub use keys::UuidKeys;
pub use keys::{KeyGenerator, SequentialKeys};
pub use options::CollectionOptions;
pub use record::{Record, RecordInput};
pub use typed::{Keyed, TypedCollection};

#[cfg(feature = "emitter")]
pub use emitter::{CollectionEmitter, EmittableCollection};

// Re-export the EventEmitter type so listener signatures can name it
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;

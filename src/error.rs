use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A typed value serialized to something other than a JSON object.
    NotAnObject,
    /// Serializing or deserializing a typed value failed.
    Serde(String),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::NotAnObject => {
                write!(f, "typed value did not serialize to a JSON object")
            }
            CollectionError::Serde(msg) => write!(f, "record serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CollectionError {}

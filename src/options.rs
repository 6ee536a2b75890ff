/// Configuration for a record collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOptions {
    /// Name of the field used as the unique identifier.
    pub primary_key: String,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        CollectionOptions {
            primary_key: "id".to_string(),
        }
    }
}

impl CollectionOptions {
    /// Options addressing records by a field other than `"id"`.
    pub fn with_primary_key(name: impl Into<String>) -> Self {
        CollectionOptions {
            primary_key: name.into(),
        }
    }
}

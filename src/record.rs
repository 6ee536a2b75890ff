use serde_json::{Map, Value};

/// A single stored item: a mapping of field names to JSON values.
pub type Record = Map<String, Value>;

/// Input accepted by record-insertion methods: one record or a batch.
///
/// Both forms convert via `From`, so call sites pass a `Record` or a
/// `Vec<Record>` directly.
pub enum RecordInput {
    One(Record),
    Many(Vec<Record>),
}

impl RecordInput {
    pub(crate) fn into_vec(self) -> Vec<Record> {
        match self {
            RecordInput::One(record) => vec![record],
            RecordInput::Many(records) => records,
        }
    }
}

impl From<Record> for RecordInput {
    fn from(record: Record) -> Self {
        RecordInput::One(record)
    }
}

impl From<Vec<Record>> for RecordInput {
    fn from(records: Vec<Record>) -> Self {
        RecordInput::Many(records)
    }
}

/// Shallow merge: fields present in `patch` overwrite, everything else
/// in `target` is left untouched.
pub(crate) fn merge(target: &mut Record, patch: Record) {
    for (field, value) in patch {
        target.insert(field, value);
    }
}

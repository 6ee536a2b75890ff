use serde_json::Value;

use crate::record::Record;

/// Policy producing identifier values for records inserted without one.
///
/// A generator sees the records already stored, so it can guarantee the
/// returned key is not present under `primary_key`. Takes `&mut self` so
/// counter-based implementations are possible.
pub trait KeyGenerator {
    fn next_key(&mut self, records: &[Record], primary_key: &str) -> Value;
}

/// Default policy: one past the largest integer key currently stored.
///
/// Records whose key field holds a non-integer value are skipped during
/// the scan, so an empty or string-keyed collection starts at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialKeys;

impl KeyGenerator for SequentialKeys {
    fn next_key(&mut self, records: &[Record], primary_key: &str) -> Value {
        let max = records
            .iter()
            .filter_map(|record| record.get(primary_key))
            .filter_map(Value::as_i64)
            .max()
            .unwrap_or(0);
        Value::from(max + 1)
    }
}

/// Random v4 UUID strings, for collections keyed by a non-numeric field.
#[cfg(feature = "uuid")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeys;

#[cfg(feature = "uuid")]
impl KeyGenerator for UuidKeys {
    fn next_key(&mut self, _records: &[Record], _primary_key: &str) -> Value {
        Value::from(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn sequential_starts_at_one() {
        let mut keys = SequentialKeys;
        assert_eq!(keys.next_key(&[], "id"), json!(1));
    }

    #[test]
    fn sequential_continues_past_largest_key() {
        let records = vec![rec(json!({ "id": 3 })), rec(json!({ "id": 41 }))];
        let mut keys = SequentialKeys;
        assert_eq!(keys.next_key(&records, "id"), json!(42));
    }

    #[test]
    fn sequential_ignores_non_integer_keys() {
        let records = vec![rec(json!({ "id": "Batman" })), rec(json!({ "id": 7 }))];
        let mut keys = SequentialKeys;
        assert_eq!(keys.next_key(&records, "id"), json!(8));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn uuid_keys_are_distinct_strings() {
        let mut keys = UuidKeys;
        let a = keys.next_key(&[], "name");
        let b = keys.next_key(&[], "name");

        assert!(a.is_string());
        assert!(b.is_string());
        assert_ne!(a, b);
    }
}

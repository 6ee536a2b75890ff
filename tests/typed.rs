use modeled_rust::{CollectionError, Keyed, Record, TypedCollection};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Hero {
    id: Option<i64>,
    name: String,
}

impl Keyed for Hero {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Codename {
    name: String,
    alias: String,
}

impl Keyed for Codename {
    const PRIMARY_KEY: &'static str = "name";
}

fn rec(value: Value) -> Record {
    value.as_object().cloned().unwrap()
}

fn batman() -> Hero {
    Hero {
        id: None,
        name: "Batman".to_string(),
    }
}

#[test]
fn record_assigns_missing_key() {
    let mut heroes = TypedCollection::new();
    heroes.record(&batman()).unwrap();

    let stored = heroes.find(1).unwrap().unwrap();
    assert_eq!(stored.id, Some(1));
    assert_eq!(stored.name, "Batman");
}

#[test]
fn record_keeps_supplied_key() {
    let mut heroes = TypedCollection::new();
    heroes
        .record(&Hero {
            id: Some(42),
            name: "Batman".to_string(),
        })
        .unwrap();

    assert!(heroes.find(1).unwrap().is_none());
    assert!(heroes.find(42).unwrap().is_some());
}

#[test]
fn record_all_preserves_order_and_assigns_keys() {
    let mut heroes = TypedCollection::new();
    heroes
        .record_all(&[
            batman(),
            Hero {
                id: None,
                name: "Deadpool".to_string(),
            },
        ])
        .unwrap();

    let all = heroes.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Batman");
    assert_eq!(all[1].name, "Deadpool");
    assert_eq!(all[0].id, Some(1));
    assert_eq!(all[1].id, Some(2));
}

#[test]
fn reads_are_isolated_copies() {
    let mut heroes = TypedCollection::new();
    heroes.record(&batman()).unwrap();

    let mut loaded = heroes.find(1).unwrap().unwrap();
    loaded.name = "Joker".to_string();

    assert_eq!(heroes.find(1).unwrap().unwrap().name, "Batman");
}

#[test]
fn update_merges_patch_into_typed_record() {
    let mut heroes = TypedCollection::new();
    heroes.record(&batman()).unwrap();

    assert!(heroes.update(1, rec(json!({ "name": "Joker" }))));
    assert_eq!(heroes.find(1).unwrap().unwrap().name, "Joker");
}

#[test]
fn update_miss_returns_false() {
    let mut heroes = TypedCollection::new();
    heroes.record(&batman()).unwrap();

    assert!(!heroes.update(5, rec(json!({ "name": "Iron Man" }))));
}

#[test]
fn custom_primary_key_type() {
    let mut codenames = TypedCollection::new();
    codenames
        .record(&Codename {
            name: "X".to_string(),
            alias: "Professor".to_string(),
        })
        .unwrap();

    let stored = codenames.find("X").unwrap().unwrap();
    assert_eq!(stored.alias, "Professor");
    assert_eq!(codenames.as_records().options().primary_key, "name");
}

#[test]
fn non_object_values_are_rejected() {
    #[derive(Clone, Serialize, Deserialize)]
    struct Bare(String);

    impl Keyed for Bare {}

    let mut collection = TypedCollection::new();
    let err = collection.record(&Bare("Batman".to_string())).unwrap_err();
    assert_eq!(err, CollectionError::NotAnObject);
    assert!(collection.is_empty());
}

#[test]
fn incompatible_patch_surfaces_as_serde_error() {
    let mut heroes = TypedCollection::new();
    heroes.record(&batman()).unwrap();

    // The untyped patch puts a number where the type expects a string.
    assert!(heroes.update(1, rec(json!({ "name": 42 }))));

    let err = heroes.find(1).unwrap_err();
    assert!(matches!(err, CollectionError::Serde(_)));
}

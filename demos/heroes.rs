use modeled_rust::{CollectionOptions, Record, RecordCollection};
use serde_json::{json, Value};

fn hero(value: Value) -> Record {
    value.as_object().cloned().expect("hero literals are objects")
}

fn main() {
    let mut heroes = RecordCollection::with_records(
        vec![
            hero(json!({ "id": 1, "name": "Batman" })),
            hero(json!({ "name": "Deadpool" })),
        ],
        CollectionOptions::default(),
    );

    heroes.record(hero(json!({ "name": "Wolverine" })));

    println!("roster:");
    for record in &heroes {
        println!("  {}", Value::Object(record.clone()));
    }

    heroes.update(1, hero(json!({ "name": "Joker", "cape": false })));

    match heroes.find(1) {
        Some(record) => println!("after update: {}", Value::Object(record.clone())),
        None => println!("record 1 vanished"),
    }
}

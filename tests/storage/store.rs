use std::collections::BTreeMap;

use serde_json::json;
use shopvault::catalog::{Product, Route, Seeded};
use shopvault::{keys, Medium, Store, WriteOutcome};

use crate::support::{counting_store, memory_store};

#[test]
fn value_written_is_value_read() {
    let store = memory_store();
    let mut session = BTreeMap::new();
    session.insert("user".to_string(), "ayse".to_string());
    session.insert("theme".to_string(), "dark".to_string());

    assert_eq!(store.write(keys::SESSION, &session), WriteOutcome::Stored);

    let loaded: BTreeMap<String, String> = store.get(keys::SESSION, BTreeMap::new());
    assert_eq!(loaded, session);
}

#[test]
fn absent_key_yields_default_and_writes_nothing() {
    let (medium, store) = counting_store();

    let users: Vec<String> = store.get(keys::USERS, vec!["guest".to_string()]);

    assert_eq!(users, vec!["guest".to_string()]);
    assert!(!store.contains(keys::USERS));
    assert_eq!(medium.sets(keys::USERS), 0);
}

#[test]
fn corrupt_entry_yields_default() {
    let (medium, store) = counting_store();
    medium.set(keys::ORDERS, "{not json".to_string()).unwrap();

    let orders: Vec<serde_json::Value> = store.get(keys::ORDERS, Vec::new());

    assert!(orders.is_empty());
    // The corrupt entry is left in place until the next write replaces it.
    assert_eq!(medium.get(keys::ORDERS).as_deref(), Some("{not json"));
}

#[test]
fn set_replaces_previous_value() {
    let store = memory_store();
    store.set(keys::MUSIC, &vec!["a", "b"]);
    store.set(keys::MUSIC, &vec!["c"]);

    let music: Vec<String> = store.get(keys::MUSIC, Vec::new());
    assert_eq!(music, vec!["c".to_string()]);
}

#[test]
fn collection_load_keeps_only_valid_records() {
    let store = memory_store();
    let mut seeds = Product::defaults();
    let first = seeds.remove(0);

    store.set(
        keys::PRODUCTS,
        &json!([
            first,
            { "id": 3, "name": "", "price": 10.0, "category": "Kask" },
            { "id": "not-a-number" },
            { "id": 4, "name": "Zincir", "price": -1.0, "category": "Aksesuar" },
        ]),
    );

    let products: Vec<Product> = store.read_collection(keys::PRODUCTS);
    assert_eq!(products, vec![first]);
}

#[test]
fn non_array_collection_loads_empty() {
    let store = memory_store();
    store.set(keys::ROUTES, &json!({ "routes": [] }));

    assert!(store.read_collection::<Route>(keys::ROUTES).is_empty());
}

#[test]
fn remove_reports_whether_entry_existed() {
    let store = Store::new(shopvault::InMemoryMedium::new());
    store.set(keys::STORIES, &Vec::<String>::new());

    assert!(store.remove(keys::STORIES));
    assert!(!store.remove(keys::STORIES));
    assert!(!store.contains(keys::STORIES));
}

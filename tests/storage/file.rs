use std::sync::Arc;

use shopvault::catalog::{Product, ProductCategory, Seeded};
use shopvault::config::StorageConfig;
use shopvault::{keys, EvictionPolicy, Repository, Store};

use crate::support::fast_local;

fn open(dir: &std::path::Path) -> Arc<Store> {
    let config = StorageConfig {
        dir: Some(dir.to_path_buf()),
        ..StorageConfig::default()
    };
    Arc::new(Store::init(&config, EvictionPolicy::default()).unwrap())
}

#[tokio::test]
async fn created_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = open(dir.path());
        let products = fast_local(&store, Product::defaults());
        products
            .create(Product::draft("Touring Bot", 4100.0, ProductCategory::Boots))
            .await
            .unwrap()
    };

    let store = open(dir.path());
    let products: Vec<Product> = store.read_collection(keys::PRODUCTS);
    assert_eq!(products.len(), Product::defaults().len() + 1);
    assert_eq!(products.last(), Some(&created));
}

#[test]
fn usage_is_restored_on_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let usage = {
        let store = open(dir.path());
        store.set(keys::SESSION, &"ayse");
        store.set(keys::USERS, &vec!["ayse", "mehmet"]);
        store.medium().usage()
    };

    let store = open(dir.path());
    assert!(usage > 0);
    assert_eq!(store.medium().usage(), usage);
    assert_eq!(store.get(keys::SESSION, String::new()), "ayse");
}

#[test]
fn removed_entries_stay_removed() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = open(dir.path());
        store.set(keys::LOGS, &vec![1, 2, 3]);
        assert!(store.remove(keys::LOGS));
    }

    let store = open(dir.path());
    assert!(!store.contains(keys::LOGS));
}

use std::sync::Arc;

use shopvault::catalog::{Order, Product, ProductCategory, Route, Seeded};
use shopvault::{entry_size, keys, InMemoryMedium, Medium, Placement, Repository, Store};

use crate::support::{counting_store, fast_local, memory_store};

#[tokio::test]
async fn first_list_seeds_and_persists_once() {
    let (medium, store) = counting_store();
    let products = fast_local(&store, Product::defaults());

    assert_eq!(products.list().await.unwrap(), Product::defaults());
    assert_eq!(products.list().await.unwrap(), Product::defaults());

    assert_eq!(medium.sets(keys::PRODUCTS), 1);
    assert_eq!(store.read_collection::<Product>(keys::PRODUCTS), Product::defaults());
}

#[tokio::test]
async fn empty_collection_is_reseeded() {
    let (medium, store) = counting_store();
    store.set(keys::ROUTES, &Vec::<Route>::new());
    let routes = fast_local(&store, Route::defaults());

    assert_eq!(routes.list().await.unwrap(), Route::defaults());
    assert_eq!(medium.sets(keys::ROUTES), 2);
}

#[tokio::test]
async fn empty_defaults_never_write() {
    let (medium, store) = counting_store();
    let orders = fast_local(&store, Order::defaults());

    assert!(orders.list().await.unwrap().is_empty());
    assert_eq!(medium.sets(keys::ORDERS), 0);
}

#[tokio::test]
async fn stored_data_wins_over_defaults() {
    let store = memory_store();
    let mut custom = Product::defaults();
    custom.truncate(1);
    store.set(keys::PRODUCTS, &custom);

    let products = fast_local(&store, Product::defaults());
    assert_eq!(products.list().await.unwrap(), custom);
}

#[tokio::test]
async fn product_lifecycle() {
    let store = memory_store();
    let products = fast_local(&store, Product::defaults());

    let created = products
        .create(Product::draft("Kask A", 1200.0, ProductCategory::Helmet))
        .await
        .unwrap();
    assert_ne!(created.id, 0);
    assert!(Product::defaults().iter().all(|p| p.id != created.id));

    let mut expected = Product::defaults();
    expected.push(created.clone());
    assert_eq!(products.list().await.unwrap(), expected);

    let mut renamed = created.clone();
    renamed.name = "Kask B".into();
    products.update(renamed.clone()).await.unwrap();
    let listed = products.list().await.unwrap();
    assert_eq!(listed.last(), Some(&renamed));
    assert_eq!(listed.len(), Product::defaults().len() + 1);

    products.delete(&created.id).await.unwrap();
    assert_eq!(products.list().await.unwrap(), Product::defaults());
}

#[tokio::test]
async fn string_ids_use_the_record_prefix() {
    let store = memory_store();
    let routes = fast_local(&store, Route::defaults());

    let mut draft = Route::defaults().remove(0);
    draft.id = String::new();
    draft.title = "Karadeniz Yaylaları".into();

    let first = routes.create(draft.clone()).await.unwrap();
    let second = routes.create(draft).await.unwrap();

    assert!(first.id.starts_with("route-"));
    assert_ne!(first.id, second.id);
    assert_eq!(routes.list().await.unwrap().len(), Route::defaults().len() + 2);
}

#[tokio::test]
async fn prepend_places_new_records_first() {
    let store = memory_store();
    let products = fast_local(&store, Product::defaults()).with_placement(Placement::Prepend);

    let created = products
        .create(Product::draft("Yağmurluk", 900.0, ProductCategory::Jacket))
        .await
        .unwrap();

    let listed = products.list().await.unwrap();
    assert_eq!(listed.first(), Some(&created));
    assert_eq!(&listed[1..], Product::defaults().as_slice());
}

#[tokio::test]
async fn missing_targets_are_no_ops() {
    let (medium, store) = counting_store();
    let products = fast_local(&store, Product::defaults());
    products.list().await.unwrap();

    let mut ghost = Product::draft("Hayalet", 1.0, ProductCategory::Accessory);
    ghost.id = 424242;
    products.update(ghost).await.unwrap();
    products.delete(&424242).await.unwrap();

    assert_eq!(medium.sets(keys::PRODUCTS), 1);
    assert_eq!(products.list().await.unwrap(), Product::defaults());
}

#[tokio::test]
async fn delete_on_absent_collection_does_not_seed() {
    let (medium, store) = counting_store();
    let products = fast_local(&store, Product::defaults());

    products.delete(&1).await.unwrap();

    assert_eq!(medium.sets(keys::PRODUCTS), 0);
    assert!(!store.contains(keys::PRODUCTS));
}

#[tokio::test]
async fn deleting_every_record_brings_defaults_back() {
    let (medium, store) = counting_store();
    let products = fast_local(&store, Product::defaults());

    for product in products.list().await.unwrap() {
        products.delete(&product.id).await.unwrap();
    }
    assert_eq!(medium.get(keys::PRODUCTS).as_deref(), Some("[]"));
    let writes = medium.sets(keys::PRODUCTS);

    assert_eq!(products.list().await.unwrap(), Product::defaults());
    assert_eq!(medium.sets(keys::PRODUCTS), writes + 1);
}

/// Store whose recordings leave just enough room for the product seeds.
fn nearly_full_store() -> (Arc<Store>, usize) {
    let seeds = serde_json::to_string(&Product::defaults()).unwrap();
    let seeds_size = entry_size(keys::PRODUCTS, &seeds);
    let capacity = 2 * seeds_size + 1000;

    let store = Arc::new(Store::new(InMemoryMedium::with_capacity(capacity)));
    let blob = "x".repeat(capacity - seeds_size - 10 - keys::RECORDINGS.len() - 2);
    assert!(store.write(keys::RECORDINGS, &blob).is_stored());
    (store, capacity)
}

#[tokio::test]
async fn create_on_full_medium_evicts_telemetry() {
    let (store, _) = nearly_full_store();
    let products = fast_local(&store, Product::defaults());

    let created = products
        .create(Product::draft("Kask A", 1200.0, ProductCategory::Helmet))
        .await
        .unwrap();

    assert!(!store.contains(keys::RECORDINGS));
    let stored: Vec<Product> = store.read_collection(keys::PRODUCTS);
    assert_eq!(stored.len(), Product::defaults().len() + 1);
    assert_eq!(stored.last(), Some(&created));
}

#[tokio::test]
async fn oversized_create_is_dropped_without_error() {
    let (store, capacity) = nearly_full_store();
    let products = fast_local(&store, Product::defaults());
    products.list().await.unwrap();

    let mut draft = Product::draft("Kask XL", 1200.0, ProductCategory::Helmet);
    draft.description = "x".repeat(capacity);
    let created = products.create(draft).await;

    assert!(created.is_ok());
    assert_eq!(products.list().await.unwrap(), Product::defaults());
}

//! Overlapping mutations of one collection.

use shopvault::catalog::{Product, ProductCategory, Seeded};
use shopvault::{Repository, WriteGuard};

use crate::support::{memory_store, slow_local};

#[tokio::test]
async fn serialized_creates_are_both_kept() {
    let store = memory_store();
    let products = slow_local(&store, Product::defaults(), WriteGuard::Serialized);

    let (a, b) = tokio::join!(
        products.create(Product::draft("Eldiven A", 300.0, ProductCategory::Gloves)),
        products.create(Product::draft("Eldiven B", 350.0, ProductCategory::Gloves)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    let listed = products.list().await.unwrap();
    assert_eq!(listed.len(), Product::defaults().len() + 2);
    assert!(listed.contains(&a));
    assert!(listed.contains(&b));
}

#[tokio::test]
async fn unguarded_creates_lose_the_earlier_write() {
    let store = memory_store();
    let products = slow_local(&store, Product::defaults(), WriteGuard::LastWriteWins);
    products.list().await.unwrap();

    let (a, b) = tokio::join!(
        products.create(Product::draft("Eldiven A", 300.0, ProductCategory::Gloves)),
        products.create(Product::draft("Eldiven B", 350.0, ProductCategory::Gloves)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    // Both read the same snapshot; whichever persisted last is all that remains.
    let listed = products.list().await.unwrap();
    assert_eq!(listed.len(), Product::defaults().len() + 1);
    assert!(listed.contains(&a) ^ listed.contains(&b));
}

#[tokio::test]
async fn serialized_update_and_delete_compose() {
    let store = memory_store();
    let products = slow_local(&store, Product::defaults(), WriteGuard::Serialized);
    products.list().await.unwrap();

    let mut cheaper = Product::defaults().remove(0);
    cheaper.price = 7999.0;
    let removed = Product::defaults()[1].id;

    let (updated, deleted) = tokio::join!(
        products.update(cheaper.clone()),
        products.delete(&removed)
    );
    updated.unwrap();
    deleted.unwrap();

    let listed = products.list().await.unwrap();
    assert!(listed.contains(&cheaper));
    assert!(listed.iter().all(|p| p.id != removed));
    assert_eq!(listed.len(), Product::defaults().len() - 1);
}

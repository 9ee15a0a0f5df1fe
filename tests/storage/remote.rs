//! Remote repositories against an axum server exposing a local one.
//!
//! Starts a server on port 0 and drives it through `RemoteRepository`.

use std::sync::Arc;

use reqwest::Client;
use serde_json::json;
use shopvault::catalog::{Product, ProductCategory, Route, Seeded};
use shopvault::{http, keys, RemoteRepository, Repository, RepositoryError, Store};

use crate::support::{fast_local, memory_store};

/// Serve a seeded product repository; returns the base address and its store.
async fn start_server() -> (String, Arc<Store>) {
    let store = memory_store();
    let products: Arc<dyn Repository<Product>> = Arc::new(fast_local(&store, Product::defaults()));

    let app = http::router(products);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), store)
}

/// Serve fixed payloads for `/products`, valid JSON but not all valid records.
async fn start_fixed_server() -> String {
    let app = axum::Router::new().route(
        "/products",
        axum::routing::get(|| async {
            axum::Json(json!([
                Product::defaults()[0],
                { "id": 5, "name": "", "price": 1.0, "category": "Kask" },
                "junk",
            ]))
        })
        .post(|| async {
            axum::Json(json!({ "id": 7, "name": "Kask", "price": -5.0, "category": "Kask" }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn remote_products(base: &str) -> RemoteRepository<Product> {
    RemoteRepository::new(Client::new(), base, Vec::new()).unwrap()
}

#[tokio::test]
async fn health_reports_collection() {
    let (base, _) = start_server().await;

    let resp = Client::new().get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["collection"], keys::PRODUCTS);
    assert_eq!(body["endpoint"], "products");
}

#[tokio::test]
async fn list_returns_server_collection() {
    let (base, _) = start_server().await;

    let listed = remote_products(&base).list().await.unwrap();
    assert_eq!(listed, Product::defaults());
}

#[tokio::test]
async fn remote_lifecycle_reaches_server_store() {
    let (base, store) = start_server().await;
    let products = remote_products(&base);

    let created = products
        .create(Product::draft("Kask A", 1200.0, ProductCategory::Helmet))
        .await
        .unwrap();
    assert_ne!(created.id, 0);
    let stored: Vec<Product> = store.read_collection(keys::PRODUCTS);
    assert_eq!(stored.last(), Some(&created));

    let mut renamed = created.clone();
    renamed.name = "Kask B".into();
    products.update(renamed.clone()).await.unwrap();
    assert!(products.list().await.unwrap().contains(&renamed));

    products.delete(&created.id).await.unwrap();
    assert_eq!(products.list().await.unwrap(), Product::defaults());
}

#[tokio::test]
async fn missing_remote_targets_are_no_ops() {
    let (base, _) = start_server().await;
    let products = remote_products(&base);

    let mut ghost = Product::draft("Hayalet", 1.0, ProductCategory::Accessory);
    ghost.id = 424242;
    products.update(ghost).await.unwrap();
    products.delete(&424242).await.unwrap();

    assert_eq!(products.list().await.unwrap(), Product::defaults());
}

#[tokio::test]
async fn mismatched_update_path_is_rejected() {
    let (base, _) = start_server().await;
    let record = Product::defaults().remove(0);

    let resp = Client::new()
        .put(format!("{base}/products/2"))
        .json(&record)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = Client::new()
        .put(format!("{base}/products/1"))
        .json(&json!({ "id": 1 }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn unknown_endpoint_degrades_list_and_fails_create() {
    let (base, _) = start_server().await;
    let routes = RemoteRepository::<Route>::new(Client::new(), &base, Route::defaults()).unwrap();

    assert_eq!(routes.list().await.unwrap(), Route::defaults());

    let err = routes.create(Route::defaults().remove(0)).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Status { operation: "create", status: 404, .. }
    ));
}

#[tokio::test]
async fn remote_payloads_are_validated_per_record() {
    let base = start_fixed_server().await;
    let products = remote_products(&base);

    let listed = products.list().await.unwrap();
    assert_eq!(listed, vec![Product::defaults().remove(0)]);

    let err = products
        .create(Product::draft("Kask", 100.0, ProductCategory::Helmet))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Decode { operation: "create", .. }));
}

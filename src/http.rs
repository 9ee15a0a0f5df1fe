//! HTTP transport - exposes a repository over REST.
//!
//! Requires the `http` feature. Uses axum for routing. The paths are the
//! ones [`RemoteRepository`](crate::RemoteRepository) calls, so a process
//! serving its local repositories is a valid remote backend for another.
//!
//! ## Routes
//!
//! - `GET /health` - `{ "ok": true, "collection": ..., "endpoint": ... }`
//! - `GET /{endpoint}` - list
//! - `POST /{endpoint}` - create, body = draft, `201` with the created record
//! - `PUT /{endpoint}/:id` - update, body = record
//! - `DELETE /{endpoint}/:id` - delete
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shopvault::{http, LocalRepository};
//!
//! let routes = Arc::new(LocalRepository::new(store, Route::defaults()));
//! http::serve::<Route>(routes, "0.0.0.0:5000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::error;

use crate::record::Record;
use crate::repository::{Repository, RepositoryError};

type SharedRepository<R> = Arc<dyn Repository<R>>;

/// Build an axum `Router` serving `repository` under `/{R::ENDPOINT}`.
pub fn router<R: Record>(repository: SharedRepository<R>) -> Router {
    let collection = format!("/{}", R::ENDPOINT);
    let record = format!("/{}/:id", R::ENDPOINT);

    Router::new()
        .route("/health", get(health_handler::<R>))
        .route(&collection, get(list_handler::<R>).post(create_handler::<R>))
        .route(&record, put(update_handler::<R>).delete(delete_handler::<R>))
        .with_state(repository)
}

/// Serve `repository` over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve<R: Record>(
    repository: SharedRepository<R>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(repository);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health_handler<R: Record>() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "collection": R::COLLECTION,
        "endpoint": R::ENDPOINT,
    }))
}

async fn list_handler<R: Record>(State(repository): State<SharedRepository<R>>) -> Response {
    match repository.list().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => error_response(e),
    }
}

async fn create_handler<R: Record>(
    State(repository): State<SharedRepository<R>>,
    Json(draft): Json<R>,
) -> Response {
    match repository.create(draft).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_handler<R: Record>(
    State(repository): State<SharedRepository<R>>,
    Path(id): Path<String>,
    Json(record): Json<R>,
) -> Response {
    if record.id().to_string() != id {
        let reason = format!("path id {} does not match record id {}", id, record.id());
        let body = json!({ "error": reason });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }
    if !contains(&repository, record.id()).await {
        return StatusCode::NOT_FOUND.into_response();
    }
    match repository.update(record).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_handler<R: Record>(
    State(repository): State<SharedRepository<R>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id::<R>(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if !contains(&repository, &id).await {
        return StatusCode::NOT_FOUND.into_response();
    }
    match repository.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

async fn contains<R: Record>(repository: &SharedRepository<R>, id: &R::Id) -> bool {
    match repository.list().await {
        Ok(records) => records.iter().any(|r| r.id() == id),
        Err(_) => false,
    }
}

/// Identifiers arrive as path text; string ids take it verbatim, numeric
/// ids must parse.
fn parse_id<R: Record>(raw: &str) -> Option<R::Id> {
    serde_json::from_value(Value::String(raw.to_string()))
        .or_else(|_| serde_json::from_str(raw))
        .ok()
}

fn error_response(err: RepositoryError) -> Response {
    error!(error = %err, "repository operation failed");
    let body = json!({ "error": err.to_string() });
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

//! RemoteRepository - CRUD against a REST service.
//!
//! Routes, relative to `{api_url}/{R::ENDPOINT}`:
//!
//! - `GET /` - list
//! - `POST /` - create, body = draft, response = created record
//! - `PUT /{id}` - update
//! - `DELETE /{id}` - delete
//!
//! Payloads pass the same per-record decode and validation as local loads.
//! `list` never fails: any transport, status or decode failure degrades to
//! the default dataset. Mutations report a typed [`RepositoryError`]. A
//! `404` on update or delete is a no-op, as it is locally.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::{decode_record, decode_records, Record};

use super::error::RepositoryError;
use super::repository::Repository;

/// Repository backed by a remote REST service.
pub struct RemoteRepository<R> {
    client: Client,
    base: Url,
    defaults: Vec<R>,
}

impl<R: Record> RemoteRepository<R> {
    /// Create a repository for `R` under `api_url`, degrading `list` to `defaults`.
    pub fn new(client: Client, api_url: &str, defaults: Vec<R>) -> Result<Self, RepositoryError> {
        let invalid = |reason: String| RepositoryError::InvalidUrl {
            url: api_url.to_string(),
            reason,
        };

        let mut base = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
        base.path_segments_mut()
            .map_err(|()| invalid("address cannot carry a path".into()))?
            .pop_if_empty()
            .push(R::ENDPOINT);

        Ok(Self {
            client,
            base,
            defaults,
        })
    }

    /// Address of the collection, e.g. `http://localhost:5000/api/routes`.
    pub fn url(&self) -> &Url {
        &self.base
    }

    pub fn defaults(&self) -> &[R] {
        &self.defaults
    }

    fn record_url(&self, id: &R::Id) -> Result<Url, RepositoryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| RepositoryError::InvalidUrl {
                url: self.base.to_string(),
                reason: "address cannot carry a path".into(),
            })?
            .push(&id.to_string());
        Ok(url)
    }

    async fn fetch_all(&self) -> Result<Vec<R>, RepositoryError> {
        let response = self
            .client
            .get(self.base.clone())
            .send()
            .await
            .map_err(|source| transport("list", &self.base, source))?;
        let response = check_status("list", &self.base, response)?;
        let items: Vec<Value> = decode("list", &self.base, response).await?;
        Ok(decode_records(self.base.as_str(), items))
    }
}

fn transport(operation: &'static str, url: &Url, source: reqwest::Error) -> RepositoryError {
    RepositoryError::Transport {
        operation,
        url: url.to_string(),
        source,
    }
}

fn check_status(
    operation: &'static str,
    url: &Url,
    response: Response,
) -> Result<Response, RepositoryError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(RepositoryError::Status {
            operation,
            url: url.to_string(),
            status: response.status().as_u16(),
        })
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    url: &Url,
    response: Response,
) -> Result<T, RepositoryError> {
    let body = response
        .bytes()
        .await
        .map_err(|source| transport(operation, url, source))?;
    serde_json::from_slice(&body).map_err(|e| RepositoryError::Decode {
        operation,
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl<R: Record> Repository<R> for RemoteRepository<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        match self.fetch_all().await {
            Ok(records) => {
                debug!(url = %self.base, count = records.len(), "fetched records");
                Ok(records)
            }
            Err(err) => {
                warn!(
                    url = %self.base,
                    error = %err,
                    "remote list failed, serving default dataset"
                );
                Ok(self.defaults.clone())
            }
        }
    }

    async fn create(&self, draft: R) -> Result<R, RepositoryError> {
        let response = self
            .client
            .post(self.base.clone())
            .json(&draft)
            .send()
            .await
            .map_err(|source| transport("create", &self.base, source))?;
        let response = check_status("create", &self.base, response)?;
        let body: Value = decode("create", &self.base, response).await?;
        let created: R = decode_record(body).map_err(|reason| RepositoryError::Decode {
            operation: "create",
            url: self.base.to_string(),
            reason,
        })?;

        debug!(url = %self.base, id = %created.id(), "record created");
        Ok(created)
    }

    async fn update(&self, record: R) -> Result<(), RepositoryError> {
        let url = self.record_url(record.id())?;
        let response = self
            .client
            .put(url.clone())
            .json(&record)
            .send()
            .await
            .map_err(|source| transport("update", &url, source))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(url = %url, "update target not found");
            return Ok(());
        }
        check_status("update", &url, response)?;
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> Result<(), RepositoryError> {
        let url = self.record_url(id)?;
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .map_err(|source| transport("delete", &url, source))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(url = %url, "delete target not found");
            return Ok(());
        }
        check_status("delete", &url, response)?;
        Ok(())
    }
}

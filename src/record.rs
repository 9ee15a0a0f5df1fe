//! Records - the typed entities stored inside collections.
//!
//! ## Example
//!
//! ```ignore
//! use shopvault::Record;
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "mv_routes", prefix = "route")]
//! struct Route {
//!     pub id: String,
//!     pub title: String,
//! }
//! ```

use std::fmt::{Debug, Display};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Identifier of a record, unique within its collection.
pub trait RecordId:
    Serialize + DeserializeOwned + Clone + PartialEq + Display + Debug + Send + Sync
{
    /// Build a fresh identifier from a generator stamp.
    fn from_stamp(prefix: &str, stamp: u64) -> Self;
}

impl RecordId for String {
    fn from_stamp(prefix: &str, stamp: u64) -> Self {
        if prefix.is_empty() {
            stamp.to_string()
        } else {
            format!("{}-{}", prefix, stamp)
        }
    }
}

impl RecordId for u64 {
    fn from_stamp(_prefix: &str, stamp: u64) -> Self {
        stamp
    }
}

impl RecordId for i64 {
    fn from_stamp(_prefix: &str, stamp: u64) -> Self {
        i64::try_from(stamp).unwrap_or(i64::MAX)
    }
}

/// Trait for types that can be stored in a collection.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: RecordId;

    /// Storage key of the collection holding this record type.
    const COLLECTION: &'static str;

    /// Path segment of this record type on the remote service.
    const ENDPOINT: &'static str;

    /// Prefix used when generating string identifiers.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Reject a decoded record that is structurally valid JSON but not a
    /// usable entity. Rejected records are dropped when a collection is loaded.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Decode one record and run its validation.
pub(crate) fn decode_record<R: Record>(value: Value) -> Result<R, String> {
    let record = serde_json::from_value::<R>(value).map_err(|e| e.to_string())?;
    record.validate()?;
    Ok(record)
}

/// Decode an array of records, dropping the ones that do not decode or do
/// not validate. `source` names where the items came from in the logs.
pub(crate) fn decode_records<R: Record>(source: &str, items: Vec<Value>) -> Vec<R> {
    let total = items.len();

    let records: Vec<R> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match decode_record::<R>(item) {
            Ok(record) => Some(record),
            Err(reason) => {
                warn!(source, index, reason = %reason, "dropping invalid record");
                None
            }
        })
        .collect();

    if records.len() != total {
        debug!(source, kept = records.len(), total, "collection repaired on load");
    }
    records
}

//! Storage and repository integration tests.

mod support;
mod store;
mod local;
mod concurrency;
mod file;

#[cfg(feature = "http")]
mod remote;

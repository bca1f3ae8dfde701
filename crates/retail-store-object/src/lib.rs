//! Object-storage backend for the retail data feed.
//!
//! Wraps any [`object_store::ObjectStore`] (in-memory, local filesystem,
//! Google Cloud Storage, S3) behind the [`retail_core::store::BlobStore`]
//! trait.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::ObjectBlobStore;

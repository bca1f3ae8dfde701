//! Core types and generators for the synthetic retail data feed.
//!
//! This crate is deliberately free of HTTP, CSV and object-storage
//! dependencies. It knows how to enumerate the partitions a run owes, how to
//! fabricate the three correlated datasets for a partition, and where each
//! dataset lives in a bucket. Persisting them is the job of a [`BlobStore`]
//! implementation.
//!
//! [`BlobStore`]: store::BlobStore

pub mod archetype;
pub mod catalog;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod partition;
pub mod record;
pub mod sales;
pub mod store;

pub use error::{Error, Result};

//! The `BlobStore` trait: the only view of object storage the generators need.
//!
//! Implemented by storage backends (e.g. `retail-store-object`). The
//! orchestrator depends on this abstraction, not on any concrete bucket.

use std::future::Future;

/// A key-addressed store of text objects.
///
/// Keys are `/`-separated relative paths such as
/// `sales_data/date=2025-01-01/hour=00/sales_data_for_2025-01-01-00.csv`.
///
/// All methods return `Send` futures so the trait can be driven from axum
/// handlers on a multi-threaded runtime.
pub trait BlobStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether an object exists at `key`.
  fn exists<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Read the object at `key` as UTF-8 text. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write `body` to `key` as a CSV object, replacing anything already there.
  fn put_csv<'a>(
    &'a self,
    key: &'a str,
    body: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

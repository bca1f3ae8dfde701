//! Error type for `retail-store-object`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("object store error: {0}")]
  ObjectStore(#[from] object_store::Error),

  #[error("unsupported storage URL: {0}")]
  UnsupportedUrl(String),

  #[error("object {key} is not valid UTF-8")]
  NotUtf8 { key: String },

  #[error("cannot prepare local storage root: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

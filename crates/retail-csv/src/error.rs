//! Error types for the retail-csv codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("arrow error: {0}")]
  Arrow(#[from] arrow_schema::ArrowError),

  #[error("record conversion error: {0}")]
  Records(#[from] serde_arrow::Error),

  #[error("CSV output is not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

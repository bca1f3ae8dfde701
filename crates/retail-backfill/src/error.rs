//! Error type for a generation run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("generation error: {0}")]
  Core(#[from] retail_core::Error),

  #[error("csv error: {0}")]
  Csv(#[from] retail_csv::Error),

  #[error("storage error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("invalid configuration: {0}")]
  Config(String),

  #[error("unknown generator {0:?}; expected \"hourly\" or \"daily\"")]
  UnknownGenerator(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

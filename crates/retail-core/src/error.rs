//! Error types for `retail-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot build a static catalog from an empty archetype list")]
  NoArchetypes,

  #[error("cannot generate sales for partition {0}: its catalog is empty")]
  EmptyCatalog(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

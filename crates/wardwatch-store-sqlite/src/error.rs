//! Error type for `wardwatch-store-sqlite`.

use thiserror::Error;
use wardwatch_core::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] wardwatch_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  fn domain(&self) -> Option<&wardwatch_core::Error> {
    match self {
      Error::Core(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

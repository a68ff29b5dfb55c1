//! Error types for `wardwatch-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown {kind} label: {value:?}")]
  UnknownVariant { kind: &'static str, value: String },

  #[error("bed not found: {0}")]
  BedNotFound(i64),

  #[error("unit not found: {0}")]
  UnitNotFound(i64),

  #[error("alert not found: {0}")]
  AlertNotFound(i64),

  #[error("alert {0} is already acknowledged")]
  AlreadyAcknowledged(i64),

  #[error("alert {0} is already resolved")]
  AlreadyResolved(i64),

  /// A bed holding a patient must be `occupied`.
  #[error("bed with a patient must be occupied, not {0}")]
  PatientOnUnoccupiedBed(crate::enums::BedStatus),

  #[error("{0} must not be blank")]
  Blank(&'static str),
}

/// Coarse classification used by outer layers to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  NotFound,
  Invalid,
  Conflict,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::BedNotFound(_) | Error::UnitNotFound(_) | Error::AlertNotFound(_) => {
        ErrorKind::NotFound
      }
      Error::AlreadyAcknowledged(_) | Error::AlreadyResolved(_) => ErrorKind::Conflict,
      Error::UnknownVariant { .. } | Error::PatientOnUnoccupiedBed(_) | Error::Blank(_) => {
        ErrorKind::Invalid
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for `ofivote-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown weekday name: {0:?}")]
  InvalidWeekday(String),

  #[error("unknown week kind: {0:?}")]
  InvalidWeekKind(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

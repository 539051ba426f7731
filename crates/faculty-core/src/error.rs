//! Error types for `faculty-core`.

use thiserror::Error;

/// The outcome of a failed catalog operation.
///
/// `Validation` and `NotFound` are the only kinds produced by catalog logic.
/// `Store` wraps a transport failure of the backing [`RecordStore`] and never
/// originates here.
///
/// [`RecordStore`]: crate::store::RecordStore
#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  pub(crate) fn not_found(kind: &str, key: &str, value: &str) -> Self {
    Self::NotFound(format!("{kind} with {key}={value} not found"))
  }

  pub(crate) fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  pub fn is_validation(&self) -> bool { matches!(self, Self::Validation(_)) }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error type for `faculty-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// Table names are interpolated into SQL, so only `[a-z_]+` is accepted.
  #[error("invalid table name: {0:?}")]
  InvalidTable(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

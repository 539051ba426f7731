//! SQLite backend for the faculty registry.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. One [`SqliteDatabase`] owns the
//! connection; each catalog gets its own table through
//! [`SqliteDatabase::table`].

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{SqliteDatabase, SqliteRecordStore};

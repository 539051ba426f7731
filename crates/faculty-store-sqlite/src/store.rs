//! [`SqliteDatabase`] and [`SqliteRecordStore`] — the SQLite implementation of
//! [`RecordStore`].

use std::{marker::PhantomData, path::Path, sync::Arc};

use faculty_core::RecordStore;
use rusqlite::OptionalExtension as _;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::{
  Error, Result,
  encode::{decode_record, encode_record},
  schema::{PRAGMAS, TableSql, is_valid_table},
};

// ─── Database ────────────────────────────────────────────────────────────────

/// A single SQLite file holding one table per catalog.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteDatabase {
  conn: tokio_rusqlite::Connection,
}

impl SqliteDatabase {
  /// Open (or create) a database at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let db = Self { conn };
    db.init().await?;
    Ok(db)
  }

  /// Open an in-memory database — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let db = Self { conn };
    db.init().await?;
    Ok(db)
  }

  async fn init(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Create `name` if it does not exist and return a store bound to it.
  ///
  /// The store shares this database's connection.
  pub async fn table<R>(&self, name: &str) -> Result<SqliteRecordStore<R>> {
    if !is_valid_table(name) {
      return Err(Error::InvalidTable(name.to_owned()));
    }

    let sql = Arc::new(TableSql::new(name));
    let ddl = sql.create.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&ddl)?;
        Ok(())
      })
      .await?;

    info!(table = name, "table ready");
    Ok(SqliteRecordStore {
      conn:    self.conn.clone(),
      sql,
      _record: PhantomData,
    })
  }

  /// Shut the connection down. Stores obtained from [`table`](Self::table)
  /// fail with a database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    info!("database closed");
    Ok(())
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// One catalog table. Values are stored as JSON.
pub struct SqliteRecordStore<R> {
  conn:    tokio_rusqlite::Connection,
  sql:     Arc<TableSql>,
  _record: PhantomData<fn() -> R>,
}

impl<R> Clone for SqliteRecordStore<R> {
  fn clone(&self) -> Self {
    Self {
      conn:    self.conn.clone(),
      sql:     self.sql.clone(),
      _record: PhantomData,
    }
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl<R> RecordStore<R> for SqliteRecordStore<R>
where
  R: Serialize + DeserializeOwned + Send + Sync + 'static,
{
  type Error = Error;

  async fn get(&self, id: &str) -> Result<Option<R>> {
    let sql    = self.sql.get.clone();
    let id_str = id.to_owned();

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    raw.as_deref().map(decode_record).transpose()
  }

  async fn put(&self, id: &str, record: R) -> Result<()> {
    let sql        = self.sql.put.clone();
    let id_str     = id.to_owned();
    let value_json = encode_record(&record)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params![id_str, value_json])?;
        Ok(())
      })
      .await?;

    debug!(id, "row written");
    Ok(())
  }

  async fn remove(&self, id: &str) -> Result<Option<R>> {
    let sql    = self.sql.remove.clone();
    let id_str = id.to_owned();

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    raw.as_deref().map(decode_record).transpose()
  }

  async fn values(&self) -> Result<Vec<R>> {
    let sql = self.sql.values.clone();

    let raws: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    raws.iter().map(|raw| decode_record(raw)).collect()
  }
}

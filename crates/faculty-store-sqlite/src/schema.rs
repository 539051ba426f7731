//! SQL for the faculty SQLite store.
//!
//! Every catalog table has the same two-column shape: the record id and the
//! record serialised as JSON. No secondary indexes exist; all filtering
//! happens over full snapshots in `faculty-core`.

/// Connection-level pragmas, executed once at open.
pub const PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous  = NORMAL;
";

/// Whether `name` is safe to interpolate as a table identifier.
pub fn is_valid_table(name: &str) -> bool {
  !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}

/// Prepared SQL text for one catalog table.
#[derive(Debug)]
pub struct TableSql {
  pub create: String,
  pub get:    String,
  pub put:    String,
  pub remove: String,
  pub values: String,
}

impl TableSql {
  /// `table` must already have passed [`is_valid_table`].
  pub fn new(table: &str) -> Self {
    Self {
      // WITHOUT ROWID keeps rows clustered on the primary key, so a plain
      // scan is already in id order.
      create: format!(
        "CREATE TABLE IF NOT EXISTS {table} (
           id         TEXT PRIMARY KEY,
           value_json TEXT NOT NULL
         ) WITHOUT ROWID"
      ),
      get:    format!("SELECT value_json FROM {table} WHERE id = ?1"),
      put:    format!(
        "INSERT INTO {table} (id, value_json) VALUES (?1, ?2)
         ON CONFLICT(id) DO UPDATE SET value_json = excluded.value_json"
      ),
      remove: format!("DELETE FROM {table} WHERE id = ?1 RETURNING value_json"),
      values: format!("SELECT value_json FROM {table} ORDER BY id"),
    }
  }
}

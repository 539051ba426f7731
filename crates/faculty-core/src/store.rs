//! The `RecordStore` trait and an in-memory implementation.
//!
//! The trait is implemented by storage backends (e.g. `faculty-store-sqlite`).
//! [`Catalog`](crate::Catalog) depends on this abstraction, not on any
//! concrete backend.

use std::{
  collections::BTreeMap,
  convert::Infallible,
  future::Future,
  sync::{PoisonError, RwLock},
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// An ordered key to record mapping.
///
/// Logical failure is expressed by absence: `get` and `remove` return `None`
/// for unknown ids and `put` always replaces. `Self::Error` exists only for
/// transport failures of backends that do I/O.
///
/// All methods return `Send` futures so stores can be shared across a
/// multi-threaded runtime.
pub trait RecordStore<R>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Point lookup. No side effects.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + 'a;

  /// Insert or replace the record stored under `id`.
  fn put<'a>(
    &'a self,
    id: &'a str,
    record: R,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove `id`, returning the record it held.
  fn remove<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + 'a;

  /// Every stored record, ascending by id.
  fn values(&self) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// A non-durable store backed by a [`BTreeMap`].
#[derive(Debug)]
pub struct MemoryStore<R> {
  records: RwLock<BTreeMap<String, R>>,
}

impl<R> MemoryStore<R> {
  pub fn new() -> Self { Self { records: RwLock::new(BTreeMap::new()) } }

  pub fn len(&self) -> usize {
    self.records.read().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<R> Default for MemoryStore<R> {
  fn default() -> Self { Self::new() }
}

impl<R> RecordStore<R> for MemoryStore<R>
where
  R: Clone + Send + Sync,
{
  type Error = Infallible;

  async fn get(&self, id: &str) -> Result<Option<R>, Infallible> {
    let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
    Ok(records.get(id).cloned())
  }

  async fn put(&self, id: &str, record: R) -> Result<(), Infallible> {
    let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
    records.insert(id.to_owned(), record);
    Ok(())
  }

  async fn remove(&self, id: &str) -> Result<Option<R>, Infallible> {
    let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
    Ok(records.remove(id))
  }

  async fn values(&self) -> Result<Vec<R>, Infallible> {
    let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
    Ok(records.values().cloned().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn put_replaces_and_values_are_key_ordered() {
    let store = MemoryStore::new();
    store.put("b", 2).await.unwrap();
    store.put("a", 1).await.unwrap();
    store.put("b", 3).await.unwrap();

    assert_eq!(store.values().await.unwrap(), vec![1, 3]);
    assert_eq!(store.len(), 2);
  }

  #[tokio::test]
  async fn remove_returns_previous_value_once() {
    let store = MemoryStore::new();
    store.put("a", "x".to_owned()).await.unwrap();

    assert_eq!(store.remove("a").await.unwrap().as_deref(), Some("x"));
    assert!(store.remove("a").await.unwrap().is_none());
    assert!(store.get("a").await.unwrap().is_none());
    assert!(store.is_empty());
  }
}

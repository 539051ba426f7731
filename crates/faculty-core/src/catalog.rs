//! [`Catalog`]: the create/read/update/delete surface over one record store.
//!
//! A catalog exclusively owns its store. Updates and deletes run under a
//! per-catalog write lock so that the lookup-merge-store sequence of an update
//! cannot interleave with another write and lose it. Creates write a fresh id
//! and reads take no lock.

use std::{marker::PhantomData, sync::Arc};

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
  Error, Result,
  clock::{Clock, IdGenerator, SystemClock, UuidGenerator},
  record::{FieldMask, Record, is_present, stamp},
  store::RecordStore,
};

/// One independently-owned collection of records of type `R`.
pub struct Catalog<R, S> {
  store:   S,
  clock:   Arc<dyn Clock>,
  ids:     Arc<dyn IdGenerator>,
  writes:  Mutex<()>,
  _record: PhantomData<fn() -> R>,
}

impl<R, S> Catalog<R, S>
where
  R: Record,
  S: RecordStore<R>,
{
  /// A catalog stamping system time and UUID v4 identifiers.
  pub fn new(store: S) -> Self {
    Self::with_sources(store, Arc::new(SystemClock::new()), Arc::new(UuidGenerator))
  }

  pub fn with_sources(
    store: S,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
  ) -> Self {
    Self { store, clock, ids, writes: Mutex::new(()), _record: PhantomData }
  }

  pub fn store(&self) -> &S { &self.store }

  /// Validate `draft`, assign a fresh id and `created_at`, and store it.
  pub async fn create(&self, draft: R::Draft) -> Result<R> {
    let id = self.ids.next_id();
    let record = R::from_draft(id, self.clock.now_nanos(), draft)
      .ok_or_else(|| Error::validation("all fields are required"))?;

    self
      .store
      .put(record.id(), record.clone())
      .await
      .map_err(Error::store)?;

    info!(kind = R::KIND, id = record.id(), "record created");
    Ok(record)
  }

  pub async fn get(&self, id: &str) -> Result<R> {
    debug!(kind = R::KIND, id, "get");
    self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::not_found(R::KIND, "id", id))
  }

  /// Every record in store order.
  pub async fn list(&self) -> Result<Vec<R>> {
    let records = self.store.values().await.map_err(Error::store)?;
    debug!(kind = R::KIND, count = records.len(), "snapshot");
    Ok(records)
  }

  /// Merge `patch` over the stored record. Fields the patch does not supply
  /// keep their prior values.
  pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R> {
    if !is_present(id) {
      return Err(Error::validation("id is required"));
    }
    if patch.is_empty() {
      return Err(Error::validation("at least one field must be supplied"));
    }

    let _guard = self.writes.lock().await;

    let existing = self.get(id).await?;
    let updated_at = stamp(self.clock.now_nanos(), &existing);
    let merged = existing.merge(patch, updated_at);

    self
      .store
      .put(id, merged.clone())
      .await
      .map_err(Error::store)?;

    info!(kind = R::KIND, id, updated_at, "record updated");
    Ok(merged)
  }

  /// [`update`](Self::update) restricted to one field whose new `value` must
  /// be non-empty.
  pub(crate) async fn update_field(
    &self,
    id: &str,
    value: &str,
    patch: R::Patch,
  ) -> Result<R> {
    if !is_present(id) || !is_present(value) {
      return Err(Error::validation("id and value are required"));
    }
    self.update(id, patch).await
  }

  /// Remove the record, returning what was stored.
  pub async fn delete(&self, id: &str) -> Result<R> {
    let _guard = self.writes.lock().await;

    let removed = self
      .store
      .remove(id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| Error::not_found(R::KIND, "id", id))?;

    info!(kind = R::KIND, id, "record deleted");
    Ok(removed)
  }
}

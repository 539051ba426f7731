//! The contract shared by every record type a [`Catalog`](crate::Catalog)
//! can hold, plus the timestamp and field-merge helpers both catalogs use.

use serde::{Serialize, de::DeserializeOwned};

/// A record stored under its own generated id.
pub trait Record:
  Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
  /// Creation payload: every required field, no id or timestamps.
  type Draft: Send + 'static;
  /// Partial-update payload.
  type Patch: FieldMask + Send + 'static;

  /// Human-readable record kind used in error messages (e.g. `"Lecturer"`).
  const KIND: &'static str;

  fn id(&self) -> &str;
  fn name(&self) -> &str;
  fn created_at(&self) -> i64;
  fn updated_at(&self) -> Option<i64>;

  /// Build a fresh record, or `None` when a required field is missing or
  /// blank.
  fn from_draft(id: String, created_at: i64, draft: Self::Draft) -> Option<Self>;

  /// Return a new value with the supplied patch fields applied and
  /// `updated_at` set. `self` is left untouched.
  fn merge(&self, patch: Self::Patch, updated_at: i64) -> Self;

  /// The latest of `created_at` and `updated_at`.
  fn last_modified(&self) -> i64 {
    self.updated_at().unwrap_or_else(|| self.created_at())
  }
}

/// An explicit record of which optional fields an update supplies.
pub trait FieldMask {
  /// `true` when no field is supplied.
  fn is_empty(&self) -> bool;
}

/// A string counts as present when it is not blank.
pub(crate) fn is_present(value: &str) -> bool { !value.trim().is_empty() }

/// Unwrap a required draft field, rejecting absence and blanks.
pub(crate) fn required(value: Option<String>) -> Option<String> {
  value.filter(|v| is_present(v))
}

/// Whether a patch slot carries a usable value. Blank strings are treated
/// the same as omission.
pub(crate) fn supplied(value: &Option<String>) -> bool {
  value.as_deref().is_some_and(is_present)
}

/// Pick the supplied value, or keep the prior one.
pub(crate) fn merge_field(prior: &str, value: Option<String>) -> String {
  required(value).unwrap_or_else(|| prior.to_owned())
}

/// The `updated_at` to stamp on a write: never earlier than the record's
/// previous modification time.
pub(crate) fn stamp(now: i64, prior: &impl Record) -> i64 {
  now.max(prior.last_modified())
}

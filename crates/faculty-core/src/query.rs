//! The stateless query layer.
//!
//! Every function takes an owned snapshot (as returned by
//! [`RecordStore::values`](crate::store::RecordStore::values)) and returns a
//! new sequence. Nothing here can fail: no match is an empty `Vec`.

use std::cmp::Ordering;

use feruca::Collator;

use crate::record::Record;

/// Keep the records matching `predicate`, preserving snapshot order.
pub fn filter<R>(records: Vec<R>, predicate: impl Fn(&R) -> bool) -> Vec<R> {
  records.into_iter().filter(|r| predicate(r)).collect()
}

/// Number of records matching `predicate`.
pub fn count<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
  records.iter().filter(|r| predicate(r)).count()
}

/// Case-insensitive substring search on `name`. An empty query matches every
/// record.
pub fn search_by_name<R: Record>(records: Vec<R>, query: &str) -> Vec<R> {
  let needle = query.to_lowercase();
  filter(records, |r| r.name().to_lowercase().contains(&needle))
}

/// Unicode Collation Algorithm order under the CLDR root locale. Accents and
/// case only break ties between otherwise equal names, and lowercase sorts
/// first.
pub fn collate(a: &str, b: &str) -> Ordering {
  Collator::default().collate(a, b)
}

/// Stable ascending sort by `name` under [`collate`].
pub fn sort_by_name<R: Record>(mut records: Vec<R>) -> Vec<R> {
  let mut collator = Collator::default();
  records.sort_by(|a, b| collator.collate(a.name(), b.name()));
  records
}

/// Return page `page` (1-based) of `page_size` records.
///
/// The window `[(page-1)*page_size, page*page_size)` is clipped to the
/// sequence, so non-positive or oversized inputs produce an empty page rather
/// than an error.
pub fn paginate<R>(records: Vec<R>, page: i64, page_size: i64) -> Vec<R> {
  let len = i64::try_from(records.len()).unwrap_or(i64::MAX);
  let start = page.saturating_sub(1).saturating_mul(page_size);
  let end = start.saturating_add(page_size);

  let start = usize::try_from(start.clamp(0, len)).unwrap_or(0);
  let end = usize::try_from(end.clamp(0, len)).unwrap_or(0);
  if start >= end {
    return Vec::new();
  }

  records.into_iter().skip(start).take(end - start).collect()
}

//! Seams for the host clock and identifier generation.
//!
//! Catalogs never read the system clock or mint identifiers directly; they go
//! through these traits so tests can substitute deterministic sources.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// A monotonically non-decreasing source of nanoseconds since the Unix epoch.
pub trait Clock: Send + Sync {
  fn now_nanos(&self) -> i64;
}

/// Wall-clock time that never steps backwards, even if the host clock does.
#[derive(Debug, Default)]
pub struct SystemClock {
  last: AtomicI64,
}

impl SystemClock {
  pub fn new() -> Self { Self::default() }
}

impl Clock for SystemClock {
  fn now_nanos(&self) -> i64 {
    let wall = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
    let prev = self.last.fetch_max(wall, Ordering::SeqCst);
    prev.max(wall)
  }
}

/// Produces opaque identifiers that are unique within a catalog.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Hyphenated lowercase UUID v4 strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
  fn next_id(&self) -> String { Uuid::new_v4().hyphenated().to_string() }
}

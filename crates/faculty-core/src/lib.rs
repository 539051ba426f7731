//! Core types and trait definitions for the faculty registry.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the two record types, the [`RecordStore`](store::RecordStore) abstraction,
//! the generic [`Catalog`](catalog::Catalog) and the stateless query layer.

pub mod catalog;
pub mod clock;
pub mod course_unit;
pub mod error;
pub mod lecturer;
pub mod query;
pub mod record;
pub mod store;

pub use catalog::Catalog;
pub use course_unit::{CourseUnit, CourseUnitCatalog, CourseUnitDraft, CourseUnitPatch};
pub use error::{Error, Result};
pub use lecturer::{Lecturer, LecturerCatalog, LecturerDraft, LecturerPatch};
pub use store::{MemoryStore, RecordStore};

#[cfg(test)]
mod tests;

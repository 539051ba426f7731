//! Lecturer records and their derived queries.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
  Catalog, Error, Result,
  query,
  record::{FieldMask, Record, merge_field, required, supplied},
  store::RecordStore,
};

// ─── Types ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
  pub id:         String,
  pub name:       String,
  /// Not guaranteed unique.
  pub email:      String,
  /// ISO-8601 calendar date, e.g. `2020-05-01`.
  pub hire_date:  String,
  pub department: String,
  pub created_at: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<i64>,
}

/// Payload for creating a lecturer. Every field is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerDraft {
  pub name:       Option<String>,
  pub email:      Option<String>,
  pub hire_date:  Option<String>,
  pub department: Option<String>,
}

impl LecturerDraft {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    hire_date: impl Into<String>,
    department: impl Into<String>,
  ) -> Self {
    Self {
      name:       Some(name.into()),
      email:      Some(email.into()),
      hire_date:  Some(hire_date.into()),
      department: Some(department.into()),
    }
  }
}

/// Field mask for a lecturer update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LecturerPatch {
  pub name:       Option<String>,
  pub email:      Option<String>,
  pub hire_date:  Option<String>,
  pub department: Option<String>,
}

impl FieldMask for LecturerPatch {
  fn is_empty(&self) -> bool {
    ![&self.name, &self.email, &self.hire_date, &self.department]
      .into_iter()
      .any(supplied)
  }
}

impl Record for Lecturer {
  type Draft = LecturerDraft;
  type Patch = LecturerPatch;

  const KIND: &'static str = "Lecturer";

  fn id(&self) -> &str { &self.id }

  fn name(&self) -> &str { &self.name }

  fn created_at(&self) -> i64 { self.created_at }

  fn updated_at(&self) -> Option<i64> { self.updated_at }

  fn from_draft(id: String, created_at: i64, draft: LecturerDraft) -> Option<Self> {
    Some(Self {
      id,
      name: required(draft.name)?,
      email: required(draft.email)?,
      hire_date: required(draft.hire_date)?,
      department: required(draft.department)?,
      created_at,
      updated_at: None,
    })
  }

  fn merge(&self, patch: LecturerPatch, updated_at: i64) -> Self {
    Self {
      id:         self.id.clone(),
      name:       merge_field(&self.name, patch.name),
      email:      merge_field(&self.email, patch.email),
      hire_date:  merge_field(&self.hire_date, patch.hire_date),
      department: merge_field(&self.department, patch.department),
      created_at: self.created_at,
      updated_at: Some(updated_at),
    }
  }
}

impl Lecturer {
  /// Calendar year of `hire_date`, or `None` if it does not parse.
  ///
  /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps.
  pub fn hire_year(&self) -> Option<i32> {
    let raw = self.hire_date.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
      .map(|d| d.year())
      .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.year()))
      .ok()
  }

  /// Whether `hire_date` falls in `[start, end]` by string comparison.
  ///
  /// Only chronological for zero-padded ISO-8601 inputs.
  pub fn hired_between(&self, start: &str, end: &str) -> bool {
    start <= self.hire_date.as_str() && self.hire_date.as_str() <= end
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

pub type LecturerCatalog<S> = Catalog<Lecturer, S>;

impl<S> Catalog<Lecturer, S>
where
  S: RecordStore<Lecturer>,
{
  // ── Single-field updates ─────────────────────────────────────────────

  pub async fn update_name(&self, id: &str, name: &str) -> Result<Lecturer> {
    let patch = LecturerPatch { name: Some(name.to_owned()), ..Default::default() };
    self.update_field(id, name, patch).await
  }

  pub async fn update_email(&self, id: &str, email: &str) -> Result<Lecturer> {
    let patch = LecturerPatch { email: Some(email.to_owned()), ..Default::default() };
    self.update_field(id, email, patch).await
  }

  pub async fn update_department(
    &self,
    id: &str,
    department: &str,
  ) -> Result<Lecturer> {
    let patch = LecturerPatch {
      department: Some(department.to_owned()),
      ..Default::default()
    };
    self.update_field(id, department, patch).await
  }

  // ── Queries ──────────────────────────────────────────────────────────

  pub async fn by_department(&self, department: &str) -> Result<Vec<Lecturer>> {
    let all = self.list().await?;
    Ok(query::filter(all, |l| l.department == department))
  }

  pub async fn count_by_department(&self, department: &str) -> Result<usize> {
    let all = self.list().await?;
    Ok(query::count(&all, |l| l.department == department))
  }

  /// Lecturers hired in `year`. Records with an unparseable `hire_date` are
  /// excluded.
  pub async fn by_hire_year(&self, year: i32) -> Result<Vec<Lecturer>> {
    let all = self.list().await?;
    Ok(query::filter(all, |l| l.hire_year() == Some(year)))
  }

  pub async fn by_department_and_hire_year(
    &self,
    department: &str,
    year: i32,
  ) -> Result<Vec<Lecturer>> {
    let all = self.list().await?;
    Ok(query::filter(all, |l| {
      l.department == department && l.hire_year() == Some(year)
    }))
  }

  /// Inclusive lexical range over `hire_date`.
  pub async fn hired_between(&self, start: &str, end: &str) -> Result<Vec<Lecturer>> {
    let all = self.list().await?;
    Ok(query::filter(all, |l| l.hired_between(start, end)))
  }

  /// First lecturer in store order whose email equals `email` exactly.
  pub async fn by_email(&self, email: &str) -> Result<Lecturer> {
    self
      .list()
      .await?
      .into_iter()
      .find(|l| l.email == email)
      .ok_or_else(|| Error::not_found(Lecturer::KIND, "email", email))
  }

  pub async fn search_by_name(&self, needle: &str) -> Result<Vec<Lecturer>> {
    Ok(query::search_by_name(self.list().await?, needle))
  }

  pub async fn sorted_by_name(&self) -> Result<Vec<Lecturer>> {
    Ok(query::sort_by_name(self.list().await?))
  }

  pub async fn page(&self, page: i64, page_size: i64) -> Result<Vec<Lecturer>> {
    Ok(query::paginate(self.list().await?, page, page_size))
  }
}

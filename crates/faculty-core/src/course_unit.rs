//! Course unit records and their derived queries.
//!
//! `lecturer_id` is a soft reference: a copied identifier that the catalog
//! neither validates nor keeps in sync with the lecturer catalog.

use serde::{Deserialize, Serialize};

use crate::{
  Catalog, Result,
  query,
  record::{FieldMask, Record, merge_field, required, supplied},
  store::RecordStore,
};

// ─── Types ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUnit {
  pub id:          String,
  pub name:        String,
  pub lecturer_id: String,
  /// Free-form label such as `"Fall"` or `"S2"`.
  pub semester:    String,
  pub year:        i32,
  pub created_at:  i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at:  Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUnitDraft {
  pub name:        Option<String>,
  pub lecturer_id: Option<String>,
  pub semester:    Option<String>,
  pub year:        Option<i32>,
}

impl CourseUnitDraft {
  pub fn new(
    name: impl Into<String>,
    lecturer_id: impl Into<String>,
    semester: impl Into<String>,
    year: i32,
  ) -> Self {
    Self {
      name:        Some(name.into()),
      lecturer_id: Some(lecturer_id.into()),
      semester:    Some(semester.into()),
      year:        Some(year),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUnitPatch {
  pub name:        Option<String>,
  pub lecturer_id: Option<String>,
  pub semester:    Option<String>,
  pub year:        Option<i32>,
}

impl FieldMask for CourseUnitPatch {
  fn is_empty(&self) -> bool {
    self.year.is_none()
      && ![&self.name, &self.lecturer_id, &self.semester]
        .into_iter()
        .any(supplied)
  }
}

impl Record for CourseUnit {
  type Draft = CourseUnitDraft;
  type Patch = CourseUnitPatch;

  const KIND: &'static str = "CourseUnit";

  fn id(&self) -> &str { &self.id }

  fn name(&self) -> &str { &self.name }

  fn created_at(&self) -> i64 { self.created_at }

  fn updated_at(&self) -> Option<i64> { self.updated_at }

  fn from_draft(id: String, created_at: i64, draft: CourseUnitDraft) -> Option<Self> {
    Some(Self {
      id,
      name: required(draft.name)?,
      lecturer_id: required(draft.lecturer_id)?,
      semester: required(draft.semester)?,
      year: draft.year?,
      created_at,
      updated_at: None,
    })
  }

  fn merge(&self, patch: CourseUnitPatch, updated_at: i64) -> Self {
    Self {
      id:          self.id.clone(),
      name:        merge_field(&self.name, patch.name),
      lecturer_id: merge_field(&self.lecturer_id, patch.lecturer_id),
      semester:    merge_field(&self.semester, patch.semester),
      year:        patch.year.unwrap_or(self.year),
      created_at:  self.created_at,
      updated_at:  Some(updated_at),
    }
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

pub type CourseUnitCatalog<S> = Catalog<CourseUnit, S>;

impl<S> Catalog<CourseUnit, S>
where
  S: RecordStore<CourseUnit>,
{
  pub async fn update_name(&self, id: &str, name: &str) -> Result<CourseUnit> {
    let patch = CourseUnitPatch { name: Some(name.to_owned()), ..Default::default() };
    self.update_field(id, name, patch).await
  }

  /// Point the unit at another lecturer. The id is not checked against the
  /// lecturer catalog.
  pub async fn update_lecturer_id(
    &self,
    id: &str,
    lecturer_id: &str,
  ) -> Result<CourseUnit> {
    let patch = CourseUnitPatch {
      lecturer_id: Some(lecturer_id.to_owned()),
      ..Default::default()
    };
    self.update_field(id, lecturer_id, patch).await
  }

  pub async fn by_semester(&self, semester: &str) -> Result<Vec<CourseUnit>> {
    let all = self.list().await?;
    Ok(query::filter(all, |c| c.semester == semester))
  }

  pub async fn by_year(&self, year: i32) -> Result<Vec<CourseUnit>> {
    let all = self.list().await?;
    Ok(query::filter(all, |c| c.year == year))
  }

  pub async fn by_semester_and_year(
    &self,
    semester: &str,
    year: i32,
  ) -> Result<Vec<CourseUnit>> {
    let all = self.list().await?;
    Ok(query::filter(all, |c| c.semester == semester && c.year == year))
  }

  /// Units whose `lecturer_id` equals `lecturer_id`, whether or not that
  /// lecturer exists.
  pub async fn by_lecturer(&self, lecturer_id: &str) -> Result<Vec<CourseUnit>> {
    let all = self.list().await?;
    Ok(query::filter(all, |c| c.lecturer_id == lecturer_id))
  }

  pub async fn count_by_lecturer(&self, lecturer_id: &str) -> Result<usize> {
    let all = self.list().await?;
    Ok(query::count(&all, |c| c.lecturer_id == lecturer_id))
  }

  pub async fn count_by_semester(&self, semester: &str) -> Result<usize> {
    let all = self.list().await?;
    Ok(query::count(&all, |c| c.semester == semester))
  }

  pub async fn count_by_year(&self, year: i32) -> Result<usize> {
    let all = self.list().await?;
    Ok(query::count(&all, |c| c.year == year))
  }

  pub async fn search_by_name(&self, needle: &str) -> Result<Vec<CourseUnit>> {
    Ok(query::search_by_name(self.list().await?, needle))
  }

  pub async fn sorted_by_name(&self) -> Result<Vec<CourseUnit>> {
    Ok(query::sort_by_name(self.list().await?))
  }

  pub async fn page(&self, page: i64, page_size: i64) -> Result<Vec<CourseUnit>> {
    Ok(query::paginate(self.list().await?, page, page_size))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draft_requires_year() {
    let mut draft = CourseUnitDraft::new("Algorithms", "l1", "Fall", 2024);
    draft.year = None;
    assert!(CourseUnit::from_draft("c1".into(), 1, draft).is_none());
  }

  #[test]
  fn year_alone_is_a_non_empty_patch() {
    let patch = CourseUnitPatch { year: Some(2025), ..Default::default() };
    assert!(!patch.is_empty());
    assert!(CourseUnitPatch::default().is_empty());
  }

  #[test]
  fn deserializes_camel_case_draft() {
    let draft: CourseUnitDraft = serde_json::from_str(
      r#"{"name":"Compilers","lecturerId":"l9","semester":"S2","year":2023}"#,
    )
    .unwrap();
    let unit = CourseUnit::from_draft("c1".into(), 5, draft).unwrap();
    assert_eq!(unit.lecturer_id, "l9");
    assert_eq!(unit.year, 2023);
    assert!(unit.updated_at.is_none());
  }
}

//! Handlers for `/lecturers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/lecturers` | Store order |
//! | `POST` | `/lecturers` | Body: [`LecturerDraft`]; returns 201 |
//! | `GET`  | `/lecturers/{id}` | 404 if not found |
//! | `PUT`  | `/lecturers/{id}` | Body: [`LecturerPatch`] |
//! | `DELETE` | `/lecturers/{id}` | Returns the removed record |
//! | `PUT`  | `/lecturers/{id}/name` \| `email` \| `department` | Body: `{"value":"..."}` |
//! | `GET`  | `/lecturers/by-department/{department}` | Exact match |
//! | `GET`  | `/lecturers/by-department/{department}/count` | `{"count":n}` |
//! | `GET`  | `/lecturers/by-department/{department}/hire-year/{year}` | |
//! | `GET`  | `/lecturers/by-hire-year/{year}` | |
//! | `GET`  | `/lecturers/by-email/{email}` | 404 if none |
//! | `GET`  | `/lecturers/hired-between?start=&end=` | Inclusive, lexical |
//! | `GET`  | `/lecturers/search?name=` | Case-insensitive |
//! | `GET`  | `/lecturers/sorted` | By name |
//! | `GET`  | `/lecturers/page?page=&pageSize=` | 1-based |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use faculty_core::{
  Lecturer, LecturerCatalog, LecturerDraft, LecturerPatch, RecordStore,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{Body, Path, Query},
  params::{CountBody, PageParams, SearchParams, ValueBody},
};

type CatalogState<S> = State<Arc<LecturerCatalog<S>>>;
type Reply<T> = Result<Json<T>, ApiError>;

// ─── CRUD ─────────────────────────────────────────────────────────────────────

/// `POST /lecturers`
pub async fn create<S>(
  State(catalog): CatalogState<S>,
  Body(body): Body<LecturerDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore<Lecturer> + 'static,
{
  let lecturer = catalog.create(body).await?;
  Ok((StatusCode::CREATED, Json(lecturer)))
}

/// `GET /lecturers`
pub async fn list<S>(State(catalog): CatalogState<S>) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.list().await?))
}

/// `GET /lecturers/{id}`
pub async fn get_one<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.get(&id).await?))
}

/// `PUT /lecturers/{id}`
pub async fn update<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(patch): Body<LecturerPatch>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.update(&id, patch).await?))
}

/// `DELETE /lecturers/{id}`
pub async fn delete_one<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.delete(&id).await?))
}

// ─── Single-field updates ─────────────────────────────────────────────────────

/// `PUT /lecturers/{id}/name`
pub async fn update_name<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(body): Body<ValueBody>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.update_name(&id, &body.value).await?))
}

/// `PUT /lecturers/{id}/email`
pub async fn update_email<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(body): Body<ValueBody>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.update_email(&id, &body.value).await?))
}

/// `PUT /lecturers/{id}/department`
pub async fn update_department<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(body): Body<ValueBody>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.update_department(&id, &body.value).await?))
}

// ─── Queries ──────────────────────────────────────────────────────────────────

/// `GET /lecturers/by-department/{department}`
pub async fn by_department<S>(
  State(catalog): CatalogState<S>,
  Path(department): Path<String>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.by_department(&department).await?))
}

/// `GET /lecturers/by-department/{department}/count`
pub async fn count_by_department<S>(
  State(catalog): CatalogState<S>,
  Path(department): Path<String>,
) -> Reply<CountBody>
where
  S: RecordStore<Lecturer> + 'static,
{
  let count = catalog.count_by_department(&department).await?;
  Ok(Json(CountBody { count }))
}

/// `GET /lecturers/by-department/{department}/hire-year/{year}`
pub async fn by_department_and_hire_year<S>(
  State(catalog): CatalogState<S>,
  Path((department, year)): Path<(String, i32)>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.by_department_and_hire_year(&department, year).await?))
}

/// `GET /lecturers/by-hire-year/{year}`
pub async fn by_hire_year<S>(
  State(catalog): CatalogState<S>,
  Path(year): Path<i32>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.by_hire_year(year).await?))
}

/// `GET /lecturers/by-email/{email}`
pub async fn by_email<S>(
  State(catalog): CatalogState<S>,
  Path(email): Path<String>,
) -> Reply<Lecturer>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.by_email(&email).await?))
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
  pub start: String,
  pub end:   String,
}

/// `GET /lecturers/hired-between?start=YYYY-MM-DD&end=YYYY-MM-DD`
pub async fn hired_between<S>(
  State(catalog): CatalogState<S>,
  Query(range): Query<RangeParams>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.hired_between(&range.start, &range.end).await?))
}

/// `GET /lecturers/search?name=...`
pub async fn search<S>(
  State(catalog): CatalogState<S>,
  Query(params): Query<SearchParams>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.search_by_name(&params.name).await?))
}

/// `GET /lecturers/sorted`
pub async fn sorted<S>(State(catalog): CatalogState<S>) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.sorted_by_name().await?))
}

/// `GET /lecturers/page?page=&pageSize=`
pub async fn page<S>(
  State(catalog): CatalogState<S>,
  Query(params): Query<PageParams>,
) -> Reply<Vec<Lecturer>>
where
  S: RecordStore<Lecturer> + 'static,
{
  Ok(Json(catalog.page(params.page, params.page_size).await?))
}

//! Handlers for `/course-units` endpoints, plus the lecturer cross-reference.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/course-units` | Store order |
//! | `POST` | `/course-units` | Body: [`CourseUnitDraft`]; returns 201 |
//! | `GET`  | `/course-units/{id}` | 404 if not found |
//! | `PUT`  | `/course-units/{id}` | Body: [`CourseUnitPatch`] |
//! | `DELETE` | `/course-units/{id}` | Returns the removed record |
//! | `PUT`  | `/course-units/{id}/name` \| `lecturer-id` | Body: `{"value":"..."}` |
//! | `GET`  | `/course-units/by-semester/{semester}` | Exact match |
//! | `GET`  | `/course-units/by-semester/{semester}/count` | `{"count":n}` |
//! | `GET`  | `/course-units/by-semester/{semester}/year/{year}` | |
//! | `GET`  | `/course-units/by-year/{year}` | |
//! | `GET`  | `/course-units/by-year/{year}/count` | |
//! | `GET`  | `/course-units/by-lecturer/{lecturer_id}` | |
//! | `GET`  | `/course-units/by-lecturer/{lecturer_id}/count` | |
//! | `GET`  | `/lecturers/{id}/course-units` | Same as `by-lecturer` |
//! | `GET`  | `/course-units/search?name=` | Case-insensitive |
//! | `GET`  | `/course-units/sorted` | By name |
//! | `GET`  | `/course-units/page?page=&pageSize=` | 1-based |
//!
//! The lecturer id is never checked against the lecturer catalog.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use faculty_core::{
  CourseUnit, CourseUnitCatalog, CourseUnitDraft, CourseUnitPatch, RecordStore,
};

use crate::{
  error::ApiError,
  extract::{Body, Path, Query},
  params::{CountBody, PageParams, SearchParams, ValueBody},
};

type CatalogState<S> = State<Arc<CourseUnitCatalog<S>>>;
type Reply<T> = Result<Json<T>, ApiError>;

// ─── CRUD ─────────────────────────────────────────────────────────────────────

/// `POST /course-units`
pub async fn create<S>(
  State(catalog): CatalogState<S>,
  Body(body): Body<CourseUnitDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore<CourseUnit> + 'static,
{
  let unit = catalog.create(body).await?;
  Ok((StatusCode::CREATED, Json(unit)))
}

/// `GET /course-units`
pub async fn list<S>(State(catalog): CatalogState<S>) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.list().await?))
}

/// `GET /course-units/{id}`
pub async fn get_one<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
) -> Reply<CourseUnit>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.get(&id).await?))
}

/// `PUT /course-units/{id}`
pub async fn update<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(patch): Body<CourseUnitPatch>,
) -> Reply<CourseUnit>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.update(&id, patch).await?))
}

/// `DELETE /course-units/{id}`
pub async fn delete_one<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
) -> Reply<CourseUnit>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.delete(&id).await?))
}

// ─── Single-field updates ─────────────────────────────────────────────────────

/// `PUT /course-units/{id}/name`
pub async fn update_name<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(body): Body<ValueBody>,
) -> Reply<CourseUnit>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.update_name(&id, &body.value).await?))
}

/// `PUT /course-units/{id}/lecturer-id`
pub async fn update_lecturer_id<S>(
  State(catalog): CatalogState<S>,
  Path(id): Path<String>,
  Body(body): Body<ValueBody>,
) -> Reply<CourseUnit>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.update_lecturer_id(&id, &body.value).await?))
}

// ─── Queries ──────────────────────────────────────────────────────────────────

/// `GET /course-units/by-semester/{semester}`
pub async fn by_semester<S>(
  State(catalog): CatalogState<S>,
  Path(semester): Path<String>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.by_semester(&semester).await?))
}

/// `GET /course-units/by-semester/{semester}/count`
pub async fn count_by_semester<S>(
  State(catalog): CatalogState<S>,
  Path(semester): Path<String>,
) -> Reply<CountBody>
where
  S: RecordStore<CourseUnit> + 'static,
{
  let count = catalog.count_by_semester(&semester).await?;
  Ok(Json(CountBody { count }))
}

/// `GET /course-units/by-semester/{semester}/year/{year}`
pub async fn by_semester_and_year<S>(
  State(catalog): CatalogState<S>,
  Path((semester, year)): Path<(String, i32)>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.by_semester_and_year(&semester, year).await?))
}

/// `GET /course-units/by-year/{year}`
pub async fn by_year<S>(
  State(catalog): CatalogState<S>,
  Path(year): Path<i32>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.by_year(year).await?))
}

/// `GET /course-units/by-year/{year}/count`
pub async fn count_by_year<S>(
  State(catalog): CatalogState<S>,
  Path(year): Path<i32>,
) -> Reply<CountBody>
where
  S: RecordStore<CourseUnit> + 'static,
{
  let count = catalog.count_by_year(year).await?;
  Ok(Json(CountBody { count }))
}

/// `GET /course-units/by-lecturer/{lecturer_id}` and
/// `GET /lecturers/{id}/course-units`
pub async fn by_lecturer<S>(
  State(catalog): CatalogState<S>,
  Path(lecturer_id): Path<String>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.by_lecturer(&lecturer_id).await?))
}

/// `GET /course-units/by-lecturer/{lecturer_id}/count`
pub async fn count_by_lecturer<S>(
  State(catalog): CatalogState<S>,
  Path(lecturer_id): Path<String>,
) -> Reply<CountBody>
where
  S: RecordStore<CourseUnit> + 'static,
{
  let count = catalog.count_by_lecturer(&lecturer_id).await?;
  Ok(Json(CountBody { count }))
}

/// `GET /course-units/search?name=...`
pub async fn search<S>(
  State(catalog): CatalogState<S>,
  Query(params): Query<SearchParams>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.search_by_name(&params.name).await?))
}

/// `GET /course-units/sorted`
pub async fn sorted<S>(State(catalog): CatalogState<S>) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.sorted_by_name().await?))
}

/// `GET /course-units/page?page=&pageSize=`
pub async fn page<S>(
  State(catalog): CatalogState<S>,
  Query(params): Query<PageParams>,
) -> Reply<Vec<CourseUnit>>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Ok(Json(catalog.page(params.page, params.page_size).await?))
}

//! JSON REST API for the faculty registry.
//!
//! Exposes an axum [`Router`] backed by a lecturer catalog and a course unit
//! catalog over any [`RecordStore`]. Handlers only translate requests into
//! catalog calls; every rule lives in `faculty-core`. Transport and tracing
//! layers are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = faculty_api::api_router(lecturers, course_units);
//! ```

pub mod course_units;
pub mod error;
pub mod extract;
pub mod lecturers;
pub mod params;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, put},
};
use faculty_core::{
  CourseUnit, CourseUnitCatalog, Lecturer, LecturerCatalog, RecordStore,
};

pub use error::ApiError;

/// Build the full API router for both catalogs.
///
/// Each catalog is an independent state; the returned `Router<()>` can be
/// nested into any parent router.
pub fn api_router<L, C>(
  lecturers: Arc<LecturerCatalog<L>>,
  course_units: Arc<CourseUnitCatalog<C>>,
) -> Router<()>
where
  L: RecordStore<Lecturer> + 'static,
  C: RecordStore<CourseUnit> + 'static,
{
  lecturer_router(lecturers).merge(course_unit_router(course_units))
}

/// Routes under `/lecturers`.
pub fn lecturer_router<S>(catalog: Arc<LecturerCatalog<S>>) -> Router<()>
where
  S: RecordStore<Lecturer> + 'static,
{
  Router::new()
    .route(
      "/lecturers",
      get(lecturers::list::<S>).post(lecturers::create::<S>),
    )
    .route("/lecturers/sorted", get(lecturers::sorted::<S>))
    .route("/lecturers/page", get(lecturers::page::<S>))
    .route("/lecturers/search", get(lecturers::search::<S>))
    .route("/lecturers/hired-between", get(lecturers::hired_between::<S>))
    .route("/lecturers/by-email/{email}", get(lecturers::by_email::<S>))
    .route("/lecturers/by-hire-year/{year}", get(lecturers::by_hire_year::<S>))
    .route("/lecturers/by-department/{department}", get(lecturers::by_department::<S>))
    .route(
      "/lecturers/by-department/{department}/count",
      get(lecturers::count_by_department::<S>),
    )
    .route(
      "/lecturers/by-department/{department}/hire-year/{year}",
      get(lecturers::by_department_and_hire_year::<S>),
    )
    .route(
      "/lecturers/{id}",
      get(lecturers::get_one::<S>)
        .put(lecturers::update::<S>)
        .delete(lecturers::delete_one::<S>),
    )
    .route("/lecturers/{id}/name", put(lecturers::update_name::<S>))
    .route("/lecturers/{id}/email", put(lecturers::update_email::<S>))
    .route("/lecturers/{id}/department", put(lecturers::update_department::<S>))
    .with_state(catalog)
}

/// Routes under `/course-units`, plus `/lecturers/{id}/course-units`.
pub fn course_unit_router<S>(catalog: Arc<CourseUnitCatalog<S>>) -> Router<()>
where
  S: RecordStore<CourseUnit> + 'static,
{
  Router::new()
    .route(
      "/course-units",
      get(course_units::list::<S>).post(course_units::create::<S>),
    )
    .route("/course-units/sorted", get(course_units::sorted::<S>))
    .route("/course-units/page", get(course_units::page::<S>))
    .route("/course-units/search", get(course_units::search::<S>))
    .route("/course-units/by-semester/{semester}", get(course_units::by_semester::<S>))
    .route(
      "/course-units/by-semester/{semester}/count",
      get(course_units::count_by_semester::<S>),
    )
    .route(
      "/course-units/by-semester/{semester}/year/{year}",
      get(course_units::by_semester_and_year::<S>),
    )
    .route("/course-units/by-year/{year}", get(course_units::by_year::<S>))
    .route("/course-units/by-year/{year}/count", get(course_units::count_by_year::<S>))
    .route("/course-units/by-lecturer/{lecturer_id}", get(course_units::by_lecturer::<S>))
    .route(
      "/course-units/by-lecturer/{lecturer_id}/count",
      get(course_units::count_by_lecturer::<S>),
    )
    .route(
      "/course-units/{id}",
      get(course_units::get_one::<S>)
        .put(course_units::update::<S>)
        .delete(course_units::delete_one::<S>),
    )
    .route("/course-units/{id}/name", put(course_units::update_name::<S>))
    .route("/course-units/{id}/lecturer-id", put(course_units::update_lecturer_id::<S>))
    .route("/lecturers/{id}/course-units", get(course_units::by_lecturer::<S>))
    .with_state(catalog)
}

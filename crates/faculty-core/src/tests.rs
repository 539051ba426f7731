//! Catalog behaviour over [`MemoryStore`] with deterministic time and ids.

use std::sync::{
  Arc,
  atomic::{AtomicI64, AtomicU64, Ordering},
};

use crate::{
  Catalog, CourseUnit, CourseUnitDraft, CourseUnitPatch, Error, Lecturer,
  LecturerDraft, LecturerPatch, MemoryStore, RecordStore,
  clock::{Clock, IdGenerator},
};

/// Advances by 100ns on every read.
#[derive(Default)]
struct SteppingClock(AtomicI64);

impl Clock for SteppingClock {
  fn now_nanos(&self) -> i64 { self.0.fetch_add(100, Ordering::SeqCst) + 100 }
}

/// `id-0001`, `id-0002`, … so store order equals creation order.
#[derive(Default)]
struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
  fn next_id(&self) -> String {
    format!("id-{:04}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
  }
}

fn catalog<R>() -> Catalog<R, MemoryStore<R>>
where
  R: crate::record::Record,
{
  Catalog::with_sources(
    MemoryStore::new(),
    Arc::new(SteppingClock::default()),
    Arc::new(SequentialIds::default()),
  )
}

/// Reads eagerly, then yields before handing the record back, so an
/// unguarded read-modify-write lets another writer observe the same version.
struct YieldingStore<R>(MemoryStore<R>);

impl<R> Default for YieldingStore<R> {
  fn default() -> Self {
    Self(MemoryStore::default())
  }
}

impl<R> RecordStore<R> for YieldingStore<R>
where
  R: Clone + Send + Sync,
{
  type Error = std::convert::Infallible;

  async fn get(&self, id: &str) -> Result<Option<R>, Self::Error> {
    let record = self.0.get(id).await?;
    tokio::task::yield_now().await;
    Ok(record)
  }

  async fn put(&self, id: &str, record: R) -> Result<(), Self::Error> {
    self.0.put(id, record).await
  }

  async fn remove(&self, id: &str) -> Result<Option<R>, Self::Error> {
    self.0.remove(id).await
  }

  async fn values(&self) -> Result<Vec<R>, Self::Error> { self.0.values().await }
}

fn ada() -> LecturerDraft {
  LecturerDraft::new("Ada", "ada@x.edu", "2020-05-01", "CS")
}

async fn seed_lecturers(c: &Catalog<Lecturer, MemoryStore<Lecturer>>) -> Vec<Lecturer> {
  let drafts = [
    LecturerDraft::new("Grace", "grace@x.edu", "2018-09-01", "CS"),
    LecturerDraft::new("Alan", "alan@x.edu", "2020-01-15", "Math"),
    LecturerDraft::new("Barbara", "barbara@x.edu", "2020-11-30", "CS"),
    LecturerDraft::new("Edsger", "shared@x.edu", "2022-03-03", "Physics"),
    LecturerDraft::new("Donald", "shared@x.edu", "not a date", "CS"),
  ];
  let mut out = Vec::new();
  for d in drafts {
    out.push(c.create(d).await.unwrap());
  }
  out
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_round_trips() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  assert_eq!(created.id, "id-0001");
  assert_eq!(created.created_at, 100);
  assert!(created.updated_at.is_none());

  let fetched = c.get(&created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_with_missing_field_is_rejected_and_stores_nothing() {
  let c = catalog::<Lecturer>();
  let mut draft = ada();
  draft.email = None;

  let err = c.create(draft).await.unwrap_err();
  assert!(err.is_validation());
  assert_eq!(err.to_string(), "all fields are required");
  assert!(c.store().is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
  let c = catalog::<Lecturer>();
  let err = c.get("nope").await.unwrap_err();
  assert!(matches!(err, Error::NotFound(_)));
  assert_eq!(err.to_string(), "Lecturer with id=nope not found");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_and_preserves_untouched_fields() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  let patch = LecturerPatch {
    email: Some("ada@cs.x.edu".into()),
    ..Default::default()
  };
  let updated = c.update(&created.id, patch).await.unwrap();

  assert_eq!(updated.email, "ada@cs.x.edu");
  assert_eq!(updated.name, created.name);
  assert_eq!(updated.hire_date, created.hire_date);
  assert_eq!(updated.department, created.department);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at.unwrap() >= created.created_at);

  assert_eq!(c.get(&created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn successive_updates_never_move_updated_at_backwards() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  let first = c.update_name(&created.id, "Ada L.").await.unwrap();
  let second = c.update_name(&created.id, "Ada Lovelace").await.unwrap();
  assert!(second.updated_at >= first.updated_at);
  assert_eq!(second.name, "Ada Lovelace");
}

#[tokio::test]
async fn update_rejects_empty_id_and_empty_patch() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  let patch = LecturerPatch { name: Some("X".into()), ..Default::default() };
  assert!(c.update("", patch).await.unwrap_err().is_validation());
  assert!(
    c.update(&created.id, LecturerPatch::default())
      .await
      .unwrap_err()
      .is_validation()
  );
  assert_eq!(c.get(&created.id).await.unwrap(), created);
}

#[tokio::test]
async fn single_field_update_rejects_empty_value() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  let err = c.update_email(&created.id, "").await.unwrap_err();
  assert!(err.is_validation());
  let err = c.update_department("", "Math").await.unwrap_err();
  assert!(err.is_validation());
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
  let c = catalog::<Lecturer>();
  let err = c.update_department("ghost", "Math").await.unwrap_err();
  assert!(err.is_not_found());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_everything_is_not_found() {
  let c = catalog::<Lecturer>();
  let created = c.create(ada()).await.unwrap();

  let removed = c.delete(&created.id).await.unwrap();
  assert_eq!(removed, created);

  assert!(c.get(&created.id).await.unwrap_err().is_not_found());
  assert!(
    c.update_name(&created.id, "Ada")
      .await
      .unwrap_err()
      .is_not_found()
  );
  assert!(c.delete(&created.id).await.unwrap_err().is_not_found());
}

// ─── Example scenario ────────────────────────────────────────────────────────

#[tokio::test]
async fn ada_moves_to_math_and_leaves() {
  let c = catalog::<Lecturer>();
  let ada = c.create(ada()).await.unwrap();

  let hired_2020 = c.by_hire_year(2020).await.unwrap();
  assert!(hired_2020.iter().any(|l| l.id == ada.id));

  let moved = c.update_department(&ada.id, "Math").await.unwrap();
  assert_eq!(moved.department, "Math");
  assert!(moved.updated_at.is_some());

  let gone = c.delete(&ada.id).await.unwrap();
  assert_eq!(gone.department, "Math");

  let err = c.get(&ada.id).await.unwrap_err();
  assert_eq!(err.to_string(), format!("Lecturer with id={} not found", ada.id));
}

// ─── Lecturer queries ────────────────────────────────────────────────────────

#[tokio::test]
async fn department_filter_matches_count() {
  let c = catalog::<Lecturer>();
  let all = seed_lecturers(&c).await;

  let cs = c.by_department("CS").await.unwrap();
  let expected: Vec<_> = all.into_iter().filter(|l| l.department == "CS").collect();
  assert_eq!(cs, expected);
  assert_eq!(c.count_by_department("CS").await.unwrap(), cs.len());
  assert_eq!(c.count_by_department("cs").await.unwrap(), 0);
}

#[tokio::test]
async fn hire_year_filters_skip_unparseable_dates() {
  let c = catalog::<Lecturer>();
  seed_lecturers(&c).await;

  let names = |v: Vec<Lecturer>| v.into_iter().map(|l| l.name).collect::<Vec<_>>();
  assert_eq!(names(c.by_hire_year(2020).await.unwrap()), ["Alan", "Barbara"]);
  assert_eq!(
    names(c.by_department_and_hire_year("CS", 2020).await.unwrap()),
    ["Barbara"]
  );
  assert!(c.by_hire_year(1970).await.unwrap().is_empty());
}

#[tokio::test]
async fn hired_between_is_lexical_and_inclusive() {
  let c = catalog::<Lecturer>();
  seed_lecturers(&c).await;

  let hits = c.hired_between("2020-01-15", "2020-11-30").await.unwrap();
  let names: Vec<_> = hits.iter().map(|l| l.name.as_str()).collect();
  assert_eq!(names, ["Alan", "Barbara"]);
}

#[tokio::test]
async fn by_email_returns_first_in_store_order() {
  let c = catalog::<Lecturer>();
  seed_lecturers(&c).await;

  assert_eq!(c.by_email("shared@x.edu").await.unwrap().name, "Edsger");
  let err = c.by_email("who@x.edu").await.unwrap_err();
  assert_eq!(err.to_string(), "Lecturer with email=who@x.edu not found");
}

#[tokio::test]
async fn lecturer_search_sort_and_page() {
  let c = catalog::<Lecturer>();
  seed_lecturers(&c).await;

  let hits = c.search_by_name("AR").await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "Barbara");

  let sorted: Vec<_> = c
    .sorted_by_name()
    .await
    .unwrap()
    .into_iter()
    .map(|l| l.name)
    .collect();
  assert_eq!(sorted, ["Alan", "Barbara", "Donald", "Edsger", "Grace"]);

  let second: Vec<_> = c.page(2, 2).await.unwrap().into_iter().map(|l| l.name).collect();
  assert_eq!(second, ["Barbara", "Edsger"]);
  assert!(c.page(0, 2).await.unwrap().is_empty());
}

// ─── Course units ────────────────────────────────────────────────────────────

async fn seed_units(c: &Catalog<CourseUnit, MemoryStore<CourseUnit>>) {
  let drafts = [
    CourseUnitDraft::new("Compilers", "lec-1", "Fall", 2024),
    CourseUnitDraft::new("algorithms", "lec-2", "Spring", 2024),
    CourseUnitDraft::new("Databases", "lec-1", "Fall", 2025),
    CourseUnitDraft::new("Automata", "lec-3", "fall", 2024),
  ];
  for d in drafts {
    c.create(d).await.unwrap();
  }
}

#[tokio::test]
async fn course_unit_round_trip_and_validation() {
  let c = catalog::<CourseUnit>();
  let created = c
    .create(CourseUnitDraft::new("Compilers", "lec-1", "Fall", 2024))
    .await
    .unwrap();
  assert_eq!(c.get(&created.id).await.unwrap(), created);

  let err = c
    .create(CourseUnitDraft { year: None, ..CourseUnitDraft::new("X", "l", "S", 1) })
    .await
    .unwrap_err();
  assert!(err.is_validation());

  let err = c.get("missing").await.unwrap_err();
  assert_eq!(err.to_string(), "CourseUnit with id=missing not found");
}

#[tokio::test]
async fn course_unit_filters_and_counts() {
  let c = catalog::<CourseUnit>();
  seed_units(&c).await;

  let names = |v: Vec<CourseUnit>| v.into_iter().map(|u| u.name).collect::<Vec<_>>();
  assert_eq!(names(c.by_semester("Fall").await.unwrap()), ["Compilers", "Databases"]);
  assert_eq!(
    names(c.by_year(2024).await.unwrap()),
    ["Compilers", "algorithms", "Automata"]
  );
  assert_eq!(
    names(c.by_semester_and_year("Fall", 2024).await.unwrap()),
    ["Compilers"]
  );
  assert_eq!(names(c.by_lecturer("lec-1").await.unwrap()), ["Compilers", "Databases"]);

  assert_eq!(c.count_by_lecturer("lec-1").await.unwrap(), 2);
  assert_eq!(c.count_by_lecturer("nobody").await.unwrap(), 0);
  assert_eq!(c.count_by_semester("fall").await.unwrap(), 1);
  assert_eq!(c.count_by_year(2025).await.unwrap(), 1);
}

#[tokio::test]
async fn course_unit_sort_search_and_reassign() {
  let c = catalog::<CourseUnit>();
  seed_units(&c).await;

  let sorted: Vec<_> = c
    .sorted_by_name()
    .await
    .unwrap()
    .into_iter()
    .map(|u| u.name)
    .collect();
  assert_eq!(sorted, ["algorithms", "Automata", "Compilers", "Databases"]);

  assert_eq!(c.search_by_name("A").await.unwrap().len(), 3);

  let unit = c.by_lecturer("lec-3").await.unwrap().remove(0);
  let moved = c.update_lecturer_id(&unit.id, "lec-9").await.unwrap();
  assert_eq!(moved.lecturer_id, "lec-9");
  assert_eq!(moved.semester, unit.semester);
  assert!(c.by_lecturer("lec-3").await.unwrap().is_empty());

  let patch = CourseUnitPatch { year: Some(2026), ..Default::default() };
  let bumped = c.update(&unit.id, patch).await.unwrap();
  assert_eq!(bumped.year, 2026);
  assert_eq!(bumped.lecturer_id, "lec-9");
}

#[tokio::test]
async fn updates_queue_behind_one_another() {
  let c = Arc::new(catalog::<Lecturer>());
  let created = c.create(ada()).await.unwrap();

  let mut handles = Vec::new();
  for i in 0..16 {
    let c = c.clone();
    let id = created.id.clone();
    handles.push(tokio::spawn(async move {
      c.update_name(&id, &format!("Ada {i}")).await.unwrap()
    }));
  }
  let mut stamps = Vec::new();
  for h in handles {
    stamps.push(h.await.unwrap().updated_at.unwrap());
  }
  stamps.sort();
  stamps.dedup();
  assert_eq!(stamps.len(), 16);

  let values = c.store().values().await.unwrap();
  assert_eq!(values.len(), 1);
}

#[tokio::test]
async fn interleaved_field_updates_are_not_lost() {
  let c = Catalog::with_sources(
    YieldingStore::<Lecturer>::default(),
    Arc::new(SteppingClock::default()),
    Arc::new(SequentialIds::default()),
  );
  let created = c.create(ada()).await.unwrap();

  let (renamed, readdressed) = tokio::join!(
    c.update_name(&created.id, "Ada Lovelace"),
    c.update_email(&created.id, "lovelace@x.edu"),
  );
  renamed.unwrap();
  readdressed.unwrap();

  let stored = c.get(&created.id).await.unwrap();
  assert_eq!(stored.name, "Ada Lovelace");
  assert_eq!(stored.email, "lovelace@x.edu");
  assert_eq!(stored.department, created.department);
}

#[tokio::test]
async fn interleaved_update_and_delete_leave_no_resurrected_record() {
  let c = Catalog::with_sources(
    YieldingStore::<Lecturer>::default(),
    Arc::new(SteppingClock::default()),
    Arc::new(SequentialIds::default()),
  );
  let created = c.create(ada()).await.unwrap();

  let (updated, deleted) = tokio::join!(
    c.update_department(&created.id, "Math"),
    c.delete(&created.id),
  );
  assert_eq!(updated.unwrap().department, "Math");
  assert_eq!(deleted.unwrap().department, "Math");
  assert!(c.store().values().await.unwrap().is_empty());
}

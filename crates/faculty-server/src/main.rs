//! faculty-server binary.
//!
//! Reads `faculty.toml` (or the path given with `--config`), opens the SQLite
//! store, builds the lecturer and course unit catalogs over it, and serves the
//! JSON API until Ctrl-C. The store is closed after the server drains.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use faculty_core::{Catalog, CourseUnit, Lecturer};
use faculty_store_sqlite::SqliteDatabase;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

const LECTURER_TABLE: &str = "lecturers";
const COURSE_UNIT_TABLE: &str = "course_units";

#[derive(Parser)]
#[command(author, version, about = "Faculty registry server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "faculty.toml")]
  config: PathBuf,

  /// Keep all records in memory instead of `store_path`.
  #[arg(long)]
  in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = ServerConfig::load(&cli.config)?;

  let db = if cli.in_memory {
    tracing::warn!("running with an in-memory store; records will not persist");
    SqliteDatabase::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    SqliteDatabase::open(&cfg.store_path)
      .await
      .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?
  };

  let lecturers = Catalog::new(db.table::<Lecturer>(LECTURER_TABLE).await?);
  let course_units = Catalog::new(db.table::<CourseUnit>(COURSE_UNIT_TABLE).await?);

  let app = faculty_api::api_router(Arc::new(lecturers), Arc::new(course_units))
    .layer(TraceLayer::new_for_http());

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  db.close().await.context("failed to close store")?;
  tracing::info!("shut down cleanly");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!("failed to listen for Ctrl-C: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown requested");
}

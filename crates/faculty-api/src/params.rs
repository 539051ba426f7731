//! Request shapes shared by both catalogs' handlers.

use serde::{Deserialize, Serialize};

/// Body of every single-field update: `{"value": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ValueBody {
  #[serde(default)]
  pub value: String,
}

/// `?page=&pageSize=`; defaults to the first page of ten.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
  #[serde(default = "default_page")]
  pub page:      i64,
  #[serde(default = "default_page_size")]
  pub page_size: i64,
}

fn default_page() -> i64 { 1 }

fn default_page_size() -> i64 { 10 }

/// `?name=`; absent means the empty query, which matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  #[serde(default)]
  pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CountBody {
  pub count: usize,
}

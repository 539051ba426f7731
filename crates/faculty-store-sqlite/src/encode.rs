//! Encoding between record values and the `value_json` column.

use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

pub fn encode_record<R: Serialize>(record: &R) -> Result<String> {
  Ok(serde_json::to_string(record)?)
}

pub fn decode_record<R: DeserializeOwned>(json: &str) -> Result<R> {
  Ok(serde_json::from_str(json)?)
}

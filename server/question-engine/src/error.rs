//! Processing errors. Every variant collapses to `success: false` on the wire.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
  #[error("{0}")]
  Read(#[from] std::io::Error),

  #[error("{0}")]
  Utf8(#[from] std::string::FromUtf8Error),

  #[error("{0}")]
  Json(#[from] serde_json::Error),

  #[error("expected a JSON object, found {0}")]
  NotAnObject(&'static str),
}

impl ProcessingError {
  /// Kind name of a non-object top-level JSON value.
  pub fn not_an_object(value: &serde_json::Value) -> Self {
    let kind = match value {
      serde_json::Value::Null => "null",
      serde_json::Value::Bool(_) => "boolean",
      serde_json::Value::Number(_) => "number",
      serde_json::Value::String(_) => "string",
      serde_json::Value::Array(_) => "array",
      serde_json::Value::Object(_) => "object",
    };
    Self::NotAnObject(kind)
  }
}

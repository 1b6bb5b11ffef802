//! Request/response types for the question engine (JSON contract with Node).

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ProcessingError;

/// Input: one JSON object from Node. Unknown fields are silently ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
  /// Missing, null or non-array values read as empty; non-string items are skipped.
  #[serde(default, deserialize_with = "skills_or_empty")]
  pub skills: Vec<String>,
}

impl Request {
  pub fn new(skills: Vec<String>) -> Self {
    Self { skills }
  }

  /// Build a request from an already-parsed JSON value. The value must be an object.
  pub fn from_value(value: Value) -> Result<Self, ProcessingError> {
    if !value.is_object() {
      return Err(ProcessingError::not_an_object(&value));
    }
    Ok(serde_json::from_value(value)?)
  }
}

fn skills_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let skills = match Value::deserialize(deserializer)? {
    Value::Array(items) => items
      .into_iter()
      .filter_map(|item| match item {
        Value::String(s) => Some(s),
        _ => None,
      })
      .collect(),
    _ => Vec::new(),
  };
  Ok(skills)
}

/// Output: one JSON object to stdout for Node to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
  Success { questions: Vec<String> },
  Failure { message: String },
}

impl Response {
  pub fn failure(err: &ProcessingError) -> Self {
    Self::Failure {
      message: err.to_string(),
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success { .. })
  }
}

// Flat shape with the `success` flag first: {"success":true,"questions":[..]}
// or {"success":false,"message":".."}.
impl Serialize for Response {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut s = serializer.serialize_struct("Response", 2)?;
    match self {
      Self::Success { questions } => {
        s.serialize_field("success", &true)?;
        s.serialize_field("questions", questions)?;
      }
      Self::Failure { message } => {
        s.serialize_field("success", &false)?;
        s.serialize_field("message", message)?;
      }
    }
    s.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn missing_skills_defaults_to_empty() {
    let req = Request::from_value(json!({"name": "Ada"})).unwrap();
    assert!(req.skills.is_empty());
  }

  #[test]
  fn wrong_typed_skills_default_to_empty() {
    for skills in [json!("Java"), json!(42), json!(null), json!({"Java": 1}), json!(true)] {
      let req = Request::from_value(json!({ "skills": skills })).unwrap();
      assert!(req.skills.is_empty(), "skills = {}", skills);
    }
  }

  #[test]
  fn non_string_items_are_skipped() {
    let req = Request::from_value(json!({"skills": [1, "Java", null, ["Python"], "Go"]})).unwrap();
    assert_eq!(req.skills, vec!["Java", "Go"]);
  }

  #[test]
  fn top_level_must_be_an_object() {
    let err = Request::from_value(json!(["Java"])).unwrap_err();
    assert!(matches!(err, ProcessingError::NotAnObject("array")));
  }

  #[test]
  fn success_serializes_flag_first() {
    let resp = Response::Success {
      questions: vec!["q1".to_string()],
    };
    assert_eq!(
      serde_json::to_string(&resp).unwrap(),
      r#"{"success":true,"questions":["q1"]}"#
    );
  }

  #[test]
  fn failure_serializes_message() {
    let resp = Response::Failure {
      message: "boom".to_string(),
    };
    assert!(!resp.is_success());
    assert_eq!(
      serde_json::to_string(&resp).unwrap(),
      r#"{"success":false,"message":"boom"}"#
    );
  }
}

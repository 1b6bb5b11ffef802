//! Vintervu Question Engine — fixed keyword rules; no AI, no DB, no network.
//! Used by the binary for stdin/stdout; can also be called as a library.

mod error;
pub mod logging;
mod rules;
mod types;

use std::io::{self, Read, Write};

use tracing::{debug, warn};

pub use error::ProcessingError;
pub use rules::{questions_for, QuestionRule, RULES};
pub use types::{Request, Response};

/// Run the rules on a parsed request and return the response (no I/O).
pub fn run(request: &Request) -> Response {
  let questions = questions_for(&request.skills);
  debug!(
    skills = request.skills.len(),
    questions = questions.len(),
    "matched skills"
  );
  Response::Success { questions }
}

/// Decode, parse and run one raw request. Never fails: faults become a failure response.
pub fn handle(raw: &[u8]) -> Response {
  match parse(raw) {
    Ok(request) => run(&request),
    Err(e) => {
      warn!(error = %e, "request rejected");
      Response::failure(&e)
    }
  }
}

fn parse(raw: &[u8]) -> Result<Request, ProcessingError> {
  let text = String::from_utf8(raw.to_vec())?;
  let value: serde_json::Value = serde_json::from_str(&text)?;
  Request::from_value(value)
}

/// Read `input` to end-of-stream, write exactly one JSON line to `output`.
///
/// Read failures are reported in the response; only write failures are returned.
pub fn serve<R: Read, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
  let mut raw = Vec::new();
  let response = match input.read_to_end(&mut raw) {
    Ok(n) => {
      debug!(bytes = n, "read request");
      handle(&raw)
    }
    Err(e) => {
      let err = ProcessingError::from(e);
      warn!(error = %err, "read failed");
      Response::failure(&err)
    }
  };

  serde_json::to_writer(&mut output, &response)?;
  writeln!(output)?;
  output.flush()
}

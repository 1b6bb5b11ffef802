//! Binary entrypoint: read one JSON object from stdin, write one to stdout.
//!
//! Always exits 0; the caller inspects the `success` field.

use std::io;

fn main() {
  question_engine::logging::init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  // Nowhere left to report a failed stdout write.
  let _ = question_engine::serve(stdin.lock(), stdout.lock());
}

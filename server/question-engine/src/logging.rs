//! Opt-in diagnostics. Stdout carries only the response, so logs go to stderr
//! and only when `RUST_LOG` is set.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber if `RUST_LOG` is present. Returns whether one was installed.
pub fn init() -> bool {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(f) => f,
    Err(_) => return false,
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .is_ok()
}

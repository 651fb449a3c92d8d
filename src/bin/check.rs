//! Evaluate the built-in dot product assertion.
//!
//! Usage:
//!   dot-check    # prints "Assertion successful" or "Assertion failed"
//!
//! Standard output carries only the report line; diagnostics go to stderr.

use std::io;
use std::process;

use tracing::Level;
use vector_dot::config::AssertionConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let assertion = AssertionConfig::default().assertion();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = assertion.report(&mut out) {
        tracing::error!(error = %e, "could not report assertion");
        process::exit(1);
    }
}

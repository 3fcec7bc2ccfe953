// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `ZYRO_LOG`, then `RUST_LOG`, then the default level
//! (`warn`, or `debug` with `--verbose`).

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let directive = filter_directive(env::log_filter(), std::env::var("RUST_LOG").ok(), verbose);
    let filter = build_filter(&directive);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Choose the filter directive from the environment values and verbosity.
pub fn filter_directive(zyro_log: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    zyro_log
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| {
            if verbose {
                VERBOSE_LEVEL.to_string()
            } else {
                DEFAULT_LEVEL.to_string()
            }
        })
}

/// Parse a directive, falling back to the default level if it is malformed.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;

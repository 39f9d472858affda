// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: logging.rs
// Author: dexput maintainers

//! Diagnostic logging to stderr via `env_logger`.
//!
//! Stdout and the result file carry only the documented output, so logging
//! defaults to `warn` and is raised with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use env_logger::Env;

pub const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. Later calls are no-ops.
pub fn init() {
	let _ = env_logger::Builder::from_env(
		Env::default().default_filter_or(DEFAULT_FILTER),
	)
	.format_timestamp_micros()
	.try_init();
}

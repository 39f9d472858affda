// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: benchmark.rs
// Author: dexput maintainers

//! Single-shot wall-clock timing of every registry algorithm.
//!
//! Each algorithm is run exactly once over the input; there is no warm-up
//! and no repetition, so the numbers are indicative only.

use crate::dxp::hash::Algorithm;
use log::debug;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy)]
pub struct BenchmarkTiming {
	pub algorithm: Algorithm,
	pub elapsed: Duration,
}

impl BenchmarkTiming {
	pub fn line(&self) -> String {
		format!("{}: {:?}", self.algorithm, self.elapsed)
	}
}

fn time_algorithm(algorithm: Algorithm, data: &[u8]) -> Duration {
	let start = Instant::now();
	black_box(algorithm.digest(black_box(data)));
	start.elapsed()
}

/// Time every algorithm in registry order; any selection is ignored.
pub fn run_benchmark(text: &str) -> Vec<BenchmarkTiming> {
	Algorithm::iter()
		.map(|algorithm| {
			let elapsed = time_algorithm(algorithm, text.as_bytes());
			debug!("{} took {} ns", algorithm, elapsed.as_nanos());
			BenchmarkTiming { algorithm, elapsed }
		})
		.collect()
}

pub fn render_benchmark<W: Write>(
	timings: &[BenchmarkTiming],
	out: &mut W,
) -> io::Result<()> {
	for timing in timings {
		writeln!(out, "{}", timing.line())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_algorithm_is_timed_once_in_order() {
		let timings = run_benchmark("x");
		let timed: Vec<Algorithm> =
			timings.iter().map(|t| t.algorithm).collect();
		let registry: Vec<Algorithm> = Algorithm::iter().collect();
		assert_eq!(timed, registry);
	}

	#[test]
	fn timing_line_uses_duration_debug_format() {
		let timing = BenchmarkTiming {
			algorithm: Algorithm::Sha3_512,
			elapsed: Duration::from_nanos(1500),
		};
		assert_eq!(timing.line(), "sha3-512: 1.5µs");
	}

	#[test]
	fn render_prints_one_line_per_timing() {
		let timings = run_benchmark("");
		let mut out = Vec::new();
		render_benchmark(&timings, &mut out).unwrap();
		let printed = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = printed.lines().collect();
		assert_eq!(lines.len(), 10);
		assert!(lines[0].starts_with("md5: "));
		assert!(lines[9].starts_with("md4: "));
	}
}

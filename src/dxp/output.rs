// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: output.rs
// Author: dexput maintainers

//! Console rendering and the result file.

use crate::dxp::hash::DigestRecord;
use colored::Colorize;
use log::debug;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result file written to the current working directory on every digest run.
pub const RESULT_FILE_NAME: &str = "DexPut_Result.txt";

#[derive(Debug)]
pub struct OutputError {
	pub path: PathBuf,
	pub source: io::Error,
}

impl fmt::Display for OutputError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.path.display(), self.source)
	}
}

impl std::error::Error for OutputError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.source)
	}
}

/// Plain `name: hexdigest` lines, each newline-terminated.
pub fn render_result(records: &[DigestRecord]) -> String {
	records
		.iter()
		.map(|record| format!("{}\n", record.line()))
		.collect()
}

/// Print each record in cyan.
pub fn print_records<W: Write>(
	records: &[DigestRecord],
	out: &mut W,
) -> io::Result<()> {
	for record in records {
		writeln!(out, "{}", record.line().cyan())?;
	}
	Ok(())
}

/// Replace the contents of `path` with the rendered records.
pub fn write_result_file(
	path: &Path,
	records: &[DigestRecord],
) -> Result<(), OutputError> {
	fs::write(path, render_result(records)).map_err(|source| {
		OutputError {
			path: path.to_path_buf(),
			source,
		}
	})?;
	debug!("wrote {} digests to {}", records.len(), path.display());
	Ok(())
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: input.rs
// Author: dexput maintainers

//! Input acquisition: interactive prompts and the missing-text check.

use crate::dxp::app::AppError;
use crate::dxp::cli::InvocationOptions;
use std::io::{self, BufRead, Write};

pub const TEXT_PROMPT: &str = "Enter text to hash: ";
pub const HASHES_PROMPT: &str =
	"Enter hashes to generate (comma-separated, 'all' for all hashes): ";

/// Print `prompt` and read one line, trimmed. End of input yields "".
pub fn prompt_line<R, W>(
	input: &mut R,
	out: &mut W,
	prompt: &str,
) -> io::Result<String>
where
	R: BufRead,
	W: Write,
{
	write!(out, "{}", prompt)?;
	out.flush()?;
	let mut line = String::new();
	input.read_line(&mut line)?;
	Ok(line.trim().to_string())
}

/// Fill in text and selection from stdin where the options call for it.
///
/// Interactive mode always prompts for both values, replacing whatever the
/// flags supplied, and prompts a second time if the text came back empty.
/// Outside interactive mode an empty text is a usage error.
pub fn resolve_input<R, W>(
	options: &mut InvocationOptions,
	input: &mut R,
	out: &mut W,
) -> Result<(), AppError>
where
	R: BufRead,
	W: Write,
{
	if options.interactive {
		options.text = prompt_line(input, out, TEXT_PROMPT)?;
		options.hashes = prompt_line(input, out, HASHES_PROMPT)?;
	}
	if options.text.is_empty() {
		if !options.interactive {
			return Err(AppError::MissingText);
		}
		options.text = prompt_line(input, out, TEXT_PROMPT)?;
	}
	Ok(())
}

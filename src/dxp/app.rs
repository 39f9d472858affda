// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: app.rs
// Author: dexput maintainers

use crate::dxp::benchmark::{render_benchmark, run_benchmark};
use crate::dxp::cli::{
	build_cli, normalize_args, usage, InvocationOptions,
};
use crate::dxp::hash::{digest_selection, DigestRecord};
use crate::dxp::input::resolve_input;
use crate::dxp::output::{
	print_records, write_result_file, OutputError, RESULT_FILE_NAME,
};
use crate::dxp::selection::HashSelection;
use log::debug;
use std::error::Error;
use std::ffi::OsString;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const MISSING_TEXT_MESSAGE: &str =
	"No text provided. Use -text or -interactive flag.";

#[derive(Debug)]
pub enum AppError {
	NoArguments,
	MissingText,
	CommandLine(clap::Error),
	Io(io::Error),
	ResultWrite(OutputError),
}

impl fmt::Display for AppError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AppError::NoArguments => write!(f, "no arguments given"),
			AppError::MissingText => {
				write!(f, "{}", MISSING_TEXT_MESSAGE)
			}
			AppError::CommandLine(err) => write!(f, "{}", err),
			AppError::Io(err) => write!(f, "{}", err),
			AppError::ResultWrite(err) => {
				write!(f, "Error writing to file: {}", err)
			}
		}
	}
}

impl Error for AppError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			AppError::CommandLine(err) => Some(err),
			AppError::Io(err) => Some(err),
			AppError::ResultWrite(err) => Some(err),
			_ => None,
		}
	}
}

impl From<io::Error> for AppError {
	fn from(value: io::Error) -> Self {
		Self::Io(value)
	}
}

impl From<OutputError> for AppError {
	fn from(value: OutputError) -> Self {
		Self::ResultWrite(value)
	}
}

impl From<clap::Error> for AppError {
	fn from(value: clap::Error) -> Self {
		Self::CommandLine(value)
	}
}

impl AppError {
	pub fn exit_code(&self) -> u8 {
		match self {
			AppError::CommandLine(err) => {
				u8::try_from(err.exit_code()).unwrap_or(EXIT_FAILURE)
			}
			_ => EXIT_FAILURE,
		}
	}
}

/// How a successful invocation ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
	HelpShown,
	Benchmarked,
	Written {
		path: PathBuf,
		records: Vec<DigestRecord>,
	},
}

/// Drive one invocation: parse, acquire input, then run exactly one mode.
pub fn execute<I, T, R, W>(
	args: I,
	input: &mut R,
	out: &mut W,
	result_path: &Path,
) -> Result<Outcome, AppError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
	R: BufRead,
	W: Write,
{
	let args = normalize_args(args);
	let matches = build_cli().try_get_matches_from(&args)?;
	let mut options = InvocationOptions::from_matches(&matches);

	if options.help {
		write!(out, "{}", usage())?;
		return Ok(Outcome::HelpShown);
	}
	if args.len() <= 1 {
		return Err(AppError::NoArguments);
	}

	resolve_input(&mut options, input, out)?;

	if options.benchmark {
		debug!("benchmark mode over {} bytes", options.text.len());
		render_benchmark(&run_benchmark(&options.text), out)?;
		return Ok(Outcome::Benchmarked);
	}

	let selection = HashSelection::parse(&options.hashes);
	let records = digest_selection(&selection, &options.text);
	print_records(&records, out)?;
	write_result_file(result_path, &records)?;
	Ok(Outcome::Written {
		path: result_path.to_path_buf(),
		records,
	})
}

/// Run an invocation and report failures the way the binary does,
/// returning the process exit status.
pub fn run_with<I, T, R, W>(
	args: I,
	input: &mut R,
	out: &mut W,
	result_path: &Path,
) -> u8
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
	R: BufRead,
	W: Write,
{
	match execute(args, input, out, result_path) {
		Ok(_) => EXIT_SUCCESS,
		Err(err) => {
			report_error(&err, out);
			err.exit_code()
		}
	}
}

fn report_error<W: Write>(err: &AppError, out: &mut W) {
	// Reporting is best effort; the exit status still signals failure.
	let _ = match err {
		AppError::NoArguments => write!(out, "{}", usage()),
		AppError::MissingText => {
			write!(out, "{}\n{}", MISSING_TEXT_MESSAGE, usage())
		}
		AppError::CommandLine(err) => err.print(),
		AppError::Io(_) | AppError::ResultWrite(_) => {
			writeln!(out, "{}", err)
		}
	};
	let _ = out.flush();
}

pub fn run() -> ExitCode {
	let stdin = io::stdin();
	let mut input = stdin.lock();
	let mut out = io::stdout().lock();
	ExitCode::from(run_with(
		std::env::args_os(),
		&mut input,
		&mut out,
		Path::new(RESULT_FILE_NAME),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dxp::hash::Algorithm;
	use std::fs;
	use std::io::Cursor;

	struct Run {
		code: u8,
		stdout: String,
		result: Option<String>,
	}

	fn invoke(args: &[&str], stdin: &str) -> Run {
		invoke_raw(args, stdin.as_bytes())
	}

	fn invoke_raw(args: &[&str], stdin: &[u8]) -> Run {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(RESULT_FILE_NAME);
		let mut input = Cursor::new(stdin.to_vec());
		let mut out = Vec::new();
		let mut argv = vec!["dexput"];
		argv.extend_from_slice(args);
		let code = run_with(argv, &mut input, &mut out, &path);
		Run {
			code,
			stdout: String::from_utf8(out).unwrap(),
			result: fs::read_to_string(&path).ok(),
		}
	}

	#[test]
	fn no_arguments_prints_usage_and_fails() {
		let run = invoke(&[], "");
		assert_eq!(run.code, EXIT_FAILURE);
		assert!(run.stdout.contains("Usage:"));
		assert!(run.result.is_none());
	}

	#[test]
	fn help_wins_over_other_flags() {
		let run = invoke(&["-text", "hello", "-benchmark", "-help"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert!(run.stdout.contains("Usage:"));
		assert!(!run.stdout.contains("md5:"));
		assert!(run.result.is_none());
	}

	#[test]
	fn missing_text_reports_and_fails() {
		let run = invoke(&["-hashes", "md5"], "hello\n");
		assert_eq!(run.code, EXIT_FAILURE);
		assert!(run.stdout.starts_with(MISSING_TEXT_MESSAGE));
		assert!(run.stdout.contains("Usage:"));
		assert!(run.result.is_none());
	}

	#[test]
	fn digest_run_writes_selected_records() {
		let run = invoke(&["-text", "hello", "-hashes", "sha256,md5"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(
			run.result.as_deref(),
			Some(
				"md5: 5d41402abc4b2a76b9719d911017c592\n\
				 sha256: 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\n"
			)
		);
		assert_eq!(run.stdout.lines().count(), 2);
	}

	#[test]
	fn unknown_selection_writes_empty_file() {
		let run = invoke(&["-text", "hello", "-hashes", "bogus"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(run.result.as_deref(), Some(""));
		assert!(run.stdout.is_empty());
	}

	#[test]
	fn benchmark_skips_result_file() {
		let run = invoke(&["-benchmark", "-text", "x"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(run.stdout.lines().count(), 10);
		assert!(run.result.is_none());
	}

	#[test]
	fn interactive_reads_text_and_selection() {
		let run = invoke(&["-interactive"], "hello\nmd5\n");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(
			run.result.as_deref(),
			Some("md5: 5d41402abc4b2a76b9719d911017c592\n")
		);
	}

	#[test]
	fn unwritable_result_path_fails() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent").join(RESULT_FILE_NAME);
		let mut input = Cursor::new(String::new());
		let mut out = Vec::new();
		let outcome = execute(
			["dexput", "-text", "hello", "-hashes", "md5"],
			&mut input,
			&mut out,
			&path,
		);
		let err = outcome.unwrap_err();
		assert!(matches!(err, AppError::ResultWrite(_)));
		assert_eq!(err.exit_code(), EXIT_FAILURE);
		assert!(err.to_string().starts_with("Error writing to file: "));
	}

	#[test]
	fn unknown_flag_exits_with_usage_status() {
		let mut input = Cursor::new(String::new());
		let mut out = Vec::new();
		let err = execute(
			["dexput", "-bogus"],
			&mut input,
			&mut out,
			Path::new(RESULT_FILE_NAME),
		)
		.unwrap_err();
		assert!(matches!(err, AppError::CommandLine(_)));
		assert_eq!(err.exit_code(), 2);
	}

	#[test]
	fn execute_returns_written_records() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(RESULT_FILE_NAME);
		let mut input = Cursor::new(String::new());
		let mut out = Vec::new();
		let outcome = execute(
			["dexput", "-text", "hello", "-hashes", "sha1,md5"],
			&mut input,
			&mut out,
			&path,
		)
		.unwrap();
		assert_eq!(
			outcome,
			Outcome::Written {
				path: path.clone(),
				records: vec![
					DigestRecord::compute(Algorithm::Md5, "hello"),
					DigestRecord::compute(Algorithm::Sha1, "hello"),
				],
			}
		);
	}

	#[test]
	fn execute_reports_help_and_benchmark_outcomes() {
		let path = Path::new(RESULT_FILE_NAME);
		let mut out = Vec::new();
		let help = execute(
			["dexput", "-help"],
			&mut Cursor::new(String::new()),
			&mut out,
			path,
		)
		.unwrap();
		assert_eq!(help, Outcome::HelpShown);
		let benchmark = execute(
			["dexput", "-benchmark=true", "-text", "x"],
			&mut Cursor::new(String::new()),
			&mut out,
			path,
		)
		.unwrap();
		assert_eq!(benchmark, Outcome::Benchmarked);
	}

	#[test]
	fn non_flag_argument_without_text_is_missing_text() {
		let run = invoke(&["hello"], "");
		assert_eq!(run.code, EXIT_FAILURE);
		assert!(run.stdout.starts_with(MISSING_TEXT_MESSAGE));
		assert!(run.result.is_none());
	}

	#[test]
	fn arguments_after_first_non_flag_are_ignored() {
		let run = invoke(&["-text", "hello", "extra", "-hashes", "sha1"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(run.result.as_deref().map(|r| r.lines().count()), Some(10));
	}

	#[test]
	fn explicit_false_switch_keeps_digest_mode() {
		let run = invoke(&["-benchmark=false", "-text", "hello", "-hashes", "md5"], "");
		assert_eq!(run.code, EXIT_SUCCESS);
		assert_eq!(
			run.result.as_deref(),
			Some("md5: 5d41402abc4b2a76b9719d911017c592\n")
		);
	}

	#[test]
	fn unreadable_interactive_input_fails() {
		let run = invoke_raw(&["-interactive"], b"\xff\xfe\nmd5\n");
		assert_eq!(run.code, EXIT_FAILURE);
		assert!(run.stdout.contains("valid UTF-8"));
		assert!(run.result.is_none());
	}
}

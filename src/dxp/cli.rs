// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: cli.rs
// Author: dexput maintainers

use crate::dxp::hash::Algorithm;
use crate::dxp::selection::ALL_HASHES;
use clap::builder::BoolishValueParser;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use std::ffi::OsString;

const ABOUT: &str = "Compute a set of hash digests over a string";
const USAGE: &str = "dexput [OPTIONS]";

const EXAMPLES: &str = "Examples:
  dexput -text \"hello\"
  dexput -interactive
  dexput -text \"hello\" -hashes \"md5,sha1\"
  dexput -text \"hello\" -benchmark";

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["text", "hashes"];

/// Collects everything after the first non-flag argument; never read.
const IGNORED_ARGS: &str = "ignored";

/// Boolean switch that also takes an explicit `=value` (`-benchmark=false`).
fn switch(name: &'static str, help: &'static str) -> Arg {
	Arg::new(name)
		.long(name)
		.action(ArgAction::Set)
		.num_args(0..=1)
		.require_equals(true)
		.default_missing_value("true")
		.value_parser(BoolishValueParser::new())
		.help(help)
}

pub fn build_cli() -> clap::Command {
	let hashes_help = format!(
		"Comma-separated list of hashes to generate ({}, {})",
		ALL_HASHES,
		Algorithm::names().join(", ")
	);
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about(ABOUT)
		.override_usage(USAGE)
		.disable_help_flag(true)
		.disable_version_flag(true)
		.args_override_self(true)
		.arg(
			Arg::new("text")
				.long("text")
				.value_name("TEXT")
				.allow_hyphen_values(true)
				.help("Text to hash"),
		)
		.arg(
			Arg::new("hashes")
				.long("hashes")
				.value_name("HASHES")
				.allow_hyphen_values(true)
				.default_value(ALL_HASHES)
				.help(hashes_help),
		)
		.arg(switch("interactive", "Interactive mode"))
		.arg(switch("benchmark", "Benchmark mode"))
		.arg(switch("help", "Display this help message").alias("h"))
		.arg(
			Arg::new(IGNORED_ARGS)
				.num_args(1..)
				.action(ArgAction::Append)
				.allow_hyphen_values(true)
				.hide(true),
		)
}

/// Usage banner shown for `-help` and on usage errors. Options are listed
/// in their single-dash spelling.
pub fn usage() -> String {
	let cli = build_cli();
	let options: Vec<(String, String)> = cli
		.get_arguments()
		.filter(|arg| !arg.is_hide_set())
		.filter_map(|arg| {
			let long = arg.get_long()?;
			let flag = match arg.get_value_names() {
				Some([name, ..]) if VALUE_FLAGS.contains(&long) => {
					format!("-{} <{}>", long, name)
				}
				_ => format!("-{}", long),
			};
			let mut help = arg
				.get_help()
				.map(ToString::to_string)
				.unwrap_or_default();
			if let Some(default) = arg.get_default_values().first() {
				help.push_str(&format!(
					" [default: {}]",
					default.to_string_lossy()
				));
			}
			Some((flag, help))
		})
		.collect();
	let width =
		options.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);

	let mut banner = format!(
		"{} {}\n{}\n\nUsage: {}\n\nOptions:\n",
		cli.get_name(),
		cli.get_version().unwrap_or_default(),
		ABOUT,
		USAGE
	);
	for (flag, help) in options {
		banner.push_str(&format!(
			"  {:<width$}  {}\n",
			flag,
			help,
			width = width
		));
	}
	banner.push('\n');
	banner.push_str(EXAMPLES);
	banner.push('\n');
	banner
}

/// Rewrite single-dash long flags (`-text`, `-hashes=md5`) to the
/// double-dash form clap parses. The argument following a value flag is
/// passed through untouched. Flag parsing stops at `--` or at the first
/// non-flag argument; a `--` is inserted before the latter so clap files
/// the remainder under the ignored arguments.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let mut normalized = Vec::new();
	let mut pending_value = false;
	let mut passthrough = false;
	for (idx, arg) in args.into_iter().enumerate() {
		let arg: OsString = arg.into();
		if idx == 0 || pending_value || passthrough {
			pending_value = false;
			normalized.push(arg);
			continue;
		}
		let flag = match arg.to_str() {
			Some("--") => {
				passthrough = true;
				normalized.push(arg.clone());
				continue;
			}
			Some(raw) => match raw.strip_prefix("--") {
				Some(rest) => Some(rest),
				None => raw
					.strip_prefix('-')
					.filter(|rest| !rest.is_empty()),
			},
			None => None,
		};
		let Some(flag) = flag else {
			passthrough = true;
			normalized.push(OsString::from("--"));
			normalized.push(arg);
			continue;
		};
		let name = flag.split('=').next().unwrap_or(flag);
		pending_value =
			!flag.contains('=') && VALUE_FLAGS.contains(&name);
		normalized.push(OsString::from(format!("--{}", flag)));
	}
	normalized
}

/// Invocation options as given on the command line, before any prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOptions {
	pub text: String,
	pub hashes: String,
	pub interactive: bool,
	pub benchmark: bool,
	pub help: bool,
}

impl Default for InvocationOptions {
	fn default() -> Self {
		InvocationOptions {
			text: String::new(),
			hashes: ALL_HASHES.to_string(),
			interactive: false,
			benchmark: false,
			help: false,
		}
	}
}

fn switch_value(matches: &ArgMatches, name: &str) -> bool {
	matches.get_one::<bool>(name).copied().unwrap_or(false)
}

impl InvocationOptions {
	pub fn from_matches(matches: &ArgMatches) -> Self {
		InvocationOptions {
			text: matches
				.get_one::<String>("text")
				.cloned()
				.unwrap_or_default(),
			hashes: matches
				.get_one::<String>("hashes")
				.cloned()
				.unwrap_or_else(|| ALL_HASHES.to_string()),
			interactive: switch_value(matches, "interactive"),
			benchmark: switch_value(matches, "benchmark"),
			help: switch_value(matches, "help"),
		}
	}
}

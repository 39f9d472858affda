// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: selection.rs
// Author: dexput maintainers

use crate::dxp::hash::Algorithm;
use log::debug;
use strum::IntoEnumIterator;

/// Keyword selecting the whole registry. Matched exactly, not trimmed.
pub const ALL_HASHES: &str = "all";

/// Parsed form of the `-hashes` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashSelection {
	All,
	Named(Vec<String>),
}

impl HashSelection {
	pub fn parse(spec: &str) -> Self {
		if spec == ALL_HASHES {
			return HashSelection::All;
		}
		HashSelection::Named(
			spec.split(',')
				.map(|token| token.trim().to_string())
				.collect(),
		)
	}

	pub fn includes(&self, algorithm: Algorithm) -> bool {
		match self {
			HashSelection::All => true,
			HashSelection::Named(tokens) => {
				tokens.iter().any(|token| token == algorithm.name())
			}
		}
	}

	/// Selected algorithms in registry order; each appears at most once.
	pub fn algorithms(&self) -> Vec<Algorithm> {
		let selected: Vec<Algorithm> =
			Algorithm::iter().filter(|alg| self.includes(*alg)).collect();
		for token in self.unrecognized() {
			debug!("ignoring unknown hash algorithm `{}`", token);
		}
		debug!(
			"selected algorithms: {}",
			selected
				.iter()
				.map(|alg| alg.name())
				.collect::<Vec<_>>()
				.join(",")
		);
		selected
	}

	/// Tokens that name no registry entry. Unknown tokens never fail a run.
	pub fn unrecognized(&self) -> Vec<&str> {
		match self {
			HashSelection::All => Vec::new(),
			HashSelection::Named(tokens) => tokens
				.iter()
				.map(String::as_str)
				.filter(|token| token.parse::<Algorithm>().is_err())
				.collect(),
		}
	}
}

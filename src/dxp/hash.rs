// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: hash.rs
// Author: dexput maintainers

//! Algorithm registry: the fixed set of named digests and their hashers.

use crate::dxp::selection::HashSelection;
use blake2::digest::consts::U32;
use digest::{Digest, DynDigest};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

type Blake2b256 = blake2::Blake2b<U32>;

/// Every supported digest, in the order used for output and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Algorithm {
	Md5,
	Sha1,
	Sha256,
	Sha512,
	Sha3_256,
	Sha3_512,
	Blake2b256,
	Blake2b512,
	Ripemd160,
	Md4,
}

impl Algorithm {
	/// Canonical identifier accepted by `-hashes` and printed in results.
	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Md5 => "md5",
			Algorithm::Sha1 => "sha1",
			Algorithm::Sha256 => "sha256",
			Algorithm::Sha512 => "sha512",
			Algorithm::Sha3_256 => "sha3-256",
			Algorithm::Sha3_512 => "sha3-512",
			Algorithm::Blake2b256 => "blake2b-256",
			Algorithm::Blake2b512 => "blake2b-512",
			Algorithm::Ripemd160 => "ripemd160",
			Algorithm::Md4 => "md4",
		}
	}

	pub fn names() -> Vec<&'static str> {
		Algorithm::iter().map(Algorithm::name).collect()
	}

	/// Fresh hasher for this algorithm.
	pub fn hasher(self) -> Box<dyn DynDigest> {
		match self {
			Algorithm::Md5 => Box::new(md5::Md5::new()),
			Algorithm::Sha1 => Box::new(sha1::Sha1::new()),
			Algorithm::Sha256 => Box::new(sha2::Sha256::new()),
			Algorithm::Sha512 => Box::new(sha2::Sha512::new()),
			Algorithm::Sha3_256 => Box::new(sha3::Sha3_256::new()),
			Algorithm::Sha3_512 => Box::new(sha3::Sha3_512::new()),
			Algorithm::Blake2b256 => Box::new(Blake2b256::new()),
			Algorithm::Blake2b512 => {
				Box::new(blake2::Blake2b512::new())
			}
			Algorithm::Ripemd160 => {
				Box::new(ripemd::Ripemd160::new())
			}
			Algorithm::Md4 => Box::new(md4::Md4::new()),
		}
	}

	pub fn digest(self, data: &[u8]) -> Vec<u8> {
		let mut hasher = self.hasher();
		hasher.update(data);
		hasher.finalize().to_vec()
	}

	/// Lowercase hex digest of the UTF-8 bytes of `text`.
	pub fn digest_hex(self, text: &str) -> String {
		hex::encode(self.digest(text.as_bytes()))
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown hash algorithm `{}`", self.0)
	}
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Algorithm::iter()
			.find(|alg| alg.name() == s)
			.ok_or_else(|| UnknownAlgorithm(s.to_string()))
	}
}

/// One computed digest, as printed and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRecord {
	pub algorithm: Algorithm,
	pub digest_hex: String,
}

impl DigestRecord {
	pub fn compute(algorithm: Algorithm, text: &str) -> Self {
		Self {
			algorithm,
			digest_hex: algorithm.digest_hex(text),
		}
	}

	/// `name: hexdigest`, without color or trailing newline.
	pub fn line(&self) -> String {
		format!("{}: {}", self.algorithm, self.digest_hex)
	}
}

/// Digest `text` with every algorithm the selection includes, in registry
/// order.
pub fn digest_selection(
	selection: &HashSelection,
	text: &str,
) -> Vec<DigestRecord> {
	selection
		.algorithms()
		.into_iter()
		.map(|alg| DigestRecord::compute(alg, text))
		.collect()
}

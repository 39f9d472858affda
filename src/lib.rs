// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: lib.rs
// Author: dexput maintainers

pub mod dxp {
	pub mod app;
	pub mod benchmark;
	pub mod cli;
	pub mod hash;
	pub mod input;
	pub mod logging;
	pub mod output;
	pub mod selection;
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: dexput
// File: main.rs
// Author: dexput maintainers

use dexput::dxp::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
	logging::init();
	app::run()
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod config;
pub mod interface;
pub mod logging;
pub mod models;
pub mod system;
pub mod utils;

// Lets the logging macros expand in crates that do not depend on tracing.
#[doc(hidden)]
pub use tracing;

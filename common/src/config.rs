// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Presentation options shared by every command.
///
/// Discovery itself is configuration-free; these options only shape how
/// results are reported. The struct is built from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the startup banner line.
    pub no_banner: bool,

    /// Controls the visual density of the terminal output.
    ///
    /// Mapped from the `-q` / `--quiet` flag count.
    ///
    /// # Levels
    /// * **0** (Default): Headers, colours and per-interface trees.
    /// * **1**: No headers, one line per interface.
    /// * **2**: Raw mode. Only interface names, suitable for piping.
    pub quiet: u8,

    /// Masks the device-specific half of hardware addresses.
    ///
    /// The OUI prefix stays visible so the vendor can still be identified.
    pub redact: bool,

    /// Also reports eligible interfaces that have no IPv4 address bound.
    ///
    /// Such interfaces cannot be handed to an ARP client, so they are hidden
    /// unless `list --all` asks for them.
    pub include_unaddressed: bool,
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use arplink_common::config::Config;
use arplink_common::models::descriptor::InterfaceDescriptor;
use arplink_common::{info, warn};
use arplink_core::discovery;

use crate::terminal::print::Print;

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    Print::header("eligible interfaces");

    let interfaces = discovery::list_eligible_interfaces();
    if interfaces.is_empty() {
        warn!("No active Ethernet/Wi-Fi interface found");
        return Ok(());
    }

    let shown = visible(&interfaces, cfg.include_unaddressed);
    let hidden = interfaces.len() - shown.len();
    if hidden > 0 {
        info!(
            verbosity = 1,
            "{} eligible interface(s) without IPv4 address hidden, use --all to show them",
            hidden
        );
    }

    Print::interfaces(&shown);
    Ok(())
}

fn visible(
    interfaces: &[InterfaceDescriptor],
    include_unaddressed: bool,
) -> Vec<&InterfaceDescriptor> {
    interfaces
        .iter()
        .filter(|d| include_unaddressed || d.has_valid_address())
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

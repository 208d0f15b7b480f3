// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::Ipv4Addr;

use anyhow::{Context, bail};
use arplink_common::models::descriptor::{self, InterfaceDescriptor};
use arplink_common::{info, success, warn};
use arplink_core::discovery;
use is_root::is_root;

use crate::terminal::print::Print;

pub fn bind(name: Option<&str>, address: Option<Ipv4Addr>) -> anyhow::Result<()> {
    let interfaces = discovery::list_eligible_interfaces();
    if interfaces.is_empty() {
        bail!("no active Ethernet/Wi-Fi interface found");
    }

    let chosen = select(&interfaces, name, address)?;
    let Some(endpoint) = chosen.endpoint() else {
        bail!("selected interface {} has no IPv4 address", chosen.name());
    };

    if !is_root() {
        warn!("Not running as root, opening a raw channel will likely fail");
    }

    info!("Binding ARP client to {} on {}", endpoint.ip(), chosen.name());
    let client = discovery::create_arp_client(endpoint)
        .with_context(|| format!("creating ARP client on {}", chosen.name()))?;
    success!(
        "ARP client bound to {} ({})",
        client.local_endpoint().ip(),
        client.interface().name
    );

    Print::header("bound interface");
    Print::interfaces(&[chosen]);
    Ok(())
}

/// Picks the interface named by the user, or the first one with an address.
fn select<'a>(
    interfaces: &'a [InterfaceDescriptor],
    name: Option<&str>,
    address: Option<Ipv4Addr>,
) -> anyhow::Result<&'a InterfaceDescriptor> {
    match (name, address) {
        (Some(name), _) => descriptor::find_by_name(interfaces, name)
            .with_context(|| format!("interface {name} is not eligible for ARP")),
        (None, Some(address)) => descriptor::find_by_address(interfaces, address)
            .with_context(|| format!("no eligible interface is bound to {address}")),
        (None, None) => descriptor::first_addressed(interfaces)
            .context("no eligible interface has an IPv4 address"),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Interface Discovery Service
//!
//! Picks the host interfaces that ARP tooling can operate on and hands a
//! chosen local endpoint over to an ARP client factory.
//!
//! An interface is eligible when it supports multicast, its link is up and it
//! is wired Ethernet, Gigabit Ethernet or 802.11 wireless. Anything else is
//! dropped silently; an empty result is a valid answer, not an error.
//!
//! The service keeps no state. Every call re-reads the host interface table,
//! so results follow link changes and concurrent callers never interfere.

use std::net::SocketAddrV4;

use arplink_common::debug;
use arplink_common::interface::{HostInterface, check_arp_eligibility};
use arplink_common::models::descriptor::InterfaceDescriptor;
use arplink_common::system::InterfaceRepository;

use crate::arp::ArpClientFactory;
use crate::network::channel::{ArpClientError, DatalinkArpClient, DatalinkArpFactory};
use crate::system::SystemRepo;

/// Application service for ARP interface selection.
#[derive(Debug, Clone, Default)]
pub struct InterfaceDiscovery<R = SystemRepo> {
    repo: R,
}

impl InterfaceDiscovery<SystemRepo> {
    /// Discovery backed by the live interface table.
    pub fn system() -> Self {
        Self::new(SystemRepo)
    }
}

impl<R: InterfaceRepository> InterfaceDiscovery<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns one descriptor per ARP-eligible interface, in host order.
    pub fn list_eligible_interfaces(&self) -> Vec<InterfaceDescriptor> {
        let interfaces = self.repo.host_interfaces();

        let interfaces_str: &str = match interfaces.len() {
            1 => "interface",
            _ => "interfaces",
        };
        debug!(
            verbosity = 1,
            "Identified {} host network {}",
            interfaces.len(),
            interfaces_str
        );

        let eligible: Vec<InterfaceDescriptor> = interfaces
            .iter()
            .filter_map(|interface| match check_arp_eligibility(interface) {
                Ok(()) => Some(InterfaceDescriptor::from_host(interface)),
                Err(reason) => {
                    debug!(verbosity = 2, "Skipping {}: {}", interface.name(), reason);
                    None
                }
            })
            .collect();

        debug!(
            verbosity = 1,
            "{} of them eligible for ARP",
            eligible.len()
        );

        eligible
    }

    /// Passes `local` unchanged to `factory` and returns its outcome as is.
    ///
    /// No check is made that `local` belongs to an eligible interface.
    pub fn create_arp_client<F>(
        &self,
        factory: &F,
        local: SocketAddrV4,
    ) -> Result<F::Client, F::Error>
    where
        F: ArpClientFactory,
    {
        factory.create(local)
    }
}

/// Lists ARP-eligible interfaces of this machine.
pub fn list_eligible_interfaces() -> Vec<InterfaceDescriptor> {
    InterfaceDiscovery::system().list_eligible_interfaces()
}

/// Opens the default datalink ARP client on `local`.
pub fn create_arp_client(local: SocketAddrV4) -> Result<DatalinkArpClient, ArpClientError> {
    InterfaceDiscovery::system().create_arp_client(&DatalinkArpFactory, local)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

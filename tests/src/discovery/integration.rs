// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Runs discovery against the interface table of the machine executing the
//! tests. The assertions hold on any host, including one without a single
//! eligible interface.

#![cfg(test)]
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};

use arplink_common::interface::HostInterface;
use arplink_common::models::descriptor::{InterfaceDescriptor, NO_ADDRESS};
use arplink_core::discovery::{self, InterfaceDiscovery};
use arplink_core::network::channel::ArpClientError;
use pnet::datalink::{self, NetworkInterface};

fn host_interface(name: &str) -> Option<NetworkInterface> {
    datalink::interfaces().into_iter().find(|i| i.name == name)
}

#[test]
fn test_every_listed_interface_is_eligible_on_host() {
    let listed: Vec<InterfaceDescriptor> = discovery::list_eligible_interfaces();

    for descriptor in &listed {
        // The interface may vanish between the two reads; only check what is still there.
        let Some(host) = host_interface(descriptor.name()) else {
            continue;
        };
        assert_eq!(descriptor.hardware_address(), host.hardware_address());
        assert!(host.supports_multicast(), "{} lacks multicast", host.name);
        assert!(host.kind().is_arp_capable(), "{} is {}", host.name, host.kind());
    }
}

#[test]
fn test_listed_addresses_follow_host_order() {
    for descriptor in discovery::list_eligible_interfaces() {
        let Some(host) = host_interface(descriptor.name()) else {
            continue;
        };
        let first_v4: Option<Ipv4Addr> = host.ips.iter().find_map(|net| match net.ip() {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        });

        match first_v4 {
            Some(v4) => {
                assert_eq!(descriptor.ipv4_address(), v4);
                assert!(descriptor.has_valid_address());
            }
            None => {
                assert_eq!(descriptor.ipv4_address(), NO_ADDRESS);
                assert!(!descriptor.has_valid_address());
            }
        }
    }
}

#[test]
fn test_listed_names_are_unique() {
    let listed = discovery::list_eligible_interfaces();
    let names: HashSet<&str> = listed.iter().map(|d| d.name()).collect();
    assert_eq!(names.len(), listed.len());
}

#[test]
fn test_loopback_is_never_listed() {
    let loopbacks: HashSet<String> = datalink::interfaces()
        .into_iter()
        .filter(|i| i.is_loopback())
        .map(|i| i.name)
        .collect();

    for descriptor in InterfaceDiscovery::system().list_eligible_interfaces() {
        assert!(!loopbacks.contains(descriptor.name()));
    }
}

#[test]
fn test_create_arp_client_fails_for_foreign_address() {
    // TEST-NET-3, never assigned to a local interface
    let local = SocketAddrV4::new(Ipv4Addr::new(203, 0, 113, 1), 0);

    let result = discovery::create_arp_client(local);

    assert!(matches!(
        result.err(),
        Some(ArpClientError::AddressNotLocal(addr)) if addr == *local.ip()
    ));
}

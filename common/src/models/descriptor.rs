// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};

use pnet::util::MacAddr;

use crate::interface::HostInterface;
use crate::utils::mac;

/// Stand-in address for an interface without a bound IPv4 address.
///
/// The limited broadcast address can never be bound as a unicast address,
/// so it cannot collide with a real one.
pub const NO_ADDRESS: Ipv4Addr = Ipv4Addr::BROADCAST;

/// A point-in-time snapshot of one host interface's addressing identity.
///
/// Descriptors hold no handle to the operating system. Running discovery
/// again yields fresh descriptors; existing ones never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    name: String,
    hardware_address: MacAddr,
    ipv4_address: Ipv4Addr,
}

impl InterfaceDescriptor {
    /// Captures the name, hardware address and first IPv4 address of `interface`.
    ///
    /// Addresses are scanned in host-reported order. When no IPv4 address is
    /// bound the descriptor carries [`NO_ADDRESS`].
    pub fn from_host<I>(interface: &I) -> Self
    where
        I: HostInterface + ?Sized,
    {
        let ipv4_address = interface
            .unicast_addresses()
            .into_iter()
            .find_map(|addr| match addr {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .unwrap_or(NO_ADDRESS);

        Self {
            name: interface.name().to_string(),
            hardware_address: interface.hardware_address(),
            ipv4_address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hardware_address(&self) -> MacAddr {
        self.hardware_address
    }

    /// Colon-separated hex rendering of the hardware address.
    pub fn hardware_address_text(&self) -> String {
        mac::to_text(&self.hardware_address)
    }

    /// The first bound IPv4 address, or [`NO_ADDRESS`].
    pub fn ipv4_address(&self) -> Ipv4Addr {
        self.ipv4_address
    }

    pub fn has_valid_address(&self) -> bool {
        self.ipv4_address != NO_ADDRESS
    }

    /// Local endpoint to hand to an ARP client. ARP has no ports, so it is 0.
    pub fn endpoint(&self) -> Option<SocketAddrV4> {
        self.has_valid_address()
            .then(|| SocketAddrV4::new(self.ipv4_address, 0))
    }

    pub fn vendor(&self) -> Option<String> {
        mac::get_vendor(self.hardware_address)
    }
}

pub fn find_by_name<'a>(
    descriptors: &'a [InterfaceDescriptor],
    name: &str,
) -> Option<&'a InterfaceDescriptor> {
    descriptors.iter().find(|d| d.name == name)
}

/// Looks up the descriptor bound to `addr`. Never matches [`NO_ADDRESS`].
pub fn find_by_address(
    descriptors: &[InterfaceDescriptor],
    addr: Ipv4Addr,
) -> Option<&InterfaceDescriptor> {
    if addr == NO_ADDRESS {
        return None;
    }
    descriptors.iter().find(|d| d.ipv4_address == addr)
}

pub fn first_addressed(descriptors: &[InterfaceDescriptor]) -> Option<&InterfaceDescriptor> {
    descriptors.iter().find(|d| d.has_valid_address())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{InterfaceKind, OperationalStatus};

    struct FakeInterface {
        name: &'static str,
        mac: MacAddr,
        addrs: Vec<IpAddr>,
    }

    impl HostInterface for FakeInterface {
        fn name(&self) -> &str {
            self.name
        }

        fn hardware_address(&self) -> MacAddr {
            self.mac
        }

        fn unicast_addresses(&self) -> Vec<IpAddr> {
            self.addrs.clone()
        }

        fn operational_status(&self) -> OperationalStatus {
            OperationalStatus::Up
        }

        fn supports_multicast(&self) -> bool {
            true
        }

        fn kind(&self) -> InterfaceKind {
            InterfaceKind::Ethernet
        }
    }

    fn default_mac() -> MacAddr {
        MacAddr(0x1, 0x2, 0x3, 0x4, 0x5, 0x6)
    }

    fn descriptor(name: &'static str, addrs: &[&str]) -> InterfaceDescriptor {
        InterfaceDescriptor::from_host(&FakeInterface {
            name,
            mac: default_mac(),
            addrs: addrs.iter().map(|a| a.parse().unwrap()).collect(),
        })
    }

    #[test]
    fn from_host_copies_name_and_mac_verbatim() {
        let d = descriptor("eth0", &["192.168.1.10"]);
        assert_eq!(d.name(), "eth0");
        assert_eq!(d.hardware_address(), default_mac());
        assert_eq!(d.hardware_address_text(), "01:02:03:04:05:06");
    }

    #[test]
    fn from_host_picks_first_ipv4_in_host_order() {
        let d = descriptor("eth0", &["fe80::1", "10.0.0.7", "192.168.1.10"]);
        assert_eq!(d.ipv4_address(), Ipv4Addr::new(10, 0, 0, 7));
        assert!(d.has_valid_address());
    }

    #[test]
    fn from_host_uses_sentinel_when_only_ipv6_is_bound() {
        let d = descriptor("eth1", &["fe80::1", "2001:db8::1"]);
        assert_eq!(d.ipv4_address(), NO_ADDRESS);
        assert!(!d.has_valid_address());
        assert_eq!(d.endpoint(), None);
    }

    #[test]
    fn from_host_uses_sentinel_without_addresses() {
        let d = descriptor("eth2", &[]);
        assert_eq!(d.ipv4_address(), NO_ADDRESS);
        assert!(!d.has_valid_address());
    }

    #[test]
    fn endpoint_carries_address_with_zero_port() {
        let d = descriptor("eth0", &["192.168.1.10"]);
        assert_eq!(
            d.endpoint(),
            Some(SocketAddrV4::new(Ipv4Addr::new(192, 168, 1, 10), 0))
        );
    }

    #[test]
    fn find_by_name_and_address() {
        let list = vec![
            descriptor("eth0", &["192.168.1.10"]),
            descriptor("wlan0", &["10.0.0.2"]),
        ];
        assert_eq!(find_by_name(&list, "wlan0").map(|d| d.name()), Some("wlan0"));
        assert!(find_by_name(&list, "eth9").is_none());
        assert_eq!(
            find_by_address(&list, Ipv4Addr::new(192, 168, 1, 10)).map(|d| d.name()),
            Some("eth0")
        );
        assert!(find_by_address(&list, Ipv4Addr::new(10, 0, 0, 3)).is_none());
    }

    #[test]
    fn find_by_address_never_matches_sentinel() {
        let list = vec![descriptor("eth1", &["fe80::1"])];
        assert!(find_by_address(&list, NO_ADDRESS).is_none());
    }

    #[test]
    fn first_addressed_skips_unaddressed() {
        let list = vec![
            descriptor("eth1", &["fe80::1"]),
            descriptor("eth0", &["192.168.1.10"]),
        ];
        assert_eq!(first_addressed(&list).map(|d| d.name()), Some("eth0"));
        assert!(first_addressed(&list[..1]).is_none());
    }
}

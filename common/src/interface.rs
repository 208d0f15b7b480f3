// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::net::IpAddr;

#[cfg(not(target_os = "linux"))]
use fallback_impl::{kind, operational_status};
#[cfg(target_os = "linux")]
use linux_impl::{kind, operational_status};
use pnet::datalink::NetworkInterface;
use pnet::util::MacAddr;

/// Link-layer classification of a host interface.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum InterfaceKind {
    Ethernet,
    GigabitEthernet,
    Wireless80211,
    Loopback,
    /// IP-in-IP, GRE, TUN and other point-to-point links.
    Tunnel,
    Other,
}

impl InterfaceKind {
    /// Only Ethernet-class attachments carry ARP traffic we can act on.
    pub fn is_arp_capable(self) -> bool {
        matches!(
            self,
            Self::Ethernet | Self::GigabitEthernet | Self::Wireless80211
        )
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ethernet => "ethernet",
            Self::GigabitEthernet => "gigabit ethernet",
            Self::Wireless80211 => "802.11 wireless",
            Self::Loopback => "loopback",
            Self::Tunnel => "tunnel",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperationalStatus {
    Up,
    Down,
    Unknown,
}

/// Why an interface was left out of the eligible set.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum EligibilityError {
    /// The interface does not have multicast enabled.
    #[error("multicast is not supported")]
    NoMulticast,
    /// The link is not operationally up.
    #[error("link is not up")]
    NotUp,
    /// The interface is not wired Ethernet, Gigabit Ethernet or 802.11.
    #[error("{0} interfaces are not supported")]
    UnsupportedKind(InterfaceKind),
}

/// Narrow view of a host network interface.
///
/// Discovery only ever talks to this trait, so it can be driven by
/// fabricated interfaces as easily as by the real interface table.
pub trait HostInterface {
    fn name(&self) -> &str;

    /// Link-layer address. All zeroes when the host reports none.
    fn hardware_address(&self) -> MacAddr;

    /// Bound unicast addresses of every family, in host-reported order.
    fn unicast_addresses(&self) -> Vec<IpAddr>;

    fn operational_status(&self) -> OperationalStatus;

    fn supports_multicast(&self) -> bool;

    fn kind(&self) -> InterfaceKind;
}

/// Checks whether an interface can be used for ARP operations.
///
/// An interface qualifies when it supports multicast, is operationally up and
/// is an Ethernet-class attachment. The checks run in that order and the first
/// failing one is reported.
pub fn check_arp_eligibility<I>(interface: &I) -> Result<(), EligibilityError>
where
    I: HostInterface + ?Sized,
{
    if !interface.supports_multicast() {
        return Err(EligibilityError::NoMulticast);
    }
    if interface.operational_status() != OperationalStatus::Up {
        return Err(EligibilityError::NotUp);
    }
    let kind = interface.kind();
    if !kind.is_arp_capable() {
        return Err(EligibilityError::UnsupportedKind(kind));
    }
    Ok(())
}

impl HostInterface for NetworkInterface {
    fn name(&self) -> &str {
        &self.name
    }

    fn hardware_address(&self) -> MacAddr {
        self.mac.unwrap_or_else(MacAddr::zero)
    }

    fn unicast_addresses(&self) -> Vec<IpAddr> {
        self.ips.iter().map(|net| net.ip()).collect()
    }

    fn operational_status(&self) -> OperationalStatus {
        operational_status(self)
    }

    fn supports_multicast(&self) -> bool {
        self.is_multicast()
    }

    fn kind(&self) -> InterfaceKind {
        kind(self)
    }
}

fn kind_from_flags(interface: &NetworkInterface) -> InterfaceKind {
    let has_mac = interface.mac.is_some_and(|mac| mac != MacAddr::zero());
    if interface.is_loopback() {
        InterfaceKind::Loopback
    } else if interface.is_point_to_point() {
        InterfaceKind::Tunnel
    } else if has_mac && interface.is_broadcast() {
        InterfaceKind::Ethernet
    } else {
        InterfaceKind::Other
    }
}

fn status_from_flags(interface: &NetworkInterface) -> OperationalStatus {
    if interface.is_up() {
        OperationalStatus::Up
    } else {
        OperationalStatus::Down
    }
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SYSFS_NET: &str = "/sys/class/net";

    // Values from <linux/if_arp.h>
    const ARPHRD_ETHER: u16 = 1;
    const ARPHRD_TUNNEL: u16 = 768;
    const ARPHRD_TUNNEL6: u16 = 769;
    const ARPHRD_LOOPBACK: u16 = 772;
    const ARPHRD_SIT: u16 = 776;
    const ARPHRD_IPGRE: u16 = 778;
    const ARPHRD_NONE: u16 = 65534;

    const GIGABIT_MBPS: u32 = 1000;

    fn attr_path(name: &str, attr: &str) -> PathBuf {
        Path::new(SYSFS_NET).join(name).join(attr)
    }

    fn read_attr(name: &str, attr: &str) -> Option<String> {
        fs::read_to_string(attr_path(name, attr))
            .ok()
            .map(|value| value.trim().to_string())
    }

    pub fn kind(interface: &NetworkInterface) -> InterfaceKind {
        let Some(hw_type) =
            read_attr(&interface.name, "type").and_then(|value| value.parse::<u16>().ok())
        else {
            return kind_from_flags(interface);
        };

        let wireless = attr_path(&interface.name, "wireless").exists()
            || attr_path(&interface.name, "phy80211").exists();
        // Reads fail or yield -1 while the link is down.
        let speed = read_attr(&interface.name, "speed")
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(|value| u32::try_from(value).ok());

        classify(hw_type, wireless, speed)
    }

    pub(super) fn classify(
        hw_type: u16,
        wireless: bool,
        speed_mbps: Option<u32>,
    ) -> InterfaceKind {
        match hw_type {
            ARPHRD_LOOPBACK => InterfaceKind::Loopback,
            ARPHRD_TUNNEL | ARPHRD_TUNNEL6 | ARPHRD_SIT | ARPHRD_IPGRE | ARPHRD_NONE => {
                InterfaceKind::Tunnel
            }
            ARPHRD_ETHER if wireless => InterfaceKind::Wireless80211,
            ARPHRD_ETHER if speed_mbps.is_some_and(|speed| speed >= GIGABIT_MBPS) => {
                InterfaceKind::GigabitEthernet
            }
            ARPHRD_ETHER => InterfaceKind::Ethernet,
            _ => InterfaceKind::Other,
        }
    }

    pub fn operational_status(interface: &NetworkInterface) -> OperationalStatus {
        match read_attr(&interface.name, "operstate")
            .as_deref()
            .map(parse_operstate)
        {
            // Drivers without carrier reporting (and loopback) say "unknown".
            Some(OperationalStatus::Unknown) | None => status_from_flags(interface),
            Some(status) => status,
        }
    }

    pub(super) fn parse_operstate(state: &str) -> OperationalStatus {
        match state {
            "up" => OperationalStatus::Up,
            "down" | "lowerlayerdown" | "notpresent" | "dormant" | "testing" => {
                OperationalStatus::Down
            }
            _ => OperationalStatus::Unknown,
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback_impl {
    use super::*;

    pub fn kind(interface: &NetworkInterface) -> InterfaceKind {
        kind_from_flags(interface)
    }

    pub fn operational_status(interface: &NetworkInterface) -> OperationalStatus {
        status_from_flags(interface)
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

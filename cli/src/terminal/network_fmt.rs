// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::terminal::colors;
use arplink_common::models::descriptor::InterfaceDescriptor;
use arplink_common::utils::mac;
use colored::*;

const NO_IPV4: &str = "no IPv4 address";

fn ipv4_value(descriptor: &InterfaceDescriptor) -> ColoredString {
    if descriptor.has_valid_address() {
        descriptor.ipv4_address().to_string().color(colors::IPV4_ADDR)
    } else {
        NO_IPV4.color(colors::MISSING)
    }
}

fn mac_value(descriptor: &InterfaceDescriptor, redact: bool) -> ColoredString {
    let text = if redact {
        mac::to_redacted_text(&descriptor.hardware_address())
    } else {
        descriptor.hardware_address_text()
    };
    text.color(colors::MAC_ADDR)
}

pub fn descriptor_details(
    descriptor: &InterfaceDescriptor,
    redact: bool,
) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = vec![
        ("IPv4".to_string(), ipv4_value(descriptor)),
        ("MAC".to_string(), mac_value(descriptor, redact)),
    ];
    if let Some(vendor) = descriptor.vendor() {
        details.push(("Vendor".to_string(), vendor.color(colors::VENDOR)));
    }
    details
}

pub fn descriptor_line(descriptor: &InterfaceDescriptor, redact: bool) -> String {
    format!(
        "{} {} {}",
        descriptor.name().color(colors::PRIMARY),
        ipv4_value(descriptor),
        mac_value(descriptor, redact)
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

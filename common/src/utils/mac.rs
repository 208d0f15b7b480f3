// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! **Medium Access Control (MAC)** address helpers.
//!
//! Covers the canonical textual form, a redacted variant for sharing output,
//! and **Organizationally unique identifier (OUI)** vendor lookups.

use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Renders a hardware address as six colon-separated lowercase hex octets.
///
/// # Examples
/// ```
/// use pnet::util::MacAddr;
/// use arplink_common::utils::mac;
///
/// let addr = MacAddr::new(0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e);
/// assert_eq!(mac::to_text(&addr), "00:1a:2b:3c:4d:5e");
/// ```
pub fn to_text(mac: &MacAddr) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        mac.0, mac.1, mac.2, mac.3, mac.4, mac.5
    )
}

/// Renders a hardware address with the device-specific octets masked.
///
/// # Examples
/// ```
/// use pnet::util::MacAddr;
/// use arplink_common::utils::mac;
///
/// let addr = MacAddr::new(0x2c, 0xcf, 0x67, 0xf2, 0x51, 0xe3);
/// assert_eq!(mac::to_redacted_text(&addr), "2c:cf:67:XX:XX:XX");
/// ```
pub fn to_redacted_text(mac: &MacAddr) -> String {
    format!("{:02x}:{:02x}:{:02x}:XX:XX:XX", mac.0, mac.1, mac.2)
}

/// The database is loaded on first use; a load failure disables lookups.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

/// Identify the vendor of a MAC address.
pub fn get_vendor(mac: MacAddr) -> Option<String> {
    let db = get_oui_db()?;
    match db.lookup_by_mac(&to_text(&mac)) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
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

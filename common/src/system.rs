// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::interface::HostInterface;

/// Defines the contract for reading the host's network interface table.
///
/// The table is owned by the operating system; implementations only read it.
/// Every call must reflect live host state, nothing is cached between calls.
pub trait InterfaceRepository {
    type Interface: HostInterface;

    /// Returns every interface the host knows about, in host-reported order.
    fn host_interfaces(&self) -> Vec<Self::Interface>;
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::{self, NetworkInterface};

use arplink_common::system::InterfaceRepository;

/// Reads the live interface table of the machine we are running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRepo;

impl InterfaceRepository for SystemRepo {
    type Interface = NetworkInterface;

    fn host_interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }
}

// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Boundary to the component that actually speaks ARP.
//!
//! Discovery never builds packets or touches the wire. It only hands a local
//! endpoint to whoever implements [`ArpClientFactory`] and returns what that
//! implementation produced, success or failure, untouched.

use std::net::SocketAddrV4;

/// Constructs ARP clients bound to a local endpoint.
///
/// Any `Fn(SocketAddrV4) -> Result<C, E>` is a factory, which keeps tests and
/// ad-hoc collaborators free of boilerplate.
pub trait ArpClientFactory {
    type Client;
    type Error;

    fn create(&self, local: SocketAddrV4) -> Result<Self::Client, Self::Error>;
}

impl<F, C, E> ArpClientFactory for F
where
    F: Fn(SocketAddrV4) -> Result<C, E>,
{
    type Client = C;
    type Error = E;

    fn create(&self, local: SocketAddrV4) -> Result<C, E> {
        self(local)
    }
}

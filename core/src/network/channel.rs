// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Default ARP client: a raw Ethernet channel on the interface owning the
//! local endpoint.
//!
//! Framing, probing and retries belong to whoever drives the channel.

use std::fmt;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};
use std::time::Duration;

use arplink_common::debug;
use pnet::datalink::{
    self, Channel, Config, DataLinkReceiver, DataLinkSender, NetworkInterface,
};

use crate::arp::ArpClientFactory;

const READ_TIMEOUT_MS: u64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ArpClientError {
    #[error("no local interface owns {0}")]
    AddressNotLocal(Ipv4Addr),
    #[error("non-ethernet channel for {0}")]
    NonEthernetChannel(String),
    #[error("opening datalink channel on {interface}")]
    Channel {
        interface: String,
        #[source]
        source: io::Error,
    },
}

/// An open link-layer channel bound to one local IPv4 endpoint.
pub struct DatalinkArpClient {
    local: SocketAddrV4,
    interface: NetworkInterface,
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
}

impl DatalinkArpClient {
    /// Opens an Ethernet channel on the interface that owns `local`'s address.
    ///
    /// Usually requires elevated privileges; the OS error is returned as is.
    pub fn open(local: SocketAddrV4) -> Result<Self, ArpClientError> {
        Self::open_with(local, &datalink::interfaces(), datalink::channel)
    }

    fn open_with<F>(
        local: SocketAddrV4,
        interfaces: &[NetworkInterface],
        channel_opener: F,
    ) -> Result<Self, ArpClientError>
    where
        F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
    {
        let interface = find_owner(interfaces, *local.ip())
            .ok_or(ArpClientError::AddressNotLocal(*local.ip()))?
            .clone();

        let cfg = Config {
            read_timeout: Some(Duration::from_millis(READ_TIMEOUT_MS)),
            ..Default::default()
        };
        let (tx, rx) = open_eth_channel(&interface, channel_opener, cfg)?;

        debug!(
            verbosity = 1,
            "Opened datalink channel on {} for {}", interface.name, local
        );

        Ok(Self {
            local,
            interface,
            tx,
            rx,
        })
    }

    pub fn local_endpoint(&self) -> SocketAddrV4 {
        self.local
    }

    pub fn interface(&self) -> &NetworkInterface {
        &self.interface
    }

    pub fn sender(&mut self) -> &mut dyn DataLinkSender {
        self.tx.as_mut()
    }

    pub fn receiver(&mut self) -> &mut dyn DataLinkReceiver {
        self.rx.as_mut()
    }

    pub fn into_parts(self) -> (Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>) {
        (self.tx, self.rx)
    }
}

impl fmt::Debug for DatalinkArpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatalinkArpClient")
            .field("local", &self.local)
            .field("interface", &self.interface.name)
            .finish_non_exhaustive()
    }
}

/// Builds a [`DatalinkArpClient`] for each requested endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatalinkArpFactory;

impl ArpClientFactory for DatalinkArpFactory {
    type Client = DatalinkArpClient;
    type Error = ArpClientError;

    fn create(&self, local: SocketAddrV4) -> Result<DatalinkArpClient, ArpClientError> {
        DatalinkArpClient::open(local)
    }
}

fn find_owner(interfaces: &[NetworkInterface], addr: Ipv4Addr) -> Option<&NetworkInterface> {
    interfaces
        .iter()
        .find(|intf| intf.ips.iter().any(|net| net.ip() == IpAddr::V4(addr)))
}

fn open_eth_channel<F>(
    intf: &NetworkInterface,
    channel_opener: F,
    cfg: Config,
) -> Result<(Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>), ArpClientError>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    let ch = channel_opener(intf, cfg).map_err(|source| ArpClientError::Channel {
        interface: intf.name.clone(),
        source,
    })?;

    match ch {
        Channel::Ethernet(tx, rx) => Ok((tx, rx)),
        _ => Err(ArpClientError::NonEthernetChannel(intf.name.clone())),
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

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::ipnetwork::IpNetwork;
    use pnet::util::MacAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct NullSender;

    impl DataLinkSender for NullSender {
        fn build_and_send(
            &mut self,
            _num_packets: usize,
            _packet_size: usize,
            _func: &mut dyn FnMut(&mut [u8]),
        ) -> Option<io::Result<()>> {
            Some(Ok(()))
        }

        fn send_to(
            &mut self,
            _packet: &[u8],
            _dst: Option<NetworkInterface>,
        ) -> Option<io::Result<()>> {
            Some(Ok(()))
        }
    }

    /// Counts the frames handed to it.
    struct CountingSender(Arc<AtomicUsize>);

    impl DataLinkSender for CountingSender {
        fn build_and_send(
            &mut self,
            num_packets: usize,
            _packet_size: usize,
            _func: &mut dyn FnMut(&mut [u8]),
        ) -> Option<io::Result<()>> {
            self.0.fetch_add(num_packets, Ordering::SeqCst);
            Some(Ok(()))
        }

        fn send_to(
            &mut self,
            _packet: &[u8],
            _dst: Option<NetworkInterface>,
        ) -> Option<io::Result<()>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Some(Ok(()))
        }
    }

    struct SilentReceiver;

    impl DataLinkReceiver for SilentReceiver {
        fn next(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::TimedOut, "nothing received"))
        }
    }

    fn create_mock_interface(name: &str, ips: Vec<IpNetwork>) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: "An interface".to_string(),
            index: 0,
            mac: Some(MacAddr::new(0x02, 0x00, 0x00, 0x00, 0x00, 0x01)),
            ips,
            flags: 0,
        }
    }

    fn interfaces() -> Vec<NetworkInterface> {
        vec![
            create_mock_interface("lo", vec![IpNetwork::V4("127.0.0.1/8".parse().unwrap())]),
            create_mock_interface(
                "eth0",
                vec![
                    IpNetwork::V6("fe80::1/64".parse().unwrap()),
                    IpNetwork::V4("192.168.1.10/24".parse().unwrap()),
                ],
            ),
        ]
    }

    fn endpoint(a: u8, b: u8, c: u8, d: u8) -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::new(a, b, c, d), 0)
    }

    #[test]
    fn find_owner_matches_exact_address_only() {
        let interfaces = interfaces();
        let owner = find_owner(&interfaces, Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(owner.map(|i| i.name.as_str()), Some("eth0"));
        // Same subnet but not bound locally
        assert!(find_owner(&interfaces, Ipv4Addr::new(192, 168, 1, 11)).is_none());
    }

    #[test]
    fn open_with_binds_owning_interface() {
        let local = endpoint(192, 168, 1, 10);
        let client = DatalinkArpClient::open_with(local, &interfaces(), |intf, cfg| {
            assert_eq!(intf.name, "eth0");
            assert_eq!(cfg.read_timeout, Some(Duration::from_millis(READ_TIMEOUT_MS)));
            Ok(Channel::Ethernet(Box::new(NullSender), Box::new(SilentReceiver)))
        })
        .unwrap();

        assert_eq!(client.local_endpoint(), local);
        assert_eq!(client.interface().name, "eth0");
    }

    #[test]
    fn client_hands_out_the_opened_channel() {
        let sent = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&sent);
        let mut client =
            DatalinkArpClient::open_with(endpoint(192, 168, 1, 10), &interfaces(), move |_, _| {
                Ok(Channel::Ethernet(
                    Box::new(CountingSender(counter)),
                    Box::new(SilentReceiver),
                ))
            })
            .unwrap();

        assert!(matches!(client.sender().send_to(&[0u8; 42], None), Some(Ok(()))));
        assert_eq!(
            client.receiver().next().unwrap_err().kind(),
            io::ErrorKind::TimedOut
        );

        let (mut tx, mut rx) = client.into_parts();
        assert!(matches!(tx.send_to(&[0u8; 42], None), Some(Ok(()))));
        assert_eq!(rx.next().unwrap_err().kind(), io::ErrorKind::TimedOut);
        assert_eq!(sent.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn open_with_rejects_foreign_address_without_opening() {
        let result = DatalinkArpClient::open_with(endpoint(10, 9, 8, 7), &interfaces(), |_, _| {
            panic!("channel must not be opened for a foreign address")
        });
        assert!(matches!(
            result.err(),
            Some(ArpClientError::AddressNotLocal(addr)) if addr == Ipv4Addr::new(10, 9, 8, 7)
        ));
    }

    #[test]
    fn open_with_propagates_os_error() {
        let result = DatalinkArpClient::open_with(endpoint(192, 168, 1, 10), &interfaces(), |_, _| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "operation not permitted"))
        });
        match result.err() {
            Some(ArpClientError::Channel { interface, source }) => {
                assert_eq!(interface, "eth0");
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

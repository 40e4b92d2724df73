//! Local address discovery.
//!
//! Connecting a UDP socket sends nothing, but it makes the kernel pick the
//! route and source address it would use for that destination. Reading the
//! socket's local address back gives the interface address facing the
//! network.

use std::net::{IpAddr, Ipv4Addr, SocketAddrV4, UdpSocket};
use tracing::debug;

use crate::config::DEFAULT_PROBE_TARGET;
use crate::error::ResolveError;

/// Source of the host's outbound-facing IPv4 address.
pub trait AddressProbe {
    fn local_ip(&self) -> Result<Ipv4Addr, ResolveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpProbe {
    pub target: SocketAddrV4,
}

impl UdpProbe {
    pub fn new(target: SocketAddrV4) -> Self {
        Self { target }
    }
}

impl Default for UdpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TARGET)
    }
}

impl AddressProbe for UdpProbe {
    fn local_ip(&self) -> Result<Ipv4Addr, ResolveError> {
        debug!("Probing outbound address via {}", self.target);

        // Dropped on every return path, which closes the socket.
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(self.target)?;
        let local = socket.local_addr()?;

        match local.ip() {
            IpAddr::V4(ip) => {
                debug!("Local address is {}", ip);
                Ok(ip)
            }
            other => Err(ResolveError::NotIpv4(other)),
        }
    }
}

/// Dotted-decimal address of the interface used to reach `8.8.8.8:80`.
pub fn discover_local_ip() -> Result<String, ResolveError> {
    UdpProbe::default().local_ip().map(|ip| ip.to_string())
}

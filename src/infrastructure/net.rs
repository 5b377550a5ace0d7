//! One-time discovery of the host's primary IPv4 address.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Port the backend listens on when addressed by local IP.
pub const BACKEND_PORT: u16 = 8000;

/// Finds the IPv4 address of the interface that routes outbound traffic.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
/// Returns `None` when the host has no usable non-loopback IPv4 address.
pub fn discover_local_ipv4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect((Ipv4Addr::new(192, 0, 2, 1), 9)).ok()?;

    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(ip) if !ip.is_loopback() && !ip.is_unspecified() => Some(ip),
        _ => None,
    }
}

/// Resolves the base URL used for the history endpoint.
///
/// An explicit `API_URL` wins; otherwise the backend is assumed to run on
/// this host, addressed by its discovered IPv4 (loopback when discovery fails).
pub fn resolve_history_url(explicit: Option<&str>, discovered: Option<Ipv4Addr>) -> String {
    match explicit {
        Some(url) => url.to_string(),
        None => {
            let ip = discovered.unwrap_or(Ipv4Addr::LOCALHOST);
            format!("http://{ip}:{BACKEND_PORT}")
        }
    }
}

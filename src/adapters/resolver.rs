use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use crate::error::CouchError;

/// Resolve the IP address for a host name, preferring IPv4 over IPv6.
pub fn resolve_ip(host: &str, port: u16) -> Result<IpAddr, CouchError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| CouchError::Dns(format!("{}", e)))?
        .collect();

    let mut v4 = vec![];
    let mut v6 = vec![];
    for a in addrs {
        let ip = a.ip();
        if ip.is_ipv4() {
            v4.push(ip);
        } else {
            v6.push(ip);
        }
    }

    v4.into_iter()
        .chain(v6)
        .next()
        .ok_or_else(|| CouchError::Dns(format!("No IP address found for '{}'", host)))
}

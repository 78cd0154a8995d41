use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Instant;

use tracing::instrument;

use crate::adapters::{dns_client, ntp_client, resolver};
use crate::domain::{ProbeOutcome, Protocol};
use crate::error::CouchError;

/// Parsed view of an endpoint string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEndpoint<'a> {
    pub host: &'a str,
    pub port: Option<u16>,
    pub is_ipv6_literal: bool,
}

/// Strict port parsing with range check (1..=65535).
fn parse_port_strict(s: &str) -> Result<u16, CouchError> {
    let raw = u32::from_str(s).map_err(|_| CouchError::Other(format!("invalid port: '{s}'")))?;
    if raw == 0 || raw > u16::MAX as u32 {
        return Err(CouchError::Other(format!(
            "port out of range [1..65535]: {raw}"
        )));
    }
    Ok(raw as u16)
}

/// Count occurrences of ':' (helps distinguish host:port vs bare IPv6).
#[inline]
fn colon_count(s: &str) -> usize {
    s.as_bytes().iter().filter(|&&b| b == b':').count()
}

/// Parse an endpoint identifier without regexes.
///
/// Supported forms:
/// - "hostname"
/// - "hostname:53"
/// - "1.2.3.4"
/// - "1.2.3.4:53"
/// - "[2001:db8::1]"
/// - "[2001:db8::1]:53"
/// - "2001:db8::1"              (bare IPv6, **no** port allowed)
pub fn parse_endpoint(input: &str) -> Result<ParsedEndpoint<'_>, CouchError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(CouchError::Other("empty endpoint".into()));
    }

    // Bracketed IPv6: "[v6]" or "[v6]:port"
    if let Some(rest) = s.strip_prefix('[') {
        let Some(bracket_pos) = rest.find(']') else {
            return Err(CouchError::Other(format!("missing closing ']' in '{s}'")));
        };
        let host = &rest[..bracket_pos];
        let tail = &rest[bracket_pos + 1..];

        let port = if let Some(p) = tail.strip_prefix(':') {
            Some(parse_port_strict(p)?)
        } else if tail.is_empty() {
            None
        } else {
            return Err(CouchError::Other(format!(
                "unexpected trailing characters in '{s}'"
            )));
        };

        return Ok(ParsedEndpoint {
            host,
            port,
            is_ipv6_literal: true,
        });
    }

    match colon_count(s) {
        // No colon: "hostname" or "1.2.3.4"
        0 => Ok(ParsedEndpoint {
            host: s,
            port: None,
            is_ipv6_literal: false,
        }),

        // Exactly one colon: "host:port"
        1 => {
            let mut it = s.rsplitn(2, ':');
            let port_str = it.next().unwrap();
            let host = it.next().unwrap_or("");
            if host.is_empty() {
                return Err(CouchError::Other(format!(
                    "missing host before port in '{s}'"
                )));
            }
            let port = parse_port_strict(port_str)?;
            Ok(ParsedEndpoint {
                host,
                port: Some(port),
                is_ipv6_literal: false,
            })
        }

        // More than one colon: bare IPv6, no port
        _ => Ok(ParsedEndpoint {
            host: s,
            port: None,
            is_ipv6_literal: true,
        }),
    }
}

/// Run one timed request against one endpoint.
///
/// Elapsed time is the plain wall-clock delta around the exchange. A probe
/// that runs into its deadline is not an error: it yields
/// [`ProbeOutcome::TimedOut`] carrying the protocol sentinel. Malformed
/// endpoints and transport failures are hard errors.
#[instrument]
pub async fn probe(endpoint: &str, protocol: Protocol) -> Result<ProbeOutcome, CouchError> {
    let parsed = parse_endpoint(endpoint)?;
    let port = parsed.port.unwrap_or(protocol.default_port());
    let ip = match IpAddr::from_str(parsed.host) {
        Ok(ip) => ip,
        Err(_) => resolver::resolve_ip(parsed.host, port)?,
    };

    let deadline = protocol.deadline();
    let start = Instant::now();
    let res = match protocol {
        Protocol::Dns => dns_client::query(SocketAddr::new(ip, port), deadline).await,
        Protocol::Ntp => ntp_client::query(ip, port, deadline).await,
    };
    match res {
        Ok(()) => Ok(ProbeOutcome::Responded(start.elapsed())),
        Err(CouchError::Timeout) => Ok(ProbeOutcome::TimedOut(deadline)),
        Err(e) => Err(e),
    }
}

use std::net::SocketAddr;
use std::time::Duration;

use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts},
    error::ResolveErrorKind,
};

use crate::error::CouchError;

/// Fixed, well-known name queried against every DNS endpoint.
pub const QUERY_NAME: &str = "google.com.";

/// Issue one A-record lookup through the given server only.
///
/// The resolver is built fresh per call with caching and retries turned
/// off so exactly one wire exchange happens.
pub async fn query(server: SocketAddr, timeout: Duration) -> Result<(), CouchError> {
    let mut config = ResolverConfig::new();
    config.add_name_server(NameServerConfig::new(server, Protocol::Udp));

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.cache_size = 0;
    opts.use_hosts_file = false;

    let resolver = TokioAsyncResolver::tokio(config, opts);
    match resolver.ipv4_lookup(QUERY_NAME).await {
        Ok(_) => Ok(()),
        Err(e) => match e.kind() {
            ResolveErrorKind::Timeout => Err(CouchError::Timeout),
            // An empty or negative answer still proves the server replied.
            ResolveErrorKind::NoRecordsFound { .. } => Ok(()),
            ResolveErrorKind::Io(io)
                if matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                ) =>
            {
                Err(CouchError::Timeout)
            }
            ResolveErrorKind::Io(_) => Err(CouchError::Network(e.to_string())),
            ResolveErrorKind::Proto(_) => Err(CouchError::Protocol(e.to_string())),
            _ => Err(CouchError::Other(e.to_string())),
        },
    }
}

use std::net::{IpAddr, Ipv6Addr};
use std::time::Duration;

use rsntp::{AsyncSntpClient, Config};

use crate::error::CouchError;

/// Issue one SNTP exchange against the server. The reply's embedded
/// timestamps only decide success; the caller measures elapsed time.
pub async fn query(ip: IpAddr, port: u16, timeout: Duration) -> Result<(), CouchError> {
    let cfg = if ip.is_ipv6() {
        Config::default().bind_address((Ipv6Addr::UNSPECIFIED, 0).into())
    } else {
        Config::default().bind_address(([0, 0, 0, 0], 0).into())
    };
    let client = AsyncSntpClient::with_config(cfg);
    // rsntp does not expose an explicit timeout; rely on tokio
    let addr = format!("{}:{}", ip, port);
    let fut = client.synchronize(addr);
    let res = tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| CouchError::Timeout)?;
    match res {
        Ok(_) => Ok(()),
        // A deadline hit inside the library counts as a timeout too.
        Err(rsntp::SynchronizationError::IOError(e))
            if matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ) =>
        {
            Err(CouchError::Timeout)
        }
        Err(e) => Err(e.into()),
    }
}

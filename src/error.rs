use thiserror::Error;

/// Top-level error type for the couchmark library.
#[derive(Error, Debug)]
pub enum CouchError {
    /// Endpoint could not be parsed or resolved.
    #[error("dns: {0}")]
    Dns(String),
    /// Network related error.
    #[error("network: {0}")]
    Network(String),
    /// Protocol violation in a response.
    #[error("protocol: {0}")]
    Protocol(String),
    /// Probe deadline expired. Converted into a sentinel outcome by the
    /// probe layer, never surfaced through the public entry points.
    #[error("timeout")]
    Timeout,
    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Other error cases.
    #[error("other: {0}")]
    Other(String),
}

impl From<rsntp::SynchronizationError> for CouchError {
    fn from(err: rsntp::SynchronizationError) -> Self {
        match err {
            rsntp::SynchronizationError::IOError(e) => CouchError::Network(e.to_string()),
            rsntp::SynchronizationError::ProtocolError(e) => CouchError::Protocol(e.to_string()),
        }
    }
}

//! couchmark library: timed sweeps over public DNS and NTP server
//! catalogs with averaged, ranked results.

pub mod adapters;
pub mod catalog;
pub mod domain;
mod error;
pub mod fmt;
pub mod services;
pub mod tui;

pub use catalog::Catalog;
pub use domain::{ProbeOutcome, Protocol, RankedResult};
pub use error::CouchError;
pub use services::average::repeat_and_average;
pub use services::probe::probe;
pub use services::sweep::{SweepError, sweep_once};

/// Probe every DNS endpoint in the catalog `n` times and return the
/// averaged, ascending-sorted report.
pub async fn lookup_servers_n(
    catalog: &Catalog,
    n: u32,
) -> Result<Vec<RankedResult>, CouchError> {
    repeat_and_average(catalog, Protocol::Dns, n).await
}

/// Probe the built-in NTP catalog `n` times and return the averaged,
/// ascending-sorted report. Consecutive sweeps are paced to stay under
/// pool rate limits.
pub async fn lookup_ntp_servers_n(n: u32) -> Result<Vec<RankedResult>, CouchError> {
    repeat_and_average(&Catalog::ntp(), Protocol::Ntp, n).await
}

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use thiserror::Error;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::domain::{ProbeOutcome, Protocol};
use crate::error::CouchError;

use super::probe::probe;

/// A sweep aborted by a hard probe failure.
///
/// `partial` holds the mapping for every endpoint ahead of the failing one
/// in dispatch order; callers must treat it as incomplete.
#[derive(Debug, Error)]
#[error("sweep aborted: {source}")]
pub struct SweepError {
    pub partial: BTreeMap<String, Duration>,
    #[source]
    pub source: CouchError,
}

/// Probe every endpoint in the catalog once, concurrently.
///
/// On success the mapping contains exactly one duration per catalog
/// endpoint. Endpoints are dispatched in sorted identifier order and the
/// first hard error in that order aborts the sweep, even when a
/// later-submitted probe failed first on the wire.
#[instrument(skip(catalog), fields(endpoints = catalog.len()))]
pub async fn sweep_once(
    catalog: &Catalog,
    protocol: Protocol,
) -> Result<BTreeMap<String, Duration>, SweepError> {
    sweep_with(catalog, |endpoint| async move {
        probe(&endpoint, protocol).await
    })
    .await
}

/// Sweep driver generic over the probe function, so aggregation and
/// fail-fast behavior are testable without the network.
pub(crate) async fn sweep_with<F, Fut>(
    catalog: &Catalog,
    probe_fn: F,
) -> Result<BTreeMap<String, Duration>, SweepError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<ProbeOutcome, CouchError>>,
{
    let endpoints: Vec<String> = catalog.endpoints().map(str::to_owned).collect();
    let futures: Vec<Fut> = endpoints.iter().cloned().map(&probe_fn).collect();
    let results = join_all(futures).await;

    let mut times = BTreeMap::new();
    for (endpoint, res) in endpoints.into_iter().zip(results) {
        match res {
            Ok(outcome) => {
                times.insert(endpoint, outcome.sample());
            }
            Err(source) => {
                // Earliest-submitted error wins; completed later slots are
                // dropped so the partial mapping matches dispatch order.
                return Err(SweepError {
                    partial: times,
                    source,
                });
            }
        }
    }
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(ids: &[&str]) -> Catalog {
        Catalog::from_entries(ids.iter().map(|id| (*id, format!("desc {id}"))))
    }

    #[tokio::test]
    async fn successful_sweep_covers_every_endpoint() {
        let cat = catalog_of(&["a", "b", "c"]);
        let times = sweep_with(&cat, |e| async move {
            let d = Duration::from_millis(e.len() as u64);
            Ok(ProbeOutcome::Responded(d))
        })
        .await
        .unwrap();
        assert_eq!(times.len(), 3);
        assert!(times.contains_key("a") && times.contains_key("b") && times.contains_key("c"));
    }

    #[tokio::test]
    async fn timed_out_probe_contributes_its_sentinel() {
        let cat = catalog_of(&["slow"]);
        let times = sweep_with(&cat, |_| async {
            Ok(ProbeOutcome::TimedOut(Protocol::Dns.deadline()))
        })
        .await
        .unwrap();
        assert_eq!(times["slow"], Duration::from_secs(2));
    }

    #[tokio::test]
    async fn fail_fast_keeps_only_earlier_endpoints() {
        let cat = catalog_of(&["e1", "e2", "e3", "e4", "e5"]);
        let err = sweep_with(&cat, |e| async move {
            if e == "e3" {
                Err(CouchError::Network("connection refused".into()))
            } else {
                Ok(ProbeOutcome::Responded(Duration::from_millis(1)))
            }
        })
        .await
        .expect_err("expected aborted sweep");

        let kept: Vec<&str> = err.partial.keys().map(String::as_str).collect();
        assert_eq!(kept, vec!["e1", "e2"]);
        assert!(matches!(err.source, CouchError::Network(_)));
    }
}

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::domain::{Protocol, RankedResult};
use crate::error::CouchError;

use super::rank::rank;
use super::sweep::sweep_once;

/// Pause inserted before every NTP sweep after the first. Public pools
/// throttle repeated queries aggressively (kiss-of-death RATE replies).
const NTP_SWEEP_PAUSE: Duration = Duration::from_secs(2);

/// Run `n` sweeps over the catalog, average each endpoint's samples and
/// return the ranked report.
///
/// Any sweep that hits a hard error aborts the whole run; no partial
/// averages are returned. `n` of zero is treated as one.
#[instrument(skip(catalog), fields(endpoints = catalog.len()))]
pub async fn repeat_and_average(
    catalog: &Catalog,
    protocol: Protocol,
    n: u32,
) -> Result<Vec<RankedResult>, CouchError> {
    let n = n.max(1);
    let mut sweeps = Vec::with_capacity(n as usize);
    for i in 0..n {
        if i > 0 && protocol == Protocol::Ntp {
            tokio::time::sleep(NTP_SWEEP_PAUSE).await;
        }
        let times = sweep_once(catalog, protocol).await.map_err(|e| e.source)?;
        debug!(sweep = i + 1, of = n, "sweep complete");
        sweeps.push(times);
    }
    Ok(rank(catalog, &average_sweeps(&sweeps)))
}

/// Per-endpoint arithmetic mean over the collected sweeps, computed in
/// integer nanoseconds with truncating division.
fn average_sweeps(sweeps: &[BTreeMap<String, Duration>]) -> BTreeMap<String, Duration> {
    let mut averaged = BTreeMap::new();
    let Some(first) = sweeps.first() else {
        return averaged;
    };
    let n = sweeps.len() as u128;
    for endpoint in first.keys() {
        let sum: u128 = sweeps
            .iter()
            .filter_map(|s| s.get(endpoint))
            .map(|d| d.as_nanos())
            .sum();
        averaged.insert(endpoint.clone(), Duration::from_nanos((sum / n) as u64));
    }
    averaged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweeps_for(endpoint: &str, nanos: &[u64]) -> Vec<BTreeMap<String, Duration>> {
        nanos
            .iter()
            .map(|&ns| {
                let mut m = BTreeMap::new();
                m.insert(endpoint.to_string(), Duration::from_nanos(ns));
                m
            })
            .collect()
    }

    #[test]
    fn exact_mean_when_sum_divides_evenly() {
        let sweeps = sweeps_for("e", &[100, 101, 102]);
        assert_eq!(
            average_sweeps(&sweeps)["e"],
            Duration::from_nanos(101)
        );
    }

    #[test]
    fn fractional_remainders_are_truncated_not_rounded() {
        let sweeps = sweeps_for("e", &[100, 100, 101]);
        // 301 / 3 = 100, remainder discarded
        assert_eq!(
            average_sweeps(&sweeps)["e"],
            Duration::from_nanos(100)
        );
    }

    #[test]
    fn single_sweep_average_is_the_sweep_itself() {
        let mut m = BTreeMap::new();
        m.insert("a".to_string(), Duration::from_micros(250));
        m.insert("b".to_string(), Duration::from_micros(75));
        assert_eq!(average_sweeps(std::slice::from_ref(&m)), m);
    }

    #[test]
    fn empty_input_averages_to_nothing() {
        assert!(average_sweeps(&[]).is_empty());
    }
}

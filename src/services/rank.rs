use std::collections::BTreeMap;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::domain::RankedResult;

/// Join averaged durations with catalog descriptions and sort the rows
/// ascending by duration. Pure transformation; the sort is stable so ties
/// keep their endpoint order.
pub fn rank(catalog: &Catalog, times: &BTreeMap<String, Duration>) -> Vec<RankedResult> {
    let mut out: Vec<RankedResult> = times
        .iter()
        .map(|(server, d)| RankedResult {
            server: server.clone(),
            description: catalog
                .description(server)
                .unwrap_or_default()
                .to_string(),
            duration: *d,
        })
        .collect();
    out.sort_by_key(|r| r.duration);
    out
}

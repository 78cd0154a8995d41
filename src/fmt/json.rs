#[cfg(feature = "json")]
use serde::Serialize;

use crate::domain::RankedResult;
use crate::error::CouchError;

#[cfg(feature = "json")]
#[derive(Serialize)]
pub struct JsonEntry {
    pub server: String,
    pub description: String,
    pub rtt_ms: f64,
}

#[cfg(feature = "json")]
#[derive(Serialize)]
pub struct JsonReport {
    pub schema_version: u8,
    pub results: Vec<JsonEntry>,
}

/// Serialize the ranked report into a JSON string.
#[allow(unused_variables)]
pub fn to_json(results: &[RankedResult], pretty: bool) -> Result<String, CouchError> {
    #[cfg(feature = "json")]
    {
        let entries = results
            .iter()
            .map(|r| JsonEntry {
                server: r.server.clone(),
                description: r.description.clone(),
                rtt_ms: r.duration.as_secs_f64() * 1000.0,
            })
            .collect();
        let report = JsonReport {
            schema_version: 1,
            results: entries,
        };
        let text = if pretty {
            serde_json::to_string_pretty(&report).map_err(|e| CouchError::Other(e.to_string()))?
        } else {
            serde_json::to_string(&report).map_err(|e| CouchError::Other(e.to_string()))?
        };
        Ok(text)
    }
    #[cfg(not(feature = "json"))]
    {
        Err(CouchError::Other(
            "JSON output not enabled. Compile with --features json".to_string(),
        ))
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn report_carries_every_row() {
        let results = vec![RankedResult {
            server: "1.1.1.1".into(),
            description: "Cloudflare One".into(),
            duration: Duration::from_millis(12),
        }];
        let text = to_json(&results, false).unwrap();
        assert!(text.contains("\"schema_version\":1"));
        assert!(text.contains("\"server\":\"1.1.1.1\""));
        assert!(text.contains("\"rtt_ms\":12.0"));
    }
}

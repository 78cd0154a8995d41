use std::time::Duration;

#[cfg(feature = "json")]
use serde::Serialize;

/// Wire protocol used for a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Dns,
    Ntp,
}

impl Protocol {
    /// Port appended when an endpoint carries none.
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Dns => 53,
            Protocol::Ntp => 123,
        }
    }

    /// Per-probe deadline. Doubles as the sentinel duration substituted
    /// for a probe that ran into it, so timed-out endpoints still take
    /// part in averaging and ranking.
    pub fn deadline(self) -> Duration {
        match self {
            Protocol::Dns => Duration::from_secs(2),
            Protocol::Ntp => Duration::from_secs(5),
        }
    }
}

/// Outcome of a single probe attempt.
///
/// Timed-out probes are not errors: the endpoint may be slow or entirely
/// unreachable, and the report treats both the same way. The two cases are
/// kept apart here so callers can still tell them from a genuine answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered within the deadline.
    Responded(Duration),
    /// The deadline passed; carries the protocol sentinel.
    TimedOut(Duration),
}

impl ProbeOutcome {
    /// Duration sample contributed to averaging and ranking.
    pub fn sample(self) -> Duration {
        match self {
            ProbeOutcome::Responded(d) | ProbeOutcome::TimedOut(d) => d,
        }
    }

    pub fn timed_out(self) -> bool {
        matches!(self, ProbeOutcome::TimedOut(_))
    }
}

/// One row of the final ranked report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct RankedResult {
    pub server: String,
    pub description: String,
    pub duration: Duration,
}

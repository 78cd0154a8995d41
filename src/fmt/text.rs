use std::time::Duration;

use console::style;

use crate::domain::RankedResult;

/// Round a duration to the nearest 10µs for display; sub-10µs noise is
/// meaningless for network round trips.
pub fn display_duration(d: Duration) -> String {
    const STEP: u128 = 10_000;
    let nanos = d.as_nanos();
    let rounded = (nanos + STEP / 2) / STEP * STEP;
    format!("{:?}", Duration::from_nanos(rounded as u64))
}

/// Render the ranked report, one line per server, fastest first.
pub fn render_results(results: &[RankedResult]) -> String {
    let mut out = String::new();
    for r in results {
        out.push_str(&format!(
            "{:>10} {} {}\n",
            style(display_duration(r.duration)).yellow(),
            style(format!("{:<22}", r.server)).green(),
            r.description,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_round_to_ten_microseconds() {
        assert_eq!(display_duration(Duration::from_nanos(12_344_999)), "12.34ms");
        assert_eq!(display_duration(Duration::from_nanos(12_345_000)), "12.35ms");
        assert_eq!(display_duration(Duration::from_secs(2)), "2s");
    }

    #[test]
    fn renders_one_line_per_result() {
        let results = vec![
            RankedResult {
                server: "1.1.1.1".into(),
                description: "Cloudflare One".into(),
                duration: Duration::from_millis(12),
            },
            RankedResult {
                server: "8.8.8.8".into(),
                description: "Google Primary".into(),
                duration: Duration::from_millis(20),
            },
        ];
        let text = render_results(&results);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Cloudflare One"));
        assert!(text.contains("8.8.8.8"));
    }
}

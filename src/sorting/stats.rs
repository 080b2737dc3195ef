// Run statistics for a single sort call

use serde::{Serialize, Serializer};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SortStatistics {
    /// Adjacent pairs examined
    pub comparisons: usize,
    /// Adjacent exchanges performed
    pub swaps: usize,
    #[serde(serialize_with = "serialize_secs")]
    pub execution_time: Duration,
    /// Passes (basic) or completed rounds (bidirectional) actually run
    pub iterations: usize,
}

impl SortStatistics {
    pub fn execution_secs(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }

    pub fn format_duration(duration: Duration) -> String {
        let nanos = duration.as_nanos();
        if nanos < 1_000 {
            format!("{} ns", nanos)
        } else if nanos < 1_000_000 {
            format!("{:.2} µs", nanos as f64 / 1_000.0)
        } else if nanos < 1_000_000_000 {
            format!("{:.2} ms", nanos as f64 / 1_000_000.0)
        } else {
            format!("{:.2} s", nanos as f64 / 1_000_000_000.0)
        }
    }
}

fn serialize_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}

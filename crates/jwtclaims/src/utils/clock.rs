//! Wall-clock access

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp
pub(crate) fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}

/// Add leeway to a timestamp, saturating at the numeric bounds
pub(crate) fn with_leeway(timestamp: i64, leeway_seconds: u64) -> i64 {
    timestamp.saturating_add(leeway(leeway_seconds))
}

/// Subtract leeway from a timestamp, saturating at the numeric bounds
pub(crate) fn without_leeway(timestamp: i64, leeway_seconds: u64) -> i64 {
    timestamp.saturating_sub(leeway(leeway_seconds))
}

fn leeway(seconds: u64) -> i64 {
    i64::try_from(seconds).unwrap_or(i64::MAX)
}

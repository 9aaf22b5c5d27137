//! Relative-age labels for feed cards

use chrono::{DateTime, Utc};

/// Human-readable age for a number of elapsed seconds.
///
/// Negative ages (clock skew) count as "just now". There is no day tier.
pub fn time_ago(seconds: i64) -> String {
    match seconds {
        ..=4 => "just now".to_string(),
        5..=59 => format!("{}s ago", seconds),
        60..=3599 => format!("{}m ago", seconds / 60),
        _ => format!("{}h ago", seconds / 3600),
    }
}

/// Label for something created at `created_at`, as seen at `now`
pub fn age_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    time_ago((now - created_at).num_seconds())
}

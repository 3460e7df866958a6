//! Cooldown gate: pure comparison of a stored timestamp against an injected
//! `now`, so the reward engine and its tests never consult the wall clock
//! themselves.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Allowed,
    OnCooldown { remaining: Duration },
}

/// Compares `now` against the last successful action. The caller is
/// responsible for stamping `now` into the record after the reward succeeds.
pub fn check(last: Option<DateTime<Utc>>, window: Duration, now: DateTime<Utc>) -> Gate {
    match last {
        Some(last) => {
            let ready_at = last + window;
            if now < ready_at {
                Gate::OnCooldown {
                    remaining: ready_at - now,
                }
            } else {
                Gate::Allowed
            }
        }
        None => Gate::Allowed,
    }
}

/// Human-readable remaining time: `1h 5m`, `12m`, `45s`.
pub fn format_duration(dur: Duration) -> String {
    let hours = dur.num_hours();
    let minutes = dur.num_minutes() % 60;
    let seconds = dur.num_seconds() % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if hours == 0 && minutes == 0 && seconds > 0 {
        parts.push(format!("{}s", seconds));
    }

    if parts.is_empty() {
        "less than a second".to_string()
    } else {
        parts.join(" ")
    }
}

//! Tests for the pure cooldown gate and its duration formatting.

use chrono::{Duration, TimeZone, Utc};
use photocard_bot::economy::Gate;
use photocard_bot::economy::cooldown::{check, format_duration};

#[test]
fn never_acted_is_allowed() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(check(None, Duration::seconds(1800), now), Gate::Allowed);
}

#[test]
fn partial_window_reports_remaining() {
    // last_work = now - 1000s with an 1800s window leaves 800s.
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let last = now - Duration::seconds(1000);
    match check(Some(last), Duration::seconds(1800), now) {
        Gate::OnCooldown { remaining } => assert_eq!(remaining.num_seconds(), 800),
        Gate::Allowed => panic!("should still be gated"),
    }
}

#[test]
fn elapsed_window_is_allowed() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let last = now - Duration::seconds(1800);
    assert_eq!(check(Some(last), Duration::seconds(1800), now), Gate::Allowed);
    let earlier = now - Duration::seconds(7200);
    assert_eq!(
        check(Some(earlier), Duration::seconds(1800), now),
        Gate::Allowed
    );
}

#[test]
fn formats_hours_minutes_seconds() {
    assert_eq!(format_duration(Duration::seconds(3900)), "1h 5m");
    assert_eq!(format_duration(Duration::seconds(720)), "12m");
    assert_eq!(format_duration(Duration::seconds(45)), "45s");
    assert_eq!(format_duration(Duration::seconds(0)), "less than a second");
}

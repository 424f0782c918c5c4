use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const SECS_PER_DAY: u64 = 86_400;

/// How hours are shown once a duration reaches a full day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockPolicy {
    /// Hours keep counting past 23 (`25:00:00`).
    #[default]
    Unbounded,
    /// Time of day of an offset from midnight, wraps every 24 hours.
    TimeOfDay,
}

/// Format seconds as `HH:MM:SS`. Fractions are truncated after rounding to
/// whole milliseconds, so `56.99999999999999` shows as `00:00:57`. Negative
/// or non-finite input renders as zero.
pub fn format_clock(secs: f64, policy: ClockPolicy) -> String {
    let whole = whole_secs(secs);
    match policy {
        ClockPolicy::Unbounded => fmt_hms(whole),
        ClockPolicy::TimeOfDay => fmt_time_of_day(whole),
    }
}

fn whole_secs(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        // saturating cast
        (secs * 1000.0).round() as u64 / 1000
    } else {
        0
    }
}

fn fmt_hms(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

fn fmt_time_of_day(secs: u64) -> String {
    let of_day = (secs % SECS_PER_DAY) as u32;
    match NaiveTime::from_num_seconds_from_midnight_opt(of_day, 0) {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => fmt_hms(0),
    }
}

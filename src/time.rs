//! `HH:MM` clock helpers.

use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: i32 = 1440;

/// How a finish time past midnight is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishTimeRollover {
    /// Keep counting hours past 24 (`25:30`). No calendar rollover.
    #[default]
    Extend,
    /// Render modulo one day (`01:30`).
    Wrap,
}

/// Parse `HH:MM` into minutes since midnight.
///
/// Malformed input (missing separator, non-numeric parts) yields `0`, so a
/// bad time ranks as the earliest possible. Components are not range
/// checked and anything after the second field is ignored.
pub fn parse_minutes(time: &str) -> i32 {
    match try_parse_minutes(time) {
        Some(minutes) => minutes,
        None => {
            tracing::warn!(time, "unparseable appointment time, treating as 00:00");
            0
        }
    }
}

fn try_parse_minutes(time: &str) -> Option<i32> {
    let mut parts = time.split(':');
    let hours: i32 = parts.next()?.trim().parse().ok()?;
    let minutes: i32 = parts.next()?.trim().parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_clock(minutes: i32, rollover: FinishTimeRollover) -> String {
    let minutes = match rollover {
        FinishTimeRollover::Extend => minutes,
        FinishTimeRollover::Wrap => minutes.rem_euclid(MINUTES_PER_DAY),
    };
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}

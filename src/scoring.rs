//! Per-appointment priority scoring.
//!
//! The score decides which stop the route starts from. It only looks at the
//! appointment itself; `distance` and `city_cluster` play no part here and
//! are applied step by step during route construction instead.

use crate::priority::{PriorityKey, RoutePriorityConfig};
use crate::time::{parse_minutes, MINUTES_PER_DAY};
use crate::types::Appointment;

/// Visits longer than this earn no time-at-house bonus.
const MAX_REWARDED_VISIT_MINUTES: u32 = 120;

const OPEN_HOUSE_POINTS: f64 = 100.0;

/// An appointment paired with its score.
#[derive(Debug, Clone)]
pub struct ScoredAppointment<'a> {
    pub appointment: &'a Appointment,
    pub score: f64,
}

/// Additive weighted score; each term is gated by its priority being enabled.
pub fn score(appointment: &Appointment, config: &RoutePriorityConfig) -> f64 {
    let mut score = 0.0;

    if let Some(weight) = config.weight(PriorityKey::OpenHouse) {
        if appointment.is_open_house {
            score += f64::from(weight) * OPEN_HOUSE_POINTS;
        }
    }

    // Earlier starts score higher; 1440 minutes normalize to 0..100.
    if let Some(weight) = config.weight(PriorityKey::AppointmentTime) {
        let start = parse_minutes(&appointment.start_time);
        score += f64::from(weight) * (f64::from(MINUTES_PER_DAY) - f64::from(start)) / 14.4;
    }

    // Shorter visits score higher, capped at two hours.
    if let Some(weight) = config.weight(PriorityKey::TimeAtHouse) {
        let visit = appointment.time_at_house.min(MAX_REWARDED_VISIT_MINUTES);
        score += f64::from(weight) * f64::from(MAX_REWARDED_VISIT_MINUTES - visit) / 1.2;
    }

    score
}

/// Score every appointment, keeping input order.
pub fn score_all<'a>(
    appointments: &'a [Appointment],
    config: &RoutePriorityConfig,
) -> Vec<ScoredAppointment<'a>> {
    appointments
        .iter()
        .map(|appointment| ScoredAppointment {
            appointment,
            score: score(appointment, config),
        })
        .collect()
}

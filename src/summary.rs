//! Route totals: time, distance and projected finish.

use crate::solver::SolveOptions;
use crate::time::{format_clock, parse_minutes};
use crate::traits::DistanceEstimator;
use crate::types::OrderedAppointment;

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Time at every house plus estimated travel, in minutes.
    pub total_minutes: u32,
    /// Sum of raw hop distances, rounded to one decimal place.
    pub total_distance: f64,
    /// First stop's start plus `total_minutes`, `HH:MM`. Empty for no stops.
    pub finish_time: String,
}

/// Aggregate a built route.
///
/// Hop distances are the estimator's raw values; the city-cluster discount
/// used while building the route is not applied here.
pub fn summarize<M>(stops: &[OrderedAppointment], estimator: &M, options: &SolveOptions) -> RouteSummary
where
    M: DistanceEstimator,
{
    let Some(first) = stops.first() else {
        return RouteSummary {
            total_minutes: 0,
            total_distance: 0.0,
            finish_time: String::new(),
        };
    };

    let distance: f64 = stops
        .windows(2)
        .map(|pair| estimator.distance(&pair[0].appointment, &pair[1].appointment))
        .sum();

    let visiting = stops
        .iter()
        .map(|stop| stop.appointment.time_at_house)
        .fold(0u32, u32::saturating_add);
    let travel = (distance * options.travel_minutes_per_unit).floor().max(0.0) as u32;
    let total_minutes = visiting.saturating_add(travel);

    let finish = parse_minutes(&first.appointment.start_time).saturating_add_unsigned(total_minutes);

    RouteSummary {
        total_minutes,
        total_distance: round_tenths(distance),
        finish_time: format_clock(finish, options.finish_time_rollover),
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

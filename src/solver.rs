//! Route construction.
//!
//! Priority-seeded greedy nearest neighbor: the highest scored appointment
//! opens the route, then each step moves to the closest remaining stop,
//! with same-city candidates discounted by the `city_cluster` weight.

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::distance::AddressHashDistance;
use crate::error::PlanError;
use crate::priority::{PriorityKey, RoutePriorityConfig};
use crate::scoring::{score_all, ScoredAppointment};
use crate::summary::summarize;
use crate::time::FinishTimeRollover;
use crate::traits::{AppointmentSource, DistanceEstimator, PrioritySource};
use crate::types::{Appointment, OptimizedRoute, OrderedAppointment};

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Travel minutes per unit of estimated distance.
    pub travel_minutes_per_unit: f64,
    /// Rendering of finish times past midnight.
    pub finish_time_rollover: FinishTimeRollover,
    /// Cap on appointments taken from a source by [`plan_day`].
    pub max_appointments: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            travel_minutes_per_unit: 3.0,
            finish_time_rollover: FinishTimeRollover::Extend,
            max_appointments: Some(100),
        }
    }
}

/// One owner's day to plan in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRequest<O> {
    pub owner: O,
    pub date: String,
}

/// Order scored appointments into a visiting sequence.
///
/// Ties in score keep input order; ties in effective distance go to the
/// earliest remaining candidate in score order.
pub fn build_route<M>(
    mut scored: Vec<ScoredAppointment<'_>>,
    config: &RoutePriorityConfig,
    estimator: &M,
) -> Vec<OrderedAppointment>
where
    M: DistanceEstimator,
{
    // stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut remaining: Vec<&Appointment> = scored.into_iter().map(|s| s.appointment).collect();
    if remaining.is_empty() {
        return Vec::new();
    }

    let city_bonus = config.weight(PriorityKey::CityCluster).map(f64::from);

    let mut current = remaining.remove(0);
    let mut route = Vec::with_capacity(remaining.len() + 1);
    route.push(current);

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_distance = f64::INFINITY;

        for (i, candidate) in remaining.iter().enumerate() {
            let mut distance = estimator.distance(current, candidate);
            if let Some(bonus) = city_bonus {
                if current.city == candidate.city {
                    // no floor; may go negative
                    distance -= bonus;
                }
            }

            if distance < best_distance {
                best_distance = distance;
                best_idx = i;
            }
        }

        current = remaining.remove(best_idx);
        trace!(
            appointment = %current.id,
            effective_distance = best_distance,
            "next stop"
        );
        route.push(current);
    }

    route
        .into_iter()
        .enumerate()
        .map(|(order_index, appointment)| OrderedAppointment {
            appointment: appointment.clone(),
            order_index,
        })
        .collect()
}

/// Score, order and summarize with the address-hash estimator and default
/// options.
pub fn optimize_route(appointments: &[Appointment], config: &RoutePriorityConfig) -> OptimizedRoute {
    optimize_route_with(appointments, config, &AddressHashDistance, &SolveOptions::default())
}

/// Score, order and summarize with an explicit estimator and options.
///
/// The same estimator drives route construction and the distance total.
pub fn optimize_route_with<M>(
    appointments: &[Appointment],
    config: &RoutePriorityConfig,
    estimator: &M,
    options: &SolveOptions,
) -> OptimizedRoute
where
    M: DistanceEstimator,
{
    if appointments.is_empty() {
        debug!("no appointments to route");
        return OptimizedRoute::empty();
    }

    debug!(
        appointments = appointments.len(),
        priorities = ?config.enabled_keys(),
        "optimizing route"
    );

    let scored = score_all(appointments, config);
    let stops = build_route(scored, config, estimator);
    let summary = summarize(&stops, estimator, options);

    OptimizedRoute {
        appointments: stops,
        total_estimated_time: summary.total_minutes,
        total_distance_estimate: summary.total_distance,
        finish_time_estimate: summary.finish_time,
    }
}

/// Load an owner's appointments and priorities for `date`, then optimize.
///
/// A missing priority configuration falls back to the default one.
pub fn plan_day<O, A, P, M>(
    owner: &O,
    date: &str,
    appointments: &A,
    priorities: &P,
    estimator: &M,
    options: &SolveOptions,
) -> Result<OptimizedRoute, PlanError<A::Error, P::Error>>
where
    A: AppointmentSource<OwnerId = O>,
    P: PrioritySource<OwnerId = O>,
    M: DistanceEstimator,
{
    let mut day = appointments
        .appointments_for(owner, date)
        .map_err(PlanError::Appointments)?;

    if let Some(limit) = options.max_appointments {
        if day.len() > limit {
            debug!(date, fetched = day.len(), limit, "truncating appointments");
            day.truncate(limit);
        }
    }

    let stored = priorities.priorities_for(owner).map_err(PlanError::Priorities)?;
    let config = RoutePriorityConfig::resolve(stored);

    let route = optimize_route_with(&day, &config, estimator, options);
    info!(
        date,
        stops = route.appointments.len(),
        total_minutes = route.total_estimated_time,
        total_distance = route.total_distance_estimate,
        finish = %route.finish_time_estimate,
        "route planned"
    );

    Ok(route)
}

/// Plan several independent days in parallel. Results keep request order.
pub fn plan_days<O, A, P, M>(
    requests: &[DayRequest<O>],
    appointments: &A,
    priorities: &P,
    estimator: &M,
    options: &SolveOptions,
) -> Vec<Result<OptimizedRoute, PlanError<A::Error, P::Error>>>
where
    O: Sync,
    A: AppointmentSource<OwnerId = O> + Sync,
    P: PrioritySource<OwnerId = O> + Sync,
    A::Error: Send,
    P::Error: Send,
    M: DistanceEstimator + Sync,
{
    requests
        .par_iter()
        .map(|request| {
            plan_day(
                &request.owner,
                &request.date,
                appointments,
                priorities,
                estimator,
                options,
            )
        })
        .collect()
}

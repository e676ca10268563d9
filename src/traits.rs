//! Seams between the routing core and its collaborators.
//!
//! The core owns none of these concerns: distance is a pluggable strategy,
//! and appointment/priority storage lives behind the caller's own types.

use crate::priority::RoutePriorityConfig;
use crate::types::Appointment;

/// Pairwise "closeness" between two stops.
///
/// Implementations must be symmetric and deterministic, and share one unit:
/// identical locations score `1.0` and larger values mean farther apart.
pub trait DistanceEstimator {
    fn distance(&self, from: &Appointment, to: &Appointment) -> f64;
}

impl<T: DistanceEstimator + ?Sized> DistanceEstimator for &T {
    fn distance(&self, from: &Appointment, to: &Appointment) -> f64 {
        (**self).distance(from, to)
    }
}

/// Supplies an owner's appointments for one calendar date.
pub trait AppointmentSource {
    type OwnerId;
    type Error;

    fn appointments_for(&self, owner: &Self::OwnerId, date: &str) -> Result<Vec<Appointment>, Self::Error>;
}

/// Supplies an owner's stored priority configuration, if any.
///
/// `Ok(None)` is a lookup miss, not a failure.
pub trait PrioritySource {
    type OwnerId;
    type Error;

    fn priorities_for(&self, owner: &Self::OwnerId) -> Result<Option<RoutePriorityConfig>, Self::Error>;
}

//! Route geometry for map display.
//!
//! The polyline joins the ordered stops that carry coordinates with straight
//! segments. Stops without coordinates are skipped rather than guessed.

use serde::{Deserialize, Serialize};

use crate::types::{OptimizedRoute, OrderedAppointment};

/// A polyline representing a route geometry as decoded coordinates.
///
/// Each point is a (latitude, longitude) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Points of the located stops, in visiting order.
    pub fn from_stops(stops: &[OrderedAppointment]) -> Self {
        Self {
            points: stops
                .iter()
                .filter_map(|stop| stop.appointment.location())
                .collect(),
        }
    }

    /// Points of the route's located stops, in visiting order.
    pub fn from_route(route: &OptimizedRoute) -> Self {
        Self::from_stops(&route.appointments)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// A line needs at least two points to be drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// (south-west, north-east) corners, for fitting a map view.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (&first, rest) = self.points.split_first()?;
        Some(rest.iter().fold((first, first), |((s, w), (n, e)), &(lat, lng)| {
            ((s.min(lat), w.min(lng)), (n.max(lat), e.max(lng)))
        }))
    }
}

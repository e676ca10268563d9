//! Haversine distance estimator.
//!
//! Uses great-circle distance when both stops carry coordinates and falls
//! back to the address hash otherwise. Ignores roads.

use crate::distance::address_distance;
use crate::traits::DistanceEstimator;
use crate::types::Appointment;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

const MILES_PER_KM: f64 = 0.621_371;

/// Same-location score shared with the address-hash estimator.
const BASE_DISTANCE: f64 = 1.0;

/// Haversine-based estimator reporting `1.0 + miles` per hop.
///
/// Offsetting by one mile keeps the unit of the address-hash estimate:
/// identical locations score `1.0` either way.
#[derive(Debug, Clone)]
pub struct HaversineDistance {
    /// Straight-line to road distance multiplier.
    pub road_coefficient: f64,
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self {
            road_coefficient: 1.0,
        }
    }
}

impl HaversineDistance {
    /// Estimator scaling straight-line miles by `road_coefficient`.
    pub fn new(road_coefficient: f64) -> Self {
        Self { road_coefficient }
    }

    /// Calculate haversine distance between two points in kilometers.
    fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl DistanceEstimator for HaversineDistance {
    fn distance(&self, from: &Appointment, to: &Appointment) -> f64 {
        match (from.location(), to.location()) {
            (Some(a), Some(b)) => {
                let miles = Self::haversine_km(a, b) * MILES_PER_KM * self.road_coefficient;
                BASE_DISTANCE + miles
            }
            _ => address_distance(&from.property_address, &to.property_address),
        }
    }
}

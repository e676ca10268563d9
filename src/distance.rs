//! Address-hash distance estimate.
//!
//! A deterministic stand-in for real travel distance: each address is
//! reduced to `(sum of code points) mod 100` and the distance is the hash
//! gap scaled into `[1.0, 10.9]`. No geometry is involved.

use crate::traits::DistanceEstimator;
use crate::types::Appointment;

const HASH_BUCKETS: u64 = 100;
const UNIT_PER_BUCKET: f64 = 0.1;
const BASE_DISTANCE: f64 = 1.0;

fn address_hash(address: &str) -> u64 {
    address.chars().map(|c| u64::from(u32::from(c))).sum::<u64>() % HASH_BUCKETS
}

/// Hash distance between two address strings.
pub fn address_distance(a: &str, b: &str) -> f64 {
    address_hash(a).abs_diff(address_hash(b)) as f64 * UNIT_PER_BUCKET + BASE_DISTANCE
}

/// Estimator that only looks at `property_address`; coordinates are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressHashDistance;

impl DistanceEstimator for AddressHashDistance {
    fn distance(&self, from: &Appointment, to: &Appointment) -> f64 {
        address_distance(&from.property_address, &to.property_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_addresses() {
        assert_eq!(address_distance("12 Elm St", "12 Elm St"), 1.0);
        assert_eq!(address_distance("", ""), 1.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("A", "B"), ("12 Elm St", "400 Oak Ave"), ("Straße 5", "Rue 9")];
        for (a, b) in pairs {
            assert_eq!(address_distance(a, b), address_distance(b, a));
        }
    }

    #[test]
    fn test_known_values() {
        // 'A' = 65, 'B' = 66
        assert!((address_distance("A", "B") - 1.1).abs() < 1e-9);
        // "bb" = 196 -> 96
        assert!((address_distance("a", "bb") - 1.1).abs() < 1e-9);
        assert!((address_distance("a", "") - 10.7).abs() < 1e-9);
    }

    #[test]
    fn test_bounded() {
        let addresses = ["", "A", "zzzz", "1600 Pennsylvania Ave", "東京都", "c"];
        for a in addresses {
            for b in addresses {
                let d = address_distance(a, b);
                assert!((1.0..=10.9 + 1e-9).contains(&d), "{a} -> {b} = {d}");
            }
        }
    }

    #[test]
    fn test_code_points_not_bytes() {
        // 'é' is one code point (233) but two UTF-8 bytes
        assert_eq!(address_hash("é"), 33);
    }
}

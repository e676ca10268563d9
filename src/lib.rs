//! showing-route core
//!
//! Orders a field agent's property visits for one day. Appointments are
//! scored against a weighted priority configuration, chained together by a
//! greedy nearest-neighbor pass, and summarized into time/distance totals.

pub mod error;
pub mod types;
pub mod priority;
pub mod time;
pub mod traits;
pub mod scoring;
pub mod distance;
pub mod haversine;
pub mod solver;
pub mod summary;
pub mod polyline;
pub mod stats;

pub use priority::{PriorityItem, PriorityKey, RoutePriorityConfig};
pub use solver::{optimize_route, SolveOptions};
pub use types::{Appointment, OptimizedRoute, OrderedAppointment};

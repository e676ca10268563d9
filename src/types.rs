//! Appointment records consumed by the engine and the route it produces.

use serde::{Deserialize, Serialize};

/// Kind of property visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    OpenHouse,
    #[default]
    PrivateViewing,
    Consultation,
}

/// Market status of the property being visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseStatus {
    #[default]
    Available,
    Pending,
    Sold,
    OffMarket,
    OpenHouse,
}

/// A scheduled property visit, as supplied by the caller.
///
/// Times are kept as the caller's `HH:MM` text; the engine parses them
/// leniently (see [`crate::time::parse_minutes`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    pub property_address: String,
    pub city: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Minutes spent at the property.
    pub time_at_house: u32,
    #[serde(default)]
    pub is_open_house: bool,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub house_status: HouseStatus,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Appointment {
    /// (lat, lng) when the caller attached both coordinates.
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// An appointment annotated with its position in the visiting sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedAppointment {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub order_index: usize,
}

/// Final result of a route computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub appointments: Vec<OrderedAppointment>,
    pub total_estimated_time: u32,
    /// Rounded to one decimal place.
    pub total_distance_estimate: f64,
    /// `HH:MM`, empty when there are no appointments.
    pub finish_time_estimate: String,
}

impl OptimizedRoute {
    /// The route for a day with no appointments.
    pub fn empty() -> Self {
        Self {
            appointments: Vec::new(),
            total_estimated_time: 0,
            total_distance_estimate: 0.0,
            finish_time_estimate: String::new(),
        }
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Appointment ids in visiting order.
    pub fn visit_ids(&self) -> Vec<&str> {
        self.appointments
            .iter()
            .map(|stop| stop.appointment.id.as_str())
            .collect()
    }
}

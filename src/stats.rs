//! Day overview counts for the dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Appointment, AppointmentType, HouseStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub total_appointments: usize,
    /// Appointments flagged as open houses.
    pub open_houses: usize,
    /// Everything not flagged as an open house.
    pub private_viewings: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl DayStats {
    /// Count one day's appointments.
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut stats = Self {
            total_appointments: appointments.len(),
            ..Self::default()
        };

        for appointment in appointments {
            if appointment.is_open_house {
                stats.open_houses += 1;
            } else {
                stats.private_viewings += 1;
            }
            *stats
                .by_type
                .entry(type_name(appointment.appointment_type).to_string())
                .or_default() += 1;
            *stats
                .by_status
                .entry(status_name(appointment.house_status).to_string())
                .or_default() += 1;
        }

        stats
    }
}

fn type_name(kind: AppointmentType) -> &'static str {
    match kind {
        AppointmentType::OpenHouse => "open_house",
        AppointmentType::PrivateViewing => "private_viewing",
        AppointmentType::Consultation => "consultation",
    }
}

fn status_name(status: HouseStatus) -> &'static str {
    match status {
        HouseStatus::Available => "available",
        HouseStatus::Pending => "pending",
        HouseStatus::Sold => "sold",
        HouseStatus::OffMarket => "off_market",
        HouseStatus::OpenHouse => "open_house",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(open_house: bool, kind: AppointmentType, status: HouseStatus) -> Appointment {
        Appointment {
            id: "a".to_string(),
            client_id: String::new(),
            property_address: "9 Pine Ct".to_string(),
            city: "Boise".to_string(),
            date: "2024-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            time_at_house: 30,
            is_open_house: open_house,
            appointment_type: kind,
            house_status: status,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_empty_day() {
        assert_eq!(DayStats::from_appointments(&[]), DayStats::default());
    }

    #[test]
    fn test_counts() {
        let day = vec![
            appointment(true, AppointmentType::OpenHouse, HouseStatus::OpenHouse),
            appointment(false, AppointmentType::PrivateViewing, HouseStatus::Available),
            appointment(false, AppointmentType::Consultation, HouseStatus::Available),
            // flag wins over the type for the open/private split
            appointment(false, AppointmentType::OpenHouse, HouseStatus::OffMarket),
        ];
        let stats = DayStats::from_appointments(&day);

        assert_eq!(stats.total_appointments, 4);
        assert_eq!(stats.open_houses, 1);
        assert_eq!(stats.private_viewings, 3);
        assert_eq!(stats.by_type.get("open_house"), Some(&2));
        assert_eq!(stats.by_type.get("consultation"), Some(&1));
        assert_eq!(stats.by_status.get("available"), Some(&2));
        assert_eq!(stats.by_status.get("off_market"), Some(&1));
        assert_eq!(stats.by_status.get("sold"), None);
    }
}

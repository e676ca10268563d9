//! Test fixtures for showing-route.
//!
//! Provides:
//! - An appointment builder with sensible defaults
//! - Real Las Vegas / Henderson listing locations

#![allow(dead_code)]

pub mod listings;

use showing_route::types::{Appointment, AppointmentType, HouseStatus};

pub use listings::*;

/// Builder for test appointments.
#[derive(Clone, Debug)]
pub struct TestAppointment {
    appointment: Appointment,
}

impl TestAppointment {
    pub fn new(id: &str, address: &str, city: &str) -> Self {
        Self {
            appointment: Appointment {
                id: id.to_string(),
                client_id: format!("client-{id}"),
                property_address: address.to_string(),
                city: city.to_string(),
                date: "2024-05-01".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                time_at_house: 30,
                is_open_house: false,
                appointment_type: AppointmentType::PrivateViewing,
                house_status: HouseStatus::Available,
                latitude: None,
                longitude: None,
            },
        }
    }

    pub fn at(listing: &Listing) -> Self {
        Self::new(listing.id, listing.address, listing.city).location(listing.lat, listing.lng)
    }

    pub fn date(mut self, date: &str) -> Self {
        self.appointment.date = date.to_string();
        self
    }

    pub fn starts(mut self, time: &str) -> Self {
        self.appointment.start_time = time.to_string();
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.appointment.time_at_house = minutes;
        self
    }

    pub fn open_house(mut self) -> Self {
        self.appointment.is_open_house = true;
        self.appointment.appointment_type = AppointmentType::OpenHouse;
        self.appointment.house_status = HouseStatus::OpenHouse;
        self
    }

    pub fn status(mut self, status: HouseStatus) -> Self {
        self.appointment.house_status = status;
        self
    }

    pub fn location(mut self, lat: f64, lng: f64) -> Self {
        self.appointment.latitude = Some(lat);
        self.appointment.longitude = Some(lng);
        self
    }

    pub fn build(self) -> Appointment {
        self.appointment
    }
}

/// A mixed day across the listings, in a fixed input order.
pub fn busy_day() -> Vec<Appointment> {
    LISTINGS
        .iter()
        .enumerate()
        .map(|(i, listing)| {
            let builder = TestAppointment::at(listing)
                .starts(&format!("{:02}:{:02}", 8 + i % 9, (i * 15) % 60))
                .duration(20 + (i as u32 * 25) % 140);
            let builder = if i % 4 == 1 { builder.open_house() } else { builder };
            builder.build()
        })
        .collect()
}

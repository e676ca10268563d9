//! Las Vegas / Henderson residential listings for realistic fixtures.
//!
//! Coordinates are approximate street locations from OpenStreetMap.

/// A listed property with coordinates.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Listing {
    pub const fn new(id: &'static str, address: &'static str, city: &'static str, lat: f64, lng: f64) -> Self {
        Self { id, address, city, lat, lng }
    }
}

pub const LISTINGS: &[Listing] = &[
    Listing::new("lv-1", "2812 Paradise Rd", "Las Vegas", 36.1382, -115.1541),
    Listing::new("lv-2", "4455 W Flamingo Rd", "Las Vegas", 36.1155, -115.1987),
    Listing::new("lv-3", "1700 N Rancho Dr", "Las Vegas", 36.1934, -115.1833),
    Listing::new("lv-4", "9525 W Desert Inn Rd", "Las Vegas", 36.1292, -115.3003),
    Listing::new("hd-1", "2300 W Horizon Ridge Pkwy", "Henderson", 36.0122, -115.0876),
    Listing::new("hd-2", "150 N Green Valley Pkwy", "Henderson", 36.0459, -115.0845),
    Listing::new("hd-3", "1000 Sunset Rd", "Henderson", 36.0720, -115.0470),
    Listing::new("nl-1", "3101 W Craig Rd", "North Las Vegas", 36.2398, -115.1789),
    Listing::new("nl-2", "6200 Losee Rd", "North Las Vegas", 36.2795, -115.1180),
];

pub fn listing(id: &str) -> &'static Listing {
    LISTINGS
        .iter()
        .find(|listing| listing.id == id)
        .unwrap_or_else(|| panic!("unknown listing {id}"))
}

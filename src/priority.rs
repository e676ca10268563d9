//! Route priority configuration.
//!
//! A configuration is a small set of weighted, toggleable criteria keyed by
//! a closed vocabulary. Only enabled items take part in scoring or route
//! construction; a disabled item's weight is inert.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PriorityConfigError;

/// The fixed set of priority criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PriorityKey {
    OpenHouse,
    AppointmentTime,
    Distance,
    TimeAtHouse,
    CityCluster,
}

impl PriorityKey {
    pub const ALL: [PriorityKey; 5] = [
        PriorityKey::OpenHouse,
        PriorityKey::AppointmentTime,
        PriorityKey::Distance,
        PriorityKey::TimeAtHouse,
        PriorityKey::CityCluster,
    ];

    /// Wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityKey::OpenHouse => "open_house",
            PriorityKey::AppointmentTime => "appointment_time",
            PriorityKey::Distance => "distance",
            PriorityKey::TimeAtHouse => "time_at_house",
            PriorityKey::CityCluster => "city_cluster",
        }
    }

    fn default_label(&self) -> &'static str {
        match self {
            PriorityKey::OpenHouse => "Open House First",
            PriorityKey::AppointmentTime => "Appointment Time",
            PriorityKey::Distance => "Shortest Distance",
            PriorityKey::TimeAtHouse => "Time at House",
            PriorityKey::CityCluster => "Same City Cluster",
        }
    }

    fn default_weight(&self) -> i32 {
        match self {
            PriorityKey::OpenHouse => 5,
            PriorityKey::AppointmentTime => 4,
            PriorityKey::Distance => 3,
            PriorityKey::TimeAtHouse => 2,
            PriorityKey::CityCluster => 1,
        }
    }
}

impl fmt::Display for PriorityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityKey {
    type Err = PriorityConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriorityKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| PriorityConfigError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for PriorityKey {
    type Error = PriorityConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn enabled_by_default() -> bool {
    true
}

/// One weighted criterion. The label is display text and passes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityItem {
    pub key: PriorityKey,
    pub label: String,
    pub weight: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl PriorityItem {
    /// An enabled item with the key's default label.
    pub fn new(key: PriorityKey, weight: i32) -> Self {
        Self {
            key,
            label: key.default_label().to_string(),
            weight,
            enabled: true,
        }
    }

    /// The same item switched off.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Serialize, Deserialize)]
struct RawPriorityConfig {
    #[serde(default)]
    priorities: Vec<PriorityItem>,
}

/// A priority configuration with unique keys.
///
/// Item order is preserved for display; lookups go by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriorityConfig", into = "RawPriorityConfig")]
pub struct RoutePriorityConfig {
    priorities: Vec<PriorityItem>,
}

impl Default for RoutePriorityConfig {
    fn default() -> Self {
        Self {
            priorities: PriorityKey::ALL
                .into_iter()
                .map(|key| PriorityItem::new(key, key.default_weight()))
                .collect(),
        }
    }
}

impl TryFrom<RawPriorityConfig> for RoutePriorityConfig {
    type Error = PriorityConfigError;

    fn try_from(raw: RawPriorityConfig) -> Result<Self, Self::Error> {
        Self::new(raw.priorities)
    }
}

impl From<RoutePriorityConfig> for RawPriorityConfig {
    fn from(config: RoutePriorityConfig) -> Self {
        Self {
            priorities: config.priorities,
        }
    }
}

impl RoutePriorityConfig {
    /// Build a configuration, rejecting repeated keys.
    pub fn new(priorities: Vec<PriorityItem>) -> Result<Self, PriorityConfigError> {
        for (i, item) in priorities.iter().enumerate() {
            if priorities[..i].iter().any(|other| other.key == item.key) {
                return Err(PriorityConfigError::DuplicateKey(item.key));
            }
        }
        Ok(Self { priorities })
    }

    /// A configuration with no items at all.
    pub fn empty() -> Self {
        Self {
            priorities: Vec::new(),
        }
    }

    /// Use the stored configuration if there is one, otherwise the built-in
    /// five-item default.
    pub fn resolve(stored: Option<RoutePriorityConfig>) -> Self {
        match stored {
            Some(config) => config,
            None => {
                tracing::debug!("no stored route priorities, using defaults");
                Self::default()
            }
        }
    }

    /// All items in their configured order, enabled or not.
    pub fn items(&self) -> &[PriorityItem] {
        &self.priorities
    }

    /// The item for `key`, whether or not it is enabled.
    pub fn get(&self, key: PriorityKey) -> Option<&PriorityItem> {
        self.priorities.iter().find(|item| item.key == key)
    }

    /// Weight of `key`, or `None` if the key is absent or disabled.
    pub fn weight(&self, key: PriorityKey) -> Option<i32> {
        self.get(key)
            .filter(|item| item.enabled)
            .map(|item| item.weight)
    }

    /// Whether `key` is present and switched on.
    pub fn is_enabled(&self, key: PriorityKey) -> bool {
        self.weight(key).is_some()
    }

    /// Keys of the enabled items, in configured order.
    pub fn enabled_keys(&self) -> Vec<PriorityKey> {
        self.priorities
            .iter()
            .filter(|item| item.enabled)
            .map(|item| item.key)
            .collect()
    }

    /// Toggle an existing item. Returns false if the key is not configured.
    pub fn set_enabled(&mut self, key: PriorityKey, enabled: bool) -> bool {
        match self.priorities.iter_mut().find(|item| item.key == key) {
            Some(item) => {
                item.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Same items with every one switched off.
    pub fn all_disabled(mut self) -> Self {
        for item in &mut self.priorities {
            item.enabled = false;
        }
        self
    }
}

//! Core data types and enums for the bus network.

use std::fmt;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Service class of a bus, with the labels the dataset has always used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceClass {
    Local,
    #[cfg_attr(feature = "serde", serde(rename = "Sitting Service"))]
    SittingService,
    #[cfg_attr(feature = "serde", serde(rename = "AC"))]
    Ac,
}

impl ServiceClass {
    /// Parse a display label. Admin input is validated here, at construction,
    /// rather than trusting caller-provided strings downstream.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Local" => Some(Self::Local),
            "Sitting Service" => Some(Self::SittingService),
            "AC" => Some(Self::Ac),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::SittingService => "Sitting Service",
            Self::Ac => "AC",
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ServiceClass {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TransitError::UnknownServiceClass(s.to_owned()))
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A named point on the network that buses can service.
///
/// `map_x`/`map_y` are the legacy 0-100 schematic coordinates kept for the
/// old SVG map; the core only reads `latitude`/`longitude`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub map_x: f64,
    pub map_y: f64,
}

impl Stop {
    /// Geographic position as (longitude, latitude), the geo convention.
    pub fn position(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// A named service following a fixed ordered sequence of stops.
///
/// Route entries should resolve against the stop registry, but this is not
/// enforced at write time: a dangling id is skipped when resolving names.
/// A usable route has at least two stops; shorter routes are legal data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id: BusIdentifier,
    pub name: String,
    pub service_class: ServiceClass,
    pub image: String,
    pub color: String,
    /// Ordered stop ids, each expected at most once.
    pub route: Vec<StopIdentifier>,
    /// Fares are whole taka, so the affine fare model needs no rounding.
    pub base_fare: u32,
    pub fare_per_stop: u32,
    pub features: Vec<String>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Unknown service class: {0}")]
    UnknownServiceClass(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_class_labels() {
        assert_eq!(ServiceClass::from_label("Local"), Some(ServiceClass::Local));
        assert_eq!(
            ServiceClass::from_label("Sitting Service"),
            Some(ServiceClass::SittingService)
        );
        assert_eq!(ServiceClass::from_label("AC"), Some(ServiceClass::Ac));
        assert_eq!(ServiceClass::from_label("ac"), None);
        assert_eq!(ServiceClass::from_label("Deluxe"), None);
    }

    #[test]
    fn test_service_class_round_trips_through_label() {
        for class in [
            ServiceClass::Local,
            ServiceClass::SittingService,
            ServiceClass::Ac,
        ] {
            assert_eq!(ServiceClass::from_label(class.label()), Some(class));
        }
    }

    #[test]
    fn test_service_class_from_str() {
        assert_eq!("AC".parse::<ServiceClass>().ok(), Some(ServiceClass::Ac));

        let err = "Deluxe".parse::<ServiceClass>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown service class: Deluxe");
    }

    #[test]
    fn test_stop_position_is_lon_lat() {
        let stop = Stop {
            id: StopIdentifier::new("farmgate"),
            name: "Farmgate".to_owned(),
            latitude: 23.7561,
            longitude: 90.3871,
            map_x: 45.0,
            map_y: 55.0,
        };

        assert_eq!(stop.position().x(), 90.3871);
        assert_eq!(stop.position().y(), 23.7561);
    }
}

//! # chaka-transit
//!
//! Bus-network domain core: registries, direct-trip matching, spatial stop
//! lookup.
//!
//! ## Features
//!
//! - **Typed identifiers**: cheap `Arc<str>` ids for stops and buses
//! - **Direct matching**: one linear scan per bus, affine fare/time model
//! - **Mutable registry**: CRUD with eager referential cleanup on stop
//!   removal
//! - **Spatial queries**: R-tree backed nearest-stop lookup for map taps
//! - **Optional serde**: registries serialize as the flat JSON arrays the
//!   persistence layer stores
//!
//! ## Example
//!
//! ```
//! use chaka_transit::prelude::*;
//!
//! let network = BusNetwork::from_data(
//!     vec![
//!         Stop {
//!             id: StopIdentifier::new("uttara"),
//!             name: "Uttara".into(),
//!             latitude: 23.8728,
//!             longitude: 90.3984,
//!             map_x: 50.0,
//!             map_y: 10.0,
//!         },
//!         Stop {
//!             id: StopIdentifier::new("farmgate"),
//!             name: "Farmgate".into(),
//!             latitude: 23.7561,
//!             longitude: 90.3871,
//!             map_x: 45.0,
//!             map_y: 55.0,
//!         },
//!     ],
//!     vec![Bus {
//!         id: BusIdentifier::new("bikolpo"),
//!         name: "Bikolpo Auto".into(),
//!         service_class: ServiceClass::SittingService,
//!         image: String::new(),
//!         color: "bg-purple-600".into(),
//!         route: vec![
//!             StopIdentifier::new("uttara"),
//!             StopIdentifier::new("farmgate"),
//!         ],
//!         base_fare: 20,
//!         fare_per_stop: 5,
//!         features: vec!["Direct Route".into()],
//!     }],
//! );
//!
//! let trips = network.find_trips(
//!     &StopIdentifier::new("uttara"),
//!     &StopIdentifier::new("farmgate"),
//! );
//! assert_eq!(trips.len(), 1);
//! assert_eq!(trips[0].fare, 25);
//! assert_eq!(trips[0].duration_minutes, 15);
//! ```

pub mod identifiers;
pub mod models;
pub mod planner;
pub mod registry;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{Bus, ServiceClass, Stop, TransitError};
    pub use crate::planner::{full_route, match_direct, TripPlan};
    pub use crate::registry::BusNetwork;
}

pub use prelude::*;

//! # chaka-core
//!
//! Application layer over the [`chaka_transit`] domain crate: durable slot
//! persistence, the built-in Dhaka dataset, the persistent store, the
//! planner session, and the assistant proxy.

pub mod assistant;
pub mod dataset;
pub mod session;
pub mod storage;
pub mod store;

// Re-export the domain crate
pub use chaka_transit as transit;

pub use session::{Endpoint, PlannerSession, ViewMode};
pub use store::{StoreError, TripStore};

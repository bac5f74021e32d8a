//! Direct-trip matching over bus routes.
//!
//! A single linear scan per bus: find the requested origin and destination
//! in the route, keep the bus when both exist and the origin comes first.
//! Fare and time use a fixed affine model scaled by **hops** (segments
//! between consecutive matched stops), the one scaling unit used everywhere;
//! the displayed stop count is derived from the path instead of being a
//! second, subtly different counter.

use crate::identifiers::StopIdentifier;
use crate::models::Bus;

/// Minutes added to every trip regardless of length.
pub const BOARDING_BUFFER_MINUTES: u32 = 10;
/// Minutes per hop. No traffic or time-of-day modeling.
pub const MINUTES_PER_HOP: u32 = 5;

/// Outcome of matching one bus against a requested origin/destination.
///
/// Value object, rebuilt on every query and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct TripPlan {
    /// Snapshot of the matched bus at query time.
    pub bus: Bus,
    pub origin: StopIdentifier,
    pub destination: StopIdentifier,
    /// Segments travelled between matched stops; scales fare and time.
    pub hops: u32,
    /// Whole-taka fare: `base_fare + hops * fare_per_stop`.
    pub fare: u32,
    pub duration_minutes: u32,
    /// Inclusive stop-id sequence from origin to destination.
    pub path: Vec<StopIdentifier>,
}

impl TripPlan {
    /// Stops touched by the trip, endpoints included.
    pub fn stop_count(&self) -> usize {
        self.path.len()
    }
}

fn plan_for(bus: &Bus, hops: u32, path: Vec<StopIdentifier>) -> TripPlan {
    let origin = path
        .first()
        .cloned()
        .unwrap_or_else(|| StopIdentifier::new(""));
    let destination = path
        .last()
        .cloned()
        .unwrap_or_else(|| StopIdentifier::new(""));

    TripPlan {
        fare: bus.base_fare + hops * bus.fare_per_stop,
        duration_minutes: BOARDING_BUFFER_MINUTES + hops * MINUTES_PER_HOP,
        bus: bus.clone(),
        origin,
        destination,
        hops,
        path,
    }
}

/// Find every bus that services `from` -> `to` in that direction.
///
/// First occurrence of each id wins (routes are expected to list a stop at
/// most once). The reverse trip on the same bus is a non-match; covering
/// both directions takes a second bus entry. Results come back sorted by
/// non-decreasing duration, ties keeping encounter order. An empty result
/// is a normal outcome, not an error.
pub fn match_direct(
    from: &StopIdentifier,
    to: &StopIdentifier,
    buses: &[Bus],
) -> Vec<TripPlan> {
    let mut plans: Vec<TripPlan> = buses
        .iter()
        .filter_map(|bus| {
            let origin = bus.route.iter().position(|id| id == from)?;
            let destination = bus.route.iter().position(|id| id == to)?;
            if origin >= destination {
                return None;
            }

            let hops = (destination - origin) as u32;
            let path = bus.route[origin..=destination].to_vec();
            Some(plan_for(bus, hops, path))
        })
        .collect();

    // sort_by_key is stable, which keeps ties deterministic
    plans.sort_by_key(|plan| plan.duration_minutes);
    plans
}

/// Synthetic "browse" plan spanning a bus's entire route.
///
/// A route with no stops yields empty endpoint ids and zero hops.
pub fn full_route(bus: &Bus) -> TripPlan {
    let hops = bus.route.len().saturating_sub(1) as u32;
    plan_for(bus, hops, bus.route.clone())
}

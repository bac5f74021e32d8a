//! In-memory bus network registry.
//!
//! Owns both registries (stops and buses) as insertion-ordered vectors with
//! id lookup maps and a stop R-tree rebuilt after every mutation. The
//! registry trusts its input: duplicate-id rejection on *add* belongs to the
//! store layer above, and route entries are allowed to dangle (they are
//! skipped when resolving names, and removing a stop eagerly strips it from
//! every route).

use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;
use rstar::RTree;

use crate::identifiers::{BusIdentifier, StopIdentifier};
use crate::models::{Bus, Stop};
use crate::planner::{self, TripPlan};
use crate::spatial::index::StopNode;
use crate::spatial::queries::haversine_distance;

/// Mutable registry of stops and buses with lookup and spatial queries.
///
/// Reads dominate writes by orders of magnitude here, so every mutation
/// rebuilds the lookup maps and the R-tree wholesale.
#[derive(Clone)]
pub struct BusNetwork {
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    // Lookup maps, positions into the vectors above
    stop_map: HashMap<StopIdentifier, usize>,
    bus_map: HashMap<BusIdentifier, usize>,

    // Spatial index
    stop_tree: RTree<StopNode>,
}

impl BusNetwork {
    /// Create a new empty network
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            buses: Vec::new(),
            stop_map: HashMap::new(),
            bus_map: HashMap::new(),
            stop_tree: RTree::new(),
        }
    }

    /// Build a network from raw registries (used by the store on load)
    pub fn from_data(stops: Vec<Stop>, buses: Vec<Bus>) -> Self {
        let mut network = Self {
            stops,
            buses,
            stop_map: HashMap::new(),
            bus_map: HashMap::new(),
            stop_tree: RTree::new(),
        };
        network.reindex();
        network
    }

    fn reindex(&mut self) {
        self.stop_map = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| (stop.id.clone(), i))
            .collect();

        self.bus_map = self
            .buses
            .iter()
            .enumerate()
            .map(|(i, bus)| (bus.id.clone(), i))
            .collect();

        self.stop_tree = RTree::bulk_load(
            self.stops
                .iter()
                .map(|stop| StopNode::new(Arc::new(stop.clone())))
                .collect(),
        );
    }

    // ---- Lookups ----

    pub fn stop(&self, id: &StopIdentifier) -> Option<&Stop> {
        self.stop_map.get(id).map(|&i| &self.stops[i])
    }

    pub fn bus(&self, id: &BusIdentifier) -> Option<&Bus> {
        self.bus_map.get(id).map(|&i| &self.buses[i])
    }

    // ---- Collections ----

    /// Stops in insertion order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Buses in insertion order
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Stops sorted alphabetically by display name, for pickers
    pub fn stops_by_name(&self) -> Vec<&Stop> {
        let mut sorted: Vec<&Stop> = self.stops.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Resolve a bus route to stop records, silently skipping ids that no
    /// longer exist in the stop registry.
    pub fn resolve_route(&self, bus: &Bus) -> Vec<&Stop> {
        bus.route.iter().filter_map(|id| self.stop(id)).collect()
    }

    // ---- Mutations ----
    //
    // Last-write-wins semantics: `update_*` replaces the record with the
    // matching id in place and is a no-op for unknown ids, exactly like
    // mapping over the old arrays.

    pub fn add_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
        self.reindex();
    }

    pub fn update_stop(&mut self, stop: Stop) {
        if let Some(&i) = self.stop_map.get(&stop.id) {
            self.stops[i] = stop;
            self.reindex();
        }
    }

    /// Remove a stop and eagerly strip its id from every bus route, leaving
    /// the order of the remaining route entries untouched.
    pub fn remove_stop(&mut self, id: &StopIdentifier) {
        self.stops.retain(|stop| &stop.id != id);
        for bus in &mut self.buses {
            bus.route.retain(|stop_id| stop_id != id);
        }
        self.reindex();
    }

    pub fn add_bus(&mut self, bus: Bus) {
        self.buses.push(bus);
        self.reindex();
    }

    pub fn update_bus(&mut self, bus: Bus) {
        if let Some(&i) = self.bus_map.get(&bus.id) {
            self.buses[i] = bus;
            self.reindex();
        }
    }

    pub fn remove_bus(&mut self, id: &BusIdentifier) {
        self.buses.retain(|bus| &bus.id != id);
        self.reindex();
    }

    // ---- Trip queries ----

    /// Buses servicing `from` -> `to` in that direction, best duration first
    pub fn find_trips(&self, from: &StopIdentifier, to: &StopIdentifier) -> Vec<TripPlan> {
        planner::match_direct(from, to, &self.buses)
    }

    /// One full-route plan per bus, in registry order
    pub fn browse_all(&self) -> Vec<TripPlan> {
        self.buses.iter().map(planner::full_route).collect()
    }

    // ---- Spatial queries ----

    /// The `n` stops closest to a point (map tap), nearest first
    pub fn nearest_stops(&self, point: Point, n: usize) -> Vec<Stop> {
        self.stop_tree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .take(n)
            .map(|node| (*node.stop).clone())
            .collect()
    }

    /// Stops within `radius_m` meters of a point
    pub fn stops_within(&self, point: Point, radius_m: f64) -> Vec<Stop> {
        use crate::spatial::queries::meters_to_degrees_approx;

        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        // Coarse degree-space radius for the tree, geodesic refinement after.
        // The margin absorbs longitude compression away from the equator.
        let radius_deg = meters_to_degrees_approx(radius_m) * 2.0;
        self.stop_tree
            .locate_within_distance([point.x(), point.y()], radius_deg * radius_deg)
            .filter(|node| haversine_distance(point, node.stop.position()) <= radius_m)
            .map(|node| (*node.stop).clone())
            .collect()
    }
}

impl Default for BusNetwork {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceClass;

    fn stop(id: &str, name: &str, latitude: f64, longitude: f64) -> Stop {
        Stop {
            id: StopIdentifier::new(id),
            name: name.to_owned(),
            latitude,
            longitude,
            map_x: 0.0,
            map_y: 0.0,
        }
    }

    fn bus(id: &str, route: &[&str]) -> Bus {
        Bus {
            id: BusIdentifier::new(id),
            name: id.to_owned(),
            service_class: ServiceClass::Local,
            image: String::new(),
            color: String::new(),
            route: route.iter().map(|s| StopIdentifier::new(s)).collect(),
            base_fare: 10,
            fare_per_stop: 5,
            features: Vec::new(),
        }
    }

    fn sample_network() -> BusNetwork {
        BusNetwork::from_data(
            vec![
                stop("uttara", "Uttara", 23.8728, 90.3984),
                stop("airport", "Airport", 23.8518, 90.4081),
                stop("banani", "Banani", 23.7937, 90.4043),
                stop("farmgate", "Farmgate", 23.7561, 90.3871),
            ],
            vec![
                bus("b1", &["uttara", "airport", "banani", "farmgate"]),
                bus("b2", &["farmgate", "banani", "airport"]),
            ],
        )
    }

    #[test]
    fn test_empty_network() {
        let network = BusNetwork::new();
        assert!(network.stops().is_empty());
        assert!(network.buses().is_empty());
        assert!(network.browse_all().is_empty());
    }

    #[test]
    fn test_lookups() {
        let network = sample_network();
        assert_eq!(
            network.stop(&"banani".into()).map(|s| s.name.as_str()),
            Some("Banani")
        );
        assert!(network.stop(&"gabtoli".into()).is_none());
        assert!(network.bus(&"b2".into()).is_some());
    }

    #[test]
    fn test_stops_by_name_is_alphabetical() {
        let network = sample_network();
        let names: Vec<&str> = network
            .stops_by_name()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Airport", "Banani", "Farmgate", "Uttara"]);
    }

    #[test]
    fn test_remove_stop_cascades_into_routes() {
        let mut network = sample_network();
        network.remove_stop(&"banani".into());

        assert!(network.stop(&"banani".into()).is_none());

        let b1 = network.bus(&"b1".into()).expect("b1 still present");
        let remaining: Vec<&str> = b1.route.iter().map(|id| id.as_str()).collect();
        assert_eq!(remaining, vec!["uttara", "airport", "farmgate"]);

        let b2 = network.bus(&"b2".into()).expect("b2 still present");
        let remaining: Vec<&str> = b2.route.iter().map(|id| id.as_str()).collect();
        assert_eq!(remaining, vec!["farmgate", "airport"]);
    }

    #[test]
    fn test_update_is_last_write_wins() {
        let mut network = sample_network();

        let mut renamed = network.stop(&"uttara".into()).expect("exists").clone();
        renamed.name = "Uttara (House Bldg)".to_owned();
        network.update_stop(renamed);

        assert_eq!(
            network.stop(&"uttara".into()).map(|s| s.name.as_str()),
            Some("Uttara (House Bldg)")
        );
        // update of an unknown id is a no-op
        network.update_stop(stop("nowhere", "Nowhere", 0.0, 0.0));
        assert!(network.stop(&"nowhere".into()).is_none());
    }

    #[test]
    fn test_resolve_route_skips_dangling_ids() {
        let mut network = sample_network();
        let mut rogue = bus("rogue", &["uttara", "vanished", "farmgate"]);
        rogue.route.push(StopIdentifier::new("also_gone"));
        network.add_bus(rogue);

        let rogue = network.bus(&"rogue".into()).expect("added");
        let resolved: Vec<&str> = network
            .resolve_route(rogue)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(resolved, vec!["uttara", "farmgate"]);
    }

    #[test]
    fn test_find_trips_respects_direction() {
        let network = sample_network();

        let trips = network.find_trips(&"uttara".into(), &"banani".into());
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].bus.id.as_str(), "b1");

        let trips = network.find_trips(&"banani".into(), &"airport".into());
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].bus.id.as_str(), "b2");
    }

    #[test]
    fn test_nearest_stops() {
        let network = sample_network();

        // Tap just south of Farmgate
        let tapped = network.nearest_stops(Point::new(90.3880, 23.7500), 2);
        assert_eq!(tapped.len(), 2);
        assert_eq!(tapped[0].id.as_str(), "farmgate");

        let all = network.nearest_stops(Point::new(90.39, 23.8), 10);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_stops_within_radius() {
        let network = sample_network();

        // 2 km around the airport catches only the airport itself
        // (Uttara sits roughly 2.5 km away)
        let near = network.stops_within(Point::new(90.4081, 23.8518), 2_000.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id.as_str(), "airport");

        assert!(network
            .stops_within(Point::new(90.4081, 23.8518), -5.0)
            .is_empty());

        // A city-sized radius catches everything
        let all = network.stops_within(Point::new(90.39, 23.8), 50_000.0);
        assert_eq!(all.len(), 4);
    }
}

//! Planner session: the user-driven selection state behind the search
//! screen, kept headless so any front end can drive it.
//!
//! Holds the origin/destination picks and the search-vs-browse view mode,
//! and derives the current result list from a [`BusNetwork`]. Results are
//! value objects rebuilt on every call, never cached.

use chaka_transit::prelude::*;
use geo::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Matching trips for the selected endpoints
    Search,
    /// One full-route entry per bus
    Browse,
}

/// Which endpoint a pick (dropdown or map tap) applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

#[derive(Clone, Debug)]
pub struct PlannerSession {
    origin: Option<StopIdentifier>,
    destination: Option<StopIdentifier>,
    mode: ViewMode,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self {
            origin: None,
            destination: None,
            mode: ViewMode::Search,
        }
    }

    pub fn origin(&self) -> Option<&StopIdentifier> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&StopIdentifier> {
        self.destination.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Select (or clear) an endpoint. Picking always returns the session to
    /// search mode, like choosing from the dropdown while browsing.
    pub fn select(&mut self, endpoint: Endpoint, stop: Option<StopIdentifier>) {
        match endpoint {
            Endpoint::Origin => self.origin = stop,
            Endpoint::Destination => self.destination = stop,
        }
        self.mode = ViewMode::Search;
    }

    /// Map tap: select the stop nearest to the tapped point, if any.
    pub fn select_nearest(
        &mut self,
        endpoint: Endpoint,
        point: Point,
        network: &BusNetwork,
    ) -> Option<StopIdentifier> {
        let nearest = network
            .nearest_stops(point, 1)
            .into_iter()
            .next()
            .map(|stop| stop.id);
        self.select(endpoint, nearest.clone());
        nearest
    }

    /// Swap origin and destination
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    /// Flip between searching and browsing the whole fleet
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Search => ViewMode::Browse,
            ViewMode::Browse => ViewMode::Search,
        };
    }

    /// Derive the current result list.
    ///
    /// Browsing lists every bus's full route in registry order. Searching
    /// needs both endpoints; anything less is an empty list, which the UI
    /// renders as its explicit "no results" state.
    pub fn results(&self, network: &BusNetwork) -> Vec<TripPlan> {
        match self.mode {
            ViewMode::Browse => network.browse_all(),
            ViewMode::Search => match (&self.origin, &self.destination) {
                (Some(from), Some(to)) => network.find_trips(from, to),
                _ => Vec::new(),
            },
        }
    }
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_results_need_both_endpoints() {
        let network = dataset::default_network();
        let mut session = PlannerSession::new();

        assert!(session.results(&network).is_empty());

        session.select(Endpoint::Origin, Some("uttara".into()));
        assert!(session.results(&network).is_empty());

        session.select(Endpoint::Destination, Some("farmgate".into()));
        let results = session.results(&network);
        assert!(!results.is_empty());
        // the BRTC double decker runs Uttara -> Farmgate
        assert!(results.iter().any(|plan| plan.bus.id.as_str() == "brtc_ac"));
    }

    #[test]
    fn test_swap_reverses_direction() {
        let network = dataset::default_network();
        let mut session = PlannerSession::new();
        session.select(Endpoint::Origin, Some("gulistan".into()));
        session.select(Endpoint::Destination, Some("abdullahpur".into()));

        // victor_classic runs south -> north
        assert!(session
            .results(&network)
            .iter()
            .any(|plan| plan.bus.id.as_str() == "victor_classic"));

        session.swap();
        // ...and raida covers the reverse direction
        let results = session.results(&network);
        assert!(results.iter().any(|plan| plan.bus.id.as_str() == "raida"));
        assert!(!results.iter().any(|plan| plan.bus.id.as_str() == "victor_classic"));
    }

    #[test]
    fn test_browse_lists_whole_fleet_and_picking_returns_to_search() {
        let network = dataset::default_network();
        let mut session = PlannerSession::new();

        session.toggle_mode();
        assert_eq!(session.mode(), ViewMode::Browse);
        assert_eq!(session.results(&network).len(), network.buses().len());

        session.select(Endpoint::Origin, Some("banani".into()));
        assert_eq!(session.mode(), ViewMode::Search);
    }

    #[test]
    fn test_select_nearest_picks_the_tapped_stop() {
        let network = dataset::default_network();
        let mut session = PlannerSession::new();

        // Tap right on Farmgate
        let picked = session.select_nearest(
            Endpoint::Origin,
            geo::Point::new(90.3871, 23.7561),
            &network,
        );
        assert_eq!(picked.map(|id| id.to_string()).as_deref(), Some("farmgate"));
        assert_eq!(
            session.origin().map(|id| id.as_str()),
            Some("farmgate")
        );

        // Tapping an empty network selects nothing
        let empty = BusNetwork::new();
        let picked = session.select_nearest(
            Endpoint::Destination,
            geo::Point::new(90.0, 23.0),
            &empty,
        );
        assert!(picked.is_none());
        assert!(session.destination().is_none());
    }
}

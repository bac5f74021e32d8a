//! R-tree nodes for spatial indexing.
//!
//! Wraps stops with geometric data for efficient spatial queries, backing
//! map-tap selection ("which stop did the user mean?").
//!
//! ## Two-Stage Filtering
//!
//! Queries use a two-stage filtering approach:
//! 1. **R-tree filter**: Euclidean distance for fast approximate filtering
//! 2. **Haversine filter**: accurate geodesic distance on filtered results
//!
//! Euclidean distance in degree space is only good enough for pruning; the
//! final ordering and radius checks are geodesic.

use std::sync::Arc;

use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::Stop;

#[derive(Clone)]
pub struct StopNode {
    pub stop: Arc<Stop>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: Arc<Stop>) -> Self {
        Self {
            point: [stop.longitude, stop.latitude],
            stop,
        }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StopIdentifier;
    use rstar::RTree;

    fn stop(id: &str, latitude: f64, longitude: f64) -> Arc<Stop> {
        Arc::new(Stop {
            id: StopIdentifier::new(id),
            name: id.to_owned(),
            latitude,
            longitude,
            map_x: 0.0,
            map_y: 0.0,
        })
    }

    #[test]
    fn test_nearest_neighbor() {
        let tree = RTree::bulk_load(vec![
            StopNode::new(stop("farmgate", 23.7561, 90.3871)),
            StopNode::new(stop("uttara", 23.8728, 90.3984)),
        ]);

        // Query point right next to Farmgate
        let nearest = tree
            .nearest_neighbor(&[90.3870, 23.7560])
            .expect("tree is non-empty");
        assert_eq!(nearest.stop.id.as_str(), "farmgate");
    }
}

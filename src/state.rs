use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::overpass::PointOfInterest;
use crate::bounds::GeoBoundingBox;

pub type SharedState = Arc<RwLock<AppState>>;

/// Handed out when a fetch starts. Only the ticket of the most recent fetch
/// may publish results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub bounds: GeoBoundingBox,
}

pub struct AppState {
    bounds: GeoBoundingBox,
    results: Vec<PointOfInterest>,
    generation: u64,
}

impl AppState {
    pub fn new(bounds: GeoBoundingBox) -> Self {
        Self {
            bounds,
            results: Vec::new(),
            generation: 0,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    pub fn bounds(&self) -> GeoBoundingBox {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: GeoBoundingBox) {
        self.bounds = bounds;
    }

    pub fn results(&self) -> &[PointOfInterest] {
        &self.results
    }

    pub fn find(&self, id: i64) -> Option<&PointOfInterest> {
        self.results.iter().find(|poi| poi.id == id)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;

        FetchTicket {
            generation: self.generation,
            bounds: self.bounds,
        }
    }

    /// Replaces the result set wholesale. Returns false, leaving the current
    /// results alone, when a newer fetch has started since `ticket` was issued.
    pub fn set_results(&mut self, ticket: FetchTicket, results: Vec<PointOfInterest>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.results = results;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn bbox() -> GeoBoundingBox {
        GeoBoundingBox {
            south: 1.0,
            west: 2.0,
            north: 3.0,
            east: 4.0,
        }
    }

    fn poi(id: i64) -> PointOfInterest {
        PointOfInterest {
            id,
            lat: 0.0,
            lon: 0.0,
            tags: BTreeMap::new(),
        }
    }

    #[test]
    fn results_are_replaced_not_merged() {
        let mut state = AppState::new(bbox());

        let t = state.begin_fetch();
        assert!(state.set_results(t, vec![poi(1), poi(2)]));

        let t = state.begin_fetch();
        assert!(state.set_results(t, vec![poi(3)]));

        assert_eq!(state.results(), &[poi(3)]);
        assert!(state.find(1).is_none());
        assert_eq!(state.find(3), Some(&poi(3)));
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let mut state = AppState::new(bbox());

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.set_results(second, vec![poi(2)]));
        assert!(!state.set_results(first, vec![poi(1)]));

        assert_eq!(state.results(), &[poi(2)]);
    }

    #[test]
    fn ticket_captures_bounds_at_start() {
        let mut state = AppState::new(bbox());
        let ticket = state.begin_fetch();

        let moved = GeoBoundingBox {
            south: 10.0,
            ..bbox()
        };
        state.set_bounds(moved);

        assert_eq!(ticket.bounds, bbox());
        assert_eq!(state.bounds(), moved);
    }
}

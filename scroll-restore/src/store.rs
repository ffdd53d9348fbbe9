use crate::key::PositionMap;
use crate::{NavigationEvent, RouteKey, SavedPosition};

/// Saved scroll positions, one per route.
///
/// Create one store when the application starts and hand it to every restorer call that needs
/// it. A later save for the same route overwrites the earlier one; no history is kept.
#[derive(Clone, Debug, Default)]
pub struct PositionStore {
    positions: PositionMap,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the route key for `event`.
    ///
    /// Returns `None` for event kinds other than start/end; callers treat that as "do nothing".
    pub fn derive_key(event: &NavigationEvent) -> Option<RouteKey> {
        event.route_url().map(RouteKey::from_url)
    }

    pub fn save(&mut self, key: RouteKey, position: SavedPosition) {
        rtrace!(
            key = key.as_str(),
            position = position.position,
            "PositionStore::save"
        );
        self.positions.insert(key, position);
    }

    pub fn get(&self, key: &str) -> Option<&SavedPosition> {
        self.positions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<SavedPosition> {
        self.positions.remove(key)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

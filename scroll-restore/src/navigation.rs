use crate::{NavigationEvent, NavigationKind};

/// Detects the "route exit" transition: a completed navigation immediately followed by the start
/// of the next one.
///
/// Routers do not reliably report when a view is about to be torn down, but an end event followed
/// by a start event means the view rendered by that end is being left. Only consecutive events
/// pair up; a cancel or error in between breaks the pair.
#[derive(Clone, Debug, Default)]
pub struct NavigationPairing {
    last: Option<NavigationEvent>,
}

impl NavigationPairing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `event` and returns the previous end event if this start completes an exit pair.
    pub fn observe(&mut self, event: &NavigationEvent) -> Option<NavigationEvent> {
        let prev = self.last.replace(event.clone());
        match (prev, event.kind()) {
            (Some(prev), NavigationKind::Start) if prev.is_end() => Some(prev),
            _ => None,
        }
    }
}

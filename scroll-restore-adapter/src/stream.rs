use alloc::vec::Vec;

/// Handle returned by [`NavigationStream::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionId(pub u64);

/// Subscriber bookkeeping for the router's navigation events.
///
/// Events are delivered to subscribers in subscription order. The stream holds no callbacks;
/// the owner (see [`crate::Host`]) maps each subscription to whatever consumes the event.
#[derive(Clone, Debug, Default)]
pub struct NavigationStream {
    next_id: u64,
    subscribers: Vec<SubscriptionId>,
}

impl NavigationStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push(id);
        id
    }

    /// Releases a subscription.
    ///
    /// Returns `false` if it was already released (or never existed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| *s != id);
        self.subscribers.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.contains(&id)
    }

    pub fn subscribers(&self) -> &[SubscriptionId] {
        &self.subscribers
    }
}

use alloc::vec::Vec;

use scroll_restore::{
    IntervalTimer, NavigationEvent, PositionStore, RestorerOptions, ScrollElement,
    ScrollRestorer, TickOutcome,
};

use crate::{IntervalScheduler, NavigationStream, SubscriptionId};

/// Identifies a scrollable view attached to a [`Host`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

#[derive(Clone, Debug)]
struct View<E> {
    id: ViewId,
    subscription: SubscriptionId,
    restorer: ScrollRestorer<E>,
}

/// A framework-neutral host that owns the shared pieces a UI integration needs:
/// the [`PositionStore`], the [`NavigationStream`] and an [`IntervalScheduler`].
///
/// This type does not hold any UI framework objects. Adapters drive it by calling:
/// - `attach` / `detach` from the view's mount / unmount hooks
/// - `navigate` for every router lifecycle event
/// - `advance(now_ms)` from a timer or event-loop callback (never from rendering)
#[derive(Clone, Debug)]
pub struct Host<E> {
    options: RestorerOptions,
    store: PositionStore,
    stream: NavigationStream,
    scheduler: IntervalScheduler,
    views: Vec<View<E>>,
    next_view: u64,
}

impl<E> Default for Host<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Host<E> {
    pub fn new() -> Self {
        Self::with_options(RestorerOptions::default())
    }

    /// Creates a host whose restorers all use `options`.
    pub fn with_options(options: RestorerOptions) -> Self {
        Self {
            options,
            store: PositionStore::new(),
            stream: NavigationStream::new(),
            scheduler: IntervalScheduler::new(),
            views: Vec::new(),
            next_view: 0,
        }
    }

    /// Replaces the store, e.g. to hand over positions saved by a previous host.
    pub fn with_store(mut self, store: PositionStore) -> Self {
        self.store = store;
        self
    }

    pub fn options(&self) -> &RestorerOptions {
        &self.options
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PositionStore {
        &mut self.store
    }

    pub fn into_store(self) -> PositionStore {
        self.store
    }

    pub fn stream(&self) -> &NavigationStream {
        &self.stream
    }

    pub fn scheduler(&self) -> &IntervalScheduler {
        &self.scheduler
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn is_attached(&self, view: ViewId) -> bool {
        self.views.iter().any(|v| v.id == view)
    }

    pub fn restorer(&self, view: ViewId) -> Option<&ScrollRestorer<E>> {
        self.views.iter().find(|v| v.id == view).map(|v| &v.restorer)
    }

    pub fn element(&self, view: ViewId) -> Option<&E> {
        self.restorer(view).and_then(ScrollRestorer::element)
    }

    pub fn element_mut(&mut self, view: ViewId) -> Option<&mut E> {
        self.views
            .iter_mut()
            .find(|v| v.id == view)
            .and_then(|v| v.restorer.element_mut())
    }
}

impl<E: ScrollElement> Host<E> {
    /// Attaches a scrollable element and subscribes its restorer to navigation events.
    pub fn attach(&mut self, element: E) -> ViewId {
        self.next_view += 1;
        let id = ViewId(self.next_view);
        let mut restorer = ScrollRestorer::new(self.options);
        restorer.on_attach(element, &mut self.scheduler);
        let subscription = self.stream.subscribe();
        adebug!(view = id.0, subscription = subscription.0, "Host::attach");
        self.views.push(View {
            id,
            subscription,
            restorer,
        });
        id
    }

    /// Detaches a view: cancels its polling, releases its subscription and returns the element.
    ///
    /// Returns `None` if the view is unknown or already detached.
    pub fn detach(&mut self, view: ViewId) -> Option<E> {
        let index = self.views.iter().position(|v| v.id == view)?;
        let mut removed = self.views.remove(index);
        self.stream.unsubscribe(removed.subscription);
        adebug!(view = view.0, "Host::detach");
        removed.restorer.on_detach(&mut self.scheduler)
    }

    /// Delivers a router event to every subscribed view, in subscription order.
    pub fn navigate(&mut self, event: &NavigationEvent) {
        for subscription in self.stream.subscribers() {
            let Some(view) = self
                .views
                .iter_mut()
                .find(|v| v.subscription == *subscription)
            else {
                continue;
            };
            view.restorer.on_navigation(event, &mut self.store, &mut self.scheduler);
        }
    }

    /// Advances the clock to `now_ms`, delivering every timer firing due by then.
    ///
    /// Returns the outcome of each delivered tick, in firing order.
    pub fn advance(&mut self, now_ms: u64) -> Vec<(ViewId, TickOutcome)> {
        let mut outcomes = Vec::new();
        while let Some(fired) = self.scheduler.next_due(now_ms) {
            let owner = self
                .views
                .iter_mut()
                .find(|v| v.restorer.active_timer() == Some(fired));
            match owner {
                Some(view) => {
                    let outcome = view.restorer.on_tick(fired, &mut self.scheduler);
                    outcomes.push((view.id, outcome));
                }
                None => {
                    adebug!(timer = fired.0, "Host::advance: orphaned timer cancelled");
                    self.scheduler.cancel(fired);
                }
            }
        }
        outcomes
    }
}

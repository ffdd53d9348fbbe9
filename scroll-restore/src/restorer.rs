use crate::{
    IntervalTimer, NavigationEvent, NavigationPairing, PositionStore, RestorerOptions,
    SavedPosition, ScrollElement, TimerId,
};

/// Where a restorer is in its save/restore cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestorationState {
    Idle,
    /// Waiting for the element to grow tall enough to honor `target`.
    Polling { target: u64, attempts: u32 },
}

/// The result of delivering one timer tick to a restorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No attempt is running, or the tick came from a timer this restorer no longer owns.
    Idle,
    /// The element is still too short; polling continues.
    Pending { attempts: u32 },
    /// The saved offset was applied exactly.
    Restored { offset: u64, attempts: u32 },
    /// The retry budget ran out and the element was scrolled as far as it currently goes.
    Fallback { offset: u64, attempts: u32 },
    /// The retry budget ran out and the element has nothing to scroll.
    Abandoned { attempts: u32 },
}

impl TickOutcome {
    /// Returns `true` when this tick ended the attempt.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            Self::Restored { .. } | Self::Fallback { .. } | Self::Abandoned { .. }
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct Attempt {
    timer: TimerId,
    target: u64,
    attempts: u32,
}

/// Keeps one scrollable element's offset in sync with a [`PositionStore`] across navigations.
///
/// The restorer listens to the navigation stream through two watchers:
/// - exit: on an end event immediately followed by a start event, the element's current offset is
///   filed under the route that is ending;
/// - enter: on every end event, a position saved for that route and this element is restored.
///
/// Content usually finishes laying out after the navigation completes, so restoration polls the
/// element's scroll extent on a repeating timer, for at most `max_attempts` ticks, before snapping
/// to whatever extent is available.
///
/// This type does not own the store or the timer facility. The host passes them into each call
/// and forwards timer firings to [`ScrollRestorer::on_tick`].
#[derive(Clone, Debug)]
pub struct ScrollRestorer<E> {
    options: RestorerOptions,
    element: Option<E>,
    exit: Option<NavigationPairing>,
    enter: bool,
    attempt: Option<Attempt>,
}

impl<E> Default for ScrollRestorer<E> {
    fn default() -> Self {
        Self::new(RestorerOptions::default())
    }
}

impl<E> ScrollRestorer<E> {
    pub fn new(options: RestorerOptions) -> Self {
        Self {
            options,
            element: None,
            exit: None,
            enter: false,
            attempt: None,
        }
    }

    pub fn options(&self) -> &RestorerOptions {
        &self.options
    }

    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn element_mut(&mut self) -> Option<&mut E> {
        self.element.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    pub fn is_polling(&self) -> bool {
        self.attempt.is_some()
    }

    /// The timer driving the current attempt, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.attempt.map(|a| a.timer)
    }

    pub fn state(&self) -> RestorationState {
        match self.attempt {
            Some(a) => RestorationState::Polling {
                target: a.target,
                attempts: a.attempts,
            },
            None => RestorationState::Idle,
        }
    }
}

impl<E: ScrollElement> ScrollRestorer<E> {
    /// Binds the restorer to its element and opens both navigation watchers.
    ///
    /// An attempt still running for a previously attached element is cancelled, so its saved
    /// offset never lands on the new element. Returns the previously attached element, if any.
    pub fn on_attach(&mut self, element: E, timer: &mut impl IntervalTimer) -> Option<E> {
        rdebug!(id = element_id(&element), "ScrollRestorer::on_attach");
        self.cancel(timer);
        self.exit = Some(NavigationPairing::new());
        self.enter = true;
        self.element.replace(element)
    }

    /// Cancels any running attempt, closes both watchers and releases the element.
    ///
    /// Safe to call repeatedly and before [`ScrollRestorer::on_attach`].
    pub fn on_detach(&mut self, timer: &mut impl IntervalTimer) -> Option<E> {
        self.cancel(timer);
        self.exit = None;
        self.enter = false;
        let element = self.element.take();
        if element.is_some() {
            rdebug!("ScrollRestorer::on_detach");
        }
        element
    }

    /// Delivers one navigation event to both watchers. Ignored while detached.
    pub fn on_navigation(
        &mut self,
        event: &NavigationEvent,
        store: &mut PositionStore,
        timer: &mut impl IntervalTimer,
    ) {
        let exited = self.exit.as_mut().and_then(|pairing| pairing.observe(event));
        if let Some(prev_end) = exited {
            self.save_on_exit(&prev_end, store, timer);
        }

        if self.enter && event.is_end() {
            self.restore_on_enter(event, store, timer);
        }
    }

    fn save_on_exit(
        &mut self,
        prev_end: &NavigationEvent,
        store: &mut PositionStore,
        timer: &mut impl IntervalTimer,
    ) {
        self.cancel(timer);

        let Some(key) = PositionStore::derive_key(prev_end) else {
            return;
        };
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let saved = SavedPosition::new(element_id(element), element.scroll_offset());
        rdebug!(
            key = key.as_str(),
            id = saved.element_id.as_deref(),
            position = saved.position,
            "ScrollRestorer: saved on exit"
        );
        store.save(key, saved);
    }

    fn restore_on_enter(
        &mut self,
        end: &NavigationEvent,
        store: &PositionStore,
        timer: &mut impl IntervalTimer,
    ) {
        let Some(key) = PositionStore::derive_key(end) else {
            return;
        };
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let Some(saved) = store.get(key.as_str()) else {
            return;
        };
        if !saved.belongs_to(element_id(element)) {
            rtrace!(
                key = key.as_str(),
                saved_id = saved.element_id.as_deref(),
                "ScrollRestorer: saved position belongs to another element"
            );
            return;
        }
        let target = saved.position;
        self.restore(target, timer);
    }

    /// Starts polling towards `target`, cancelling any attempt already running.
    ///
    /// Returns `false` (and starts nothing) while detached.
    pub fn restore(&mut self, target: u64, timer: &mut impl IntervalTimer) -> bool {
        if self.element.is_none() {
            return false;
        }
        self.cancel(timer);
        let id = timer.start_interval(self.options.poll_interval_ms.max(1));
        rdebug!(
            target_offset = target,
            timer = id.0,
            "ScrollRestorer: restoration started"
        );
        self.attempt = Some(Attempt {
            timer: id,
            target,
            attempts: 0,
        });
        true
    }

    /// Stops the running attempt, if any, and resets the retry count.
    ///
    /// Returns `true` if an attempt was cancelled.
    pub fn cancel(&mut self, timer: &mut impl IntervalTimer) -> bool {
        let Some(attempt) = self.attempt.take() else {
            return false;
        };
        rtrace!(
            timer = attempt.timer.0,
            attempts = attempt.attempts,
            "ScrollRestorer: attempt cancelled"
        );
        timer.cancel(attempt.timer);
        true
    }

    /// Handles one firing of timer `fired`.
    ///
    /// Ticks from timers other than the one driving the current attempt are ignored.
    pub fn on_tick(&mut self, fired: TimerId, timer: &mut impl IntervalTimer) -> TickOutcome {
        let Some(attempt) = self.attempt.as_mut() else {
            return TickOutcome::Idle;
        };
        if attempt.timer != fired {
            return TickOutcome::Idle;
        }
        let Some(element) = self.element.as_mut() else {
            self.cancel(timer);
            return TickOutcome::Idle;
        };

        let extent = element.scroll_extent();
        let outcome = if extent >= attempt.target {
            element.set_scroll_offset(attempt.target);
            TickOutcome::Restored {
                offset: attempt.target,
                attempts: attempt.attempts,
            }
        } else {
            attempt.attempts = attempt.attempts.saturating_add(1);
            if attempt.attempts < self.options.max_attempts.max(1) {
                rtrace!(
                    extent,
                    target_offset = attempt.target,
                    attempts = attempt.attempts,
                    "ScrollRestorer: element too short"
                );
                return TickOutcome::Pending {
                    attempts: attempt.attempts,
                };
            }
            if extent > 0 {
                element.set_scroll_offset(extent);
                TickOutcome::Fallback {
                    offset: extent,
                    attempts: attempt.attempts,
                }
            } else {
                TickOutcome::Abandoned {
                    attempts: attempt.attempts,
                }
            }
        };

        rdebug!(?outcome, "ScrollRestorer: restoration finished");
        self.cancel(timer);
        outcome
    }
}

fn element_id<E: ScrollElement + ?Sized>(element: &E) -> Option<&str> {
    element.id().filter(|id| !id.is_empty())
}

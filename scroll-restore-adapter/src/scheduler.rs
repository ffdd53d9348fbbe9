use alloc::vec::Vec;

use scroll_restore::{IntervalTimer, TimerId};

#[derive(Clone, Copy, Debug)]
struct Interval {
    id: TimerId,
    every_ms: u64,
    next_ms: u64,
}

/// An adapter-driven implementation of [`IntervalTimer`].
///
/// The scheduler never looks at a real clock. The host reports time by draining due firings with
/// [`IntervalScheduler::next_due`] from its event loop (a `setInterval` shim, a frame callback, a
/// test), which keeps polling independent of rendering.
///
/// A repeating timer started at `t` fires at `t + every`, `t + 2 * every`, ...
#[derive(Clone, Debug, Default)]
pub struct IntervalScheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Interval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    /// The scheduler's notion of "now": the last reported time, or the firing time of the timer
    /// being dispatched.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Pops the earliest firing due at or before `now_ms` and reschedules its timer.
    ///
    /// Returns `None` once nothing else is due, after advancing the clock to `now_ms`. Call it in
    /// a loop and dispatch each firing before asking for the next, so handlers can cancel or
    /// start timers in between. Ties fire in start order.
    pub fn next_due(&mut self, now_ms: u64) -> Option<TimerId> {
        let due = self
            .timers
            .iter_mut()
            .filter(|t| t.next_ms <= now_ms)
            .min_by_key(|t| (t.next_ms, t.id));

        let Some(timer) = due else {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        };
        let fired_at = timer.next_ms;
        timer.next_ms = fired_at.saturating_add(timer.every_ms);
        self.now_ms = self.now_ms.max(fired_at);
        Some(timer.id)
    }
}

impl IntervalTimer for IntervalScheduler {
    fn start_interval(&mut self, interval_ms: u64) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let every_ms = interval_ms.max(1);
        self.timers.push(Interval {
            id,
            every_ms,
            next_ms: self.now_ms.saturating_add(every_ms),
        });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

use crate::TimerId;

/// The host's repeating-timer facility.
///
/// Implementations must schedule outside of any render/change-detection cycle: polling is
/// bookkeeping and must not trigger redraws. When a timer fires, the host calls
/// [`crate::ScrollRestorer::on_tick`] on the restorer that started it.
pub trait IntervalTimer {
    /// Starts a timer that fires every `interval_ms` until cancelled.
    fn start_interval(&mut self, interval_ms: u64) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or already-cancelled timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

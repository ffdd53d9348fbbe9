/// Configuration for [`crate::ScrollRestorer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestorerOptions {
    /// Delay between polls of the element's scroll extent.
    pub poll_interval_ms: u64,
    /// Number of polls before falling back to the largest available offset.
    ///
    /// With the defaults the worst-case wait is `250 * 5 = 1250ms`.
    pub max_attempts: u32,
}

impl RestorerOptions {
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    pub fn new() -> Self {
        Self {
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms.max(1);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Upper bound on how long a restoration attempt keeps polling.
    pub fn max_wait_ms(&self) -> u64 {
        self.poll_interval_ms.saturating_mul(self.max_attempts as u64)
    }
}

impl Default for RestorerOptions {
    fn default() -> Self {
        Self::new()
    }
}

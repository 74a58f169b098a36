//! Gravity timer - the cancellable repeating tick source
//!
//! The timer does not own a thread or an OS timer. The host loop feeds it
//! elapsed wall time through [`GravityTimer::advance`] and receives the number
//! of gravity ticks that fell due. A cancelled timer accumulates nothing, and
//! restarting is idempotent: at most one schedule exists at any time.

use crate::types::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u64,
    elapsed_ms: u64,
    running: bool,
}

impl GravityTimer {
    /// Create a stopped timer. A zero interval is raised to 1ms.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm the timer if it is not already armed
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disarm the timer and drop any partial interval
    pub fn cancel(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Cancel any existing schedule, then start a fresh one
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Feed elapsed time; returns how many ticks fell due
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed_ms += elapsed_ms;
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        fired.min(u32::MAX as u64) as u32
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(GRAVITY_INTERVAL_MS)
    }
}

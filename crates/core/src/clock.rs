//! Tick clock - turns elapsed time into session ticks
//!
//! The driver feeds wall-clock milliseconds in; the clock says how many ticks
//! are due at the current interval. Rescheduling keeps the time already
//! accumulated, so changing speed neither drops nor duplicates a pending tick.

/// Fixed-interval tick accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl TickClock {
    /// A stopped clock with the given interval
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) with a full interval before the first tick
    pub fn start(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.running = true;
    }

    /// Stop; accumulated time is discarded
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    /// Change the interval without losing accumulated time
    pub fn reschedule(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
    }

    /// Add elapsed time and return whether a tick is due
    ///
    /// At most one tick fires per call; call [`poll`](Self::poll) in a loop to
    /// drain a backlog after a long stall.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        self.poll()
    }

    /// Fire one pending tick, if any, without adding time
    pub fn poll(&mut self) -> bool {
        if self.running && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick (0 if one is already due)
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms.saturating_sub(self.elapsed_ms)
    }
}

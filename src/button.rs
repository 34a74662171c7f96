//! Debounced single-button input monitor.
//!
//! One physical button drives the whole appliance, so the monitor is
//! allowed to be greedy: once a press is confirmed it blocks until the
//! button is released, stalling the outer loop for the hold duration.
//! That guarantees exactly one event per press-and-hold with no edge
//! bookkeeping, which is the right trade for a single-input device.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{DEBOUNCE_SETTLE_MS, RELEASE_POLL_MS};

/// Press detector over an active-low input pin.
pub struct ButtonMonitor<P, D> {
    pin: P,
    delay: D,
}

impl<P: InputPin, D: DelayNs> ButtonMonitor<P, D> {
    /// Wrap a pin and a blocking-delay provider.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Poll for a press event.
    ///
    /// Reads the pin; if low (active), waits the settle delay and reads
    /// again. Only a press confirmed by both reads is reported. After
    /// confirmation, blocks at a short poll interval until the pin goes
    /// high again, so a hold reports exactly once.
    ///
    /// A pin read error counts as "released".
    pub fn poll_pressed(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        self.delay.delay_ms(DEBOUNCE_SETTLE_MS);
        if !self.is_active() {
            // Bounce or noise: gone before the settle delay expired
            return false;
        }

        // Confirmed. Stall until release so the hold is one event.
        while self.is_active() {
            self.delay.delay_ms(RELEASE_POLL_MS);
        }

        true
    }

    #[inline]
    fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

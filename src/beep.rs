//! Press-acknowledgment tone generator.
//!
//! Square wave bit-banged on a digital output pin: toggle high/low at
//! half-period intervals derived from the requested frequency, for the
//! whole requested duration. The call blocks its caller for the full
//! duration; there is no concurrency to hand the tone off to.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Square-wave tone source on one output pin.
pub struct BeepGen<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> BeepGen<P, D> {
    /// Wrap a pin and a blocking-delay provider.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Emit `freq_hz` for `duration_ms`, blocking until done.
    ///
    /// Zero frequency or zero duration is a no-op. The pin is left low.
    /// Pin write errors are swallowed; the tone is best-effort feedback.
    pub fn tone(&mut self, freq_hz: u32, duration_ms: u32) {
        if freq_hz == 0 || duration_ms == 0 {
            let _ = self.pin.set_low();
            return;
        }

        let period_us = 1_000_000 / freq_hz;
        let half_us = (period_us / 2).max(1);
        let cycles = duration_ms as u64 * 1_000 / period_us.max(1) as u64;

        for _ in 0..cycles {
            let _ = self.pin.set_high();
            self.delay.delay_us(half_us);
            let _ = self.pin.set_low();
            self.delay.delay_us(half_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct CountingPin {
        highs: u32,
        lows: u32,
    }

    impl embedded_hal::digital::ErrorType for CountingPin {
        type Error = Infallible;
    }

    impl OutputPin for CountingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.lows += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.highs += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct AccumulatingDelay {
        total_us: u64,
    }

    impl DelayNs for AccumulatingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_us += ns as u64 / 1_000;
        }
    }

    #[test]
    fn test_tone_cycle_count() {
        let mut beeper = BeepGen::new(CountingPin::default(), AccumulatingDelay::default());

        // 1kHz for 100ms = 100 full periods
        beeper.tone(1_000, 100);

        assert_eq!(beeper.pin.highs, 100);
        assert_eq!(beeper.pin.lows, 100);
        // 100 cycles x 2 half-periods x 500us
        assert_eq!(beeper.delay.total_us, 100_000);
    }

    #[test]
    fn test_zero_frequency_is_noop_with_pin_low() {
        let mut beeper = BeepGen::new(CountingPin::default(), AccumulatingDelay::default());

        beeper.tone(0, 100);

        assert_eq!(beeper.pin.highs, 0);
        assert_eq!(beeper.pin.lows, 1);
        assert_eq!(beeper.delay.total_us, 0);
    }

    #[test]
    fn test_zero_duration_is_noop() {
        let mut beeper = BeepGen::new(CountingPin::default(), AccumulatingDelay::default());

        beeper.tone(440, 0);

        assert_eq!(beeper.pin.highs, 0);
        assert_eq!(beeper.delay.total_us, 0);
    }
}

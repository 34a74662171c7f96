//! Beep generator tests
//!
//! The tone is a bit-banged square wave: the pin must see one high and
//! one low per period, and the accumulated waits must cover the whole
//! requested duration.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use rust_voice_recorder::BeepGen;

#[derive(Clone, Default)]
struct TracePin(Rc<RefCell<Vec<bool>>>);

impl TracePin {
    fn writes(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

impl embedded_hal::digital::ErrorType for TracePin {
    type Error = core::convert::Infallible;
}

impl OutputPin for TracePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(true);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct AccumulatingDelay(Rc<RefCell<u64>>);

impl AccumulatingDelay {
    fn total_us(&self) -> u64 {
        *self.0.borrow()
    }
}

impl DelayNs for AccumulatingDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.0.borrow_mut() += ns as u64 / 1_000;
    }
}

#[test]
fn test_press_cue_shape() {
    let pin = TracePin::default();
    let delay = AccumulatingDelay::default();
    let mut beeper = BeepGen::new(pin.clone(), delay.clone());

    // The press-acknowledgment cue: 1kHz for 100ms
    beeper.tone(1_000, 100);

    let writes = pin.writes();
    // 100 periods, each one high then one low
    assert_eq!(writes.len(), 200);
    assert!(writes.chunks(2).all(|c| c == [true, false]));
    // Pin parked low
    assert_eq!(*writes.last().unwrap(), false);

    // Blocks for the full duration
    assert_eq!(delay.total_us(), 100_000);
}

#[test]
fn test_lower_frequency_fewer_cycles() {
    let pin = TracePin::default();
    let delay = AccumulatingDelay::default();
    let mut beeper = BeepGen::new(pin.clone(), delay.clone());

    // 440Hz for 50ms: 22 whole periods fit
    beeper.tone(440, 50);

    assert_eq!(pin.writes().len(), 44);
    // Half period is 1136us; 22 cycles x 2 halves
    assert_eq!(delay.total_us(), 22 * 2 * 1_136);
}

#[test]
fn test_degenerate_requests_do_nothing() {
    let pin = TracePin::default();
    let delay = AccumulatingDelay::default();
    let mut beeper = BeepGen::new(pin.clone(), delay.clone());

    beeper.tone(0, 100);
    beeper.tone(1_000, 0);

    // Only the park-low writes, no toggling, no waiting
    assert_eq!(pin.writes(), vec![false, false]);
    assert_eq!(delay.total_us(), 0);
}

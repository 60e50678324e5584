//! GPIO exhibit inputs
//!
//! Maps two digital input pins to the advance and replay signals. Each pin
//! has its own polarity: a door reed switch on a pull-up typically reads
//! high when the door is open, while a button to ground reads low when
//! pressed.

use chirpbox_core::traits::{Signal, SignalInput};
use embedded_hal::digital::InputPin;

/// Electrical level that means "active"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pin high = active
    #[default]
    ActiveHigh,
    /// Pin low = active
    ActiveLow,
}

impl Polarity {
    /// Convert an electrical level to a logical one
    pub fn is_active(self, high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        }
    }
}

/// Advance and replay signals read from two GPIO pins
pub struct PinInputs<A, B> {
    advance: A,
    replay: B,
    advance_polarity: Polarity,
    replay_polarity: Polarity,
}

impl<A: InputPin, B: InputPin> PinInputs<A, B> {
    /// Create inputs from two pins
    ///
    /// # Arguments
    /// - `advance`: Pin for the advance signal (door switch)
    /// - `replay`: Pin for the replay signal (button)
    pub fn new(advance: A, advance_polarity: Polarity, replay: B, replay_polarity: Polarity) -> Self {
        Self {
            advance,
            replay,
            advance_polarity,
            replay_polarity,
        }
    }

    /// Release the pins
    pub fn into_pins(self) -> (A, B) {
        (self.advance, self.replay)
    }
}

/// Read a pin as a logical level
///
/// A failed read counts as inactive so a flaky pin cannot trigger edges.
fn read_pin<P: InputPin>(pin: &mut P, polarity: Polarity) -> bool {
    match pin.is_high() {
        Ok(high) => polarity.is_active(high),
        Err(_) => false,
    }
}

impl<A: InputPin, B: InputPin> SignalInput for PinInputs<A, B> {
    fn read_level(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::Advance => read_pin(&mut self.advance, self.advance_polarity),
            Signal::Replay => read_pin(&mut self.replay, self.replay_polarity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        fail: bool,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high, fail: false }
        }

        fn failing() -> Self {
            Self {
                high: true,
                fail: true,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = ErrorKind;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            if self.fail {
                Err(ErrorKind::Other)
            } else {
                Ok(self.high)
            }
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_active_high() {
        let mut inputs = PinInputs::new(
            MockPin::new(true),
            Polarity::ActiveHigh,
            MockPin::new(false),
            Polarity::ActiveHigh,
        );
        assert!(inputs.read_level(Signal::Advance));
        assert!(!inputs.read_level(Signal::Replay));
    }

    #[test]
    fn test_active_low() {
        let mut inputs = PinInputs::new(
            MockPin::new(true),
            Polarity::ActiveLow,
            MockPin::new(false),
            Polarity::ActiveLow,
        );
        assert!(!inputs.read_level(Signal::Advance));
        assert!(inputs.read_level(Signal::Replay));
    }

    #[test]
    fn test_read_error_is_inactive() {
        let mut inputs = PinInputs::new(
            MockPin::failing(),
            Polarity::ActiveHigh,
            MockPin::failing(),
            Polarity::ActiveLow,
        );
        assert!(!inputs.read_level(Signal::Advance));
        assert!(!inputs.read_level(Signal::Replay));
    }

    #[test]
    fn test_pin_state_changes_are_seen() {
        let mut inputs = PinInputs::new(
            MockPin::new(false),
            Polarity::ActiveHigh,
            MockPin::new(false),
            Polarity::ActiveHigh,
        );
        assert!(!inputs.read_level(Signal::Advance));

        inputs.advance.high = true;
        assert!(inputs.read_level(Signal::Advance));

        let (advance, _) = inputs.into_pins();
        assert!(advance.high);
    }
}

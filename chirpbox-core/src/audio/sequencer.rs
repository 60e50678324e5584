//! Blocking audio sequencer
//!
//! Plays a signature's tone events strictly in order. Each call blocks
//! until the whole signature has finished; there is no cancellation and
//! no partial-progress reporting.

use crate::traits::{Delay, ToneOutput};

use super::signature::SignatureId;

/// Plays signatures through a tone output
pub struct AudioSequencer<T> {
    tone: T,
}

impl<T: ToneOutput> AudioSequencer<T> {
    /// Create a new sequencer
    pub fn new(tone: T) -> Self {
        Self { tone }
    }

    /// Play the signature for `id`
    ///
    /// Each event sounds for its duration, then `delay` holds for the
    /// event's gap. Zero gaps are skipped. Returns the number of tones
    /// played.
    pub fn play<D: Delay>(&mut self, id: SignatureId, delay: &mut D) -> usize {
        let signature = id.signature();
        trace!("play {=str}: {} tones", id.name(), signature.len());

        let mut played = 0;
        for event in signature.events() {
            self.tone.play_tone(event.frequency_hz, event.duration_ms);
            if event.gap_ms > 0 {
                delay.delay_ms(u32::from(event.gap_ms));
            }
            played += 1;
        }
        played
    }

    /// Get access to the underlying tone output
    pub fn output(&self) -> &T {
        &self.tone
    }

    /// Consume the sequencer and return the tone output
    pub fn into_output(self) -> T {
        self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ToneEvent;
    use crate::mock::{Log, MockDelay, MockTone, Op};
    use heapless::Vec;
    use proptest::prelude::*;

    fn record(id: SignatureId) -> Vec<Op, 1024> {
        let log = Log::new();
        let mut sequencer = AudioSequencer::new(MockTone::new(&log));
        let mut delay = MockDelay::new(&log);
        sequencer.play(id, &mut delay);
        let ops = log.ops().clone();
        ops
    }

    #[test]
    fn test_plays_events_in_order_with_gaps() {
        let ops = record(SignatureId::Robin);
        let expected = [
            Op::Tone(784, 120),
            Op::Sleep(50),
            Op::Tone(880, 120),
            Op::Sleep(50),
            Op::Tone(988, 120),
            Op::Sleep(50),
            Op::Tone(880, 120),
            Op::Sleep(50),
        ];
        assert_eq!(ops.as_slice(), &expected);
    }

    #[test]
    fn test_zero_gap_issues_no_delay() {
        let ops = record(SignatureId::Flicker);
        assert_eq!(ops.as_slice(), &[Op::Tone(1700, 80), Op::Tone(950, 80)]);
    }

    #[test]
    fn test_returns_tone_count() {
        let log = Log::new();
        let mut sequencer = AudioSequencer::new(MockTone::new(&log));
        let mut delay = MockDelay::new(&log);

        assert_eq!(sequencer.play(SignatureId::Jay, &mut delay), 36);
        assert_eq!(sequencer.play(SignatureId::Chickadee, &mut delay), 7);
        assert_eq!(log.tones().len(), 43);
    }

    #[test]
    fn test_matches_signature_table() {
        for id in SignatureId::ALL {
            let ops = record(id);
            let mut replayed: Vec<ToneEvent, 64> = Vec::new();
            let mut iter = ops.iter().peekable();
            while let Some(op) = iter.next() {
                let Op::Tone(f, d) = op else {
                    panic!("delay without a preceding tone");
                };
                let gap = match iter.peek() {
                    Some(Op::Sleep(ms)) => {
                        let ms = *ms as u16;
                        iter.next();
                        ms
                    }
                    _ => 0,
                };
                replayed.push(ToneEvent::new(*f, *d, gap)).unwrap();
            }
            assert!(id.signature().events().eq(replayed.iter().copied()));
        }
    }

    proptest! {
        #[test]
        fn prop_play_is_deterministic(idx in 0usize..5) {
            let id = SignatureId::ALL[idx];
            prop_assert_eq!(record(id), record(id));
        }
    }
}

//! Muted tone output
//!
//! Waits out each tone's duration without making a sound. Exhibit timing
//! stays the same as with a real speaker, which is useful on boards without
//! one and during quiet hours.

use chirpbox_core::traits::ToneOutput;
use embedded_hal::delay::DelayNs;

/// Silent [`ToneOutput`]
pub struct MutedTone<D> {
    delay: D,
    /// Tones skipped so far
    tones: u32,
}

impl<D: DelayNs> MutedTone<D> {
    pub fn new(delay: D) -> Self {
        Self { delay, tones: 0 }
    }

    /// Number of tones that would have been played
    pub fn tones(&self) -> u32 {
        self.tones
    }
}

impl<D: DelayNs> ToneOutput for MutedTone<D> {
    fn play_tone(&mut self, _frequency_hz: u16, duration_ms: u16) {
        self.delay.delay_ms(u32::from(duration_ms));
        self.tones = self.tones.wrapping_add(1);
    }
}

//! Tone output trait

/// Trait for a tone generator (piezo, speaker amp, PWM buzzer)
pub trait ToneOutput {
    /// Play a tone, blocking until it has finished
    ///
    /// - `frequency_hz`: Tone frequency in Hz
    /// - `duration_ms`: How long the tone sounds
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u16);
}

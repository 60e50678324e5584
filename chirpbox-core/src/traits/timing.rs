//! Blocking delay trait

/// Blocking delay used for tone gaps, the settle delay and poll pacing
pub trait Delay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

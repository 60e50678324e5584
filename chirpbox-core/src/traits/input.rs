//! Digital input trait

/// Physical signals the exhibit watches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Advance to the next item (mailbox door switch)
    Advance,
    /// Replay the current item's call (push button)
    Replay,
}

/// Trait for reading the exhibit's digital inputs
///
/// Levels are logical: `true` means the signal is active, whatever the
/// electrical polarity of the pin. Reads are sampled on demand with no
/// buffering.
pub trait SignalInput {
    /// Read the current level of a signal
    fn read_level(&mut self, signal: Signal) -> bool;
}

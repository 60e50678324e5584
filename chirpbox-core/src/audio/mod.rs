//! Bird call audio
//!
//! Static signature tables and the blocking sequencer that plays them.

pub mod sequencer;
pub mod signature;

pub use sequencer::AudioSequencer;
pub use signature::{Phrase, Signature, SignatureId, ToneEvent};

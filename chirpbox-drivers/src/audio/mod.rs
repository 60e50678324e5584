//! Audio drivers

pub mod muted;

pub use muted::MutedTone;

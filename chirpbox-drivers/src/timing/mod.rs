//! Timing drivers

pub mod delay;

pub use delay::HalDelay;

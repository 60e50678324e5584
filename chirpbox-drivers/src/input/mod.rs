//! Input drivers

pub mod pins;

pub use pins::{PinInputs, Polarity};

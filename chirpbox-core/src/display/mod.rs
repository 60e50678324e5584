//! Visual output
//!
//! Enforces the release-then-acquire protocol for the single displayed
//! image.

pub mod swapper;

pub use swapper::DisplaySwapper;

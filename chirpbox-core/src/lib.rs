//! Board-agnostic core logic for the Chirpbox exhibit controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, tone output, inputs, delay)
//! - The exhibit catalog and its configuration
//! - Bird call signatures and the blocking audio sequencer
//! - The single-image display swapper
//! - Rising-edge input detection
//! - The exhibit main loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "toml")]
extern crate alloc;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod audio;
pub mod catalog;
pub mod config;
pub mod display;
pub mod exhibit;
pub mod input;
pub mod traits;

#[cfg(test)]
mod mock;

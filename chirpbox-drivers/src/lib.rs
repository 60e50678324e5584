//! Hardware driver adapters
//!
//! This crate connects `embedded-hal` peripherals to the traits defined
//! in chirpbox-core:
//!
//! - Digital inputs (door switch, replay button) with per-pin polarity
//! - Blocking delays
//! - A muted tone output for boards without a speaker

#![no_std]
#![deny(unsafe_code)]

pub mod audio;
pub mod input;
pub mod timing;

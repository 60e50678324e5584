//! Configuration types
//!
//! Board-agnostic exhibit configuration, either built from a static table
//! in firmware or parsed from TOML.

pub mod defaults;
#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

pub use defaults::BIRDS;
#[cfg(feature = "toml")]
pub use self::toml::parse_config;
pub use types::*;

//! Configuration type definitions
//!
//! These types describe one exhibit: its catalog, the display canvas, the
//! loop timing and how a missing image is handled.

use crate::catalog::{Catalog, CatalogEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::defaults::BIRDS;

/// Configuration errors
///
/// All of these are fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Catalog has no items
    EmptyCatalog,
    /// Catalog exceeds the fixed capacity
    TooManyItems,
    /// Catalog entry references a signature name that does not exist
    UnknownSignature { index: usize },
    /// Catalog entry name is too long
    LabelTooLong { index: usize },
    /// Catalog entry image path is too long
    PathTooLong { index: usize },
    /// Poll interval must be non-zero
    InvalidTiming,
    /// Canvas must have non-zero dimensions
    InvalidCanvas,
    /// Configuration text could not be parsed
    Parse,
}

/// Fixed display canvas in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
}

impl Default for Canvas {
    fn default() -> Self {
        // 240x240 TFT
        Self {
            width: 240,
            height: 240,
        }
    }
}

impl Canvas {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidCanvas);
        }
        Ok(())
    }
}

/// Main loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Hold after acting on an edge (ms)
    pub settle_ms: u32,
    /// Pause between input polls (ms)
    pub poll_interval_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle_ms: 180,
            poll_interval_ms: 210,
        }
    }
}

impl Timing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(())
    }
}

/// What an announce does when the item's image cannot be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MissingAssetPolicy {
    /// Leave the screen blank and still play the call
    #[default]
    PlayAudio,
    /// Abort the announce after the failed swap
    Skip,
}

/// Complete exhibit configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExhibitConfig {
    pub catalog: Catalog,
    pub canvas: Canvas,
    pub timing: Timing,
    pub missing_asset: MissingAssetPolicy,
}

impl ExhibitConfig {
    /// Configuration with default canvas, timing and policy
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            canvas: Canvas::default(),
            timing: Timing::default(),
            missing_asset: MissingAssetPolicy::default(),
        }
    }

    /// Configuration from a static catalog table
    pub fn from_entries(entries: &[CatalogEntry<'_>]) -> Result<Self, ConfigError> {
        Ok(Self::new(Catalog::from_entries(entries)?))
    }

    /// The built-in five bird exhibit
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_entries(&BIRDS)
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_missing_asset(mut self, policy: MissingAssetPolicy) -> Self {
        self.missing_asset = policy;
        self
    }

    /// Check the non-catalog settings
    ///
    /// The catalog validates itself on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()?;
        self.timing.validate()
    }
}

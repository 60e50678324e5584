//! TOML exhibit configuration
//!
//! Parses a catalog file of the form:
//!
//! ```toml
//! missing_asset = "play-audio"
//!
//! [display]
//! width = 240
//! height = 240
//!
//! [timing]
//! settle_ms = 180
//! poll_interval_ms = 210
//!
//! [[item]]
//! name = "Spotted Towhee"
//! image = "/images/towhee.bmp"
//! signature = "towhee"
//! ```
//!
//! Only `[[item]]` is required. Signature names are resolved here so an
//! unknown name is reported with the offending item's index.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::audio::SignatureId;
use crate::catalog::{Catalog, CatalogEntry};

use super::types::{Canvas, ConfigError, ExhibitConfig, MissingAssetPolicy, Timing};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    missing_asset: MissingAssetPolicy,
    #[serde(default)]
    display: Canvas,
    #[serde(default)]
    timing: Timing,
    #[serde(default, rename = "item")]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    name: String,
    image: String,
    signature: String,
}

/// Parse TOML configuration into an [`ExhibitConfig`]
pub fn parse_config(input: &str) -> Result<ExhibitConfig, ConfigError> {
    let raw: RawConfig = ::toml::from_str(input).map_err(|_| {
        warn!("exhibit config is not valid TOML");
        ConfigError::Parse
    })?;

    let mut entries = Vec::with_capacity(raw.items.len());
    for (index, item) in raw.items.iter().enumerate() {
        let signature = SignatureId::from_name(&item.signature).ok_or_else(|| {
            warn!("item {}: unknown signature {=str}", index, item.signature.as_str());
            ConfigError::UnknownSignature { index }
        })?;
        entries.push(CatalogEntry {
            name: &item.name,
            image: &item.image,
            signature,
        });
    }

    let config = ExhibitConfig {
        catalog: Catalog::from_entries(&entries)?,
        canvas: raw.display,
        timing: raw.timing,
        missing_asset: raw.missing_asset,
    };
    config.validate()?;

    info!(
        "exhibit config: {} items, {}x{} canvas",
        config.catalog.len(),
        config.canvas.width,
        config.canvas.height
    );
    Ok(config)
}

impl ExhibitConfig {
    /// Parse a TOML exhibit configuration
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        parse_config(input)
    }
}

//! Engine configuration.
//!
//! Everything here is plain data handed in by the host; the engine never reads
//! the environment or the filesystem itself.

use serde::{Deserialize, Serialize};

use stockdash_core::{CatalogError, CatalogResult, ValueObject};

/// Sale-price bounds behind the `Low` / `Medium` / `High` price ranges.
///
/// `Low` is `price < low_below`, `High` is `price > high_above`, `Medium` is
/// everything in between (both bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBands {
    pub low_below: f64,
    pub high_above: f64,
}

impl ValueObject for PriceBands {}

impl Default for PriceBands {
    fn default() -> Self {
        Self {
            low_below: 100.0,
            high_above: 500.0,
        }
    }
}

impl PriceBands {
    pub fn new(low_below: f64, high_above: f64) -> CatalogResult<Self> {
        let bands = Self {
            low_below,
            high_above,
        };
        bands.validate()?;
        Ok(bands)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.low_below.is_finite() && self.high_above.is_finite()) {
            return Err(CatalogError::invalid_config("price bands must be finite"));
        }
        if self.low_below > self.high_above {
            return Err(CatalogError::invalid_config(format!(
                "price bands inverted (low_below={}, high_above={})",
                self.low_below, self.high_above
            )));
        }
        Ok(())
    }
}

/// Limits applied when validating an edited product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLimits {
    /// Highest accepted markup ratio (`10.0` = 1000%).
    pub max_markup_ratio: f64,
    /// Maximum description length, in characters.
    pub max_description_len: usize,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            max_markup_ratio: 10.0,
            max_description_len: 150,
        }
    }
}

impl EditLimits {
    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.max_markup_ratio.is_finite() && self.max_markup_ratio > 0.0) {
            return Err(CatalogError::invalid_config(
                "max_markup_ratio must be a finite positive number",
            ));
        }
        if self.max_description_len == 0 {
            return Err(CatalogError::invalid_config(
                "max_description_len must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub price_bands: PriceBands,
    pub edit_limits: EditLimits,
}

impl CatalogConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let config: CatalogConfig = serde_json::from_str(raw)
            .map_err(|e| CatalogError::invalid_config(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        self.price_bands.validate()?;
        self.edit_limits.validate()
    }
}

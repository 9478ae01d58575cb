//! Markup ratio value object and unit normalization.

use serde::{Deserialize, Serialize};

use stockdash_core::{CatalogError, CatalogResult, ValueObject};

/// Unit a raw markup value was recorded in.
///
/// Older catalog entries store `30` for a 30% markup; current ones store `0.30`.
/// Convert once, at ingestion, with [`MarkupRatio::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupUnit {
    Fraction,
    PercentPoints,
}

/// Fractional markup applied to supplier cost (`0.30` = 30%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MarkupRatio(f64);

impl ValueObject for MarkupRatio {}

impl MarkupRatio {
    pub fn from_fraction(ratio: f64) -> CatalogResult<Self> {
        if !ratio.is_finite() {
            return Err(CatalogError::invalid_input(format!(
                "markup ratio must be finite (got {ratio})"
            )));
        }
        Ok(Self(ratio))
    }

    pub fn from_percent_points(points: f64) -> CatalogResult<Self> {
        Self::from_fraction(points / 100.0)
    }

    pub fn normalize(value: f64, unit: MarkupUnit) -> CatalogResult<Self> {
        match unit {
            MarkupUnit::Fraction => Self::from_fraction(value),
            MarkupUnit::PercentPoints => Self::from_percent_points(value),
        }
    }

    pub fn as_fraction(self) -> f64 {
        self.0
    }

    /// Display value, e.g. `30.0` for a `0.30` ratio.
    pub fn as_percent_points(self) -> f64 {
        self.0 * 100.0
    }
}

impl TryFrom<f64> for MarkupRatio {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_fraction(value)
    }
}

impl From<MarkupRatio> for f64 {
    fn from(value: MarkupRatio) -> Self {
        value.0
    }
}

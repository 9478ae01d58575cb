//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only hard failures live here. Degenerate-but-valid numeric inputs (a zero
/// minimum stock, a negative current stock) are normalized and reported as
/// warnings next to the computed value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A numeric input is corrupt (non-finite or negative cost, non-finite markup).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A user-edited value failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Engine configuration is inconsistent (e.g. inverted price bands).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = CatalogError::invalid_input("cost must be finite");
        assert_eq!(err.to_string(), "invalid input: cost must be finite");

        let err = CatalogError::invalid_config("low_below > high_above");
        assert_eq!(err.to_string(), "invalid configuration: low_below > high_above");
    }
}

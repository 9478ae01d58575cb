//! Composite catalog filter: text search, stock state, price range.
//!
//! The three criteria are independent and side-effect free; a record passes
//! when all of them hold.

use serde::{Deserialize, Serialize};

use crate::config::PriceBands;

/// Stock-state criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockState {
    #[default]
    All,
    /// `current <= minimum`.
    Low,
    /// `current > minimum`.
    Sufficient,
    /// `current == 0`.
    OutOfStock,
}

impl StockState {
    pub fn matches(self, current_stock: i64, minimum_stock: i64) -> bool {
        match self {
            StockState::All => true,
            StockState::Low => current_stock <= minimum_stock,
            StockState::Sufficient => current_stock > minimum_stock,
            StockState::OutOfStock => current_stock == 0,
        }
    }
}

/// Price-range criterion, evaluated against the derived sale price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRange {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriceRange {
    pub fn matches(self, sale_price: f64, bands: &PriceBands) -> bool {
        match self {
            PriceRange::All => true,
            PriceRange::Low => sale_price < bands.low_below,
            PriceRange::Medium => sale_price >= bands.low_below && sale_price <= bands.high_above,
            PriceRange::High => sale_price > bands.high_above,
        }
    }

    pub(crate) fn needs_price(self) -> bool {
        self != PriceRange::All
    }
}

/// One query's worth of filter selections, built by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    /// Case-insensitive substring; empty disables the text criterion.
    pub search_text: String,
    pub stock_state: StockState,
    pub price_range: PriceRange,
}

impl CatalogFilter {
    /// Filter that lets every record through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_stock_state(mut self, stock_state: StockState) -> Self {
        self.stock_state = stock_state;
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }
}

//! All derived pricing values for one product, computed together.

use serde::{Deserialize, Serialize};

use stockdash_core::CatalogResult;

use crate::calculator::{compute_sale_price, ensure_finite_result};
use crate::stock::{StockHealth, classify_stock_health, compute_stock_percentage};

/// Degenerate-but-valid input noticed while deriving values.
///
/// These never fail a computation; the value is normalized and the warning
/// travels with it so the rendering layer can flag the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingWarning {
    /// Minimum stock is zero or negative; the stock percentage is a sentinel.
    DegenerateRange { minimum_stock: i64 },
    /// Current stock is below zero.
    NegativeStock { current_stock: i64 },
}

/// Values every product view renders. Never stored; recompute on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedPricing {
    pub sale_price: f64,
    pub unit_profit: f64,
    /// Unit profit times current stock.
    pub stock_profit: f64,
    pub stock_health: StockHealth,
    /// In `[0, 100]`.
    pub stock_percentage: f64,
    pub warnings: Vec<PricingWarning>,
}

impl DerivedPricing {
    pub fn compute(
        cost: f64,
        markup_ratio: f64,
        current_stock: i64,
        minimum_stock: i64,
    ) -> CatalogResult<Self> {
        let sale_price = compute_sale_price(cost, markup_ratio)?;
        let unit_profit = sale_price - cost;
        let stock_profit =
            ensure_finite_result(unit_profit * current_stock as f64, "stock profit")?;

        let mut warnings = Vec::new();
        if minimum_stock <= 0 {
            warnings.push(PricingWarning::DegenerateRange { minimum_stock });
        }
        if current_stock < 0 {
            warnings.push(PricingWarning::NegativeStock { current_stock });
        }

        Ok(Self {
            sale_price,
            unit_profit,
            stock_profit,
            stock_health: classify_stock_health(current_stock, minimum_stock),
            stock_percentage: compute_stock_percentage(current_stock, minimum_stock),
            warnings,
        })
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

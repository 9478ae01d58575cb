//! Collection-wide catalog statistics.

use serde::{Deserialize, Serialize};

use stockdash_core::{CatalogError, CatalogResult};
use stockdash_pricing::compute_stock_profit;

use crate::product::ProductRecord;

/// Collection-wide summary. Always computed over the full, unfiltered input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_count: usize,
    /// Records with `current <= minimum`.
    pub low_stock_count: usize,
    /// Records with `current == 0`.
    pub out_of_stock_count: usize,
    /// Σ supplier cost × current stock.
    pub total_inventory_value: f64,
    /// Σ unit profit × current stock.
    pub total_potential_profit: f64,
}

impl CatalogStats {
    pub fn from_products(products: &[ProductRecord]) -> CatalogResult<Self> {
        let mut stats = CatalogStats {
            total_count: products.len(),
            ..CatalogStats::default()
        };

        for product in products {
            if product.is_low_stock() {
                stats.low_stock_count += 1;
            }
            if product.is_out_of_stock() {
                stats.out_of_stock_count += 1;
            }
            let stock_profit = compute_stock_profit(
                product.supplier_cost,
                product.markup_ratio,
                product.current_stock,
            )?;
            stats.total_inventory_value += product.supplier_cost * product.current_stock as f64;
            stats.total_potential_profit += stock_profit;

            if !(stats.total_inventory_value.is_finite() && stats.total_potential_profit.is_finite())
            {
                return Err(CatalogError::invalid_input(format!(
                    "catalog totals overflow at product {} ({})",
                    product.id, product.sku
                )));
            }
        }

        Ok(stats)
    }
}

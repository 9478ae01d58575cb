//! Sale price and profit formulas.
//!
//! All monetary inputs are supplier costs in the catalog's currency; markup is a
//! fractional ratio (`0.30` = 30%). See [`MarkupRatio`](crate::MarkupRatio) for
//! converting legacy percent-point values at the ingestion boundary.

use stockdash_core::{CatalogError, CatalogResult};

fn ensure_cost(cost: f64) -> CatalogResult<()> {
    if !cost.is_finite() {
        return Err(CatalogError::invalid_input(format!(
            "supplier cost must be finite (got {cost})"
        )));
    }
    if cost < 0.0 {
        return Err(CatalogError::invalid_input(format!(
            "supplier cost cannot be negative (got {cost})"
        )));
    }
    Ok(())
}

fn ensure_markup(markup_ratio: f64) -> CatalogResult<()> {
    if !markup_ratio.is_finite() {
        return Err(CatalogError::invalid_input(format!(
            "markup ratio must be finite (got {markup_ratio})"
        )));
    }
    Ok(())
}

/// Overflow guard for values derived from finite inputs.
pub(crate) fn ensure_finite_result(value: f64, what: &str) -> CatalogResult<f64> {
    if !value.is_finite() {
        return Err(CatalogError::invalid_input(format!(
            "{what} overflows (got {value})"
        )));
    }
    Ok(value)
}

/// `cost * (1 + markup_ratio)`.
///
/// Fails with [`CatalogError::InvalidInput`] when the cost is non-finite or
/// negative, when the markup ratio is non-finite, or when the product
/// overflows.
pub fn compute_sale_price(cost: f64, markup_ratio: f64) -> CatalogResult<f64> {
    ensure_cost(cost)?;
    ensure_markup(markup_ratio)?;
    ensure_finite_result(cost * (1.0 + markup_ratio), "sale price")
}

/// `compute_sale_price(cost, markup_ratio) - cost`.
pub fn compute_unit_profit(cost: f64, markup_ratio: f64) -> CatalogResult<f64> {
    let sale_price = compute_sale_price(cost, markup_ratio)?;
    Ok(sale_price - cost)
}

/// Profit made if the whole current stock sells at the derived sale price.
///
/// Negative stock yields a negative figure; it is not clamped.
pub fn compute_stock_profit(cost: f64, markup_ratio: f64, current_stock: i64) -> CatalogResult<f64> {
    let unit_profit = compute_unit_profit(cost, markup_ratio)?;
    ensure_finite_result(unit_profit * current_stock as f64, "stock profit")
}

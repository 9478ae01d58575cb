//! Stock health classification and the stock-level percentage.

use serde::{Deserialize, Serialize};

/// Three-level stock classification relative to the minimum threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockHealth {
    /// One unit or fewer left (including negative stock).
    Critical,
    /// Above the critical threshold but under the minimum.
    Low,
    /// At or above the minimum.
    Ok,
}

impl StockHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            StockHealth::Critical => "critical",
            StockHealth::Low => "low",
            StockHealth::Ok => "ok",
        }
    }
}

impl core::fmt::Display for StockHealth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock at or below this many units is always critical.
const CRITICAL_STOCK: i64 = 1;

/// Classify current stock against the minimum.
///
/// The critical check runs first, so a stock of 1 is critical even when the
/// minimum is 1 or lower.
pub fn classify_stock_health(current_stock: i64, minimum_stock: i64) -> StockHealth {
    if current_stock <= CRITICAL_STOCK {
        StockHealth::Critical
    } else if current_stock < minimum_stock {
        StockHealth::Low
    } else {
        StockHealth::Ok
    }
}

/// Current stock as a percentage of the minimum, clamped to `[0, 100]`.
///
/// A minimum of zero (or below) cannot be divided by. In that case the result
/// is `100` when there is any stock and `0` otherwise; NaN and infinity never
/// escape.
pub fn compute_stock_percentage(current_stock: i64, minimum_stock: i64) -> f64 {
    if minimum_stock <= 0 {
        tracing::debug!(
            current_stock,
            minimum_stock,
            "degenerate minimum stock; using sentinel percentage"
        );
        return if current_stock > 0 { 100.0 } else { 0.0 };
    }

    let ratio = current_stock as f64 / minimum_stock as f64 * 100.0;
    ratio.clamp(0.0, 100.0)
}

//! Pricing calculator.
//!
//! Derives sale price, unit profit and stock health from a product's raw
//! commercial attributes. Every function here is pure: equal inputs always
//! produce equal outputs, and nothing is cached between calls.
//!
//! No currency rounding happens at this layer; rounding is a display concern.

pub mod calculator;
pub mod derived;
pub mod markup;
pub mod stock;

pub use calculator::{compute_sale_price, compute_stock_profit, compute_unit_profit};
pub use derived::{DerivedPricing, PricingWarning};
pub use markup::{MarkupRatio, MarkupUnit};
pub use stock::{StockHealth, classify_stock_health, compute_stock_percentage};

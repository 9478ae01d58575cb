//! Catalog query engine.
//!
//! `query` is a pure function of its inputs plus the engine's immutable
//! configuration. It holds no cross-call state, so one engine can be shared
//! freely across threads.

use serde::Serialize;

use stockdash_core::CatalogResult;
use stockdash_pricing::DerivedPricing;

use crate::config::CatalogConfig;
use crate::filter::CatalogFilter;
use crate::product::{ProductRecord, derive_pricing};
use crate::stats::CatalogStats;

/// Result of one query: the matching records, in input order, plus the
/// collection-wide stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub filtered: Vec<&'a ProductRecord>,
    pub stats: CatalogStats,
}

impl CatalogView<'_> {
    /// Owned copies of the matching records, for handing to a layer that
    /// outlives the source collection.
    pub fn to_owned_records(&self) -> Vec<ProductRecord> {
        self.filtered.iter().map(|p| (*p).clone()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogQueryEngine {
    config: CatalogConfig,
}

impl CatalogQueryEngine {
    /// Validate `config` and build an engine.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Evaluate `filter` over `products`.
    ///
    /// Every record's cost and markup are checked before anything is filtered,
    /// so a corrupt record fails the query whatever the filter selects.
    /// Stats always cover the whole collection.
    pub fn query<'a>(
        &self,
        products: &'a [ProductRecord],
        filter: &CatalogFilter,
    ) -> CatalogResult<CatalogView<'a>> {
        for product in products {
            if let Err(err) = product.sale_price() {
                tracing::warn!(
                    product_id = %product.id,
                    sku = %product.sku,
                    error = %err,
                    "rejecting catalog query: malformed numeric field"
                );
                return Err(err);
            }
        }

        let needle = filter.search_text.to_lowercase();
        let mut filtered = Vec::new();
        for product in products {
            if self.matches_lowered(product, filter, &needle)? {
                filtered.push(product);
            }
        }

        let stats = CatalogStats::from_products(products)?;

        tracing::debug!(
            total = stats.total_count,
            matched = filtered.len(),
            stock_state = ?filter.stock_state,
            price_range = ?filter.price_range,
            "catalog query evaluated"
        );

        Ok(CatalogView { filtered, stats })
    }

    /// Whether a single record passes `filter`.
    pub fn matches(&self, product: &ProductRecord, filter: &CatalogFilter) -> CatalogResult<bool> {
        self.matches_lowered(product, filter, &filter.search_text.to_lowercase())
    }

    /// Collection-wide stats, independent of any filter.
    pub fn stats(&self, products: &[ProductRecord]) -> CatalogResult<CatalogStats> {
        CatalogStats::from_products(products)
    }

    pub fn derive(&self, product: &ProductRecord) -> CatalogResult<DerivedPricing> {
        let derived = derive_pricing(product)?;
        if derived.has_warnings() {
            tracing::debug!(
                product_id = %product.id,
                warnings = ?derived.warnings,
                "derived pricing normalized degenerate input"
            );
        }
        Ok(derived)
    }

    fn matches_lowered(
        &self,
        product: &ProductRecord,
        filter: &CatalogFilter,
        needle: &str,
    ) -> CatalogResult<bool> {
        if !needle.is_empty() && !product.contains_text(needle) {
            return Ok(false);
        }
        if !filter
            .stock_state
            .matches(product.current_stock, product.minimum_stock)
        {
            return Ok(false);
        }
        if filter.price_range.needs_price() {
            let sale_price = product.sale_price()?;
            return Ok(filter
                .price_range
                .matches(sale_price, &self.config.price_bands));
        }
        Ok(true)
    }
}

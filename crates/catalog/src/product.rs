use serde::{Deserialize, Serialize};

use stockdash_core::{CatalogResult, Entity, ProductId};
use stockdash_pricing::{DerivedPricing, compute_sale_price};

/// Product as supplied by the external product source.
///
/// Field names on the wire follow the product API (`nombre`, `stock_actual`,
/// ...). Markup is a fractional ratio; legacy percent-point values must be
/// converted with [`MarkupRatio`](stockdash_pricing::MarkupRatio) before they
/// get here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub sku: String,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "stock_actual", alias = "current_stock")]
    pub current_stock: i64,
    #[serde(rename = "stock_minimo", alias = "minimum_stock")]
    pub minimum_stock: i64,
    #[serde(rename = "precio_compra_proveedor", alias = "supplier_cost")]
    pub supplier_cost: f64,
    #[serde(rename = "porcentaje_ganancia", alias = "markup_ratio")]
    pub markup_ratio: f64,
    #[serde(
        rename = "descripcion",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl ProductRecord {
    pub fn new(id: i64, sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            sku: sku.into(),
            name: name.into(),
            current_stock: 0,
            minimum_stock: 0,
            supplier_cost: 0.0,
            markup_ratio: 0.0,
            description: None,
        }
    }

    pub fn with_stock(mut self, current_stock: i64, minimum_stock: i64) -> Self {
        self.current_stock = current_stock;
        self.minimum_stock = minimum_stock;
        self
    }

    pub fn with_pricing(mut self, supplier_cost: f64, markup_ratio: f64) -> Self {
        self.supplier_cost = supplier_cost;
        self.markup_ratio = markup_ratio;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sale_price(&self) -> CatalogResult<f64> {
        compute_sale_price(self.supplier_cost, self.markup_ratio)
    }

    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock == 0
    }

    /// Case-insensitive containment over name, SKU and description.
    ///
    /// `needle` must already be lowercased. A missing description never matches.
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.sku.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Derived pricing for a record, as rendered by every product view.
pub fn derive_pricing(record: &ProductRecord) -> CatalogResult<DerivedPricing> {
    DerivedPricing::compute(
        record.supplier_cost,
        record.markup_ratio,
        record.current_stock,
        record.minimum_stock,
    )
}

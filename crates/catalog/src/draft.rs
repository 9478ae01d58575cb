//! Edit buffer for a single product.
//!
//! The UI keeps a [`ProductDraft`] while the user edits; validation turns it
//! back into a [`ProductRecord`] or reports every failing field at once.
//! The id and SKU are fixed when the draft is taken from a record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockdash_core::{CatalogError, CatalogResult, ProductId};
use stockdash_pricing::DerivedPricing;

use crate::config::EditLimits;
use crate::product::ProductRecord;

/// Editable field of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Name,
    CurrentStock,
    MinimumStock,
    SupplierCost,
    MarkupRatio,
    Description,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::CurrentStock => "current_stock",
            DraftField::MinimumStock => "minimum_stock",
            DraftField::SupplierCost => "supplier_cost",
            DraftField::MarkupRatio => "markup_ratio",
            DraftField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

impl FieldError {
    fn new(field: DraftField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn for_field(&self, field: DraftField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(value: ValidationErrors) -> Self {
        let summary = value
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect::<Vec<_>>()
            .join("; ");
        CatalogError::validation(summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    id: ProductId,
    sku: String,
    pub name: String,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub supplier_cost: f64,
    pub markup_ratio: f64,
    pub description: String,
}

impl ProductDraft {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            sku: record.sku.clone(),
            name: record.name.clone(),
            current_stock: record.current_stock,
            minimum_stock: record.minimum_stock,
            supplier_cost: record.supplier_cost,
            markup_ratio: record.markup_ratio,
            description: record.description.clone().unwrap_or_default(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Whether the draft differs from the record it was taken from.
    pub fn is_modified(&self, original: &ProductRecord) -> bool {
        *self != Self::from_record(original)
    }

    /// Live sale price, unit profit and stock figures for the form.
    pub fn preview(&self) -> CatalogResult<DerivedPricing> {
        DerivedPricing::compute(
            self.supplier_cost,
            self.markup_ratio,
            self.current_stock,
            self.minimum_stock,
        )
    }

    pub fn validate(&self, limits: &EditLimits) -> Result<ProductRecord, ValidationErrors> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(DraftField::Name, "name cannot be empty"));
        }
        if self.current_stock < 0 {
            errors.push(FieldError::new(
                DraftField::CurrentStock,
                "current stock cannot be negative",
            ));
        }
        if self.minimum_stock < 0 {
            errors.push(FieldError::new(
                DraftField::MinimumStock,
                "minimum stock cannot be negative",
            ));
        }
        if !(self.supplier_cost.is_finite() && self.supplier_cost > 0.0) {
            errors.push(FieldError::new(
                DraftField::SupplierCost,
                "supplier cost must be greater than zero",
            ));
        }
        if !self.markup_ratio.is_finite() {
            errors.push(FieldError::new(
                DraftField::MarkupRatio,
                "markup ratio must be a finite number",
            ));
        } else if self.markup_ratio < 0.0 {
            errors.push(FieldError::new(
                DraftField::MarkupRatio,
                "markup ratio cannot be negative",
            ));
        } else if self.markup_ratio > limits.max_markup_ratio {
            errors.push(FieldError::new(
                DraftField::MarkupRatio,
                format!(
                    "markup ratio looks too high (max {}%)",
                    limits.max_markup_ratio * 100.0
                ),
            ));
        }
        let description_len = self.description.chars().count();
        if description_len > limits.max_description_len {
            errors.push(FieldError::new(
                DraftField::Description,
                format!(
                    "description is {description_len} characters (max {})",
                    limits.max_description_len
                ),
            ));
        }

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        Ok(ProductRecord {
            id: self.id,
            sku: self.sku.clone(),
            name: self.name.clone(),
            current_stock: self.current_stock,
            minimum_stock: self.minimum_stock,
            supplier_cost: self.supplier_cost,
            markup_ratio: self.markup_ratio,
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        })
    }
}

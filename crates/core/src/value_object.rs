//! Value object trait: equality by value, not identity.
//!
//! A markup ratio of `0.30` is the same markup wherever it appears; a product
//! with id `7` is a particular product even after its name changes. The first
//! is a value object, the second an [`Entity`](crate::Entity).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. The bounds keep them cheap to pass around and easy to
/// assert on in tests.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct PriceBands { low_below: f64, high_above: f64 }
///
/// impl ValueObject for PriceBands {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

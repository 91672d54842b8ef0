//! Values compared by content.

/// Marker for immutable, content-compared values (filter criteria, money
/// formats, table cells). Build a new one instead of mutating.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct FeeBound(f64);
///
/// impl ValueObject for FeeBound {}
///
/// assert_eq!(FeeBound(500.0), FeeBound(500.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

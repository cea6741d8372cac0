//! Value object trait: equality by value, not identity.
//!
//! Account numbers, amounts and filter bounds carry no identity of their own;
//! two of them with the same value are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(i64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(100), Amount(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Explicit range bounds for report filters.
//!
//! A missing or malformed filter value becomes [`Bound::Unbounded`] on its
//! side; no sentinel "smallest date" or "largest account" is ever needed.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// One side of an inclusive range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Bound<T> {
    /// No restriction on this side.
    #[default]
    Unbounded,
    /// The value itself is part of the range.
    Inclusive(T),
}

impl<T> Bound<T> {
    pub fn as_inclusive(&self) -> Option<&T> {
        match self {
            Bound::Unbounded => None,
            Bound::Inclusive(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Bound<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Bound::Inclusive(v),
            None => Bound::Unbounded,
        }
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Bound<T> {}

/// Range closed on every bounded side.
///
/// A range whose lower bound exceeds its upper bound is empty; nothing is
/// swapped or rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InclusiveRange<T> {
    pub start: Bound<T>,
    pub end: Bound<T>,
}

impl<T: PartialOrd> InclusiveRange<T> {
    pub fn new(start: Bound<T>, end: Bound<T>) -> Self {
        Self { start, end }
    }

    /// Range with no restriction on either side.
    pub fn unbounded() -> Self {
        Self {
            start: Bound::Unbounded,
            end: Bound::Unbounded,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Unbounded => true,
            Bound::Inclusive(start) => value >= start,
        };
        let below_end = match &self.end {
            Bound::Unbounded => true,
            Bound::Inclusive(end) => value <= end,
        };
        above_start && below_end
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for InclusiveRange<T> {}

//! Entity trait: identity that outlives attribute changes.

/// Entity marker + minimal interface.
///
/// A chart-of-accounts entry is an entity: its label may change between
/// ledger snapshots, its account number does not.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

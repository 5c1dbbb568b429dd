//! Entity trait: identity + continuity.

/// Entity marker + minimal interface.
///
/// Every record held by the store is an entity: it is created once, keeps its
/// identifier forever, and is never mutated afterwards.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

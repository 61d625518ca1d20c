//! Entity trait: identity + continuity across attribute changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same entity, whatever their
/// current attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

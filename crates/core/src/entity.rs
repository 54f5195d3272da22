//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with the given id inside an ordered collection.
pub fn position_of<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value. Invoice snapshots and parties are value objects; line
/// items are entities (they carry an identifier).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

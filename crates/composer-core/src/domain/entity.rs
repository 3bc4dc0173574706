//! Domain Layer - Core Entity Trait
//!
//! Anything the collection keeps in order and addresses by id.

/// Core trait for identifiable domain records
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id` inside an ordered slice
pub fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

//! Records addressed by a stable identifier.

/// A record that keeps its identity while its fields change.
///
/// Stores use this to look records up without knowing their concrete shape.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this record answers to `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}

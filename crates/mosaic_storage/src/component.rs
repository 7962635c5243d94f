//! Typed component storage behind a type-erased capability interface.
//!
//! Each component type gets its own [`ComponentStore<T>`], a plain map from
//! entity index to value. The `World` holds the stores type-erased as
//! `Box<dyn ErasedStore>`, looked up by the [`TypeRegistry`]'s integer id;
//! the erased interface carries only the operation that must work without
//! knowing the concrete type, purging an entity's entry on removal.
//!
//! [`TypeRegistry`]: crate::TypeRegistry

use std::any::Any;
use std::collections::HashMap;

use mosaic_foundation::{Entity, Result};

use crate::world::World;

/// Marker trait for component types.
///
/// Blanket-implemented: any `Clone + Default + 'static` type is a
/// component. `Default` backs the never-fails read contract (reads of
/// absent components return the default value); `Clone` backs pass-by-value
/// dispatch.
pub trait Component: Clone + Default + 'static {}

impl<T: Clone + Default + 'static> Component for T {}

/// Type-erased capability interface over a [`ComponentStore<T>`].
///
/// Entity removal must purge the entity's entry from every store without
/// knowing any concrete component type; everything typed goes through the
/// `Any` upcasts instead.
pub trait ErasedStore {
    /// Removes the entry for an entity index, returning whether one existed.
    fn purge(&mut self, index: u64) -> bool;

    /// Upcast for typed read access.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for typed write access.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for all values of one component type, keyed by entity index.
///
/// Entries are independent of entity liveness: the store never validates
/// generations, and `World::remove` is responsible for purging entries.
#[derive(Debug, Clone)]
pub struct ComponentStore<T: Component> {
    entries: HashMap<u64, T>,
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Component> ComponentStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value for an entity index.
    ///
    /// Returns the previous value if one was replaced.
    pub fn insert(&mut self, index: u64, value: T) -> Option<T> {
        self.entries.insert(index, value)
    }

    /// Returns the value for an entity index, if present.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<&T> {
        self.entries.get(&index)
    }

    /// Removes and returns the value for an entity index.
    pub fn remove(&mut self, index: u64) -> Option<T> {
        self.entries.remove(&index)
    }

    /// Returns true if an entry exists for an entity index.
    #[must_use]
    pub fn contains(&self, index: u64) -> bool {
        self.entries.contains_key(&index)
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates stored `(index, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> {
        self.entries.iter().map(|(index, value)| (*index, value))
    }
}

impl<T: Component> ErasedStore for ComponentStore<T> {
    fn purge(&mut self, index: u64) -> bool {
        self.entries.remove(&index).is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A set of component values that can be attached to an entity in one call.
///
/// Implemented for tuples of components up to arity 8; the empty tuple
/// attaches nothing. Elements are applied independently in the order given.
pub trait ComponentSet {
    /// Attaches every value in the set to `entity`.
    ///
    /// Each value is inserted and its mask bit set through the world, which
    /// validates the handle per value; a stale handle attaches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] if a value's
    /// type cannot be assigned an id.
    fn attach_to(self, world: &mut World, entity: Entity) -> Result<()>;
}

impl ComponentSet for () {
    fn attach_to(self, _world: &mut World, _entity: Entity) -> Result<()> {
        Ok(())
    }
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentSet for ($($name,)+) {
            #[allow(non_snake_case)]
            fn attach_to(self, world: &mut World, entity: Entity) -> Result<()> {
                let ($($name,)+) = self;
                $(world.attach_value(entity, $name)?;)+
                Ok(())
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);

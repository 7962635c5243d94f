//! The world: composition root and sole mutator of all storage.
//!
//! A `World` owns the entity registry, the type registry, and one
//! type-erased component store per registered component type. All mutation
//! goes through it, in place, single-threaded; callers sharing a world
//! across threads must serialize access externally.
//!
//! The error contract is fail-quiet (see [`mosaic_foundation::error`]):
//! operations on stale handles are silent no-ops and reads of absent
//! components produce defaults. The only reported error is exhausting the
//! component-type capacity, surfaced by whichever operation first uses the
//! overflowing type.

use mosaic_foundation::{ComponentMask, Entity, Result};

use crate::component::{Component, ComponentSet, ComponentStore, ErasedStore};
use crate::entity::EntityStore;
use crate::registry::TypeRegistry;

/// A process-local entity-component registry.
#[derive(Default)]
pub struct World {
    /// Slot state: generations, free list, per-slot masks.
    pub(crate) entities: EntityStore,
    /// Component type id assignment, scoped to this world.
    pub(crate) registry: TypeRegistry,
    /// Type-erased stores indexed by component type id.
    pub(crate) stores: Vec<Option<Box<dyn ErasedStore>>>,
}

impl World {
    /// Creates a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Entity Operations ---

    /// Creates an entity with the given initial components.
    ///
    /// Pops a slot from the free list (strictly increasing its generation)
    /// or appends a fresh slot at generation 1, then attaches the set.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] if one of
    /// the initial components is of a brand-new type and the type capacity
    /// is exhausted. The entity itself is always created; components before
    /// the overflowing one remain attached.
    pub fn create<S: ComponentSet>(&mut self, set: S) -> Result<Entity> {
        let entity = self.entities.spawn();
        set.attach_to(self, entity)?;
        Ok(entity)
    }

    /// Removes an entity. Silent no-op if the handle is stale.
    ///
    /// Purges the entity's index from every component store, regardless of
    /// which components it held, clears its mask, and frees the slot for
    /// reuse.
    pub fn remove(&mut self, entity: Entity) {
        if !self.entities.contains(entity) {
            return;
        }
        for store in self.stores.iter_mut().flatten() {
            store.purge(entity.index);
        }
        self.entities.despawn(entity);
    }

    /// Checks if a handle refers to a live entity.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates all live entity handles in ascending index order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter()
    }

    // --- Component Operations ---

    /// Attaches a set of components to an entity.
    ///
    /// Each value is an insert-or-replace keyed by the entity's index, and
    /// sets the matching mask bit. The whole call is a silent no-op if the
    /// handle is stale.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] if a value's
    /// type is brand new and the type capacity is exhausted; values earlier
    /// in the set remain attached.
    pub fn attach<S: ComponentSet>(&mut self, entity: Entity, set: S) -> Result<()> {
        if !self.entities.contains(entity) {
            return Ok(());
        }
        set.attach_to(self, entity)
    }

    /// Attaches a single component value to an entity.
    ///
    /// Equivalent to [`World::attach`] with a one-element set.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] as
    /// [`World::attach`] does.
    pub fn attach_one<T: Component>(&mut self, entity: Entity, value: T) -> Result<()> {
        if !self.entities.contains(entity) {
            return Ok(());
        }
        self.attach_value(entity, value)
    }

    /// Detaches a component type from an entity.
    ///
    /// Removes the store entry and clears the mask bit, so `has_component`
    /// and query matching agree immediately. Silent no-op if the handle is
    /// stale or the component is absent.
    pub fn detach<T: Component>(&mut self, entity: Entity) {
        if !self.entities.contains(entity) {
            return;
        }
        let Some(id) = self.registry.lookup::<T>() else {
            return;
        };
        if let Some(Some(store)) = self.stores.get_mut(id as usize) {
            store.purge(entity.index);
        }
        self.entities.remove_mask_bit(entity, id);
    }

    /// Returns a copy of the stored component, or `T::default()`.
    ///
    /// This read never fails: stale handles, unregistered types, and absent
    /// entries all produce the default value. Callers distinguish presence
    /// with [`World::has_component`].
    #[must_use]
    pub fn get_component<T: Component>(&self, entity: Entity) -> T {
        if !self.entities.contains(entity) {
            return T::default();
        }
        self.store::<T>()
            .and_then(|store| store.get(entity.index))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns true if the handle is live and carries a `T`.
    #[must_use]
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
            && self
                .store::<T>()
                .is_some_and(|store| store.contains(entity.index))
    }

    /// Returns the component mask of a live entity, or the empty mask.
    #[must_use]
    pub fn component_mask(&self, entity: Entity) -> ComponentMask {
        if self.entities.contains(entity) {
            self.entities.mask(entity.index)
        } else {
            ComponentMask::empty()
        }
    }

    // --- Internals ---

    /// Inserts one component value. Silent no-op if the handle is stale.
    ///
    /// Every insertion funnels through here, including [`ComponentSet`]
    /// attachment, so a store entry is never created without its mask bit.
    pub(crate) fn attach_value<T: Component>(&mut self, entity: Entity, value: T) -> Result<()> {
        if !self.entities.contains(entity) {
            return Ok(());
        }
        let id = self.registry.id_of::<T>()?;
        self.store_mut_at::<T>(id).insert(entity.index, value);
        self.entities.insert_mask_bit(entity, id);
        Ok(())
    }

    /// Typed view of the store for `T`, if `T` ever got an id.
    fn store<T: Component>(&self) -> Option<&ComponentStore<T>> {
        let id = self.registry.lookup::<T>()?;
        let store = self.stores.get(id as usize)?.as_ref()?;
        store.as_any().downcast_ref::<ComponentStore<T>>()
    }

    /// Typed store for an assigned id, lazily created.
    fn store_mut_at<T: Component>(&mut self, id: u32) -> &mut ComponentStore<T> {
        let slot = id as usize;
        if slot >= self.stores.len() {
            self.stores.resize_with(slot + 1, || None);
        }
        self.stores[slot]
            .get_or_insert_with(|| Box::new(ComponentStore::<T>::new()))
            .as_any_mut()
            .downcast_mut::<ComponentStore<T>>()
            .expect("store type matches registry id")
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entities.len())
            .field("component_types", &self.registry.len())
            .finish_non_exhaustive()
    }
}

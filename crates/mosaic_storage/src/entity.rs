//! Entity lifecycle management with generational indices.
//!
//! The `EntityStore` owns slot state: a generation counter per slot, the
//! free list of reusable slots, and one component mask per slot recording
//! which component types are attached.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use mosaic_foundation::{ComponentMask, Entity};

/// Manages entity slots, generation tracking, and per-slot component masks.
///
/// Slots are allocated from a free list when available, otherwise new
/// indices are appended. When an entity is despawned its index goes on the
/// free list and its generation is incremented; a later spawn through the
/// same slot increments it again, so reused indices always carry a strictly
/// greater generation than any stale handle to them.
///
/// Even generations are free, odd generations are live. The parity encodes
/// the slot's live flag; generation 0 (never allocated) is therefore never
/// a valid handle generation.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// Generation counter for each slot index.
    generations: Vec<u32>,
    /// Component membership mask for each slot index.
    masks: Vec<ComponentMask>,
    /// Free list of indices available for reuse.
    free_list: Vec<u64>,
    /// Count of live entities.
    live_count: usize,
}

impl EntityStore {
    /// Creates a new empty entity store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a new entity and returns its handle. Never fails.
    ///
    /// Reuses indices from the free list when available; a reused index
    /// gets a strictly greater generation than any previous handle to it.
    pub fn spawn(&mut self) -> Entity {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            // Was even/free, now odd/live
            self.generations[idx] += 1;
            self.masks[idx] = ComponentMask::empty();
            Entity::new(index, self.generations[idx])
        } else {
            let index = self.generations.len() as u64;
            // New slots start at generation 1 (odd = live)
            self.generations.push(1);
            self.masks.push(ComponentMask::empty());
            Entity::new(index, 1)
        }
    }

    /// Despawns an entity, returning whether it was live.
    ///
    /// A stale or never-allocated handle is a silent no-op (`false`). On
    /// success the slot's mask is cleared, its generation becomes even
    /// (free), and the index joins the free list.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.contains(entity) {
            return false;
        }

        let idx = entity.index as usize;
        // Was odd/live, now even/free
        self.generations[idx] += 1;
        self.masks[idx] = ComponentMask::empty();
        self.free_list.push(entity.index);
        self.live_count -= 1;
        true
    }

    /// Checks if a handle refers to a live entity.
    ///
    /// Validity is generation-exact: a handle surviving a despawn/respawn
    /// cycle on the same index never matches again.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        let idx = entity.index as usize;
        if idx >= self.generations.len() {
            return false;
        }
        self.generations[idx] == entity.generation && entity.generation % 2 == 1
    }

    /// Returns true if the slot at `index` is currently live.
    #[must_use]
    pub fn is_live_index(&self, index: u64) -> bool {
        self.generations
            .get(index as usize)
            .is_some_and(|generation| generation % 2 == 1)
    }

    /// Returns the handle currently occupying `index`, if that slot is live.
    #[must_use]
    pub fn handle_at(&self, index: u64) -> Option<Entity> {
        let generation = *self.generations.get(index as usize)?;
        (generation % 2 == 1).then(|| Entity::new(index, generation))
    }

    /// Returns the component mask of the slot at `index`.
    ///
    /// Dead or out-of-range slots read as the empty mask.
    #[must_use]
    pub fn mask(&self, index: u64) -> ComponentMask {
        if self.is_live_index(index) {
            self.masks[index as usize]
        } else {
            ComponentMask::empty()
        }
    }

    /// Sets one component bit in a live slot's mask.
    pub fn insert_mask_bit(&mut self, entity: Entity, component_id: u32) {
        if self.contains(entity) {
            self.masks[entity.index as usize].insert(component_id);
        }
    }

    /// Clears one component bit in a live slot's mask.
    pub fn remove_mask_bit(&mut self, entity: Entity, component_id: u32) {
        if self.contains(entity) {
            self.masks[entity.index as usize].remove(component_id);
        }
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Returns the number of slots ever allocated (live or free).
    ///
    /// Query scans snapshot this at entry, which is what makes entities
    /// appended mid-scan invisible to the in-flight scan.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.generations.len()
    }

    /// Iterates all live entity handles in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.generations
            .iter()
            .enumerate()
            .filter(|(_, generation)| *generation % 2 == 1)
            .map(|(idx, generation)| Entity::new(idx as u64, *generation))
    }

    /// Returns the current generation for an index, if it was ever allocated.
    ///
    /// This is useful for debugging and testing.
    #[must_use]
    pub fn generation(&self, index: u64) -> Option<u32> {
        self.generations.get(index as usize).copied()
    }
}

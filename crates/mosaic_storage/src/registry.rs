//! World-scoped assignment of component type ids.
//!
//! Every distinct component type gets a small, densely increasing integer
//! id on first use; ids double as bit positions in [`ComponentMask`]s. Ids
//! are never reclaimed, even if no entity ever holds the type again. The
//! registry is owned by a `World` rather than being process-global, so two
//! independently built worlds never share bit positions.

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use mosaic_foundation::{ComponentMask, Error, MAX_COMPONENT_TYPES, Result};

use crate::component::Component;

/// Maps component types to dense integer ids.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    ids: HashMap<TypeId, u32>,
    /// Type names indexed by id, kept for diagnostics.
    names: Vec<&'static str>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `T`, assigning the next unused id on first use.
    ///
    /// Id 0 is a normal, valid id (unlike entity generation 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCapacity`] if this would be the
    /// `MAX_COMPONENT_TYPES + 1`-th distinct type; a silently wrapped id
    /// would alias another type's mask bit.
    pub fn id_of<T: Component>(&mut self) -> Result<u32> {
        if let Some(&id) = self.ids.get(&TypeId::of::<T>()) {
            return Ok(id);
        }

        let id = u32::try_from(self.names.len()).unwrap_or(u32::MAX);
        if id as usize >= MAX_COMPONENT_TYPES {
            return Err(Error::ComponentCapacity {
                limit: MAX_COMPONENT_TYPES,
            });
        }

        self.ids.insert(TypeId::of::<T>(), id);
        self.names.push(type_name::<T>());
        Ok(id)
    }

    /// Returns the id for `T` without assigning one.
    ///
    /// A type never attached anywhere simply has no id; callers treat that
    /// as "no entity holds this component", not as an error.
    #[must_use]
    pub fn lookup<T: Component>(&self) -> Option<u32> {
        self.ids.get(&TypeId::of::<T>()).copied()
    }

    /// Bit-ORs the ids of previously registered types into a mask.
    ///
    /// Types without an id contribute nothing (no entity can carry them).
    #[must_use]
    pub fn mask_of<T: Component>(&self) -> ComponentMask {
        self.lookup::<T>().into_iter().collect()
    }

    /// Returns the number of assigned ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no ids have been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the diagnostic type name for an assigned id.
    #[must_use]
    pub fn name(&self, id: u32) -> Option<&'static str> {
        self.names.get(id as usize).copied()
    }
}

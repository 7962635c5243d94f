//! Bulk dispatch over entities whose component masks match a pattern.
//!
//! A query names the component types it fetches (a [`QuerySet`] tuple) and
//! optionally the types it excludes (a [`Without`] filter). Matching is
//! pure bit algebra over the per-slot masks:
//!
//! ```text
//! mask & (include | exclude) == include & !exclude
//! ```
//!
//! i.e. every included bit set, no excluded bit set, components outside
//! both sets permitted.
//!
//! Scans visit live slots in ascending index order. The slot count is
//! snapshotted when the scan starts, but each slot's liveness, mask, and
//! component values are read at the moment it is visited: a handler that
//! mutates a higher-index entity sees that mutation take effect later in
//! the same scan, while brand-new entities appended beyond the snapshot
//! stay invisible until the next scan.

use std::marker::PhantomData;

use mosaic_foundation::{ComponentMask, Entity, Result};

use crate::component::Component;
use crate::world::World;

/// A tuple of component types fetched by a query.
///
/// Implemented for tuples of arity 0..=8. Values are fetched by value
/// (a snapshot at visit time); handlers write mutations back explicitly
/// via [`World::attach`].
pub trait QuerySet: Sized {
    /// Bit-ORs the ids of every type in the set into one mask.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] if a type in
    /// the set is brand new and the type capacity is exhausted.
    fn include_mask(world: &mut World) -> Result<ComponentMask>;

    /// Fetches the set's values for an entity, defaulting absent entries.
    fn fetch(world: &World, entity: Entity) -> Self;
}

impl QuerySet for () {
    fn include_mask(_world: &mut World) -> Result<ComponentMask> {
        Ok(ComponentMask::empty())
    }

    fn fetch(_world: &World, _entity: Entity) -> Self {}
}

macro_rules! impl_query_set {
    ($($name:ident),+) => {
        impl<$($name: Component),+> QuerySet for ($($name,)+) {
            fn include_mask(world: &mut World) -> Result<ComponentMask> {
                let mut mask = ComponentMask::empty();
                $(mask.insert(world.registry.id_of::<$name>()?);)+
                Ok(mask)
            }

            fn fetch(world: &World, entity: Entity) -> Self {
                ($(world.get_component::<$name>(entity),)+)
            }
        }
    };
}

impl_query_set!(A);
impl_query_set!(A, B);
impl_query_set!(A, B, C);
impl_query_set!(A, B, C, D);
impl_query_set!(A, B, C, D, E);
impl_query_set!(A, B, C, D, E, F);
impl_query_set!(A, B, C, D, E, F, G);
impl_query_set!(A, B, C, D, E, F, G, H);

/// An exclusion filter for [`World::system_query`].
///
/// `()` excludes nothing; [`Without<X>`] excludes every type in the set
/// `X`.
pub trait QueryFilter {
    /// Bit-ORs the ids of every excluded type into one mask.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] if an
    /// excluded type is brand new and the type capacity is exhausted.
    fn exclude_mask(world: &mut World) -> Result<ComponentMask>;
}

impl QueryFilter for () {
    fn exclude_mask(_world: &mut World) -> Result<ComponentMask> {
        Ok(ComponentMask::empty())
    }
}

/// Marker restricting a query to entities carrying none of the types in
/// `X`.
///
/// `X` is a [`QuerySet`] tuple, e.g. `Without<(Velocity,)>`. Excluded
/// types are never fetched.
pub struct Without<X>(PhantomData<X>);

impl<X: QuerySet> QueryFilter for Without<X> {
    fn exclude_mask(world: &mut World) -> Result<ComponentMask> {
        X::include_mask(world)
    }
}

/// One query match: the entity handle bundled with its fetched components.
///
/// This is the query-record form of dispatch; `components` is the
/// [`QuerySet`] tuple, pulled apart by position.
#[derive(Debug, Clone, Copy)]
pub struct Matched<Q> {
    /// The matched entity's handle, valid at visit time.
    pub entity: Entity,
    /// The fetched component values, a snapshot at visit time.
    pub components: Q,
}

impl World {
    /// Runs a handler over every live entity whose mask is a superset of
    /// `Q`'s mask, passing the components as discrete values.
    ///
    /// Components are passed by value; mutations must be written back with
    /// [`World::attach`]. Entities are visited in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] only if a
    /// type in `Q` is brand new and the type capacity is exhausted; the
    /// scan itself never fails.
    pub fn system<Q, H>(&mut self, mut handler: H) -> Result<()>
    where
        Q: QuerySet,
        H: FnMut(&mut World, Entity, Q),
    {
        self.system_query::<Q, (), _>(move |world, matched| {
            handler(world, matched.entity, matched.components);
        })
    }

    /// Runs a handler over every match of `Q` filtered by `F`, passing one
    /// [`Matched`] record per entity.
    ///
    /// The match rule is exactly
    /// `mask & (include | exclude) == include & !exclude`: all included
    /// bits set, no excluded bit set, other components permitted.
    ///
    /// # Errors
    ///
    /// Returns [`mosaic_foundation::Error::ComponentCapacity`] only if a
    /// type in `Q` or `F` is brand new and the type capacity is exhausted.
    pub fn system_query<Q, F, H>(&mut self, mut handler: H) -> Result<()>
    where
        Q: QuerySet,
        F: QueryFilter,
        H: FnMut(&mut World, Matched<Q>),
    {
        let include = Q::include_mask(self)?;
        let exclude = F::exclude_mask(self)?;
        let combined = include.union(exclude);
        let required = include.difference(exclude);

        // Entities appended beyond this snapshot are invisible to the scan.
        let snapshot = self.entities.slot_count() as u64;
        for index in 0..snapshot {
            // Liveness and mask are re-read per slot, so handler mutations
            // of not-yet-visited entities take effect within this scan.
            let Some(entity) = self.entities.handle_at(index) else {
                continue;
            };
            if self.entities.mask(index).intersection(combined) != required {
                continue;
            }
            let components = Q::fetch(self, entity);
            handler(self, Matched { entity, components });
        }
        Ok(())
    }
}

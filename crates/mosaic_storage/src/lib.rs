//! Entity registry, component stores, world, and query engine for Mosaic.
//!
//! This crate provides:
//! - [`EntityStore`] - Generational slot allocation with per-slot component masks
//! - [`TypeRegistry`] - World-scoped component type id assignment
//! - [`ComponentStore`] - Typed per-component-type storage
//! - [`World`] - The composition root and sole mutator of the above
//! - [`Without`] - Exclusion filter for query dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod entity;
pub mod query;
pub mod registry;
pub mod world;

pub use component::{Component, ComponentSet, ComponentStore};
pub use entity::EntityStore;
pub use query::{Matched, QueryFilter, QuerySet, Without};
pub use registry::TypeRegistry;
pub use world::World;

//! Mosaic - Minimal entity-component runtime
//!
//! This crate re-exports both layers of the Mosaic system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: mosaic_storage    — Entity registry, component stores, world, queries
//! Layer 0: mosaic_foundation — Core types (Entity, ComponentMask, Error)
//! ```

pub use mosaic_foundation as foundation;
pub use mosaic_storage as storage;

//! Entity handles, component masks, and error types for Mosaic.
//!
//! This crate provides:
//! - [`Entity`] - Generational entity handles
//! - [`ComponentMask`] - Fixed-width component membership bit vectors
//! - [`Error`] - Error types for the runtime

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod mask;

pub use entity::Entity;
pub use error::{Error, Result};
pub use mask::{ComponentMask, MAX_COMPONENT_TYPES};

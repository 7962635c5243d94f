//! Error types for the Mosaic runtime.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Stale handles are deliberately *not* errors: mutating operations treat
//! them as silent no-ops and reads return defaults, so callers distinguish
//! presence with `has_component` rather than by catching failures. The one
//! thing that does fail loudly is exhausting the component-type capacity,
//! which would otherwise corrupt mask bits silently.

use thiserror::Error;

/// Convenience alias for results in this workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for Mosaic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More distinct component types were registered than the mask width
    /// supports.
    #[error("component type capacity exceeded: at most {limit} distinct component types")]
    ComponentCapacity {
        /// The configured capacity (mask width in bits).
        limit: usize,
    },
}

//! Entity handles with generational indices.

use std::fmt;

/// Handle to an entity slot, made stale-proof by a generation counter.
///
/// The index addresses a storage slot; the generation says *which* occupant
/// of that slot the handle refers to. Slot reuse bumps the generation, so a
/// handle held across a remove/create cycle never matches the new occupant.
/// Generation 0 is never live: the first occupant of any slot is generation 1.
///
/// Handles are plain `Copy` data and compare on both fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Entity {
    /// Index into entity storage.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl Entity {
    /// Creates a handle from raw parts.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The "no entity" sentinel: index `u64::MAX`, which no store allocates,
    /// at the never-live generation 0.
    #[must_use]
    pub const fn null() -> Self {
        Self::new(u64::MAX, 0)
    }

    /// Returns true for the null sentinel.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.index == u64::MAX
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            e if e.is_null() => write!(f, "Entity(null)"),
            Entity { index, generation } => write!(f, "Entity({index}v{generation})"),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Entity(null)")
        } else {
            write!(f, "Entity({})", self.index)
        }
    }
}

//! Fixed-width bit vectors tracking component set membership.
//!
//! Each live entity slot carries one [`ComponentMask`]; bit `k` is set iff
//! the slot holds a component of the type assigned id `k`. Query matching
//! is pure bit algebra over these masks.

use std::fmt;

/// Maximum number of distinct component types a world can register.
///
/// Exceeding this is reported as [`crate::Error::ComponentCapacity`] at the
/// point the overflowing type is first used, never silent truncation.
pub const MAX_COMPONENT_TYPES: usize = 128;

const WORDS: usize = MAX_COMPONENT_TYPES / 64;

/// Fixed-width bit vector over component type ids.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComponentMask {
    bits: [u64; WORDS],
}

impl ComponentMask {
    /// Creates an empty mask.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Sets the bit for a component type id.
    ///
    /// # Panics
    ///
    /// Panics if `id >= MAX_COMPONENT_TYPES`. Ids handed out by the type
    /// registry are always in range; out-of-range ids indicate a bug.
    pub fn insert(&mut self, id: u32) {
        let id = id as usize;
        assert!(id < MAX_COMPONENT_TYPES, "component id out of range: {id}");
        self.bits[id / 64] |= 1 << (id % 64);
    }

    /// Clears the bit for a component type id.
    pub fn remove(&mut self, id: u32) {
        let id = id as usize;
        if id < MAX_COMPONENT_TYPES {
            self.bits[id / 64] &= !(1 << (id % 64));
        }
    }

    /// Returns true if the bit for a component type id is set.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        let id = id as usize;
        id < MAX_COMPONENT_TYPES && self.bits[id / 64] & (1 << (id % 64)) != 0
    }

    /// Returns true if no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Bitwise OR of two masks.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits) {
            *w |= o;
        }
        Self { bits }
    }

    /// Bitwise AND of two masks.
    #[must_use]
    pub fn intersection(self, other: Self) -> Self {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits) {
            *w &= o;
        }
        Self { bits }
    }

    /// Bits set in `self` but not in `other` (`self & !other`).
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits) {
            *w &= !o;
        }
        Self { bits }
    }

    /// Returns true if every bit set in `required` is also set in `self`
    /// (`self & required == required`).
    #[must_use]
    pub fn is_superset(&self, required: &Self) -> bool {
        self.bits
            .iter()
            .zip(required.bits)
            .all(|(w, r)| w & r == r)
    }

    /// Returns true if `self` and `other` share any set bit.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits.iter().zip(other.bits).any(|(w, o)| w & o != 0)
    }

    /// Iterates the set component type ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..MAX_COMPONENT_TYPES as u32).filter(|id| self.contains(*id))
    }
}

impl fmt::Debug for ComponentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<u32> for ComponentMask {
    fn from_iter<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        let mut mask = Self::empty();
        for id in ids {
            mask.insert(id);
        }
        mask
    }
}

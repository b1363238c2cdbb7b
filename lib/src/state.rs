//! Occupancy state flags shared by every ring flavour.

use bitflags::bitflags;

bitflags! {
    /// Occupancy of a ring at one instant.
    ///
    /// An empty set means the ring holds data and still has free slots.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RingState: u8 {
        /// No slot is occupied.
        const EMPTY = 1 << 0;
        /// Every slot is occupied.
        const FULL = 1 << 1;
    }
}

impl RingState {
    #[inline]
    pub const fn from_counts(occupied: usize, capacity: usize) -> Self {
        let mut bits = 0;
        if occupied == 0 {
            bits |= Self::EMPTY.bits();
        }
        if occupied >= capacity {
            bits |= Self::FULL.bits();
        }
        Self::from_bits_truncate(bits)
    }

    #[inline]
    pub const fn has_data(&self) -> bool {
        !self.contains(Self::EMPTY)
    }

    #[inline]
    pub const fn has_space(&self) -> bool {
        !self.contains(Self::FULL)
    }
}

//! Slot and cup identities
//!
//! A slot is one of the three fixed table positions. A cup keeps its identity
//! for the whole session while the slot it occupies changes with every swap.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::slot_coordinate;

/// Number of slots (and cups) on the table
pub const SLOT_COUNT: usize = 3;

/// One of the three fixed logical positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot(u8);

impl Slot {
    pub const LEFT: Slot = Slot(0);
    pub const CENTER: Slot = Slot(1);
    pub const RIGHT: Slot = Slot(2);
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::LEFT, Slot::CENTER, Slot::RIGHT];

    /// Returns `None` for anything outside 0..=2
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < SLOT_COUNT).then_some(Slot(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Fixed table coordinate of this slot
    #[inline]
    pub fn coordinate(self) -> Vec3 {
        slot_coordinate(self.index())
    }

    /// The two slots other than this one, in ascending order
    pub fn others(self) -> [Slot; 2] {
        let mut out = [Slot::LEFT; 2];
        let mut n = 0;
        for slot in Slot::ALL {
            if slot != self {
                out[n] = slot;
                n += 1;
            }
        }
        out
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "left"),
            1 => write!(f, "center"),
            _ => write!(f, "right"),
        }
    }
}

/// Stable identity of a cup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CupId(u8);

impl CupId {
    pub const ALL: [CupId; SLOT_COUNT] = [CupId(0), CupId(1), CupId(2)];

    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < SLOT_COUNT).then_some(CupId(id))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cup#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(Slot::new(2), Some(Slot::RIGHT));
        assert_eq!(Slot::new(3), None);
        assert_eq!(CupId::new(0).map(CupId::index), Some(0));
        assert_eq!(CupId::new(7), None);
    }

    #[test]
    fn test_others() {
        assert_eq!(Slot::CENTER.others(), [Slot::LEFT, Slot::RIGHT]);
        assert_eq!(Slot::LEFT.others(), [Slot::CENTER, Slot::RIGHT]);
        assert_eq!(Slot::RIGHT.others(), [Slot::LEFT, Slot::CENTER]);
    }

    #[test]
    fn test_slot_coordinate_order() {
        assert!(Slot::LEFT.coordinate().x < Slot::CENTER.coordinate().x);
        assert!(Slot::CENTER.coordinate().x < Slot::RIGHT.coordinate().x);
    }
}

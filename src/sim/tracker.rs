//! Position tracker
//!
//! Single source of truth for which cup sits in which slot and which slot
//! truly holds the ball. Everything else (animator, resolver, renderer)
//! reads through here.

use glam::Vec3;

use super::slot::{CupId, SLOT_COUNT, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTracker {
    /// Indexed by cup id
    cup_slots: [Slot; SLOT_COUNT],
    ball_slot: Slot,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    /// Cup `i` in slot `i`, ball in the center
    pub fn new() -> Self {
        Self {
            cup_slots: Slot::ALL,
            ball_slot: Slot::CENTER,
        }
    }

    /// Exchange the cups occupying `a` and `b`; the ball follows its cup.
    pub fn commit_swap(&mut self, a: Slot, b: Slot) {
        if a == b {
            return;
        }
        for slot in self.cup_slots.iter_mut() {
            if *slot == a {
                *slot = b;
            } else if *slot == b {
                *slot = a;
            }
        }
        if self.ball_slot == a {
            self.ball_slot = b;
        } else if self.ball_slot == b {
            self.ball_slot = a;
        }
    }

    pub fn cup_at_slot(&self, slot: Slot) -> CupId {
        CupId::ALL
            .into_iter()
            .find(|cup| self.cup_slots[cup.index()] == slot)
            .unwrap_or(CupId::ALL[slot.index()])
    }

    #[inline]
    pub fn slot_of_cup(&self, cup: CupId) -> Slot {
        self.cup_slots[cup.index()]
    }

    #[inline]
    pub fn ball_slot(&self) -> Slot {
        self.ball_slot
    }

    /// Cup currently covering the ball
    pub fn cup_over_ball(&self) -> CupId {
        self.cup_at_slot(self.ball_slot)
    }

    /// Move the ball without touching any cup
    pub fn place_ball(&mut self, slot: Slot) {
        self.ball_slot = slot;
    }

    /// Resting table coordinate of a cup (its slot's coordinate)
    pub fn resting_position(&self, cup: CupId) -> Vec3 {
        self.slot_of_cup(cup).coordinate()
    }

    /// True when every slot holds exactly one cup
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; SLOT_COUNT];
        for slot in self.cup_slots {
            if seen[slot.index()] {
                return false;
            }
            seen[slot.index()] = true;
        }
        true
    }
}

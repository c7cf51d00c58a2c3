//! Randomized swap sequencer
//!
//! Produces the ordered list of slot-pair swaps for one shuffle. Length is
//! uniform in the profile's bounds; each swap is a uniformly drawn pair of
//! distinct slots that is neither the previous swap nor its reverse.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyProfile;
use super::slot::{SLOT_COUNT, Slot};

/// Exchange of whatever cups occupy two distinct slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOp {
    a: Slot,
    b: Slot,
}

impl SwapOp {
    /// Returns `None` when both slots are the same
    pub fn new(a: Slot, b: Slot) -> Option<Self> {
        (a != b).then_some(Self { a, b })
    }

    #[inline]
    pub fn a(&self) -> Slot {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Slot {
        self.b
    }

    pub fn reversed(&self) -> Self {
        Self { a: self.b, b: self.a }
    }

    /// Same pair of slots in either order
    pub fn touches_same_pair(&self, other: &SwapOp) -> bool {
        *self == *other || *self == other.reversed()
    }

    pub fn involves(&self, slot: Slot) -> bool {
        self.a == slot || self.b == slot
    }
}

/// Queue of pending swaps, consumed front to back
pub type SwapQueue = VecDeque<SwapOp>;

/// Generate a shuffle for `profile`
pub fn generate_swaps<R: Rng + ?Sized>(profile: &DifficultyProfile, rng: &mut R) -> SwapQueue {
    let lo = profile.min_swaps.min(profile.max_swaps);
    let hi = profile.max_swaps.max(profile.min_swaps);
    let count = rng.random_range(lo..=hi) as usize;

    let mut queue = SwapQueue::with_capacity(count);
    let mut last: Option<SwapOp> = None;

    for _ in 0..count {
        let op = loop {
            let a = draw_slot(rng);
            let b = draw_slot(rng);
            let Some(op) = SwapOp::new(a, b) else {
                continue;
            };
            if last.is_some_and(|prev| prev.touches_same_pair(&op)) {
                continue;
            }
            break op;
        };
        last = Some(op);
        queue.push_back(op);
    }

    log::debug!("Generated {} swaps (bounds {}..={})", count, lo, hi);
    queue
}

fn draw_slot<R: Rng + ?Sized>(rng: &mut R) -> Slot {
    Slot::ALL[rng.random_range(0..SLOT_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::Difficulty;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_swap_op_rejects_same_slot() {
        assert!(SwapOp::new(Slot::LEFT, Slot::LEFT).is_none());
        let op = SwapOp::new(Slot::LEFT, Slot::RIGHT).unwrap();
        assert!(op.touches_same_pair(&op.reversed()));
        assert!(op.involves(Slot::RIGHT));
        assert!(!op.involves(Slot::CENTER));
    }

    #[test]
    fn test_length_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let profile = difficulty.profile();
            for _ in 0..50 {
                let queue = generate_swaps(&profile, &mut rng);
                assert!(queue.len() >= profile.min_swaps as usize);
                assert!(queue.len() <= profile.max_swaps as usize);
            }
        }
    }

    #[test]
    fn test_no_immediate_repeat_or_undo() {
        let mut rng = Pcg32::seed_from_u64(42);
        let profile = Difficulty::Hard.profile();
        for _ in 0..100 {
            let queue = generate_swaps(&profile, &mut rng);
            for pair in queue.iter().collect::<Vec<_>>().windows(2) {
                assert!(!pair[1].touches_same_pair(pair[0]));
            }
        }
    }

    #[test]
    fn test_fixed_length_profile() {
        let mut rng = Pcg32::seed_from_u64(1);
        let profile = DifficultyProfile {
            max_speed: 1.0,
            min_swaps: 4,
            max_swaps: 4,
            scam_chance: 0.0,
        };
        assert_eq!(generate_swaps(&profile, &mut rng).len(), 4);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let profile = Difficulty::Medium.profile();
        let a = generate_swaps(&profile, &mut Pcg32::seed_from_u64(99));
        let b = generate_swaps(&profile, &mut Pcg32::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

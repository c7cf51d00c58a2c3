//! Outcome resolver
//!
//! A pick wins when the picked cup sits on the ball's true slot. On a winning
//! pick with a non-zero `scam_chance`, one uniform draw decides whether the
//! house cheats: the ball is moved under one of the two other cups and the
//! pick is reported as a loss. A losing pick is never touched.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::slot::{CupId, Slot};
use super::tracker::PositionTracker;

/// Result of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub picked_cup: CupId,
    pub picked_slot: Slot,
    pub is_win: bool,
    /// Where the ball really is once resolution is done
    pub true_slot: Slot,
    /// The pick was correct but the ball was moved away
    pub was_overridden: bool,
}

impl Outcome {
    /// Plain miss (not a cheat)
    pub fn is_miss(&self) -> bool {
        !self.is_win && !self.was_overridden
    }
}

/// Resolve a pick of `picked`, relocating the ball through `tracker` on an override
pub fn resolve_pick<R: Rng + ?Sized>(
    picked: CupId,
    scam_chance: f64,
    tracker: &mut PositionTracker,
    rng: &mut R,
) -> Outcome {
    let picked_slot = tracker.slot_of_cup(picked);
    let baseline_win = picked_slot == tracker.ball_slot();

    let mut outcome = Outcome {
        picked_cup: picked,
        picked_slot,
        is_win: baseline_win,
        true_slot: tracker.ball_slot(),
        was_overridden: false,
    };

    if baseline_win && scam_chance > 0.0 {
        let draw: f64 = rng.random();
        if draw < scam_chance {
            let others = picked_slot.others();
            let relocated = others[rng.random_range(0..others.len())];
            tracker.place_ball(relocated);
            log::debug!("Override: ball moved {} -> {}", picked_slot, relocated);

            outcome.is_win = false;
            outcome.true_slot = relocated;
            outcome.was_overridden = true;
        }
    }

    outcome
}

//! Swap animator
//!
//! Consumes the swap queue one operation at a time. Each tick the active swap's
//! progress grows by `dt * speed`; at 1.0 the swap is committed to the
//! [`PositionTracker`] and the next queued swap starts on the following tick.
//!
//! Speed eases toward the profile's `max_speed`, halved for the first and last
//! `RAMP_OPS` operations, which gives the slow-fast-slow cadence of a real
//! hustler's routine.

use std::f32::consts::PI;

use glam::Vec3;

use super::arc::SwapArc;
use super::difficulty::DifficultyProfile;
use super::sequencer::{SwapOp, SwapQueue};
use super::slot::CupId;
use super::tracker::PositionTracker;
use crate::consts::{RAMP_OPS, RAMP_SPEED_FACTOR, SPEED_SMOOTHING};
use crate::damp;

/// The swap currently in flight
#[derive(Debug, Clone)]
pub struct ActiveSwap {
    pub op: SwapOp,
    /// Cup leaving slot `op.a()`
    pub cup_a: CupId,
    /// Cup leaving slot `op.b()`
    pub cup_b: CupId,
    pub arc: SwapArc,
    pub progress: f32,
}

impl ActiveSwap {
    /// Live position of `cup` if it takes part in this swap
    pub fn cup_position(&self, cup: CupId) -> Option<Vec3> {
        if cup == self.cup_a {
            Some(self.arc.position(self.op.a(), self.op.b(), self.progress))
        } else if cup == self.cup_b {
            Some(self.arc.position(self.op.b(), self.op.a(), self.progress))
        } else {
            None
        }
    }

    /// Half-sine envelope peaking mid-swap
    pub fn intensity(&self) -> f32 {
        (self.progress.min(1.0) * PI).sin()
    }
}

/// What happened during one animator step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatorStep {
    /// Smoothed shuffle speed after this step
    pub speed: f32,
    /// Audio intensity signal in [0, 1]
    pub intensity: f32,
    /// Swap committed during this step, if any
    pub committed: Option<SwapOp>,
}

#[derive(Debug, Clone, Default)]
pub struct SwapAnimator {
    queue: SwapQueue,
    active: Option<ActiveSwap>,
    speed: f32,
    /// Operations started so far in this shuffle (including the active one)
    started: usize,
}

impl SwapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending work with a fresh shuffle
    pub fn load(&mut self, queue: SwapQueue) {
        self.queue = queue;
        self.active = None;
        self.speed = 0.0;
        self.started = 0;
    }

    /// Drop queued and in-flight swaps
    pub fn clear(&mut self) {
        self.load(SwapQueue::new());
    }

    /// Nothing queued and nothing animating
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }

    pub fn active(&self) -> Option<&ActiveSwap> {
        self.active.as_ref()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed the animator is easing toward for the active operation
    pub fn target_speed(&self, profile: &DifficultyProfile) -> f32 {
        let in_ramp_up = self.started <= RAMP_OPS;
        let in_ramp_down = self.queue.len() < RAMP_OPS;
        if in_ramp_up || in_ramp_down {
            profile.max_speed * RAMP_SPEED_FACTOR
        } else {
            profile.max_speed
        }
    }

    /// Advance by `dt` seconds, committing into `tracker` when a swap lands
    pub fn advance(
        &mut self,
        dt: f32,
        profile: &DifficultyProfile,
        tracker: &mut PositionTracker,
    ) -> AnimatorStep {
        if self.active.is_none() {
            if let Some(op) = self.queue.pop_front() {
                self.started += 1;
                self.active = Some(ActiveSwap {
                    op,
                    cup_a: tracker.cup_at_slot(op.a()),
                    cup_b: tracker.cup_at_slot(op.b()),
                    arc: SwapArc::new(op.a(), op.b()),
                    progress: 0.0,
                });
            }
        }

        if self.active.is_none() {
            return AnimatorStep::default();
        }

        let target = self.target_speed(profile);
        self.speed = damp(self.speed, target, SPEED_SMOOTHING, dt);

        let mut step = AnimatorStep {
            speed: self.speed,
            ..Default::default()
        };

        if let Some(active) = self.active.as_mut() {
            active.progress += dt * self.speed;
            step.intensity = active.intensity();

            if active.progress >= 1.0 {
                let op = active.op;
                tracker.commit_swap(op.a(), op.b());
                log::debug!(
                    "Swap {} <-> {} committed, ball now {}",
                    op.a(),
                    op.b(),
                    tracker.ball_slot()
                );
                step.committed = Some(op);
                self.active = None;
            }
        }

        step
    }

    /// Live position of a cup: on its arc if swapping, otherwise at rest
    pub fn cup_position(&self, cup: CupId, tracker: &PositionTracker) -> Vec3 {
        self.active
            .as_ref()
            .and_then(|active| active.cup_position(cup))
            .unwrap_or_else(|| tracker.resting_position(cup))
    }
}

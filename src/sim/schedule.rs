//! Deferred phase actions
//!
//! Timed steps of a round (lowering the reveal cup, showing the true cup,
//! returning to idle) are queued here instead of being run as callbacks.
//! Each entry remembers the phase and round it was scheduled in; when it
//! comes due in a different phase or round it is dropped, so a stale timer
//! can never act on a newer round.

use super::state::RoundState;

/// Step to run once a delay expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Put the reveal cup back down
    LowerRevealCup,
    /// Reveal is over, start shuffling
    BeginShuffle,
    /// Lift the cup truly covering the ball after a loss
    RevealTrueCup,
    /// Round over
    ReturnToIdle,
}

#[derive(Debug, Clone)]
struct Timer {
    guard: RoundState,
    round: u64,
    remaining: f32,
    action: TimerAction,
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    timers: Vec<Timer>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay` seconds if still in `guard` during `round`
    pub fn schedule(&mut self, guard: RoundState, round: u64, delay: f32, action: TimerAction) {
        self.timers.push(Timer {
            guard,
            round,
            remaining: delay,
            action,
        });
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Count down by `dt`; return due actions whose guard still holds, in
    /// the order they were scheduled. Stale entries are discarded.
    pub fn advance(&mut self, dt: f32, phase: RoundState, round: u64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.timers.retain_mut(|timer| {
            if timer.guard != phase || timer.round != round {
                log::debug!(
                    "Dropping stale {:?} (scheduled in {:?} round {}, now {:?} round {})",
                    timer.action,
                    timer.guard,
                    timer.round,
                    phase,
                    round
                );
                return false;
            }
            timer.remaining -= dt;
            if timer.remaining <= 0.0 {
                due.push(timer.action);
                false
            } else {
                true
            }
        });
        due
    }
}

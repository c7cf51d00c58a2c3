//! Fixed timestep simulation tick
//!
//! Applies one tick's worth of player input, then advances the round.

use super::difficulty::Difficulty;
use super::slot::CupId;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Start a round (ignored unless Idle)
    pub start: bool,
    /// Pick a cup (ignored unless Picking)
    pub pick: Option<CupId>,
    /// Cup under the pointer, if any
    pub hover: Option<CupId>,
    /// Switch difficulty
    pub difficulty: Option<Difficulty>,
}

impl TickInput {
    /// True when the input carries a one-shot command
    pub fn has_command(&self) -> bool {
        self.start || self.pick.is_some() || self.difficulty.is_some()
    }

    /// Clear one-shot commands, keeping continuous state (hover)
    pub fn clear_commands(&mut self) {
        self.start = false;
        self.pick = None;
        self.difficulty = None;
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if let Some(difficulty) = input.difficulty {
        state.set_difficulty(difficulty);
    }
    if input.start {
        state.start();
    }
    if let Some(cup) = input.pick {
        state.pick(cup);
    }
    state.set_hovered(input.hover);

    state.advance(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::RoundState;

    fn run(state: &mut GameState, phase: RoundState) {
        let idle = TickInput::default();
        for _ in 0..200_000 {
            if state.phase() == phase {
                return;
            }
            tick(state, &idle, SIM_DT);
        }
        panic!("never reached {:?}", phase);
    }

    #[test]
    fn test_tick_idle_to_reveal() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase(), RoundState::Idle);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase(), RoundState::Idle);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase(), RoundState::Reveal);
    }

    #[test]
    fn test_tick_pick() {
        let mut state = GameState::new(777);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
            SIM_DT,
        );
        run(&mut state, RoundState::Picking);

        let cup = state.tracker().cup_over_ball();
        tick(
            &mut state,
            &TickInput {
                pick: Some(cup),
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase(), RoundState::Result);
        assert!(state.last_outcome.is_some_and(|o| o.is_win));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state1, &start, SIM_DT);
        tick(&mut state2, &start, SIM_DT);
        for _ in 0..2_000 {
            tick(&mut state1, &TickInput::default(), SIM_DT);
            tick(&mut state2, &TickInput::default(), SIM_DT);
        }

        assert_eq!(state1.phase(), state2.phase());
        assert_eq!(state1.tracker(), state2.tracker());
        assert_eq!(state1.drain_events(), state2.drain_events());
        assert!((state1.cups[0].position - state2.cups[0].position).length() < 1e-6);
    }

    #[test]
    fn test_clear_commands_keeps_hover() {
        let mut input = TickInput {
            start: true,
            pick: CupId::new(1),
            hover: CupId::new(2),
            difficulty: Some(Difficulty::Medium),
        };
        assert!(input.has_command());
        input.clear_commands();
        assert!(!input.has_command());
        assert_eq!(input.hover, CupId::new(2));
    }
}

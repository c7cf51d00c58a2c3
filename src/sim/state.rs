//! Round state and the phase machine
//!
//! `GameState` owns every piece of mutable round data. The three entry points
//! (`start`, `pick`, `set_difficulty`) and the per-tick `advance` are the only
//! ways it changes; invalid calls are silent no-ops.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animator::SwapAnimator;
use super::difficulty::{Difficulty, DifficultyProfile};
use super::resolver::{Outcome, resolve_pick};
use super::schedule::{Schedule, TimerAction};
use super::sequencer::{SwapOp, generate_swaps};
use super::slot::{CupId, SLOT_COUNT, Slot};
use super::tracker::PositionTracker;
use crate::commentary::{Emotion, SHUFFLING_LINE, pick_line};
use crate::consts::*;
use crate::damp;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoundState {
    /// Waiting for a start signal
    #[default]
    Idle,
    /// Ball shown under the center cup
    Reveal,
    /// Cups moving, input ignored
    Shuffling,
    /// Waiting for exactly one pick
    Picking,
    /// Showing what was under the cups
    Result,
}

/// Fire-and-forget sound cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Click,
    Lift,
    Win,
    Lose,
    ShuffleStart,
    ShuffleStop,
}

pub const IDLE_TEXT: &str = "Ready to play?";
pub const REVEAL_TEXT: &str = "Watch closely...";
pub const SHUFFLING_TEXT: &str = "Shuffling...";
pub const PICKING_TEXT: &str = "Where is the ball?";
pub const WIN_TEXT: &str = "You found it!";
pub const OVERRIDE_TEXT: &str = "Too slow!";
pub const MISS_TEXT: &str = "Missed it!";

/// Something observable that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged(RoundState),
    Instruction(&'static str),
    /// Commentary line; spoken when an emotion is attached
    Commentary {
        line: &'static str,
        emotion: Option<Emotion>,
    },
    CommentaryCleared,
    Cue(Cue),
    ShuffleIntensity { speed: f32, intensity: f32 },
    SwapCommitted(SwapOp),
    RoundResolved(Outcome),
    DifficultyChanged(Difficulty),
    /// Consecutive-win tracking must restart
    StreakReset,
}

/// A cup's presentation state
#[derive(Debug, Clone)]
pub struct Cup {
    pub id: CupId,
    /// Live table coordinate (on its arc while swapping)
    pub position: Vec3,
    pub lifted: bool,
    /// Smoothed lift height
    pub lift: f32,
}

impl Cup {
    fn new(id: CupId) -> Self {
        Self {
            id,
            position: Slot::ALL[id.index()].coordinate(),
            lifted: false,
            lift: 0.0,
        }
    }
}

/// The ball's presentation state. Its logical slot lives in the tracker.
#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec3,
    pub visible: bool,
}

/// Complete round engine state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    phase: RoundState,
    /// Incremented on every accepted start
    round: u64,
    difficulty: Difficulty,
    /// Profile used by the next round
    profile: DifficultyProfile,
    /// Profile snapshotted for the round in progress
    round_profile: DifficultyProfile,
    tracker: PositionTracker,
    animator: SwapAnimator,
    schedule: Schedule,
    pub cups: [Cup; SLOT_COUNT],
    pub ball: Ball,
    pub hovered: Option<CupId>,
    pub instruction: &'static str,
    pub commentary: Option<&'static str>,
    pub last_outcome: Option<Outcome>,
    /// Simulated seconds since creation
    pub elapsed: f32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let difficulty = Difficulty::default();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundState::Idle,
            round: 0,
            difficulty,
            profile: difficulty.profile(),
            round_profile: difficulty.profile(),
            tracker: PositionTracker::new(),
            animator: SwapAnimator::new(),
            schedule: Schedule::new(),
            cups: CupId::ALL.map(Cup::new),
            ball: Ball {
                position: Vec3::new(0.0, BALL_RADIUS, 0.0),
                visible: true,
            },
            hovered: None,
            instruction: IDLE_TEXT,
            commentary: None,
            last_outcome: None,
            elapsed: 0.0,
            events: Vec::new(),
        };
        state.sync_visuals(0.0);
        state
    }

    pub fn with_difficulty(seed: u64, difficulty: Difficulty) -> Self {
        let mut state = Self::new(seed);
        state.difficulty = difficulty;
        state.profile = difficulty.profile();
        state.round_profile = state.profile;
        state
    }

    #[inline]
    pub fn phase(&self) -> RoundState {
        self.phase
    }

    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Profile the next round will use
    #[inline]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    #[inline]
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    #[inline]
    pub fn animator(&self) -> &SwapAnimator {
        &self.animator
    }

    pub fn pending_timers(&self) -> usize {
        self.schedule.len()
    }

    /// Take all events queued since the last drain.
    ///
    /// Consecutive shuffle level updates collapse into the latest one and at
    /// most `MAX_PENDING_EVENTS` are held; the oldest go first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cup ids currently flagged as lifted
    pub fn lifted_cups(&self) -> Vec<CupId> {
        self.cups.iter().filter(|c| c.lifted).map(|c| c.id).collect()
    }

    // === Entry points ===

    /// Begin a round. Only valid from Idle.
    pub fn start(&mut self) -> bool {
        if self.phase != RoundState::Idle {
            return false;
        }

        self.round += 1;
        self.round_profile = self.profile;
        self.animator.clear();
        self.schedule.clear();
        self.last_outcome = None;
        for cup in &mut self.cups {
            cup.lifted = false;
        }

        log::info!(
            "Round {} starting ({}, seed {})",
            self.round,
            self.difficulty.as_str(),
            self.seed
        );
        self.emit(GameEvent::Cue(Cue::Click));
        self.commentary = None;
        self.emit(GameEvent::CommentaryCleared);
        self.enter_reveal();
        true
    }

    /// Pick a cup. Only valid while Picking; anything else is ignored.
    pub fn pick(&mut self, cup: CupId) -> Option<Outcome> {
        if self.phase != RoundState::Picking {
            return None;
        }

        let outcome = resolve_pick(
            cup,
            self.round_profile.scam_chance,
            &mut self.tracker,
            &mut self.rng,
        );
        self.last_outcome = Some(outcome);
        log::info!(
            "Round {}: picked {} at {}, ball at {} -> {}",
            self.round,
            cup,
            outcome.picked_slot,
            outcome.true_slot,
            if outcome.is_win {
                "win"
            } else if outcome.was_overridden {
                "overridden"
            } else {
                "miss"
            }
        );

        self.set_phase(RoundState::Result);
        self.cups[cup.index()].lifted = true;
        self.emit(GameEvent::Cue(Cue::Lift));
        self.emit(GameEvent::RoundResolved(outcome));

        if outcome.is_win {
            self.emit(GameEvent::Cue(Cue::Win));
            self.say(Emotion::Win);
            self.set_instruction(WIN_TEXT);
            self.schedule_in_phase(RESULT_RETURN_SECS, TimerAction::ReturnToIdle);
        } else {
            self.emit(GameEvent::Cue(Cue::Lose));
            self.say(Emotion::Lose);
            self.set_instruction(if outcome.was_overridden {
                OVERRIDE_TEXT
            } else {
                MISS_TEXT
            });
            self.schedule_in_phase(RESULT_REVEAL_SECS, TimerAction::RevealTrueCup);
        }

        Some(outcome)
    }

    /// Select a difficulty preset. Always legal; applies from the next round
    /// and resets the streak immediately.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.profile();
        log::info!("Difficulty set to {}", difficulty.as_str());
        self.emit(GameEvent::DifficultyChanged(difficulty));
        self.emit(GameEvent::StreakReset);
    }

    /// Install a custom profile for the next round
    pub fn set_profile(&mut self, profile: DifficultyProfile) {
        let sanitized = profile.sanitized();
        if sanitized != profile {
            log::warn!("Profile {:?} adjusted to {:?}", profile, sanitized);
        }
        self.profile = sanitized;
    }

    pub fn set_hovered(&mut self, cup: Option<CupId>) {
        self.hovered = cup;
    }

    /// Advance the round by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;

        for action in self.schedule.advance(dt, self.phase, self.round) {
            self.run_action(action);
        }

        if self.phase == RoundState::Shuffling {
            self.step_shuffle(dt);
        }

        self.sync_visuals(dt);
    }

    // === Phase logic ===

    fn enter_reveal(&mut self) {
        self.set_phase(RoundState::Reveal);
        self.set_instruction(REVEAL_TEXT);
        self.say(Emotion::Intro);

        self.tracker.place_ball(START_SLOT);
        for cup in &mut self.cups {
            cup.position = self.tracker.resting_position(cup.id);
        }

        let cup = self.tracker.cup_over_ball();
        self.cups[cup.index()].lifted = true;
        self.emit(GameEvent::Cue(Cue::Lift));
        self.schedule_in_phase(REVEAL_LIFT_SECS, TimerAction::LowerRevealCup);
    }

    fn enter_shuffling(&mut self) {
        self.set_phase(RoundState::Shuffling);
        self.set_instruction(SHUFFLING_TEXT);
        self.commentary = Some(SHUFFLING_LINE);
        self.emit(GameEvent::Commentary {
            line: SHUFFLING_LINE,
            emotion: None,
        });

        let queue = generate_swaps(&self.round_profile, &mut self.rng);
        log::info!("Round {}: shuffling {} swaps", self.round, queue.len());
        self.animator.load(queue);
        self.emit(GameEvent::Cue(Cue::ShuffleStart));
    }

    fn step_shuffle(&mut self, dt: f32) {
        let step = self.animator.advance(dt, &self.round_profile, &mut self.tracker);
        self.emit(GameEvent::ShuffleIntensity {
            speed: step.speed,
            intensity: step.intensity,
        });
        if let Some(op) = step.committed {
            self.emit(GameEvent::SwapCommitted(op));
        }

        if self.animator.is_idle() {
            self.emit(GameEvent::Cue(Cue::ShuffleStop));
            self.set_phase(RoundState::Picking);
            self.set_instruction(PICKING_TEXT);
        }
    }

    fn run_action(&mut self, action: TimerAction) {
        match action {
            TimerAction::LowerRevealCup => {
                for cup in &mut self.cups {
                    cup.lifted = false;
                }
                self.schedule_in_phase(REVEAL_LOWER_SECS, TimerAction::BeginShuffle);
            }
            TimerAction::BeginShuffle => self.enter_shuffling(),
            TimerAction::RevealTrueCup => {
                let true_cup = self.tracker.cup_over_ball();
                let picked = self.last_outcome.map(|o| o.picked_cup);
                if picked != Some(true_cup) {
                    self.cups[true_cup.index()].lifted = true;
                    self.emit(GameEvent::Cue(Cue::Lift));
                }
                self.schedule_in_phase(RESULT_RETURN_SECS, TimerAction::ReturnToIdle);
            }
            TimerAction::ReturnToIdle => {
                self.set_phase(RoundState::Idle);
                self.set_instruction(IDLE_TEXT);
            }
        }
    }

    // === Helpers ===

    fn schedule_in_phase(&mut self, delay: f32, action: TimerAction) {
        self.schedule.schedule(self.phase, self.round, delay, action);
    }

    fn set_phase(&mut self, phase: RoundState) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
        self.emit(GameEvent::PhaseChanged(phase));
    }

    fn set_instruction(&mut self, text: &'static str) {
        self.instruction = text;
        self.emit(GameEvent::Instruction(text));
    }

    fn say(&mut self, emotion: Emotion) {
        let line = pick_line(emotion, &mut self.rng);
        self.commentary = Some(line);
        self.emit(GameEvent::Commentary {
            line,
            emotion: Some(emotion),
        });
    }

    fn emit(&mut self, event: GameEvent) {
        let replaces_last = matches!(event, GameEvent::ShuffleIntensity { .. })
            && matches!(self.events.last(), Some(GameEvent::ShuffleIntensity { .. }));
        if replaces_last {
            if let Some(last) = self.events.last_mut() {
                *last = event;
            }
            return;
        }

        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
            log::trace!("Event queue full, dropped {} oldest", excess);
        }
        self.events.push(event);
    }

    /// Derive cup and ball presentation from the logical state
    fn sync_visuals(&mut self, dt: f32) {
        let picking = self.phase == RoundState::Picking;
        for cup in &mut self.cups {
            cup.position = self.animator.cup_position(cup.id, &self.tracker);
            let target = if cup.lifted {
                REVEAL_HEIGHT
            } else if picking && self.hovered == Some(cup.id) {
                HOVER_HEIGHT
            } else {
                0.0
            };
            cup.lift = damp(cup.lift, target, LIFT_SMOOTHING, dt);
        }

        let covering = self.tracker.cup_over_ball();
        let over = self.cups[covering.index()].position;
        self.ball.position = Vec3::new(over.x, BALL_RADIUS, over.z);
        self.ball.visible = self.phase != RoundState::Shuffling;
    }
}

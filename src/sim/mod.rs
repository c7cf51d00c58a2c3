//! Deterministic round engine
//!
//! All game logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod animator;
pub mod arc;
pub mod difficulty;
pub mod resolver;
pub mod schedule;
pub mod sequencer;
pub mod slot;
pub mod state;
pub mod tick;
pub mod tracker;

pub use animator::{ActiveSwap, AnimatorStep, SwapAnimator};
pub use arc::SwapArc;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use resolver::{Outcome, resolve_pick};
pub use schedule::{Schedule, TimerAction};
pub use sequencer::{SwapOp, SwapQueue, generate_swaps};
pub use slot::{CupId, SLOT_COUNT, Slot};
pub use state::{Ball, Cup, Cue, GameEvent, GameState, RoundState};
pub use tick::{TickInput, tick};
pub use tracker::PositionTracker;

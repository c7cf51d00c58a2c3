//! Renderer collaborator
//!
//! The core never draws; it hands a [`Frame`] to whatever implements
//! [`Renderer`] once per frame.

pub mod frame;

pub use frame::{BallView, CupView, Frame};

use crate::error::CollaboratorError;
use crate::sim::RoundState;

pub trait Renderer {
    fn draw(&mut self, frame: &Frame) -> Result<(), CollaboratorError>;
}

/// Draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Logs phase and instruction changes instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<RoundState>,
    last_instruction: &'static str,
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) -> Result<(), CollaboratorError> {
        self.frames += 1;
        if self.last_phase != Some(frame.phase) {
            let cups: Vec<String> = frame
                .cups
                .iter()
                .map(|c| format!("{}@{}{}", c.id, c.slot, if c.lifted { "^" } else { "" }))
                .collect();
            log::info!("[{:?}] {}", frame.phase, cups.join(" "));
            self.last_phase = Some(frame.phase);
        }
        if self.last_instruction != frame.instruction {
            log::info!("> {}", frame.instruction);
            self.last_instruction = frame.instruction;
        }
        Ok(())
    }
}

//! Per-tick frame snapshot handed to the renderer
//!
//! Plain data only: the renderer maps cup ids to its own drawables.

use glam::Vec3;

use crate::sim::{CupId, GameState, RoundState, SLOT_COUNT, Slot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CupView {
    pub id: CupId,
    /// Logical slot (the cup may be mid-arc)
    pub slot: Slot,
    pub position: Vec3,
    /// Smoothed lift height above the table
    pub lift: f32,
    pub lifted: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub position: Vec3,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: RoundState,
    pub instruction: &'static str,
    pub commentary: Option<&'static str>,
    pub cups: [CupView; SLOT_COUNT],
    pub ball: BallView,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let tracker = state.tracker();
        let cups = state.cups.each_ref().map(|cup| CupView {
            id: cup.id,
            slot: tracker.slot_of_cup(cup.id),
            position: cup.position,
            lift: cup.lift,
            lifted: cup.lifted,
            hovered: state.hovered == Some(cup.id),
        });
        Self {
            phase: state.phase(),
            instruction: state.instruction,
            commentary: state.commentary,
            cups,
            ball: BallView {
                position: state.ball.position,
                visible: state.ball.visible,
            },
        }
    }

    /// Cup view for `id`
    pub fn cup(&self, id: CupId) -> &CupView {
        &self.cups[id.index()]
    }
}

//! Shell Hustle - a three-cup shell game
//!
//! Core modules:
//! - `sim`: Deterministic round engine (swap sequencing, animation, ball tracking, outcomes)
//! - `renderer`: Renderer collaborator boundary (per-tick frame snapshot)
//! - `audio`: Audio/commentary collaborator boundary
//! - `session`: Fixed-timestep driver gluing the sim to its collaborators
//! - `settings`: JSON configuration

pub mod audio;
pub mod commentary;
pub mod error;
pub mod renderer;
pub mod score;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{CollaboratorError, SettingsError};
pub use score::Scoreboard;
pub use session::Session;
pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use crate::sim::Slot;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the session will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// X coordinates of the three slots (left, center, right)
    pub const SLOT_X: [f32; 3] = [-2.2, 0.0, 2.2];
    /// Table surface height
    pub const TABLE_Y: f32 = 0.0;

    /// Ball always starts a round under the center slot
    pub const START_SLOT: Slot = Slot::CENTER;
    pub const BALL_RADIUS: f32 = 0.25;

    /// Depth radius of a swap arc relative to half the slot distance
    pub const ARC_BULGE: f32 = 1.3;
    /// Number of operations at each end of a shuffle that run slowed down
    pub const RAMP_OPS: usize = 3;
    /// Speed multiplier applied inside the ramp windows
    pub const RAMP_SPEED_FACTOR: f32 = 0.5;
    /// Shuffle speed smoothing rate (1/s)
    pub const SPEED_SMOOTHING: f32 = 2.0;
    /// Bounds applied to a profile's peak swap speed (swaps per second)
    pub const MIN_SWAP_SPEED: f32 = 0.25;
    pub const MAX_SWAP_SPEED: f32 = 30.0;

    /// Events kept for a caller that never drains them
    pub const MAX_PENDING_EVENTS: usize = 1024;

    /// Cup lift heights
    pub const REVEAL_HEIGHT: f32 = 1.5;
    pub const HOVER_HEIGHT: f32 = 0.5;
    /// Cup lift smoothing rate (1/s)
    pub const LIFT_SMOOTHING: f32 = 10.0;

    /// Phase delays (seconds)
    pub const REVEAL_LIFT_SECS: f32 = 2.0;
    pub const REVEAL_LOWER_SECS: f32 = 0.5;
    pub const RESULT_REVEAL_SECS: f32 = 1.5;
    pub const RESULT_RETURN_SECS: f32 = 4.0;
}

/// Resting table coordinate for a slot index
#[inline]
pub fn slot_coordinate(index: usize) -> Vec3 {
    Vec3::new(consts::SLOT_X[index], consts::TABLE_Y, 0.0)
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `rate` is in 1/s; after `1 / rate` seconds about 63% of the gap is closed.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    target + (current - target) * (-rate * dt).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damp_converges() {
        let mut v = 0.0;
        for _ in 0..600 {
            v = damp(v, 4.0, 2.0, consts::SIM_DT);
        }
        assert!((v - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_damp_zero_dt_is_identity() {
        assert_eq!(damp(1.5, 3.0, 10.0, 0.0), 1.5);
    }

    #[test]
    fn test_slot_coordinates() {
        assert_eq!(slot_coordinate(0).x, -2.2);
        assert_eq!(slot_coordinate(1), Vec3::ZERO);
        assert_eq!(slot_coordinate(2).z, 0.0);
    }
}

//! Swap arc geometry
//!
//! Two swapping cups travel half of a shared ellipse in the table plane:
//! - X radius: half the distance between the two slots
//! - Z radius: X radius scaled by `ARC_BULGE`
//! - A cup travelling left-to-right bulges toward +Z, right-to-left toward -Z,
//!   so the pair always passes on opposite sides of the slot line.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::consts::{ARC_BULGE, TABLE_Y};

/// The shared path of one swap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapArc {
    /// Midpoint X between the two slots
    pub mid_x: f32,
    /// Half the slot distance (X semi-axis)
    pub radius: f32,
    /// Depth semi-axis (radius * bulge)
    pub depth: f32,
}

impl SwapArc {
    pub fn new(a: Slot, b: Slot) -> Self {
        Self::with_bulge(a, b, ARC_BULGE)
    }

    pub fn with_bulge(a: Slot, b: Slot, bulge: f32) -> Self {
        let xa = a.coordinate().x;
        let xb = b.coordinate().x;
        let radius = (xa - xb).abs() / 2.0;
        Self {
            mid_x: (xa + xb) / 2.0,
            radius,
            depth: radius * bulge,
        }
    }

    /// Position of a cup leaving `from` for `to` at `progress` in [0, 1]
    pub fn position(&self, from: Slot, to: Slot, progress: f32) -> Vec3 {
        let theta = progress.clamp(0.0, 1.0) * PI;
        if from < to {
            // Rightward: sweep angle PI -> 0 on the +Z side
            let angle = PI - theta;
            Vec3::new(
                self.mid_x + self.radius * angle.cos(),
                TABLE_Y,
                self.depth * angle.sin(),
            )
        } else {
            // Leftward: sweep angle 0 -> PI on the -Z side
            Vec3::new(
                self.mid_x + self.radius * theta.cos(),
                TABLE_Y,
                -self.depth * theta.sin(),
            )
        }
    }

    /// Sample a cup's path (for debugging overlays)
    pub fn sample(&self, from: Slot, to: Slot, num_points: usize) -> Vec<Vec3> {
        (0..num_points)
            .map(|i| {
                let t = i as f32 / (num_points - 1).max(1) as f32;
                self.position(from, to, t)
            })
            .collect()
    }
}

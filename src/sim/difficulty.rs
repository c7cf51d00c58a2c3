//! Difficulty presets

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SWAP_SPEED, MIN_SWAP_SPEED};

/// Tuning knobs for one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Peak swap speed (swaps per second)
    pub max_speed: f32,
    /// Inclusive bounds on the number of swaps per round
    pub min_swaps: u32,
    pub max_swaps: u32,
    /// Probability that a correct pick is overridden to a loss
    pub scam_chance: f64,
}

impl DifficultyProfile {
    /// Copy with every knob forced into a playable range: a finite positive
    /// speed, ordered swap bounds and a probability in `[0, 1]`.
    pub fn sanitized(self) -> Self {
        let max_speed = if self.max_speed.is_finite() {
            self.max_speed.clamp(MIN_SWAP_SPEED, MAX_SWAP_SPEED)
        } else if self.max_speed > 0.0 {
            MAX_SWAP_SPEED
        } else {
            MIN_SWAP_SPEED
        };
        let scam_chance = if self.scam_chance.is_nan() {
            0.0
        } else {
            self.scam_chance.clamp(0.0, 1.0)
        };
        Self {
            max_speed,
            min_swaps: self.min_swaps.min(self.max_swaps),
            max_swaps: self.max_swaps.max(self.min_swaps),
            scam_chance,
        }
    }
}

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Easy -> Medium -> Hard -> Easy
    pub fn next(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                max_speed: 2.5,
                min_swaps: 5,
                max_swaps: 8,
                scam_chance: 0.0,
            },
            Difficulty::Medium => DifficultyProfile {
                max_speed: 4.0,
                min_swaps: 10,
                max_swaps: 15,
                scam_chance: 0.05,
            },
            Difficulty::Hard => DifficultyProfile {
                max_speed: 6.0,
                min_swaps: 18,
                max_swaps: 25,
                scam_chance: 0.15,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let d = Difficulty::default();
        assert_eq!(d, Difficulty::Easy);
        assert_eq!(d.next().next().next(), Difficulty::Easy);
    }

    #[test]
    fn test_presets_are_ordered() {
        let [e, m, h] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard].map(|d| d.profile());
        assert!(e.max_speed < m.max_speed && m.max_speed < h.max_speed);
        assert!(e.max_swaps < m.min_swaps && m.max_swaps < h.min_swaps);
        assert_eq!(e.scam_chance, 0.0);
        assert_eq!(h.scam_chance, 0.15);
    }

    #[test]
    fn test_sanitized_keeps_presets() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.profile().sanitized(), d.profile());
        }
    }

    #[test]
    fn test_sanitized_repairs_unplayable_profiles() {
        let base = Difficulty::Easy.profile();
        for speed in [0.0, -3.0, f32::NAN, f32::NEG_INFINITY] {
            let p = DifficultyProfile { max_speed: speed, ..base }.sanitized();
            assert_eq!(p.max_speed, MIN_SWAP_SPEED);
        }
        let p = DifficultyProfile { max_speed: f32::INFINITY, ..base }.sanitized();
        assert_eq!(p.max_speed, MAX_SWAP_SPEED);

        let p = DifficultyProfile {
            min_swaps: 9,
            max_swaps: 4,
            scam_chance: f64::NAN,
            ..base
        }
        .sanitized();
        assert_eq!((p.min_swaps, p.max_swaps), (4, 9));
        assert_eq!(p.scam_chance, 0.0);
        assert_eq!(DifficultyProfile { scam_chance: 2.0, ..base }.sanitized().scam_chance, 1.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("insane"), None);
    }
}

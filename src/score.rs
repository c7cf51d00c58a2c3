//! Session scoreboard
//!
//! Win/loss tallies and the consecutive-win streak. In-memory only.

use serde::{Deserialize, Serialize};

use crate::sim::Outcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    /// Losses where the pick was right but the ball was moved
    pub overridden: u32,
    pub streak: u32,
    pub best_streak: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved round
    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_win {
            self.wins += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.losses += 1;
            self.streak = 0;
            if outcome.was_overridden {
                self.overridden += 1;
            }
        }
    }

    /// Difficulty changed: the streak no longer means anything
    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of rounds won (0 when nothing has been played)
    pub fn win_rate(&self) -> f64 {
        match self.rounds() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CupId, Slot};

    fn outcome(is_win: bool, was_overridden: bool) -> Outcome {
        Outcome {
            picked_cup: CupId::ALL[0],
            picked_slot: Slot::LEFT,
            is_win,
            true_slot: if is_win { Slot::LEFT } else { Slot::RIGHT },
            was_overridden,
        }
    }

    #[test]
    fn test_streaks() {
        let mut board = Scoreboard::new();
        board.record(&outcome(true, false));
        board.record(&outcome(true, false));
        assert_eq!(board.streak, 2);
        board.record(&outcome(false, true));
        assert_eq!(board.streak, 0);
        assert_eq!(board.best_streak, 2);
        assert_eq!(board.overridden, 1);
        assert_eq!(board.rounds(), 3);
    }

    #[test]
    fn test_reset_streak_keeps_tallies() {
        let mut board = Scoreboard::new();
        board.record(&outcome(true, false));
        board.reset_streak();
        assert_eq!(board.streak, 0);
        assert_eq!(board.wins, 1);
        assert_eq!(board.best_streak, 1);
    }

    #[test]
    fn test_win_rate() {
        let mut board = Scoreboard::new();
        assert_eq!(board.win_rate(), 0.0);
        board.record(&outcome(true, false));
        board.record(&outcome(false, false));
        assert!((board.win_rate() - 0.5).abs() < 1e-9);
    }
}

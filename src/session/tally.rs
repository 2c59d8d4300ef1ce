//! Running score across the games of a match.

use serde::{Deserialize, Serialize};

use crate::core::Mark;
use crate::rules::Outcome;

/// Wins and draws counted across a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub human: u32,
    pub automated: u32,
    pub draws: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome, human: Mark) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Draw => self.draws += 1,
            Outcome::Win { mark, .. } if *mark == human => self.human += 1,
            Outcome::Win { .. } => self.automated += 1,
        }
    }

    /// Number of finished games.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.human + self.automated + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "you {} / draws {} / ai {}", self.human, self.draws, self.automated)
    }
}

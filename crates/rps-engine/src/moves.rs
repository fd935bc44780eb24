//! Move and outcome definitions

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;

/// A move in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveChoice {
    Rock,
    Paper,
    Scissors,
}

impl MoveChoice {
    pub const ALL: [MoveChoice; 3] = [MoveChoice::Rock, MoveChoice::Paper, MoveChoice::Scissors];

    /// Dense index in `0..3`, in `ALL` order
    pub fn index(self) -> usize {
        match self {
            MoveChoice::Rock => 0,
            MoveChoice::Paper => 1,
            MoveChoice::Scissors => 2,
        }
    }

    /// The move this one defeats
    pub fn beats(self) -> MoveChoice {
        match self {
            MoveChoice::Rock => MoveChoice::Scissors,
            MoveChoice::Paper => MoveChoice::Rock,
            MoveChoice::Scissors => MoveChoice::Paper,
        }
    }

    /// The move that defeats this one
    pub fn counter(self) -> MoveChoice {
        match self {
            MoveChoice::Rock => MoveChoice::Paper,
            MoveChoice::Paper => MoveChoice::Scissors,
            MoveChoice::Scissors => MoveChoice::Rock,
        }
    }

    /// The single move equal to neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two moves remain in that case.
    pub fn third(a: MoveChoice, b: MoveChoice) -> Option<MoveChoice> {
        if a == b {
            return None;
        }
        MoveChoice::ALL.into_iter().find(|m| *m != a && *m != b)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveChoice::Rock => "rock",
            MoveChoice::Paper => "paper",
            MoveChoice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for MoveChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveChoice {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(MoveChoice::Rock),
            "paper" => Ok(MoveChoice::Paper),
            "scissors" => Ok(MoveChoice::Scissors),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// Uniform over the three moves
impl Distribution<MoveChoice> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MoveChoice {
        MoveChoice::ALL[rng.gen_range(0..MoveChoice::ALL.len())]
    }
}

/// Result of a round, always from the human player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Lose,
    Tie,
}

impl RoundOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RoundOutcome::Win => "win",
            RoundOutcome::Lose => "lose",
            RoundOutcome::Tie => "tie",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

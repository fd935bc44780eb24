//! Adaptive Rock-Paper-Scissors opponent
//!
//! Core decision logic for the arcade hub's Rock-Paper-Scissors game: the
//! opponent watches the player's moves, predicts the next one and plays
//! the counter, with enough randomness to stay unpredictable.
//! This crate is compiled to:
//! - Native (for tests and tooling)
//! - WASM (for the web front end)

mod config;
mod error;
mod history;
mod moves;
mod patterns;
mod predictor;
mod random;
mod selector;
mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::EngineConfig;
pub use error::{ConfigError, ParseMoveError, SessionError};
pub use history::MoveHistory;
pub use moves::{MoveChoice, RoundOutcome};
pub use patterns::{PatternKey, PatternTable};
pub use predictor::{predict, Prediction, Tally};
pub use random::SeededRng;
pub use selector::choose_move;
pub use session::{GameLength, MatchVerdict, RoundReport, Scoreboard, SessionController};

/// Outcome of a round for the player
pub fn resolve(player: MoveChoice, opponent: MoveChoice) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Tie
    } else if player.beats() == opponent {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MoveChoice::*;

    #[test]
    fn test_outcome_table() {
        assert_eq!(resolve(Rock, Rock), RoundOutcome::Tie);
        assert_eq!(resolve(Paper, Paper), RoundOutcome::Tie);
        assert_eq!(resolve(Scissors, Scissors), RoundOutcome::Tie);
        assert_eq!(resolve(Rock, Scissors), RoundOutcome::Win);
        assert_eq!(resolve(Scissors, Rock), RoundOutcome::Lose);
        assert_eq!(resolve(Paper, Rock), RoundOutcome::Win);
        assert_eq!(resolve(Rock, Paper), RoundOutcome::Lose);
        assert_eq!(resolve(Scissors, Paper), RoundOutcome::Win);
        assert_eq!(resolve(Paper, Scissors), RoundOutcome::Lose);
    }

    #[test]
    fn test_outcome_counts() {
        let mut wins = 0;
        let mut losses = 0;
        let mut ties = 0;
        for a in MoveChoice::ALL {
            for b in MoveChoice::ALL {
                match resolve(a, b) {
                    RoundOutcome::Win => wins += 1,
                    RoundOutcome::Lose => losses += 1,
                    RoundOutcome::Tie => ties += 1,
                }
            }
        }
        assert_eq!((wins, losses, ties), (3, 3, 3));
    }

    #[test]
    fn test_counter_always_wins_against_bot_side() {
        for m in MoveChoice::ALL {
            // the opponent playing the counter beats the player
            assert_eq!(resolve(m, m.counter()), RoundOutcome::Lose);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_move() -> impl Strategy<Value = MoveChoice> {
            prop::sample::select(MoveChoice::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn prop_resolve_antisymmetric(a in any_move(), b in any_move()) {
                let forward = resolve(a, b);
                let backward = resolve(b, a);
                match forward {
                    RoundOutcome::Win => prop_assert_eq!(backward, RoundOutcome::Lose),
                    RoundOutcome::Lose => prop_assert_eq!(backward, RoundOutcome::Win),
                    RoundOutcome::Tie => prop_assert_eq!(backward, RoundOutcome::Tie),
                }
            }
        }
    }
}

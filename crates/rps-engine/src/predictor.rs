//! Next-move prediction over the player's history
//!
//! Three signals are combined in a fixed order, later ones overriding
//! earlier ones:
//! - pattern continuation: what followed earlier occurrences of the last
//!   two-move window
//! - global frequency: the player's favourite move so far
//! - alternation: the last three moves all changed, so expect the move
//!   not among the last two
//!
//! The predictor only ever sees moves already revealed. The in-flight
//! round's move has no way in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::moves::MoveChoice;
use crate::patterns::{PatternKey, PatternTable};

/// A predicted player move and how much to trust it (0-100)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_move: MoveChoice,
    pub confidence: u8,
}

/// Move counts in first-seen order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(MoveChoice, u32)>,
}

impl Tally {
    pub fn from_moves<I: IntoIterator<Item = MoveChoice>>(moves: I) -> Self {
        let mut tally = Self::default();
        for mv in moves {
            tally.add(mv);
        }
        tally
    }

    pub fn add(&mut self, mv: MoveChoice) {
        match self.entries.iter_mut().find(|(m, _)| *m == mv) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((mv, 1)),
        }
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most frequent move with its count.
    ///
    /// On equal counts the move first seen later wins.
    pub fn leader(&self) -> Option<(MoveChoice, u32)> {
        let mut entries = self.entries.iter().copied();
        let first = entries.next()?;
        Some(entries.fold(first, |best, next| if best.1 > next.1 { best } else { next }))
    }
}

/// `round(100 * count / total)` with halves rounded up
pub(crate) fn percent(count: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (200 * count as u64 + total as u64) / (2 * total as u64);
    scaled.min(100) as u8
}

/// Moves that followed each earlier occurrence of `key`
fn followers(history: &[MoveChoice], key: PatternKey) -> Tally {
    Tally::from_moves(
        (2..history.len())
            .filter(|&i| PatternKey::from_window(&history[i - 2..i]) == Some(key))
            .map(|i| history[i]),
    )
}

fn pattern_continuation(
    history: &[MoveChoice],
    patterns: &PatternTable,
    config: &EngineConfig,
) -> Option<Prediction> {
    let key = PatternKey::from_window(&history[history.len() - 2..])?;
    if patterns.count(key) <= 1 {
        return None;
    }
    let tally = followers(history, key);
    let (predicted_move, count) = tally.leader()?;
    Some(Prediction {
        predicted_move,
        confidence: percent(count, tally.total()).min(config.pattern_cap),
    })
}

fn frequency_fallback(history: &[MoveChoice], config: &EngineConfig) -> Option<Prediction> {
    let tally = Tally::from_moves(history.iter().copied());
    let (predicted_move, count) = tally.leader()?;
    Some(Prediction {
        predicted_move,
        confidence: percent(count, history.len() as u32).min(config.frequency_cap),
    })
}

fn alternation_override(
    history: &[MoveChoice],
    base: Prediction,
    config: &EngineConfig,
) -> Option<Prediction> {
    let [a, b, c] = history.get(history.len().checked_sub(3)?..)? else {
        return None;
    };
    if a == b || b == c {
        return None;
    }
    let Some(predicted_move) = MoveChoice::third(*b, *c) else {
        panic!("alternating window {a}-{b}-{c} has no unused move");
    };
    Some(Prediction {
        predicted_move,
        confidence: base
            .confidence
            .saturating_add(config.alternation_bonus)
            .min(config.alternation_cap)
            .min(100),
    })
}

/// Predict the player's next move from the moves already revealed
pub fn predict<R: Rng + ?Sized>(
    history: &[MoveChoice],
    patterns: &PatternTable,
    config: &EngineConfig,
    rng: &mut R,
) -> Prediction {
    if history.len() < 2 {
        let prediction = Prediction {
            predicted_move: rng.gen(),
            confidence: config.cold_start_confidence.min(100),
        };
        log::debug!("cold start: {} at {}%", prediction.predicted_move, prediction.confidence);
        return prediction;
    }

    let base = match pattern_continuation(history, patterns, config) {
        Some(prediction) => {
            log::debug!(
                "pattern continuation: {} at {}%",
                prediction.predicted_move,
                prediction.confidence
            );
            prediction
        }
        None => {
            // history holds at least two moves, so the tally has a leader
            let Some(prediction) = frequency_fallback(history, config) else {
                unreachable!("non-empty history without a most frequent move");
            };
            log::debug!(
                "frequency fallback: {} at {}%",
                prediction.predicted_move,
                prediction.confidence
            );
            prediction
        }
    };

    match alternation_override(history, base, config) {
        Some(prediction) => {
            log::debug!(
                "alternation override: {} at {}%",
                prediction.predicted_move,
                prediction.confidence
            );
            prediction
        }
        None => base,
    }
}

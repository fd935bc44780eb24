//! Two-move pattern keys and their frequency table

use serde::{Deserialize, Serialize};

use crate::moves::MoveChoice;

/// Number of distinct ordered move pairs
pub const PATTERN_COUNT: usize = 9;

/// An ordered pair of consecutive moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternKey {
    pub first: MoveChoice,
    pub second: MoveChoice,
}

impl PatternKey {
    pub fn new(first: MoveChoice, second: MoveChoice) -> Self {
        Self { first, second }
    }

    /// Key of a two-move window, `None` for any other length
    pub fn from_window(window: &[MoveChoice]) -> Option<Self> {
        match window {
            [first, second] => Some(Self::new(*first, *second)),
            _ => None,
        }
    }

    /// Slot in `0..PATTERN_COUNT`
    pub fn index(self) -> usize {
        self.first.index() * MoveChoice::ALL.len() + self.second.index()
    }

    fn from_index(index: usize) -> Self {
        let n = MoveChoice::ALL.len();
        Self::new(MoveChoice::ALL[index / n], MoveChoice::ALL[index % n])
    }
}

/// How often each two-move window has completed at the end of the history.
///
/// A derived index over the history: it always equals `rebuild` applied to
/// the moves it was fed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    counts: [u32; PATTERN_COUNT],
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the table from scratch
    pub fn rebuild(history: &[MoveChoice]) -> Self {
        let mut table = Self::new();
        for window in history.windows(2) {
            if let Some(key) = PatternKey::from_window(window) {
                table.increment(key);
            }
        }
        table
    }

    pub fn increment(&mut self, key: PatternKey) -> u32 {
        let slot = &mut self.counts[key.index()];
        *slot += 1;
        *slot
    }

    pub fn count(&self, key: PatternKey) -> u32 {
        self.counts[key.index()]
    }

    /// Sum over all keys; `len - 1` for a history of `len >= 1` moves
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&mut self) {
        self.counts = [0; PATTERN_COUNT];
    }

    /// Keys seen at least once, with their counts
    pub fn iter(&self) -> impl Iterator<Item = (PatternKey, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, count)| (PatternKey::from_index(i), *count))
    }
}

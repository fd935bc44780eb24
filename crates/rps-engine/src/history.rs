//! The human player's move history for one session

use serde::{Deserialize, Serialize};

use crate::moves::MoveChoice;
use crate::patterns::{PatternKey, PatternTable};

/// Append-only record of the player's moves, with its pattern index.
///
/// Serializes as the plain move list; the pattern index is rebuilt on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MoveChoice>", into = "Vec<MoveChoice>")]
pub struct MoveHistory {
    moves: Vec<MoveChoice>,
    patterns: PatternTable,
}

impl From<Vec<MoveChoice>> for MoveHistory {
    fn from(moves: Vec<MoveChoice>) -> Self {
        let mut history = Self::new();
        for mv in moves {
            history.append(mv);
        }
        history
    }
}

impl From<MoveHistory> for Vec<MoveChoice> {
    fn from(history: MoveHistory) -> Self {
        history.moves
    }
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a move and count the window it completes
    pub fn append(&mut self, mv: MoveChoice) {
        self.moves.push(mv);
        if let Some(key) = self.last_window() {
            let count = self.patterns.increment(key);
            log::trace!("pattern {}-{} seen {} times", key.first, key.second, count);
        }
    }

    /// Owned copy of the moves so far
    pub fn snapshot(&self) -> Vec<MoveChoice> {
        self.moves.clone()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.patterns.clear();
    }

    pub fn moves(&self) -> &[MoveChoice] {
        &self.moves
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Key of the last two moves
    pub fn last_window(&self) -> Option<PatternKey> {
        let len = self.moves.len();
        if len < 2 {
            return None;
        }
        PatternKey::from_window(&self.moves[len - 2..])
    }

    /// Up to the last `n` moves, oldest first
    pub fn recent(&self, n: usize) -> &[MoveChoice] {
        let start = self.moves.len().saturating_sub(n);
        &self.moves[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MoveChoice::*;

    #[test]
    fn test_append_keeps_order() {
        let mut history = MoveHistory::new();
        history.append(Rock);
        history.append(Scissors);
        history.append(Paper);
        assert_eq!(history.moves(), &[Rock, Scissors, Paper]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_first_move_adds_no_pattern() {
        let mut history = MoveHistory::new();
        history.append(Rock);
        assert!(history.patterns().is_empty());
        assert_eq!(history.last_window(), None);
    }

    #[test]
    fn test_one_increment_per_append() {
        let mut history = MoveHistory::new();
        let moves = [Rock, Paper, Rock, Paper, Paper, Scissors];
        for (i, mv) in moves.iter().enumerate() {
            history.append(*mv);
            assert_eq!(history.patterns().total() as usize, i);
        }
        assert_eq!(history.patterns().count(PatternKey::new(Rock, Paper)), 2);
        assert_eq!(history.patterns().count(PatternKey::new(Paper, Rock)), 1);
        assert_eq!(history.patterns().count(PatternKey::new(Paper, Paper)), 1);
        assert_eq!(history.patterns().count(PatternKey::new(Paper, Scissors)), 1);
    }

    #[test]
    fn test_table_matches_rebuild() {
        let mut history = MoveHistory::new();
        for mv in [Scissors, Scissors, Rock, Scissors, Scissors, Paper] {
            history.append(mv);
            assert_eq!(history.patterns(), &PatternTable::rebuild(history.moves()));
        }
    }

    #[test]
    fn test_deserialize_rebuilds_table() {
        let history: MoveHistory =
            serde_json::from_str(r#"["rock","paper","rock","paper"]"#).unwrap();
        assert_eq!(history.moves(), &[Rock, Paper, Rock, Paper]);
        assert_eq!(history.patterns(), &PatternTable::rebuild(history.moves()));
        assert_eq!(history.patterns().count(PatternKey::new(Rock, Paper)), 2);
        assert_eq!(history.patterns().count(PatternKey::new(Rock, Rock)), 0);
    }

    #[test]
    fn test_deserialize_rejects_stored_table() {
        // a stored table is not accepted alongside the moves
        let json = r#"{"moves":["rock","paper"],"patterns":{"counts":[7,0,0,0,0,0,0,0,0]}}"#;
        assert!(serde_json::from_str::<MoveHistory>(json).is_err());
    }

    #[test]
    fn test_serializes_as_move_list() {
        let mut history = MoveHistory::new();
        history.append(Scissors);
        history.append(Rock);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["scissors","rock"]"#);
        let back: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut history = MoveHistory::new();
        history.append(Paper);
        let snap = history.snapshot();
        history.append(Rock);
        assert_eq!(snap, vec![Paper]);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.append(Paper);
        history.append(Rock);
        history.clear();
        assert_eq!(history, MoveHistory::new());
    }

    #[test]
    fn test_recent() {
        let mut history = MoveHistory::new();
        assert!(history.recent(3).is_empty());
        history.append(Rock);
        assert_eq!(history.recent(3), &[Rock]);
        for mv in [Paper, Scissors, Rock] {
            history.append(mv);
        }
        assert_eq!(history.recent(3), &[Paper, Scissors, Rock]);
    }
}

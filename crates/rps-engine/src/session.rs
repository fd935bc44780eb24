//! Session controller: one adaptive opponent for one game

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::SessionError;
use crate::history::MoveHistory;
use crate::moves::{MoveChoice, RoundOutcome};
use crate::patterns::PatternTable;
use crate::predictor::{percent, predict, Prediction};
use crate::random::SeededRng;
use crate::resolve;
use crate::selector::choose_move;

/// Number of rounds the player signed up for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLength {
    /// Quick Match
    #[default]
    Quick,
    /// Standard Battle
    Standard,
    /// Epic Challenge
    Epic,
    Custom(u32),
}

impl GameLength {
    /// Named length for the menu's round counts, `Custom` otherwise
    pub fn from_rounds(rounds: u32) -> Self {
        match rounds {
            20 => GameLength::Quick,
            50 => GameLength::Standard,
            100 => GameLength::Epic,
            _ => GameLength::Custom(rounds),
        }
    }

    pub fn rounds(self) -> u32 {
        match self {
            GameLength::Quick => 20,
            GameLength::Standard => 50,
            GameLength::Epic => 100,
            GameLength::Custom(rounds) => rounds,
        }
    }
}

/// Final result of a match, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    Victory,
    Defeat,
    Draw,
}

/// Running score of a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub bot_wins: u32,
    pub ties: u32,
    pub rounds_played: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win => self.player_wins += 1,
            RoundOutcome::Lose => self.bot_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
        self.rounds_played += 1;
    }

    /// Share of rounds the player won, rounded to a whole percent
    pub fn win_rate(&self) -> u8 {
        percent(self.player_wins, self.rounds_played)
    }

    pub fn verdict(&self) -> MatchVerdict {
        use std::cmp::Ordering;
        match self.player_wins.cmp(&self.bot_wins) {
            Ordering::Greater => MatchVerdict::Victory,
            Ordering::Less => MatchVerdict::Defeat,
            Ordering::Equal => MatchVerdict::Draw,
        }
    }
}

/// Everything that happened in one round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based
    pub round: u32,
    /// What the opponent expected the player to do
    pub prediction: Prediction,
    pub player_move: MoveChoice,
    pub opponent_move: MoveChoice,
    pub outcome: RoundOutcome,
    pub player_score: u32,
    pub bot_score: u32,
}

/// Owns the opponent's memory of one player for the life of a game.
///
/// Per round, the opponent move must be chosen before the player's move is
/// recorded; `play_round` does both in that order. A prediction handed out
/// by `predict` is the one the opponent then counters in that round.
#[derive(Clone, Debug)]
pub struct SessionController<R> {
    history: MoveHistory,
    config: EngineConfig,
    length: GameLength,
    scoreboard: Scoreboard,
    shown: Option<Prediction>,
    rng: R,
}

impl SessionController<SeededRng> {
    /// Session with a deterministic random source
    pub fn seeded(length: GameLength, seed: u64) -> Self {
        Self::new(length, SeededRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionController<R> {
    pub fn new(length: GameLength, rng: R) -> Self {
        Self::with_config(length, EngineConfig::default(), rng)
    }

    pub fn with_config(length: GameLength, config: EngineConfig, rng: R) -> Self {
        log::info!("new session: {} rounds", length.rounds());
        Self {
            history: MoveHistory::new(),
            config,
            length,
            scoreboard: Scoreboard::default(),
            shown: None,
            rng,
        }
    }

    /// Predict the player's next move from the rounds played so far.
    ///
    /// The result is kept until the round's player move is recorded, and
    /// the opponent counters it rather than predicting again.
    pub fn predict(&mut self) -> Prediction {
        let prediction = predict(
            self.history.moves(),
            self.history.patterns(),
            &self.config,
            &mut self.rng,
        );
        self.shown = Some(prediction);
        prediction
    }

    /// Prediction for the round in progress, reusing the one already shown
    fn round_prediction(&mut self) -> Prediction {
        match self.shown {
            Some(prediction) => prediction,
            None => self.predict(),
        }
    }

    /// Opponent move for the round in progress
    pub fn choose_opponent_move(&mut self) -> MoveChoice {
        let prediction = self.round_prediction();
        choose_move(&prediction, &self.config, &mut self.rng)
    }

    pub fn record_player_move(&mut self, mv: MoveChoice) {
        self.shown = None;
        self.history.append(mv);
    }

    pub fn resolve_round(
        &self,
        player_move: MoveChoice,
        opponent_move: MoveChoice,
    ) -> RoundOutcome {
        resolve(player_move, opponent_move)
    }

    /// Play a full round against `player_move`
    pub fn play_round(&mut self, player_move: MoveChoice) -> Result<RoundReport, SessionError> {
        if self.is_over() {
            return Err(SessionError::MatchOver { rounds: self.scoreboard.rounds_played });
        }

        let prediction = self.round_prediction();
        let opponent_move = choose_move(&prediction, &self.config, &mut self.rng);
        self.record_player_move(player_move);

        let outcome = self.resolve_round(player_move, opponent_move);
        self.scoreboard.record(outcome);

        if self.is_over() {
            log::info!(
                "match over: player {} - bot {} ({} ties)",
                self.scoreboard.player_wins,
                self.scoreboard.bot_wins,
                self.scoreboard.ties
            );
        }

        Ok(RoundReport {
            round: self.scoreboard.rounds_played,
            prediction,
            player_move,
            opponent_move,
            outcome,
            player_score: self.scoreboard.player_wins,
            bot_score: self.scoreboard.bot_wins,
        })
    }

    /// Forget the player and start the match over
    pub fn reset(&mut self) {
        log::info!("session reset after {} moves", self.history.len());
        self.history.clear();
        self.shown = None;
        self.scoreboard = Scoreboard::default();
    }

    /// Start over with a different game length
    pub fn restart(&mut self, length: GameLength) {
        self.length = length;
        self.reset();
    }

    pub fn is_over(&self) -> bool {
        self.scoreboard.rounds_played >= self.length.rounds()
    }

    pub fn history(&self) -> Vec<MoveChoice> {
        self.history.snapshot()
    }

    /// Up to the last `n` player moves
    pub fn recent_moves(&self, n: usize) -> &[MoveChoice] {
        self.history.recent(n)
    }

    pub fn patterns(&self) -> &PatternTable {
        self.history.patterns()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn length(&self) -> GameLength {
        self.length
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

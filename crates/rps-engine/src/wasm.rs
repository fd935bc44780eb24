//! WASM bindings for the web front end

#![cfg(feature = "wasm")]

use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::{resolve, EngineConfig, GameLength, MoveChoice, SeededRng, SessionController};

fn parse_move(name: &str) -> Result<MoveChoice, JsError> {
    name.parse::<MoveChoice>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Seed from the browser when the caller does not supply one
fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    random ^ js_sys::Date::now() as u64
}

/// Adaptive opponent for one game of Rock-Paper-Scissors
#[wasm_bindgen]
pub struct RpsBot {
    session: SessionController<SeededRng>,
}

#[wasm_bindgen]
impl RpsBot {
    /// New bot for a game of `rounds` moves
    #[wasm_bindgen(constructor)]
    pub fn new(rounds: u32) -> RpsBot {
        Self::with_seed(rounds, entropy_seed())
    }

    /// Deterministic bot, for replays and tests
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(rounds: u32, seed: u64) -> RpsBot {
        RpsBot {
            session: SessionController::new(
                GameLength::from_rounds(rounds),
                SeededRng::seed_from_u64(seed),
            ),
        }
    }

    /// Bot with tuned constants, e.g. `{"counter_percent": 80}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(rounds: u32, config_json: &str) -> Result<RpsBot, JsError> {
        let config = EngineConfig::from_json(config_json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RpsBot {
            session: SessionController::with_config(
                GameLength::from_rounds(rounds),
                config,
                SeededRng::seed_from_u64(entropy_seed()),
            ),
        })
    }

    /// `{predicted_move, confidence}` for the upcoming round; `makeMove`
    /// counters this same prediction
    #[wasm_bindgen(js_name = predictNextMove)]
    pub fn predict_next_move(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.session.predict())
    }

    /// The bot's move for the upcoming round, countering the prediction
    /// last returned by `predictNextMove` when there is one
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(&mut self) -> String {
        self.session.choose_opponent_move().to_string()
    }

    /// Record the player's move once both moves are revealed
    #[wasm_bindgen(js_name = addMove)]
    pub fn add_move(&mut self, player_move: &str) -> Result<(), JsError> {
        let mv = parse_move(player_move)?;
        self.session.record_player_move(mv);
        Ok(())
    }

    /// Bot move, bookkeeping and result for one round
    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let mv = parse_move(player_move)?;
        let report = self.session
            .play_round(mv)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&report)
    }

    #[wasm_bindgen(js_name = getHistory)]
    pub fn get_history(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.history())
    }

    /// Last three player moves, shown as the detected pattern
    #[wasm_bindgen(js_name = recentPattern)]
    pub fn recent_pattern(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.recent_moves(3))
    }

    pub fn scoreboard(&self) -> Result<JsValue, JsError> {
        to_js(self.session.scoreboard())
    }

    pub fn verdict(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.scoreboard().verdict())
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Start a new game of a different length
    pub fn restart(&mut self, rounds: u32) {
        self.session.restart(GameLength::from_rounds(rounds));
    }
}

/// `"win"`, `"lose"` or `"tie"` for the player
#[wasm_bindgen(js_name = determineWinner)]
pub fn determine_winner(player_move: &str, bot_move: &str) -> Result<String, JsError> {
    let player = parse_move(player_move)?;
    let bot = parse_move(bot_move)?;
    Ok(resolve(player, bot).to_string())
}

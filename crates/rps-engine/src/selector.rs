//! Opponent move selection

use rand::Rng;

use crate::config::EngineConfig;
use crate::moves::MoveChoice;
use crate::predictor::Prediction;

/// Turn a prediction into the opponent's move.
///
/// Plays the counter to the predicted move `counter_percent`% of the time
/// and a uniformly random move otherwise, so the opponent stays hard to
/// exploit even once its predictor is understood.
pub fn choose_move<R: Rng + ?Sized>(
    prediction: &Prediction,
    config: &EngineConfig,
    rng: &mut R,
) -> MoveChoice {
    if rng.gen_range(0..100u8) < config.counter_percent {
        let mv = prediction.predicted_move.counter();
        log::debug!("countering {} with {}", prediction.predicted_move, mv);
        mv
    } else {
        let mv: MoveChoice = rng.gen();
        log::debug!("random move {}", mv);
        mv
    }
}

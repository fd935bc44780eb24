//! Tunable engine constants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Confidence caps and counter-strategy odds, all as percentages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Confidence reported while fewer than two moves are known
    pub cold_start_confidence: u8,
    /// Upper bound for pattern-continuation predictions
    pub pattern_cap: u8,
    /// Upper bound for whole-history frequency predictions
    pub frequency_cap: u8,
    /// Upper bound once the alternation override applies
    pub alternation_cap: u8,
    /// Added to the underlying confidence by the alternation override
    pub alternation_bonus: u8,
    /// Chance of playing the counter to the prediction instead of a random move
    pub counter_percent: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cold_start_confidence: 33,
            pattern_cap: 90,
            frequency_cap: 75,
            alternation_cap: 85,
            alternation_bonus: 15,
            counter_percent: 70,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("cold_start_confidence", self.cold_start_confidence),
            ("pattern_cap", self.pattern_cap),
            ("frequency_cap", self.frequency_cap),
            ("alternation_cap", self.alternation_cap),
            ("alternation_bonus", self.alternation_bonus),
            ("counter_percent", self.counter_percent),
        ];
        for (field, value) in fields {
            if value > 100 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

// ABOUTME: Score generation configuration with per-sport component weights
// ABOUTME: Configures suggestion rule thresholds for coaching feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! Component weights decide how form, speed, and consistency combine into the
//! overall score for each sport. Suggestion thresholds decide when a coaching
//! rule fires.

use serde::{Deserialize, Serialize};
use swing_core::models::{ComponentWeights, Sport};

use super::ConfigError;

/// Tolerance for weight triples summing to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Score generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Golf weights
    pub golf: ComponentWeights,
    /// Baseball weights
    pub baseball: ComponentWeights,
    /// Softball weights
    pub softball: ComponentWeights,
    /// Tennis weights
    pub tennis: ComponentWeights,
    /// Pickleball weights
    pub pickleball: ComponentWeights,
    /// Rule thresholds for improvement suggestions
    pub suggestions: SuggestionThresholds,
}

/// Thresholds at which improvement suggestions fire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionThresholds {
    /// Hip rotation below this (degrees)
    pub min_hip_rotation: f64,
    /// Shoulder rotation below this (degrees)
    pub min_shoulder_rotation: f64,
    /// X-factor below this (degrees)
    pub min_x_factor: f64,
    /// Spine angle deviation above this (degrees)
    pub max_spine_deviation: f64,
    /// Weight transfer below this (percent)
    pub min_weight_transfer: f64,
    /// Arm extension below this (score)
    pub min_arm_extension: f64,
    /// Impact speed below this fraction of peak speed
    pub min_impact_speed_ratio: f64,
    /// Repeatability below this (score)
    pub min_repeatability: f64,
    /// Timing variance above this (seconds)
    pub max_timing_variance: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            min_hip_rotation: 45.0,
            min_shoulder_rotation: 80.0,
            min_x_factor: 35.0,
            max_spine_deviation: 10.0,
            min_weight_transfer: 50.0,
            min_arm_extension: 70.0,
            min_impact_speed_ratio: 0.85,
            min_repeatability: 70.0,
            max_timing_variance: 0.1,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            golf: ComponentWeights::new(0.45, 0.30, 0.25),
            baseball: ComponentWeights::new(0.35, 0.45, 0.20),
            softball: ComponentWeights::new(0.35, 0.45, 0.20),
            tennis: ComponentWeights::new(0.40, 0.35, 0.25),
            pickleball: ComponentWeights::new(0.35, 0.30, 0.35),
            suggestions: SuggestionThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Weights for a sport
    #[must_use]
    pub const fn weights_for(&self, sport: Sport) -> &ComponentWeights {
        match sport {
            Sport::Golf => &self.golf,
            Sport::Baseball => &self.baseball,
            Sport::Softball => &self.softball,
            Sport::Tennis => &self.tennis,
            Sport::Pickleball => &self.pickleball,
        }
    }

    /// Validate that every weight triple is non-negative and sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` for a bad triple
    pub fn validate(&self) -> Result<(), ConfigError> {
        for sport in Sport::ALL {
            let weights = self.weights_for(sport);
            if weights.form < 0.0 || weights.speed < 0.0 || weights.consistency < 0.0 {
                return Err(ConfigError::InvalidWeights(
                    "component weights must not be negative",
                ));
            }
            if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(
                    "component weights must sum to 1.0",
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.suggestions.min_impact_speed_ratio) {
            return Err(ConfigError::InvalidRange(
                "min_impact_speed_ratio must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Phase detection configuration with per-sport threshold tables
// ABOUTME: Configures minimum confidence, history window, and transition thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Detection Configuration
//!
//! Threshold tables for the phase state machine. Speeds are meters per second
//! of the hand-position proxy, distances are meters, durations are seconds.

use serde::{Deserialize, Serialize};
use swing_core::constants::tracking::{DEFAULT_HISTORY_CAPACITY, DEFAULT_MINIMUM_CONFIDENCE};
use swing_core::models::{ImplementType, Sport};

use super::ConfigError;

/// Phase detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Frames below this overall confidence are ignored
    pub minimum_confidence: f64,
    /// Trailing frames kept by each detector
    pub history_capacity: usize,
    /// Golf thresholds
    pub golf: PhaseThresholds,
    /// Baseball and softball thresholds
    pub batting: PhaseThresholds,
    /// Tennis thresholds
    pub tennis: PhaseThresholds,
    /// Pickleball thresholds
    pub pickleball: PhaseThresholds,
}

/// Transition thresholds for one sport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    /// Frames that must stay still to confirm the ready position
    pub static_window: usize,
    /// Maximum hand drift allowed inside the static window
    pub static_tolerance: f64,
    /// Minimum hand speed that starts the backswing
    pub initiation_speed: f64,
    /// Minimum time spent in the backswing before a top can register
    pub min_backswing_duration: f64,
    /// Minimum drop after a peak for the reversal test
    pub reversal_epsilon: f64,
    /// Minimum hand speed that confirms the downswing
    pub downswing_speed: f64,
    /// Follow-through starts when speed falls below this fraction of peak
    pub follow_through_decel_ratio: f64,
    /// Lowest contact height relative to the hip center
    pub contact_zone_low: f64,
    /// Highest contact height relative to the hip center
    pub contact_zone_high: f64,
    /// Lead ankle vertical speed below which the front foot counts as planted
    pub planted_foot_speed: f64,
}

impl PhaseThresholds {
    /// Copy with speed gates scaled for the implement
    #[must_use]
    pub fn scaled_for(&self, implement: ImplementType) -> Self {
        let scale = implement.speed_scale();
        Self {
            initiation_speed: self.initiation_speed * scale,
            downswing_speed: self.downswing_speed * scale,
            ..*self
        }
    }

    /// Whether a height relative to the hip center falls in the contact zone
    #[must_use]
    pub fn in_contact_zone(&self, relative_height: f64) -> bool {
        (self.contact_zone_low..=self.contact_zone_high).contains(&relative_height)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.static_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "static_window must be at least 2 frames",
            ));
        }
        if self.static_tolerance <= 0.0
            || self.initiation_speed <= 0.0
            || self.downswing_speed <= 0.0
            || self.reversal_epsilon <= 0.0
            || self.planted_foot_speed <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "detection tolerances and speed thresholds must be positive",
            ));
        }
        if self.min_backswing_duration < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_backswing_duration must not be negative",
            ));
        }
        if !(0.0..1.0).contains(&self.follow_through_decel_ratio) {
            return Err(ConfigError::InvalidRange(
                "follow_through_decel_ratio must be in [0, 1)",
            ));
        }
        if self.contact_zone_low >= self.contact_zone_high {
            return Err(ConfigError::InvalidRange(
                "contact_zone_low must be < contact_zone_high",
            ));
        }
        Ok(())
    }
}

impl DetectionConfig {
    /// Thresholds for a sport
    #[must_use]
    pub const fn thresholds_for(&self, sport: Sport) -> &PhaseThresholds {
        match sport {
            Sport::Golf => &self.golf,
            Sport::Baseball | Sport::Softball => &self.batting,
            Sport::Tennis => &self.tennis,
            Sport::Pickleball => &self.pickleball,
        }
    }

    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.minimum_confidence) {
            return Err(ConfigError::InvalidRange(
                "minimum_confidence must be in [0, 1]",
            ));
        }
        if self.history_capacity < 10 {
            return Err(ConfigError::ValueOutOfRange(
                "history_capacity must be at least 10 frames",
            ));
        }
        for thresholds in [&self.golf, &self.batting, &self.tennis, &self.pickleball] {
            thresholds.validate()?;
            if thresholds.static_window >= self.history_capacity {
                return Err(ConfigError::InvalidRange(
                    "static_window must be smaller than history_capacity",
                ));
            }
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            minimum_confidence: DEFAULT_MINIMUM_CONFIDENCE,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            golf: PhaseThresholds {
                static_window: 10,
                static_tolerance: 0.02,
                initiation_speed: 0.15,
                min_backswing_duration: 0.2,
                reversal_epsilon: 0.003,
                downswing_speed: 0.5,
                follow_through_decel_ratio: 0.7,
                contact_zone_low: -0.5,
                contact_zone_high: 0.35,
                planted_foot_speed: 0.3,
            },
            batting: PhaseThresholds {
                static_window: 10,
                static_tolerance: 0.03,
                initiation_speed: 0.2,
                min_backswing_duration: 0.15,
                reversal_epsilon: 0.003,
                downswing_speed: 0.6,
                follow_through_decel_ratio: 0.7,
                contact_zone_low: -0.1,
                contact_zone_high: 0.7,
                planted_foot_speed: 0.3,
            },
            tennis: PhaseThresholds {
                static_window: 8,
                static_tolerance: 0.04,
                initiation_speed: 0.2,
                min_backswing_duration: 0.15,
                reversal_epsilon: 0.003,
                downswing_speed: 0.6,
                follow_through_decel_ratio: 0.7,
                contact_zone_low: -0.4,
                contact_zone_high: 1.2,
                planted_foot_speed: 0.3,
            },
            pickleball: PhaseThresholds {
                static_window: 8,
                static_tolerance: 0.04,
                initiation_speed: 0.15,
                min_backswing_duration: 0.1,
                reversal_epsilon: 0.002,
                downswing_speed: 0.4,
                follow_through_decel_ratio: 0.7,
                contact_zone_low: -0.5,
                contact_zone_high: 0.6,
                planted_foot_speed: 0.3,
            },
        }
    }
}

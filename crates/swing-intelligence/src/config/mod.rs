// ABOUTME: Analysis configuration root with environment overrides and validation
// ABOUTME: Provides the global AnalysisConfig singleton and its per-concern sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Configuration
//!
//! Defaults live in code; environment variables override a small set of
//! operational knobs. Explicit configs can always be passed to the analyzers
//! with `with_config`, bypassing the global.
//!
//! | Variable | Field |
//! |---|---|
//! | `SWING_MIN_CONFIDENCE` | `detection.minimum_confidence` |
//! | `SWING_HISTORY_CAPACITY` | `detection.history_capacity` |
//! | `SWING_DECIMATION_FACTOR` | `metrics.decimation_factor` |
//! | `SWING_STREAMING_MIN_FRAMES` | `metrics.streaming_min_frames` |
//! | `SWING_WEIGHT_TRANSFER_REFERENCE` | `form.weight_transfer_reference` |

mod detection;
mod error;
mod metrics;
mod scoring;

pub use detection::{DetectionConfig, PhaseThresholds};
pub use error::ConfigError;
pub use metrics::{FormConfig, MetricsConfig};
pub use scoring::{ScoringConfig, SuggestionThresholds};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYSIS_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

/// Root configuration for the analysis engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Phase detector thresholds
    pub detection: DetectionConfig,
    /// Metrics calculator settings
    pub metrics: MetricsConfig,
    /// Score generator weights and rules
    pub scoring: ScoringConfig,
    /// Form analyzer settings
    pub form: FormConfig,
}

impl AnalysisConfig {
    /// Get the global configuration instance
    ///
    /// Invalid environment overrides are logged and replaced by defaults.
    pub fn global() -> &'static Self {
        ANALYSIS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analysis config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable fails to parse or the
    /// resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detection.validate()?;
        self.metrics.validate()?;
        self.scoring.validate()?;
        self.form.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "SWING_MIN_CONFIDENCE",
            &mut self.detection.minimum_confidence,
        )?;
        Self::apply_env_var(
            "SWING_HISTORY_CAPACITY",
            &mut self.detection.history_capacity,
        )?;
        Self::apply_env_var(
            "SWING_DECIMATION_FACTOR",
            &mut self.metrics.decimation_factor,
        )?;
        Self::apply_env_var(
            "SWING_STREAMING_MIN_FRAMES",
            &mut self.metrics.streaming_min_frames,
        )?;
        Self::apply_env_var(
            "SWING_WEIGHT_TRANSFER_REFERENCE",
            &mut self.form.weight_transfer_reference,
        )?;
        Ok(self)
    }
}

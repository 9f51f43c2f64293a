// ABOUTME: Metrics pipeline and form analysis configuration
// ABOUTME: Configures frame decimation, streaming minimums, and weight transfer reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use swing_core::constants::metrics::{DEFAULT_STREAMING_MIN_FRAMES, WEIGHT_TRANSFER_REFERENCE};

use super::ConfigError;

/// Metrics calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Keep every Nth frame before analysis
    pub decimation_factor: usize,
    /// Minimum buffered frames for streaming metrics
    pub streaming_min_frames: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            decimation_factor: 1,
            streaming_min_frames: DEFAULT_STREAMING_MIN_FRAMES,
        }
    }
}

impl MetricsConfig {
    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if decimation or the streaming minimum is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimation_factor == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "decimation_factor must be at least 1",
            ));
        }
        if self.streaming_min_frames == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "streaming_min_frames must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Form analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Hip-center displacement (meters) that counts as a full transfer
    pub weight_transfer_reference: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            weight_transfer_reference: WEIGHT_TRANSFER_REFERENCE,
        }
    }
}

impl FormConfig {
    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the reference displacement is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weight_transfer_reference <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_transfer_reference must be positive",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Factory selecting the phase detector variant for a swing configuration
// ABOUTME: Maps sports to golf, batting, or racquet strategies behind a trait object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use swing_core::models::{Sport, SwingConfiguration};
use tracing::debug;

use super::{
    BattingStrategy, GolfStrategy, PhaseDetector, RacquetStrategy, SwingStateMachine,
};
use crate::config::{AnalysisConfig, DetectionConfig};

/// Builds phase detectors from a swing configuration
pub struct PhaseDetectorFactory;

impl PhaseDetectorFactory {
    /// Create a detector using the global detection configuration
    #[must_use]
    pub fn create(configuration: &SwingConfiguration) -> Box<dyn PhaseDetector> {
        Self::create_with_config(configuration, &AnalysisConfig::global().detection)
    }

    /// Create a detector using an explicit detection configuration
    #[must_use]
    pub fn create_with_config(
        configuration: &SwingConfiguration,
        detection: &DetectionConfig,
    ) -> Box<dyn PhaseDetector> {
        debug!(
            sport = %configuration.sport,
            handedness = ?configuration.handedness,
            implement = ?configuration.implement,
            "creating phase detector"
        );
        match configuration.sport {
            Sport::Golf => Box::new(SwingStateMachine::with_strategy(
                GolfStrategy,
                configuration,
                detection,
            )),
            Sport::Baseball | Sport::Softball => Box::new(SwingStateMachine::with_strategy(
                BattingStrategy::new(configuration.sport),
                configuration,
                detection,
            )),
            Sport::Tennis | Sport::Pickleball => Box::new(SwingStateMachine::with_strategy(
                RacquetStrategy::new(configuration.sport, configuration.stroke),
                configuration,
                detection,
            )),
        }
    }
}

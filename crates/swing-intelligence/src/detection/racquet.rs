// ABOUTME: Tennis and pickleball strategy for the phase state machine
// ABOUTME: Groundstrokes load laterally behind the shoulder line; serves load upward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nalgebra::Vector3;
use swing_core::models::{Handedness, Sport, StrokeType, SwingConfiguration};

use super::{
    backward_component, HeightExtremum, MotionAxis, SwingStateMachine, SwingStrategy, TopCheck,
};
use crate::config::{AnalysisConfig, PhaseThresholds};

/// Serve contact window relative to the hip center, meters
const SERVE_CONTACT_ZONE: (f64, f64) = (0.6, 1.8);

/// Racquet-sport predicates
#[derive(Debug, Clone, Copy)]
pub struct RacquetStrategy {
    sport: Sport,
    stroke: StrokeType,
}

impl RacquetStrategy {
    /// Strategy for tennis or pickleball; other sports fall back to tennis
    #[must_use]
    pub const fn new(sport: Sport, stroke: StrokeType) -> Self {
        let sport = match sport {
            Sport::Pickleball => Sport::Pickleball,
            _ => Sport::Tennis,
        };
        Self { sport, stroke }
    }

    /// Stroke family
    #[must_use]
    pub const fn stroke(&self) -> StrokeType {
        self.stroke
    }
}

impl SwingStrategy for RacquetStrategy {
    fn sport(&self) -> Sport {
        self.sport
    }

    fn primary_axis(&self) -> MotionAxis {
        match self.stroke {
            StrokeType::Groundstroke => MotionAxis::Lateral,
            StrokeType::Serve => MotionAxis::Vertical,
        }
    }

    fn is_initiation(&self, delta: &Vector3<f64>, lateral_sign: f64) -> bool {
        match self.stroke {
            StrokeType::Groundstroke => {
                let backward = backward_component(delta, lateral_sign);
                backward > 0.0 && backward.abs() >= delta.y.abs()
            }
            StrokeType::Serve => delta.y > 0.0,
        }
    }

    fn top_confirmed(&self, check: &TopCheck<'_>) -> bool {
        let (Some(hands), Some(shoulders)) =
            (check.peak.hand_position(), check.peak.shoulder_center())
        else {
            return false;
        };
        match self.stroke {
            StrokeType::Groundstroke => {
                (hands.x - shoulders.x) * check.handedness.lateral_sign() < 0.0
            }
            StrokeType::Serve => hands.y > shoulders.y,
        }
    }

    fn impact_extremum(&self) -> HeightExtremum {
        match self.stroke {
            StrokeType::Groundstroke => HeightExtremum::Minimum,
            StrokeType::Serve => HeightExtremum::Maximum,
        }
    }

    fn in_contact_zone(&self, thresholds: &PhaseThresholds, relative_height: f64) -> bool {
        match self.stroke {
            StrokeType::Groundstroke => thresholds.in_contact_zone(relative_height),
            StrokeType::Serve => {
                (SERVE_CONTACT_ZONE.0..=SERVE_CONTACT_ZONE.1).contains(&relative_height)
            }
        }
    }
}

/// Tennis/pickleball phase detector
pub type RacquetPhaseDetector = SwingStateMachine<RacquetStrategy>;

impl SwingStateMachine<RacquetStrategy> {
    /// Racquet detector using the global detection configuration
    #[must_use]
    pub fn new(sport: Sport, handedness: Handedness, stroke: StrokeType) -> Self {
        let strategy = RacquetStrategy::new(sport, stroke);
        let configuration = SwingConfiguration::for_sport(strategy.sport)
            .with_handedness(handedness)
            .with_stroke(stroke);
        Self::with_strategy(
            strategy,
            &configuration,
            &AnalysisConfig::global().detection,
        )
    }
}

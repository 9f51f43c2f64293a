// ABOUTME: Golf swing strategy for the phase state machine
// ABOUTME: Vertical backswing, hands-above-shoulders top gate, low contact point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nalgebra::Vector3;
use swing_core::models::{Handedness, ImplementType, Sport, SwingConfiguration};

use super::{backward_component, MotionAxis, SwingStateMachine, SwingStrategy, TopCheck};
use crate::config::AnalysisConfig;

/// Golf predicates
///
/// The takeaway moves the hands up and away from the target; the top is
/// confirmed only with the hands above the shoulders, and contact happens
/// where the hands bottom out near hip height.
#[derive(Debug, Clone, Copy, Default)]
pub struct GolfStrategy;

impl SwingStrategy for GolfStrategy {
    fn sport(&self) -> Sport {
        Sport::Golf
    }

    fn primary_axis(&self) -> MotionAxis {
        MotionAxis::Vertical
    }

    fn is_initiation(&self, delta: &Vector3<f64>, lateral_sign: f64) -> bool {
        delta.y > 0.0 && backward_component(delta, lateral_sign) >= 0.0
    }

    fn top_confirmed(&self, check: &TopCheck<'_>) -> bool {
        match (check.peak.hand_position(), check.peak.shoulder_center()) {
            (Some(hands), Some(shoulders)) => hands.y > shoulders.y,
            _ => false,
        }
    }
}

/// Golf phase detector
pub type GolfPhaseDetector = SwingStateMachine<GolfStrategy>;

impl SwingStateMachine<GolfStrategy> {
    /// Golf detector using the global detection configuration
    #[must_use]
    pub fn new(handedness: Handedness, implement: ImplementType) -> Self {
        let configuration = SwingConfiguration::for_sport(Sport::Golf)
            .with_handedness(handedness)
            .with_implement(implement);
        Self::with_strategy(
            GolfStrategy,
            &configuration,
            &AnalysisConfig::global().detection,
        )
    }
}

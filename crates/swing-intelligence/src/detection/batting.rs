// ABOUTME: Baseball and softball batting strategy for the phase state machine
// ABOUTME: Lateral load, planted-front-foot top gate, belt-to-chest contact zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nalgebra::Vector3;
use swing_core::models::{Handedness, Joint, Sport, SwingConfiguration};

use super::{backward_component, MotionAxis, SwingStateMachine, SwingStrategy, TopCheck};
use crate::config::AnalysisConfig;
use crate::geometry;

/// Batting predicates
///
/// The load moves the hands back away from the pitcher more than it moves
/// them vertically. The load is complete once the stride foot is planted,
/// which is read from the lead ankle's vertical speed.
#[derive(Debug, Clone, Copy)]
pub struct BattingStrategy {
    sport: Sport,
}

impl BattingStrategy {
    /// Strategy for baseball or softball; other sports fall back to baseball
    #[must_use]
    pub const fn new(sport: Sport) -> Self {
        let sport = if sport.is_batting() {
            sport
        } else {
            Sport::Baseball
        };
        Self { sport }
    }

    /// Ankle on the side facing the pitcher
    #[must_use]
    pub const fn lead_ankle(handedness: Handedness) -> Joint {
        match handedness {
            Handedness::Right => Joint::LeftAnkle,
            Handedness::Left => Joint::RightAnkle,
        }
    }
}

impl SwingStrategy for BattingStrategy {
    fn sport(&self) -> Sport {
        self.sport
    }

    fn primary_axis(&self) -> MotionAxis {
        MotionAxis::Lateral
    }

    fn is_initiation(&self, delta: &Vector3<f64>, lateral_sign: f64) -> bool {
        let backward = backward_component(delta, lateral_sign);
        backward > 0.0 && backward.abs() >= delta.y.abs()
    }

    fn top_confirmed(&self, check: &TopCheck<'_>) -> bool {
        geometry::joint_velocity(
            check.peak,
            check.latest,
            Self::lead_ankle(check.handedness),
        )
        .is_some_and(|velocity| velocity.y.abs() < check.thresholds.planted_foot_speed)
    }
}

/// Baseball/softball phase detector
pub type BattingPhaseDetector = SwingStateMachine<BattingStrategy>;

impl SwingStateMachine<BattingStrategy> {
    /// Batting detector using the global detection configuration
    ///
    /// `batting_side` is the side of the plate the hitter stands on.
    #[must_use]
    pub fn new(sport: Sport, batting_side: Handedness) -> Self {
        let strategy = BattingStrategy::new(sport);
        let configuration =
            SwingConfiguration::for_sport(strategy.sport).with_handedness(batting_side);
        Self::with_strategy(
            strategy,
            &configuration,
            &AnalysisConfig::global().detection,
        )
    }
}

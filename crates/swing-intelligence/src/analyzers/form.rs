// ABOUTME: Form analyzer deriving rotation, spine angle, weight transfer, and arm extension
// ABOUTME: Reads key frames from detected phases with fractional fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form analysis
//!
//! Every measurement degrades to `0.0` when the joints it needs are untracked
//! at the relevant key frame.

use swing_core::constants::metrics::{BACKSWING_FALLBACK_FRACTION, IMPACT_FALLBACK_FRACTION};
use swing_core::constants::optimal_ranges::{
    ARM_EXTENSION, FORM_ANGLE_TOLERANCE, FORM_PERCENT_TOLERANCE, HIP_ROTATION, SHOULDER_ROTATION,
    SPINE_DEVIATION, WEIGHT_TRANSFER, X_FACTOR,
};
use swing_core::constants::units::STRAIGHT_ANGLE_DEGREES;
use swing_core::models::{find_phase, DetectedPhase, FormMetrics, Joint, PoseFrame, SwingPhase};
use tracing::debug;

use crate::config::{AnalysisConfig, FormConfig};
use crate::geometry;

/// Arm extension weights at the backswing, impact, and follow-through frames
const ARM_EXTENSION_WEIGHTS: [f64; 3] = [0.2, 0.5, 0.3];

/// Frame indices the form measurements are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFrames {
    /// Address position
    pub setup: usize,
    /// Top of the backswing
    pub backswing: usize,
    /// Contact
    pub impact: usize,
    /// End of the follow-through
    pub follow_through: usize,
}

impl KeyFrames {
    /// Locate key frames from detected phases
    ///
    /// Missing phases fall back to the first frame, the 30% mark, the 70%
    /// mark, and the last frame respectively. Indices are clamped to the
    /// frame count.
    #[must_use]
    pub fn locate(frame_count: usize, phases: &[DetectedPhase]) -> Self {
        let last = frame_count.saturating_sub(1);
        let clamp = |index: usize| index.min(last);
        Self {
            setup: clamp(
                find_phase(phases, SwingPhase::Setup).map_or(0, |phase| phase.start_frame_index),
            ),
            backswing: clamp(
                find_phase(phases, SwingPhase::Backswing).map_or_else(
                    || geometry::fraction_index(frame_count, BACKSWING_FALLBACK_FRACTION),
                    |phase| phase.end_frame_index,
                ),
            ),
            impact: clamp(find_phase(phases, SwingPhase::Impact).map_or_else(
                || geometry::fraction_index(frame_count, IMPACT_FALLBACK_FRACTION),
                |phase| phase.start_frame_index,
            )),
            follow_through: clamp(
                find_phase(phases, SwingPhase::FollowThrough)
                    .map_or(last, |phase| phase.end_frame_index),
            ),
        }
    }
}

/// Computes `FormMetrics` for one swing
#[derive(Debug, Clone)]
pub struct FormAnalyzer {
    config: FormConfig,
}

impl Default for FormAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormAnalyzer {
    /// Analyzer using the global form configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::global().form.clone())
    }

    /// Analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: FormConfig) -> Self {
        Self { config }
    }

    /// Analyze a swing; empty input yields zero-valued metrics
    #[must_use]
    pub fn analyze(&self, frames: &[PoseFrame], phases: &[DetectedPhase]) -> FormMetrics {
        if frames.is_empty() {
            return FormMetrics::default();
        }
        let keys = KeyFrames::locate(frames.len(), phases);
        let setup = &frames[keys.setup];
        let impact = &frames[keys.impact];

        let mut metrics = FormMetrics {
            hip_rotation: geometry::line_rotation(setup, impact, Joint::LeftHip, Joint::RightHip)
                .unwrap_or(0.0),
            shoulder_rotation: geometry::line_rotation(
                setup,
                impact,
                Joint::LeftShoulder,
                Joint::RightShoulder,
            )
            .unwrap_or(0.0),
            spine_angle_setup: spine_angle(setup).unwrap_or(0.0),
            spine_angle_impact: spine_angle(impact).unwrap_or(0.0),
            weight_transfer: self.weight_transfer(setup, impact),
            arm_extension: arm_extension(&[
                &frames[keys.backswing],
                impact,
                &frames[keys.follow_through],
            ]),
            composite_score: 0.0,
        };
        metrics.composite_score = composite_score(&metrics);

        debug!(
            hip_rotation = metrics.hip_rotation,
            shoulder_rotation = metrics.shoulder_rotation,
            weight_transfer = metrics.weight_transfer,
            composite = metrics.composite_score,
            "form analysis complete"
        );
        metrics
    }

    /// Hip-center displacement from setup to impact as a percentage of a full transfer
    #[must_use]
    pub fn weight_transfer(&self, setup: &PoseFrame, impact: &PoseFrame) -> f64 {
        let (Some(before), Some(after)) = (setup.hip_center(), impact.hip_center()) else {
            return 0.0;
        };
        let shift = after - before;
        let displacement = shift.x.hypot(shift.z);
        (displacement / self.config.weight_transfer_reference * 100.0).clamp(0.0, 100.0)
    }
}

/// Tilt of the hip-center-to-head vector from vertical, degrees
#[must_use]
pub fn spine_angle(frame: &PoseFrame) -> Option<f64> {
    let spine = frame.position(Joint::Head)? - frame.hip_center()?;
    geometry::angle_between(&spine, &geometry::vertical_axis())
}

/// Better of the two elbows' extension at one frame, on a 0-100 scale
#[must_use]
pub fn best_elbow_extension(frame: &PoseFrame) -> Option<f64> {
    let left = geometry::joint_angle(frame, Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist);
    let right = geometry::joint_angle(
        frame,
        Joint::RightShoulder,
        Joint::RightElbow,
        Joint::RightWrist,
    );
    let best = match (left, right) {
        (Some(l), Some(r)) => l.max(r),
        (Some(angle), None) | (None, Some(angle)) => angle,
        (None, None) => return None,
    };
    Some((best / STRAIGHT_ANGLE_DEGREES * 100.0).clamp(0.0, 100.0))
}

fn arm_extension(key_frames: &[&PoseFrame; 3]) -> f64 {
    key_frames
        .iter()
        .zip(ARM_EXTENSION_WEIGHTS)
        .map(|(frame, weight)| best_elbow_extension(frame).unwrap_or(0.0) * weight)
        .sum()
}

fn composite_score(metrics: &FormMetrics) -> f64 {
    let components = [
        (
            geometry::range_score(metrics.hip_rotation, HIP_ROTATION, FORM_ANGLE_TOLERANCE),
            0.20,
        ),
        (
            geometry::range_score(
                metrics.shoulder_rotation,
                SHOULDER_ROTATION,
                FORM_ANGLE_TOLERANCE,
            ),
            0.20,
        ),
        (
            geometry::range_score(metrics.x_factor(), X_FACTOR, FORM_ANGLE_TOLERANCE),
            0.15,
        ),
        (
            geometry::range_score(
                metrics.spine_angle_deviation(),
                SPINE_DEVIATION,
                FORM_ANGLE_TOLERANCE,
            ),
            0.15,
        ),
        (
            geometry::range_score(
                metrics.weight_transfer,
                WEIGHT_TRANSFER,
                FORM_PERCENT_TOLERANCE,
            ),
            0.15,
        ),
        (
            geometry::range_score(metrics.arm_extension, ARM_EXTENSION, FORM_PERCENT_TOLERANCE),
            0.15,
        ),
    ];
    components
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn test_key_frame_fallbacks() {
        let keys = KeyFrames::locate(10, &[]);
        assert_eq!(
            keys,
            KeyFrames {
                setup: 0,
                backswing: 3,
                impact: 7,
                follow_through: 9,
            }
        );
    }

    #[test]
    fn test_upright_spine_is_zero() {
        let frame = PoseFrame::new(0.0)
            .with_joint(Joint::LeftHip, Vector3::new(-0.1, 0.9, 0.0), 0.9)
            .with_joint(Joint::RightHip, Vector3::new(0.1, 0.9, 0.0), 0.9)
            .with_joint(Joint::Head, Vector3::new(0.0, 1.7, 0.0), 0.9);
        assert!(spine_angle(&frame).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_single_tracked_arm_is_used() {
        let frame = PoseFrame::new(0.0)
            .with_joint(Joint::LeftShoulder, Vector3::new(0.0, 1.4, 0.0), 0.9)
            .with_joint(Joint::LeftElbow, Vector3::new(0.0, 1.1, 0.0), 0.9)
            .with_joint(Joint::LeftWrist, Vector3::new(0.0, 0.8, 0.0), 0.9);
        assert!((best_elbow_extension(&frame).unwrap() - 100.0).abs() < 1e-9);
    }
}

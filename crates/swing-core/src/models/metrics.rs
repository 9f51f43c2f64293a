// ABOUTME: Form, speed, kinetic chain, and consistency metric records for one swing
// ABOUTME: SwingMetrics aggregates them and combines composites with per-sport weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Sport;

/// Body-mechanics measurements (angles in degrees, percentages in `[0, 100]`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FormMetrics {
    /// Hip-line rotation between setup and impact
    pub hip_rotation: f64,
    /// Shoulder-line rotation between setup and impact
    pub shoulder_rotation: f64,
    /// Spine tilt from vertical at setup
    pub spine_angle_setup: f64,
    /// Spine tilt from vertical at impact
    pub spine_angle_impact: f64,
    /// Hip-center displacement relative to a full transfer
    pub weight_transfer: f64,
    /// Weighted elbow extension across key frames
    pub arm_extension: f64,
    /// Weighted range-normalized composite
    pub composite_score: f64,
}

impl FormMetrics {
    /// Separation between shoulder and hip rotation
    #[must_use]
    pub fn x_factor(&self) -> f64 {
        (self.shoulder_rotation - self.hip_rotation).abs()
    }

    /// Change in spine angle between setup and impact
    #[must_use]
    pub fn spine_angle_deviation(&self) -> f64 {
        (self.spine_angle_impact - self.spine_angle_setup).abs()
    }

    /// The six raw measurements, in a fixed order
    #[must_use]
    pub const fn raw_values(&self) -> [f64; 6] {
        [
            self.hip_rotation,
            self.shoulder_rotation,
            self.spine_angle_setup,
            self.spine_angle_impact,
            self.weight_transfer,
            self.arm_extension,
        ]
    }
}

/// Timing of segment angular-velocity peaks during the power phase
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KineticChainAnalysis {
    /// Time of peak hip angular velocity, seconds from the first frame
    pub hip_peak_time: f64,
    /// Time of peak shoulder angular velocity
    pub shoulder_peak_time: f64,
    /// Time of peak hand speed
    pub hand_peak_time: f64,
    /// Shoulder peak minus hip peak
    pub hip_to_shoulder_delay: f64,
    /// Hand peak minus shoulder peak
    pub shoulder_to_hand_delay: f64,
    /// Hips peaked before shoulders, which peaked before hands
    pub proper_sequence: bool,
    /// Sequencing quality in `[0, 100]`
    pub sequencing_score: f64,
}

/// Hand speed measurements (mph, mph/s, seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedMetrics {
    /// Maximum hand speed
    pub peak_speed: f64,
    /// Hand speed at the start of impact
    pub impact_speed: f64,
    /// Mean hand speed over the power phase
    pub average_power_phase_speed: f64,
    /// Maximum hand acceleration
    pub peak_acceleration: f64,
    /// Time from the first frame to peak speed
    pub time_to_peak_speed: f64,
    /// Weighted range-normalized composite
    pub composite_score: f64,
    /// Sequencing diagnostics, absent when the window is too short
    pub kinetic_chain: Option<KineticChainAnalysis>,
}

/// Comparison against the sport's ideal baseline swing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    /// Weighted absolute speed difference, mph
    pub speed_variance: f64,
    /// Mean key-joint distance at proportional sample points
    pub position_variance: f64,
    /// Mean absolute difference of the form measurements
    pub form_variance: f64,
    /// Absolute difference in time to peak speed, seconds
    pub timing_variance: f64,
    /// 100 minus penalties, clamped to `[0, 100]`
    pub repeatability_score: f64,
    /// Weighted range-normalized composite
    pub composite_score: f64,
}

/// Relative importance of the three components for one sport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Form weight
    pub form: f64,
    /// Speed weight
    pub speed: f64,
    /// Consistency weight
    pub consistency: f64,
}

impl ComponentWeights {
    /// Create a weight triple
    #[must_use]
    pub const fn new(form: f64, speed: f64, consistency: f64) -> Self {
        Self {
            form,
            speed,
            consistency,
        }
    }

    /// Sum of the three weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.form + self.speed + self.consistency
    }

    /// Weighted mean of the available component scores
    ///
    /// A missing consistency score is left out and the remaining weights are
    /// renormalized by their sum, so absence is never treated as zero.
    #[must_use]
    pub fn combine(&self, form: f64, speed: f64, consistency: Option<f64>) -> f64 {
        let (weighted, total) = consistency.map_or_else(
            || (form * self.form + speed * self.speed, self.form + self.speed),
            |consistency| {
                (
                    form * self.form + speed * self.speed + consistency * self.consistency,
                    self.total(),
                )
            },
        );
        if total <= 0.0 {
            return 0.0;
        }
        (weighted / total).clamp(0.0, 100.0)
    }
}

/// All metrics computed for one swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingMetrics {
    /// Unique identifier of this metrics record
    pub id: Uuid,
    /// Sport analyzed
    pub sport: Sport,
    /// Form component
    pub form: FormMetrics,
    /// Speed component
    pub speed: SpeedMetrics,
    /// Consistency component, absent without a baseline
    pub consistency: Option<ConsistencyMetrics>,
    /// When the metrics were computed
    pub created_at: DateTime<Utc>,
}

impl SwingMetrics {
    /// Bundle component metrics with a fresh id and timestamp
    #[must_use]
    pub fn new(
        sport: Sport,
        form: FormMetrics,
        speed: SpeedMetrics,
        consistency: Option<ConsistencyMetrics>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport,
            form,
            speed,
            consistency,
            created_at: Utc::now(),
        }
    }

    /// Overall weighted score in `[0, 100]`
    #[must_use]
    pub fn overall_score(&self, weights: &ComponentWeights) -> f64 {
        weights.combine(
            self.form.composite_score,
            self.speed.composite_score,
            self.consistency.map(|c| c.composite_score),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_renormalizes_without_consistency() {
        let weights = ComponentWeights::new(0.45, 0.30, 0.25);
        let score = weights.combine(80.0, 60.0, None);
        let expected = 80.0f64.mul_add(0.45, 60.0 * 0.30) / 0.75;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_derived_form_values() {
        let form = FormMetrics {
            hip_rotation: 45.0,
            shoulder_rotation: 90.0,
            spine_angle_setup: 30.0,
            spine_angle_impact: 34.0,
            ..FormMetrics::default()
        };
        assert!((form.x_factor() - 45.0).abs() < f64::EPSILON);
        assert!((form.spine_angle_deviation() - 4.0).abs() < f64::EPSILON);
    }
}

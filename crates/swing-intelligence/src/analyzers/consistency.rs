// ABOUTME: Consistency analyzer comparing a swing against the sport's ideal baseline
// ABOUTME: Computes speed, position, form, and timing variance and a repeatability score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Consistency analysis
//!
//! A missing baseline, or a repository failure, yields `None` rather than a
//! zero-valued result so the score generator can drop the component.

use std::sync::Arc;

use swing_core::constants::consistency::{
    FORM_PENALTY_FACTOR, POSITION_PENALTY_MAX, POSITION_VARIANCE_CAP, POSITION_VARIANCE_FREE,
    SPEED_PENALTY_PER_MPH, SPEED_VARIANCE_CAP, SPEED_VARIANCE_FREE, TIMING_PENALTY_MAX,
    TIMING_VARIANCE_CAP, TIMING_VARIANCE_FREE,
};
use swing_core::constants::metrics::POSITION_SAMPLE_POINTS;
use swing_core::models::{
    BaselineSwing, ConsistencyMetrics, FormMetrics, Joint, PoseFrame, SpeedMetrics, Sport,
};
use tracing::{debug, warn};

use crate::baseline::BaselineRepository;
use crate::geometry;

/// Compares swings against stored baselines
#[derive(Clone)]
pub struct ConsistencyAnalyzer {
    repository: Arc<dyn BaselineRepository>,
}

impl ConsistencyAnalyzer {
    /// Analyzer reading baselines from the given repository
    #[must_use]
    pub fn new(repository: Arc<dyn BaselineRepository>) -> Self {
        Self { repository }
    }

    /// Compare a swing against the baseline for its sport
    ///
    /// Returns `None` when no baseline is stored or the lookup fails.
    pub async fn analyze(
        &self,
        frames: &[PoseFrame],
        form: &FormMetrics,
        speed: &SpeedMetrics,
        sport: Sport,
    ) -> Option<ConsistencyMetrics> {
        let baseline = match self.repository.get_baseline(sport).await {
            Ok(Some(baseline)) => baseline,
            Ok(None) => {
                debug!(sport = %sport, "no baseline stored, skipping consistency");
                return None;
            }
            Err(error) => {
                warn!(sport = %sport, error = %error, "baseline lookup failed, skipping consistency");
                return None;
            }
        };
        Some(compare_with_baseline(frames, form, speed, &baseline))
    }
}

/// Compare a swing's frames and metrics against one baseline
#[must_use]
pub fn compare_with_baseline(
    frames: &[PoseFrame],
    form: &FormMetrics,
    speed: &SpeedMetrics,
    baseline: &BaselineSwing,
) -> ConsistencyMetrics {
    let speed_variance = speed_variance(speed, &baseline.metrics.speed);
    let position_variance = position_variance(frames, &baseline.frames);
    let form_variance = form_variance(form, &baseline.metrics.form);
    let timing_variance =
        (speed.time_to_peak_speed - baseline.metrics.speed.time_to_peak_speed).abs();
    let repeatability_score = repeatability_score(
        speed_variance,
        position_variance,
        form_variance,
        timing_variance,
    );

    let mut metrics = ConsistencyMetrics {
        speed_variance,
        position_variance,
        form_variance,
        timing_variance,
        repeatability_score,
        composite_score: 0.0,
    };
    metrics.composite_score = composite_score(&metrics);
    metrics
}

/// Weighted absolute difference of peak, impact, and power-phase speed
#[must_use]
pub fn speed_variance(current: &SpeedMetrics, baseline: &SpeedMetrics) -> f64 {
    0.2f64.mul_add(
        (current.average_power_phase_speed - baseline.average_power_phase_speed).abs(),
        0.4f64.mul_add(
            (current.peak_speed - baseline.peak_speed).abs(),
            0.4 * (current.impact_speed - baseline.impact_speed).abs(),
        ),
    )
}

/// Mean key-joint distance at proportional sample points
///
/// Sample `s` of `m` maps to index `round(s / (m - 1) * (len - 1))` in each
/// sequence, so recordings of different lengths line up by progress through
/// the swing. Only joints tracked in both frames contribute.
#[must_use]
pub fn position_variance(current: &[PoseFrame], baseline: &[PoseFrame]) -> f64 {
    let samples = POSITION_SAMPLE_POINTS.min(current.len()).min(baseline.len());
    if samples == 0 {
        return 0.0;
    }
    let per_sample: Vec<f64> = (0..samples)
        .filter_map(|sample| {
            let fraction = if samples == 1 {
                0.0
            } else {
                sample as f64 / (samples - 1) as f64
            };
            let a = &current[proportional_index(current.len(), fraction)];
            let b = &baseline[proportional_index(baseline.len(), fraction)];
            let distances: Vec<f64> = Joint::KEY_JOINTS
                .iter()
                .filter_map(|joint| Some((a.position(*joint)? - b.position(*joint)?).norm()))
                .collect();
            (!distances.is_empty()).then(|| geometry::mean(&distances))
        })
        .collect();
    geometry::mean(&per_sample)
}

fn proportional_index(len: usize, fraction: f64) -> usize {
    ((fraction * (len - 1) as f64).round() as usize).min(len - 1)
}

/// Mean absolute difference of the six form measurements
#[must_use]
pub fn form_variance(current: &FormMetrics, baseline: &FormMetrics) -> f64 {
    let differences: Vec<f64> = current
        .raw_values()
        .iter()
        .zip(baseline.raw_values())
        .map(|(a, b)| (a - b).abs())
        .collect();
    geometry::mean(&differences)
}

/// 100 minus capped penalties for each variance, clamped to `[0, 100]`
#[must_use]
pub fn repeatability_score(
    speed_variance: f64,
    position_variance: f64,
    form_variance: f64,
    timing_variance: f64,
) -> f64 {
    let speed_penalty = if speed_variance > SPEED_VARIANCE_FREE {
        (speed_variance - SPEED_VARIANCE_FREE).min(SPEED_VARIANCE_CAP) * SPEED_PENALTY_PER_MPH
    } else {
        0.0
    };
    let position_penalty = if position_variance > POSITION_VARIANCE_FREE {
        (position_variance.min(POSITION_VARIANCE_CAP) - POSITION_VARIANCE_FREE)
            / (POSITION_VARIANCE_CAP - POSITION_VARIANCE_FREE)
            * POSITION_PENALTY_MAX
    } else {
        0.0
    };
    let timing_penalty = if timing_variance > TIMING_VARIANCE_FREE {
        (timing_variance.min(TIMING_VARIANCE_CAP) - TIMING_VARIANCE_FREE)
            / (TIMING_VARIANCE_CAP - TIMING_VARIANCE_FREE)
            * TIMING_PENALTY_MAX
    } else {
        0.0
    };
    let form_penalty = form_variance * FORM_PENALTY_FACTOR;

    (100.0 - speed_penalty - position_penalty - form_penalty - timing_penalty).clamp(0.0, 100.0)
}

fn composite_score(metrics: &ConsistencyMetrics) -> f64 {
    let components = [
        (metrics.repeatability_score, 0.5),
        (
            geometry::range_score(metrics.speed_variance, (0.0, 2.0), 10.0),
            0.2,
        ),
        (
            geometry::range_score(metrics.position_variance, (0.0, 0.05), 0.25),
            0.2,
        ),
        (
            geometry::range_score(metrics.timing_variance, (0.0, 0.03), 0.2),
            0.1,
        ),
    ];
    components
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

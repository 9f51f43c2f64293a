// ABOUTME: Speed analyzer computing hand speed, acceleration, and kinetic chain sequencing
// ABOUTME: Uses finite differences over wrist positions, reported in miles per hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Speed analysis
//!
//! The speed series has one sample per consecutive frame pair; sample `k`
//! describes the motion arriving at frame `k + 1`. Fewer than three frames
//! produce zero-valued metrics.

use swing_core::constants::metrics::{IMPACT_FALLBACK_FRACTION, MIN_SPEED_FRAMES};
use swing_core::constants::optimal_ranges::{
    IMPACT_SPEED, KINETIC_CHAIN_GAP, PEAK_ACCELERATION, PEAK_SPEED, POWER_PHASE_SPEED,
};
use swing_core::constants::units::MPS_TO_MPH;
use swing_core::models::{
    find_phase, DetectedPhase, Joint, KineticChainAnalysis, PoseFrame, SpeedMetrics, SwingPhase,
};
use tracing::debug;

use crate::geometry;

/// Kinetic chain fallback window when no phases are available
const KINETIC_CHAIN_FALLBACK: (f64, f64) = (0.35, 0.8);
/// Score awarded per well-timed gap
const GAP_SCORE: f64 = 50.0;
/// Seconds outside the ideal gap over which the score decays to zero
const GAP_DECAY: f64 = 0.1;

/// Computes `SpeedMetrics` for one swing
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedAnalyzer;

impl SpeedAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a swing
    #[must_use]
    pub fn analyze(&self, frames: &[PoseFrame], phases: &[DetectedPhase]) -> SpeedMetrics {
        if frames.len() < MIN_SPEED_FRAMES {
            return SpeedMetrics::default();
        }
        let speeds = hand_speed_series(frames);
        let accelerations = acceleration_series(frames, &speeds);

        let (peak_index, peak_speed) = speeds
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0.0_f64), |best, (index, speed)| {
                if speed > best.1 {
                    (index, speed)
                } else {
                    best
                }
            });
        let peak_acceleration = accelerations.iter().copied().fold(0.0_f64, f64::max);

        let mut metrics = SpeedMetrics {
            peak_speed,
            impact_speed: impact_speed(frames.len(), &speeds, phases),
            average_power_phase_speed: power_phase_speed(frames.len(), &speeds, phases),
            peak_acceleration,
            time_to_peak_speed: (frames[peak_index + 1].timestamp - frames[0].timestamp).max(0.0),
            composite_score: 0.0,
            kinetic_chain: kinetic_chain(frames, &speeds, phases),
        };
        metrics.composite_score = composite_score(&metrics);

        debug!(
            peak_speed = metrics.peak_speed,
            impact_speed = metrics.impact_speed,
            composite = metrics.composite_score,
            "speed analysis complete"
        );
        metrics
    }
}

/// Faster wrist's speed in mph for each consecutive frame pair
///
/// Pairs with a non-positive time step or no tracked wrist contribute zero.
#[must_use]
pub fn hand_speed_series(frames: &[PoseFrame]) -> Vec<f64> {
    frames
        .windows(2)
        .map(|pair| {
            [Joint::LeftWrist, Joint::RightWrist]
                .iter()
                .filter_map(|wrist| geometry::joint_velocity(&pair[0], &pair[1], *wrist))
                .map(|velocity| velocity.norm() * MPS_TO_MPH)
                .fold(0.0_f64, f64::max)
        })
        .collect()
}

/// Finite difference of the speed series in mph per second
///
/// Samples whose time step is not positive are skipped.
#[must_use]
pub fn acceleration_series(frames: &[PoseFrame], speeds: &[f64]) -> Vec<f64> {
    speeds
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let dt = frames.get(index + 2)?.timestamp - frames.get(index + 1)?.timestamp;
            (dt > 0.0).then(|| (pair[1] - pair[0]) / dt)
        })
        .collect()
}

fn sample_for_frame(frame_index: usize, sample_count: usize) -> usize {
    frame_index.saturating_sub(1).min(sample_count.saturating_sub(1))
}

fn impact_speed(frame_count: usize, speeds: &[f64], phases: &[DetectedPhase]) -> f64 {
    let impact_frame = find_phase(phases, SwingPhase::Impact).map_or_else(
        || geometry::fraction_index(frame_count, IMPACT_FALLBACK_FRACTION),
        |phase| phase.start_frame_index,
    );
    speeds
        .get(sample_for_frame(impact_frame, speeds.len()))
        .copied()
        .unwrap_or(0.0)
}

/// Inclusive frame range of the power phase (downswing through impact)
fn power_phase_range(frame_count: usize, phases: &[DetectedPhase]) -> (usize, usize) {
    let downswing = find_phase(phases, SwingPhase::Downswing);
    let impact = find_phase(phases, SwingPhase::Impact);
    match (downswing, impact) {
        (Some(down), Some(hit)) => (down.start_frame_index, hit.end_frame_index),
        (Some(down), None) => (down.start_frame_index, down.end_frame_index),
        (None, Some(hit)) => (hit.start_frame_index, hit.end_frame_index),
        (None, None) => (
            geometry::fraction_index(frame_count, IMPACT_FALLBACK_FRACTION),
            frame_count.saturating_sub(1),
        ),
    }
}

fn power_phase_speed(frame_count: usize, speeds: &[f64], phases: &[DetectedPhase]) -> f64 {
    let (start, end) = power_phase_range(frame_count, phases);
    let samples: Vec<f64> = speeds
        .iter()
        .enumerate()
        .filter(|(index, _)| (start..=end).contains(&(index + 1)))
        .map(|(_, speed)| *speed)
        .collect();
    geometry::mean(&samples)
}

/// Score one inter-segment gap out of 50
fn gap_score(gap: f64) -> f64 {
    let (low, high) = KINETIC_CHAIN_GAP;
    if gap <= 0.0 {
        return 0.0;
    }
    let outside = if gap < low {
        low - gap
    } else if gap > high {
        gap - high
    } else {
        return GAP_SCORE;
    };
    (GAP_SCORE * (1.0 - outside / GAP_DECAY)).max(0.0)
}

fn peak_time<I>(samples: I, frames: &[PoseFrame]) -> Option<f64>
where
    I: Iterator<Item = (usize, Option<f64>)>,
{
    samples
        .filter_map(|(sample, value)| value.map(|v| (sample, v)))
        .fold(None, |best: Option<(usize, f64)>, (sample, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((sample, value)),
        })
        .map(|(sample, _)| frames[sample + 1].timestamp - frames[0].timestamp)
}

/// Time the hip, shoulder, and hand peaks within the transition-to-impact window
#[must_use]
pub fn kinetic_chain(
    frames: &[PoseFrame],
    speeds: &[f64],
    phases: &[DetectedPhase],
) -> Option<KineticChainAnalysis> {
    let start_frame = find_phase(phases, SwingPhase::Transition).map_or_else(
        || geometry::fraction_index(frames.len(), KINETIC_CHAIN_FALLBACK.0),
        |phase| phase.start_frame_index,
    );
    let end_frame = find_phase(phases, SwingPhase::Impact).map_or_else(
        || geometry::fraction_index(frames.len(), KINETIC_CHAIN_FALLBACK.1),
        |phase| phase.start_frame_index,
    );
    let end_frame = end_frame.min(frames.len().saturating_sub(1));
    if end_frame < start_frame + 2 {
        return None;
    }
    let window = start_frame..end_frame;

    let angular = |left: Joint, right: Joint| {
        window.clone().map(move |sample| {
            (
                sample,
                geometry::line_angular_speed(&frames[sample], &frames[sample + 1], left, right),
            )
        })
    };

    let hip_peak_time = peak_time(angular(Joint::LeftHip, Joint::RightHip), frames)?;
    let shoulder_peak_time =
        peak_time(angular(Joint::LeftShoulder, Joint::RightShoulder), frames)?;
    let hand_peak_time = peak_time(
        window
            .clone()
            .map(|sample| (sample, speeds.get(sample).copied())),
        frames,
    )?;

    let hip_to_shoulder_delay = shoulder_peak_time - hip_peak_time;
    let shoulder_to_hand_delay = hand_peak_time - shoulder_peak_time;
    Some(KineticChainAnalysis {
        hip_peak_time,
        shoulder_peak_time,
        hand_peak_time,
        hip_to_shoulder_delay,
        shoulder_to_hand_delay,
        proper_sequence: hip_to_shoulder_delay > 0.0 && shoulder_to_hand_delay > 0.0,
        sequencing_score: gap_score(hip_to_shoulder_delay) + gap_score(shoulder_to_hand_delay),
    })
}

fn composite_score(metrics: &SpeedMetrics) -> f64 {
    let components = [
        (geometry::range_score(metrics.peak_speed, PEAK_SPEED, 15.0), 0.35),
        (
            geometry::range_score(metrics.impact_speed, IMPACT_SPEED, 12.0),
            0.35,
        ),
        (
            geometry::range_score(metrics.average_power_phase_speed, POWER_PHASE_SPEED, 10.0),
            0.15,
        ),
        (
            geometry::range_score(metrics.peak_acceleration, PEAK_ACCELERATION, 100.0),
            0.15,
        ),
    ];
    components
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

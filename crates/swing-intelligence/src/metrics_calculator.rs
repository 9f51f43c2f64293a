// ABOUTME: Metrics orchestrator running form, speed, and consistency analysis for one swing
// ABOUTME: Handles frame decimation, fallback phase estimation, and streaming partial metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Swing Metrics Calculator
//!
//! Batch and streaming entry points share [`SwingMetricsCalculator::analyze_components`]
//! so live feedback and final metrics never diverge.
//!
//! When no detector phases are supplied, [`estimate_phases`] splits the
//! recording at fixed fractions calibrated for a golf tempo. It is a fallback
//! for recordings without detector output, not a replacement for the state
//! machine, and its boundaries are not tuned for other sports.

use std::borrow::Cow;
use std::sync::Arc;

use swing_core::errors::AnalysisError;
use swing_core::models::{
    DetectedPhase, FormMetrics, PoseFrame, SpeedMetrics, Sport, SwingMetrics, SwingPhase,
};
use tracing::{debug, info};

use crate::analyzers::{ConsistencyAnalyzer, FormAnalyzer, SpeedAnalyzer};
use crate::baseline::BaselineRepository;
use crate::config::{AnalysisConfig, MetricsConfig};

/// Fraction of the recording at which each phase ends, in canonical order
pub const PHASE_END_FRACTIONS: [f64; 6] = [0.0, 0.35, 0.45, 0.75, 0.80, 1.0];

/// Orchestrates the analyzers for one swing
#[derive(Clone)]
pub struct SwingMetricsCalculator {
    config: MetricsConfig,
    form: FormAnalyzer,
    speed: SpeedAnalyzer,
    consistency: Option<ConsistencyAnalyzer>,
}

impl Default for SwingMetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SwingMetricsCalculator {
    /// Calculator using the global configuration and no baseline repository
    #[must_use]
    pub fn new() -> Self {
        let config = AnalysisConfig::global();
        Self::with_config(config.metrics.clone(), FormAnalyzer::new())
    }

    /// Calculator with explicit metrics configuration and form analyzer
    #[must_use]
    pub const fn with_config(config: MetricsConfig, form: FormAnalyzer) -> Self {
        Self {
            config,
            form,
            speed: SpeedAnalyzer::new(),
            consistency: None,
        }
    }

    /// Enable consistency analysis against the given baseline repository
    #[must_use]
    pub fn with_baseline_repository(mut self, repository: Arc<dyn BaselineRepository>) -> Self {
        self.consistency = Some(ConsistencyAnalyzer::new(repository));
        self
    }

    /// Active metrics configuration
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute all metrics for a completed swing
    ///
    /// Consistency is present only when a baseline repository is configured
    /// and holds a baseline for `sport`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientFrames`] for an empty recording and
    /// [`AnalysisError::InvalidDecimation`] for a zero decimation factor
    pub async fn calculate_metrics(
        &self,
        frames: &[PoseFrame],
        sport: Sport,
        phases: Option<&[DetectedPhase]>,
    ) -> Result<SwingMetrics, AnalysisError> {
        if frames.is_empty() {
            return Err(AnalysisError::insufficient_frames(1, 0));
        }
        let factor = self.config.decimation_factor;
        let frames = decimate(frames, factor)?;
        let phases = Self::resolve_phases(&frames, phases, factor);

        let (form, speed) = self.analyze_components(&frames, &phases);
        let consistency = match &self.consistency {
            Some(analyzer) => analyzer.analyze(&frames, &form, &speed, sport).await,
            None => None,
        };

        let metrics = SwingMetrics::new(sport, form, speed, consistency);
        info!(
            sport = %sport,
            frames = frames.len(),
            decimation = factor,
            form = metrics.form.composite_score,
            speed = metrics.speed.composite_score,
            consistency = ?metrics.consistency.map(|c| c.composite_score),
            "swing metrics calculated"
        );
        Ok(metrics)
    }

    /// Partial metrics over a growing live buffer
    ///
    /// Runs the same form and speed analysis as the batch path. Consistency
    /// is always absent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientFrames`] while the buffer holds
    /// fewer than the configured streaming minimum and
    /// [`AnalysisError::InvalidDecimation`] for a zero decimation factor
    pub fn calculate_streaming_metrics(
        &self,
        frames: &[PoseFrame],
        sport: Sport,
        phases: Option<&[DetectedPhase]>,
    ) -> Result<SwingMetrics, AnalysisError> {
        let required = self.config.streaming_min_frames;
        if frames.len() < required {
            return Err(AnalysisError::insufficient_frames(required, frames.len()));
        }
        let factor = self.config.decimation_factor;
        let frames = decimate(frames, factor)?;
        let phases = Self::resolve_phases(&frames, phases, factor);

        let (form, speed) = self.analyze_components(&frames, &phases);
        debug!(sport = %sport, frames = frames.len(), "streaming metrics calculated");
        Ok(SwingMetrics::new(sport, form, speed, None))
    }

    /// Run the form and speed analyzers over the same inputs
    fn analyze_components(
        &self,
        frames: &[PoseFrame],
        phases: &[DetectedPhase],
    ) -> (FormMetrics, SpeedMetrics) {
        rayon::join(
            || self.form.analyze(frames, phases),
            || self.speed.analyze(frames, phases),
        )
    }

    fn resolve_phases(
        frames: &[PoseFrame],
        phases: Option<&[DetectedPhase]>,
        factor: usize,
    ) -> Vec<DetectedPhase> {
        match phases {
            Some(phases) if !phases.is_empty() => remap_phases(phases, factor, frames.len()),
            _ => {
                debug!(frames = frames.len(), "no detector phases, using fixed-fraction estimate");
                estimate_phases(frames)
            }
        }
    }
}

/// Keep every `factor`-th frame, starting with the first
///
/// A factor of 1 borrows the input unchanged.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidDecimation`] when `factor` is zero
pub fn decimate(frames: &[PoseFrame], factor: usize) -> Result<Cow<'_, [PoseFrame]>, AnalysisError> {
    match factor {
        0 => Err(AnalysisError::InvalidDecimation(factor)),
        1 => Ok(Cow::Borrowed(frames)),
        _ => Ok(Cow::Owned(frames.iter().step_by(factor).cloned().collect())),
    }
}

/// Map detected phases onto a sequence decimated by `factor`
///
/// Each phase starts at the first kept frame at or after its original start
/// and ends one frame before the next phase starts, so the result stays
/// ordered and gap-free. Phases left without a kept frame are dropped.
#[must_use]
pub fn remap_phases(
    phases: &[DetectedPhase],
    factor: usize,
    frame_count: usize,
) -> Vec<DetectedPhase> {
    if factor <= 1 {
        return phases.to_vec();
    }
    let Some(last) = frame_count.checked_sub(1) else {
        return Vec::new();
    };
    let starts: Vec<usize> = phases
        .iter()
        .map(|phase| phase.start_frame_index.div_ceil(factor))
        .collect();

    phases
        .iter()
        .zip(&starts)
        .enumerate()
        .filter_map(|(index, (phase, &start))| {
            let end = match starts.get(index + 1) {
                Some(&next) => next.checked_sub(1)?,
                None => phase.end_frame_index / factor,
            }
            .min(last);
            (start <= end).then_some(DetectedPhase {
                start_frame_index: start,
                end_frame_index: end,
                ..*phase
            })
        })
        .collect()
}

/// Fixed-fraction phase estimate for recordings without detector output
///
/// Phase `k` ends at frame `round(PHASE_END_FRACTIONS[k] * (n - 1))` and starts
/// one frame after the previous phase ends. Phases that receive no frames are
/// omitted, so very short recordings yield fewer than six phases.
#[must_use]
pub fn estimate_phases(frames: &[PoseFrame]) -> Vec<DetectedPhase> {
    let Some(last_frame) = frames.last() else {
        return Vec::new();
    };
    let last = frames.len() - 1;
    let mut phases = Vec::with_capacity(SwingPhase::ALL.len());
    let mut start = 0;
    for (phase, fraction) in SwingPhase::ALL.iter().zip(PHASE_END_FRACTIONS) {
        let end = ((fraction * last as f64).round() as usize).min(last);
        if start > end {
            continue;
        }
        let end_time = frames
            .get(end + 1)
            .map_or(last_frame.timestamp, |next| next.timestamp);
        phases.push(DetectedPhase {
            phase: *phase,
            start_time: frames[start].timestamp,
            end_time,
            start_frame_index: start,
            end_frame_index: end,
        });
        start = end + 1;
    }
    phases
}

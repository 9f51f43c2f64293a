// ABOUTME: Swing phase detection with a shared state machine driven by per-sport strategies
// ABOUTME: Defines the PhaseDetector capability set and the SwingStrategy extension point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Phase Detection
//!
//! Each detector owns a bounded trailing history of confident frames and a
//! [`SwingAnalysis`]. Frames are fed one at a time, in timestamp order, and
//! each frame can advance the swing by at most one phase:
//!
//! | From | Exit condition |
//! |---|---|
//! | Setup | hands held still for the static window, then an initiation move above the initiation speed |
//! | Backswing | after the minimum dwell, a 3-sample peak on the primary axis confirmed by the sport's top gate |
//! | Transition | primary axis falling over 3 samples above the downswing speed |
//! | Downswing | hands in the contact zone at a 3-sample height extremum |
//! | Impact | hand speed below a fraction of the downswing peak |
//!
//! Predicates that need an untracked joint are simply not met; the detector
//! never errors and a session with persistently low confidence stays in Setup.
//!
//! ## Coordinates
//!
//! `+y` is up and `+x` points toward the target for a right-handed athlete.
//! Handedness flips the sign of lateral predicates and nothing else.

mod batting;
mod factory;
mod golf;
mod racquet;

pub use batting::{BattingPhaseDetector, BattingStrategy};
pub use factory::PhaseDetectorFactory;
pub use golf::{GolfPhaseDetector, GolfStrategy};
pub use racquet::{RacquetPhaseDetector, RacquetStrategy};

use std::collections::VecDeque;

use nalgebra::Vector3;
use swing_core::models::{
    DetectedPhase, Handedness, PhaseTransition, PoseFrame, Sport, SwingAnalysis,
    SwingConfiguration, SwingPhase,
};
use tracing::{debug, trace};

use crate::config::{DetectionConfig, PhaseThresholds};
use crate::geometry;

/// Capability set shared by every sport's detector
pub trait PhaseDetector: Send {
    /// Feed the newest frame and return a snapshot of the analysis
    ///
    /// The detector keeps its own trailing history, so callers only pass the
    /// newest frame. Unmet conditions leave the state unchanged.
    fn detect_phase(&mut self, pose: &PoseFrame) -> SwingAnalysis;

    /// Clear history and return to `Setup`; call between swings
    fn reset(&mut self);

    /// Frames whose overall confidence is below this are ignored
    fn minimum_confidence(&self) -> f64;

    /// Change the minimum overall frame confidence
    fn set_minimum_confidence(&mut self, minimum_confidence: f64);

    /// Sport this detector was built for
    fn sport(&self) -> Sport;

    /// Current analysis state
    fn analysis(&self) -> &SwingAnalysis;

    /// Gap-free phase ranges covering every frame fed since the last reset
    fn detected_phases(&self) -> Vec<DetectedPhase>;
}

/// Axis along which the backswing loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAxis {
    /// Hands rise (golf, serve)
    Vertical,
    /// Hands move back away from the target (batting, groundstrokes)
    Lateral,
}

/// Height extremum that marks contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightExtremum {
    /// Hands bottom out at contact
    Minimum,
    /// Hands top out at contact
    Maximum,
}

/// Frames available to a sport's top-of-backswing gate
#[derive(Debug, Clone, Copy)]
pub struct TopCheck<'a> {
    /// Frame at the candidate peak (the one before the newest)
    pub peak: &'a PoseFrame,
    /// Newest frame
    pub latest: &'a PoseFrame,
    /// Athlete handedness
    pub handedness: Handedness,
    /// Active thresholds
    pub thresholds: &'a PhaseThresholds,
}

/// Sport-specific predicates plugged into the shared state machine
pub trait SwingStrategy: Send {
    /// Sport the strategy describes
    fn sport(&self) -> Sport;

    /// Axis on which the backswing peak is detected
    fn primary_axis(&self) -> MotionAxis;

    /// Whether a frame-to-frame hand displacement starts the backswing
    fn is_initiation(&self, delta: &Vector3<f64>, lateral_sign: f64) -> bool;

    /// Secondary validation of a backswing top
    fn top_confirmed(&self, check: &TopCheck<'_>) -> bool;

    /// Height extremum that marks contact
    fn impact_extremum(&self) -> HeightExtremum {
        HeightExtremum::Minimum
    }

    /// Whether a hand height relative to the hip center is in the contact zone
    fn in_contact_zone(&self, thresholds: &PhaseThresholds, relative_height: f64) -> bool {
        thresholds.in_contact_zone(relative_height)
    }
}

/// Displacement away from the target
#[must_use]
pub fn backward_component(delta: &Vector3<f64>, lateral_sign: f64) -> f64 {
    -delta.x * lateral_sign
}

/// Generic phase state machine parameterized by a sport strategy
#[derive(Debug)]
pub struct SwingStateMachine<S: SwingStrategy> {
    strategy: S,
    thresholds: PhaseThresholds,
    handedness: Handedness,
    minimum_confidence: f64,
    history_capacity: usize,
    history: VecDeque<PoseFrame>,
    analysis: SwingAnalysis,
    frames_seen: usize,
    first_timestamp: Option<f64>,
    last_timestamp: f64,
    ready: bool,
    backswing_peak: f64,
    peak_speed: f64,
}

impl<S: SwingStrategy> SwingStateMachine<S> {
    /// Build a detector from a strategy and explicit configuration
    #[must_use]
    pub fn with_strategy(
        strategy: S,
        configuration: &SwingConfiguration,
        detection: &DetectionConfig,
    ) -> Self {
        let thresholds = detection
            .thresholds_for(strategy.sport())
            .scaled_for(configuration.implement);
        Self {
            strategy,
            thresholds,
            handedness: configuration.handedness,
            minimum_confidence: configuration
                .minimum_confidence
                .unwrap_or(detection.minimum_confidence),
            history_capacity: detection.history_capacity.max(thresholds.static_window + 1),
            history: VecDeque::with_capacity(detection.history_capacity),
            analysis: SwingAnalysis::new(),
            frames_seen: 0,
            first_timestamp: None,
            last_timestamp: 0.0,
            ready: false,
            backswing_peak: f64::NEG_INFINITY,
            peak_speed: 0.0,
        }
    }

    /// Active (implement-scaled) thresholds
    #[must_use]
    pub const fn thresholds(&self) -> &PhaseThresholds {
        &self.thresholds
    }

    /// Athlete handedness
    #[must_use]
    pub const fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Number of frames fed since the last reset
    #[must_use]
    pub const fn frames_seen(&self) -> usize {
        self.frames_seen
    }

    fn lateral_sign(&self) -> f64 {
        self.handedness.lateral_sign()
    }

    fn primary_value(&self, frame: &PoseFrame) -> Option<f64> {
        let hand = frame.hand_position()?;
        Some(match self.strategy.primary_axis() {
            MotionAxis::Vertical => hand.y,
            MotionAxis::Lateral => backward_component(&hand, self.lateral_sign()),
        })
    }

    fn recent<F>(&self, value: F) -> Option<[f64; 3]>
    where
        F: Fn(&PoseFrame) -> Option<f64>,
    {
        let len = self.history.len();
        if len < 3 {
            return None;
        }
        Some([
            value(&self.history[len - 3])?,
            value(&self.history[len - 2])?,
            value(&self.history[len - 1])?,
        ])
    }

    fn recent_primary(&self) -> Option<[f64; 3]> {
        self.recent(|frame| self.primary_value(frame))
    }

    fn recent_heights(&self) -> Option<[f64; 3]> {
        self.recent(|frame| frame.hand_position().map(|hand| hand.y))
    }

    /// Hand displacement and speed between the two newest frames
    fn latest_motion(&self) -> Option<(Vector3<f64>, f64)> {
        let len = self.history.len();
        if len < 2 {
            return None;
        }
        let previous = &self.history[len - 2];
        let latest = &self.history[len - 1];
        let before = previous.hand_position()?;
        let after = latest.hand_position()?;
        let velocity = geometry::velocity(&before, previous.timestamp, &after, latest.timestamp)?;
        Some((after - before, velocity.norm()))
    }

    fn hands_static(&self, start: usize, end: usize) -> bool {
        let Some(anchor) = self.history.get(start).and_then(PoseFrame::hand_position) else {
            return false;
        };
        self.history.range(start..end).all(|frame| {
            frame
                .hand_position()
                .is_some_and(|hand| (hand - anchor).norm() <= self.thresholds.static_tolerance)
        })
    }

    fn setup_exit(&mut self) -> bool {
        let len = self.history.len();
        let window = self.thresholds.static_window;
        if !self.ready && len > window {
            self.ready = self.hands_static(len - 1 - window, len - 1);
            if self.ready {
                trace!(sport = %self.strategy.sport(), "ready position confirmed");
            }
        }
        if !self.ready {
            return false;
        }
        self.latest_motion().is_some_and(|(delta, speed)| {
            speed >= self.thresholds.initiation_speed
                && self.strategy.is_initiation(&delta, self.lateral_sign())
        })
    }

    fn top_exit(&mut self) -> bool {
        let Some(latest) = self.history.back() else {
            return false;
        };
        let latest_timestamp = latest.timestamp;
        if let Some(value) = self.primary_value(latest) {
            self.backswing_peak = self.backswing_peak.max(value);
        }
        let dwell = latest_timestamp - self.analysis.phase_start_time;
        if dwell < self.thresholds.min_backswing_duration {
            return false;
        }
        let Some([h1, h2, h3]) = self.recent_primary() else {
            return false;
        };
        let epsilon = self.thresholds.reversal_epsilon;
        let at_peak = h2 >= h1 && h2 - h3 > epsilon && h2 >= self.backswing_peak - epsilon;
        if !at_peak {
            return false;
        }
        let len = self.history.len();
        self.strategy.top_confirmed(&TopCheck {
            peak: &self.history[len - 2],
            latest: &self.history[len - 1],
            handedness: self.handedness,
            thresholds: &self.thresholds,
        })
    }

    fn downswing_exit(&self) -> bool {
        let Some([h1, h2, h3]) = self.recent_primary() else {
            return false;
        };
        h1 > h2
            && h2 > h3
            && self
                .latest_motion()
                .is_some_and(|(_, speed)| speed > self.thresholds.downswing_speed)
    }

    fn impact_exit(&self) -> bool {
        let Some([y1, y2, y3]) = self.recent_heights() else {
            return false;
        };
        let Some(latest) = self.history.back() else {
            return false;
        };
        let (Some(hand), Some(hips)) = (latest.hand_position(), latest.hip_center()) else {
            return false;
        };
        if !self
            .strategy
            .in_contact_zone(&self.thresholds, hand.y - hips.y)
        {
            return false;
        }
        match self.strategy.impact_extremum() {
            HeightExtremum::Minimum => y1 > y2 && y2 <= y3,
            HeightExtremum::Maximum => y1 < y2 && y2 >= y3,
        }
    }

    fn follow_through_exit(&self) -> bool {
        self.peak_speed > 0.0
            && self.latest_motion().is_some_and(|(_, speed)| {
                speed < self.thresholds.follow_through_decel_ratio * self.peak_speed
            })
    }

    fn exit_condition_met(&mut self) -> bool {
        match self.analysis.current_phase {
            SwingPhase::Setup => self.setup_exit(),
            SwingPhase::Backswing => self.top_exit(),
            SwingPhase::Transition => self.downswing_exit(),
            SwingPhase::Downswing => self.impact_exit(),
            SwingPhase::Impact => self.follow_through_exit(),
            SwingPhase::FollowThrough => false,
        }
    }

    fn on_enter(&mut self, phase: SwingPhase) {
        match phase {
            SwingPhase::Backswing => {
                self.backswing_peak = self
                    .history
                    .back()
                    .and_then(|frame| self.primary_value(frame))
                    .unwrap_or(f64::NEG_INFINITY);
            }
            SwingPhase::Downswing => {
                self.peak_speed = self.latest_motion().map_or(0.0, |(_, speed)| speed);
            }
            _ => {}
        }
    }
}

impl<S: SwingStrategy> PhaseDetector for SwingStateMachine<S> {
    fn detect_phase(&mut self, pose: &PoseFrame) -> SwingAnalysis {
        let frame_index = self.frames_seen;
        self.frames_seen += 1;
        self.first_timestamp.get_or_insert(pose.timestamp);
        self.last_timestamp = pose.timestamp;

        let confidence = pose.overall_confidence();
        self.analysis.confidence = confidence;
        if confidence < self.minimum_confidence {
            trace!(frame_index, confidence, "skipping low-confidence frame");
            return self.analysis.clone();
        }

        if self.history.len() >= self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(pose.clone());

        if matches!(
            self.analysis.current_phase,
            SwingPhase::Downswing | SwingPhase::Impact
        ) {
            if let Some((_, speed)) = self.latest_motion() {
                self.peak_speed = self.peak_speed.max(speed);
            }
        }

        if self.exit_condition_met() {
            let from = self.analysis.current_phase;
            if let Some(to) = self.analysis.advance(pose.timestamp, confidence, frame_index) {
                self.on_enter(to);
                debug!(
                    sport = %self.strategy.sport(),
                    from = %from,
                    to = %to,
                    frame_index,
                    timestamp = pose.timestamp,
                    "swing phase transition"
                );
            }
        }

        self.analysis.clone()
    }

    fn reset(&mut self) {
        self.history.clear();
        self.analysis = SwingAnalysis::new();
        self.frames_seen = 0;
        self.first_timestamp = None;
        self.last_timestamp = 0.0;
        self.ready = false;
        self.backswing_peak = f64::NEG_INFINITY;
        self.peak_speed = 0.0;
    }

    fn minimum_confidence(&self) -> f64 {
        self.minimum_confidence
    }

    fn set_minimum_confidence(&mut self, minimum_confidence: f64) {
        self.minimum_confidence = minimum_confidence.clamp(0.0, 1.0);
    }

    fn sport(&self) -> Sport {
        self.strategy.sport()
    }

    fn analysis(&self) -> &SwingAnalysis {
        &self.analysis
    }

    fn detected_phases(&self) -> Vec<DetectedPhase> {
        self.first_timestamp.map_or_else(Vec::new, |first| {
            phases_from_transitions(
                &self.analysis.transitions,
                first,
                self.frames_seen,
                self.last_timestamp,
            )
        })
    }
}

/// Convert transitions into gap-free inclusive phase ranges
///
/// `Setup` starts at frame 0. Each phase ends one frame before the next
/// transition and at that transition's timestamp; the last phase ends at the
/// last frame seen.
#[must_use]
pub fn phases_from_transitions(
    transitions: &[PhaseTransition],
    first_timestamp: f64,
    frames_seen: usize,
    last_timestamp: f64,
) -> Vec<DetectedPhase> {
    if frames_seen == 0 {
        return Vec::new();
    }
    let starts: Vec<(SwingPhase, usize, f64)> = [(SwingPhase::Setup, 0, first_timestamp)]
        .into_iter()
        .chain(
            transitions
                .iter()
                .map(|transition| (transition.to_phase, transition.frame_index, transition.timestamp)),
        )
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(position, &(phase, start_frame_index, start_time))| {
            let (end_frame_index, end_time) = starts.get(position + 1).map_or(
                (frames_seen - 1, last_timestamp),
                |&(_, next_index, next_time)| (next_index.saturating_sub(1), next_time),
            );
            DetectedPhase {
                phase,
                start_time,
                end_time,
                start_frame_index,
                end_frame_index: end_frame_index.max(start_frame_index),
            }
        })
        .collect()
}

/// Run a detector over a complete recording from a fresh state
pub fn detect_phases(detector: &mut dyn PhaseDetector, frames: &[PoseFrame]) -> Vec<DetectedPhase> {
    detector.reset();
    for frame in frames {
        detector.detect_phase(frame);
    }
    detector.detected_phases()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(to_phase: SwingPhase, frame_index: usize, timestamp: f64) -> PhaseTransition {
        PhaseTransition {
            from_phase: None,
            to_phase,
            timestamp,
            confidence: 0.9,
            frame_index,
        }
    }

    #[test]
    fn test_phases_cover_every_frame() {
        let transitions = [
            transition(SwingPhase::Backswing, 5, 0.5),
            transition(SwingPhase::Transition, 9, 0.9),
        ];
        let phases = phases_from_transitions(&transitions, 0.0, 12, 1.1);
        assert_eq!(phases.len(), 3);
        assert_eq!(phases[0].start_frame_index, 0);
        assert_eq!(phases[0].end_frame_index, 4);
        assert_eq!(phases[1].start_frame_index, 5);
        assert_eq!(phases[1].end_frame_index, 8);
        assert_eq!(phases[2].end_frame_index, 11);
        assert!((phases[2].end_time - 1.1).abs() < f64::EPSILON);
        for pair in phases.windows(2) {
            assert_eq!(pair[0].end_frame_index + 1, pair[1].start_frame_index);
        }
    }

    #[test]
    fn test_no_frames_no_phases() {
        assert!(phases_from_transitions(&[], 0.0, 0, 0.0).is_empty());
    }

    #[test]
    fn test_backward_component_respects_handedness() {
        let delta = Vector3::new(-0.1, 0.0, 0.0);
        assert!(backward_component(&delta, 1.0) > 0.0);
        assert!(backward_component(&delta, -1.0) < 0.0);
    }
}

// ABOUTME: Integration tests for per-sport swing phase detection
// ABOUTME: Drives detectors with synthetic swings and checks transitions, ordering, and handedness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    entered_phases, entry_frame, golf_swing, lateral_swing, serve_swing, timestamp, CONFIDENCE,
};
use nalgebra::Vector3;
use swing_coach::core::models::{
    Handedness, ImplementType, Joint, PoseFrame, Sport, StrokeType, SwingConfiguration,
    SwingPhase,
};
use swing_coach::intelligence::config::DetectionConfig;
use swing_coach::intelligence::detection::{detect_phases, GolfStrategy, SwingStateMachine};
use swing_coach::intelligence::{PhaseDetector, PhaseDetectorFactory};

fn detector_for(configuration: &SwingConfiguration) -> Box<dyn PhaseDetector> {
    common::init_test_logging();
    PhaseDetectorFactory::create_with_config(configuration, &DetectionConfig::default())
}

fn run(detector: &mut dyn PhaseDetector, frames: &[PoseFrame]) {
    detector.reset();
    for frame in frames {
        detector.detect_phase(frame);
    }
}

fn assert_strictly_increasing(phases: &[SwingPhase]) {
    for pair in phases.windows(2) {
        assert!(pair[0] < pair[1], "phases out of order: {phases:?}");
    }
}

#[test]
fn test_golf_swing_reaches_key_phases() {
    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    run(detector.as_mut(), &golf_swing(Handedness::Right));

    let analysis = detector.analysis();
    let entered = entered_phases(analysis);
    assert!(entered.contains(&SwingPhase::Backswing));
    assert!(entered.contains(&SwingPhase::Downswing));
    assert!(entered.contains(&SwingPhase::Impact));
    assert_eq!(analysis.current_phase, SwingPhase::FollowThrough);
    assert!(analysis.is_complete());
}

#[test]
fn test_golf_transition_frames() {
    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    run(detector.as_mut(), &golf_swing(Handedness::Right));

    let analysis = detector.analysis();
    assert_eq!(entry_frame(analysis, SwingPhase::Backswing), Some(15));
    assert_eq!(entry_frame(analysis, SwingPhase::Transition), Some(30));
    assert_eq!(entry_frame(analysis, SwingPhase::Downswing), Some(31));
    assert_eq!(entry_frame(analysis, SwingPhase::Impact), Some(45));
    assert_eq!(entry_frame(analysis, SwingPhase::FollowThrough), Some(53));

    let first = &analysis.transitions[0];
    assert_eq!(first.from_phase, Some(SwingPhase::Setup));
    assert!((first.timestamp - timestamp(15)).abs() < 1e-9);
    assert!((first.confidence - CONFIDENCE).abs() < 1e-9);
}

#[test]
fn test_left_handed_golfer_mirrors_right() {
    let configuration =
        SwingConfiguration::for_sport(Sport::Golf).with_handedness(Handedness::Left);
    let mut left = detector_for(&configuration);
    run(left.as_mut(), &golf_swing(Handedness::Left));

    let mut right = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    run(right.as_mut(), &golf_swing(Handedness::Right));

    let frames = |detector: &dyn PhaseDetector| -> Vec<usize> {
        detector
            .analysis()
            .transitions
            .iter()
            .map(|t| t.frame_index)
            .collect()
    };
    assert_eq!(frames(left.as_ref()), frames(right.as_ref()));
    assert_eq!(left.analysis().current_phase, SwingPhase::FollowThrough);
}

#[test]
fn test_batting_swing_for_both_sides() {
    for sport in [Sport::Baseball, Sport::Softball] {
        for side in [Handedness::Right, Handedness::Left] {
            let configuration = SwingConfiguration::for_sport(sport).with_handedness(side);
            let mut detector = detector_for(&configuration);
            run(detector.as_mut(), &lateral_swing(side));

            let analysis = detector.analysis();
            assert_eq!(entry_frame(analysis, SwingPhase::Backswing), Some(15));
            assert_eq!(entry_frame(analysis, SwingPhase::Transition), Some(25));
            assert_eq!(entry_frame(analysis, SwingPhase::Downswing), Some(26));
            assert_eq!(entry_frame(analysis, SwingPhase::Impact), Some(34));
            assert_eq!(entry_frame(analysis, SwingPhase::FollowThrough), Some(42));
        }
    }
}

#[test]
fn test_racquet_groundstrokes() {
    for sport in [Sport::Tennis, Sport::Pickleball] {
        let mut detector = detector_for(&SwingConfiguration::for_sport(sport));
        run(detector.as_mut(), &lateral_swing(Handedness::Right));

        let analysis = detector.analysis();
        assert_eq!(entry_frame(analysis, SwingPhase::Transition), Some(25));
        assert_eq!(entry_frame(analysis, SwingPhase::Impact), Some(34));
        assert_eq!(analysis.current_phase, SwingPhase::FollowThrough);
    }
}

#[test]
fn test_tennis_serve_contacts_at_the_top() {
    let configuration =
        SwingConfiguration::for_sport(Sport::Tennis).with_stroke(StrokeType::Serve);
    let mut detector = detector_for(&configuration);
    run(detector.as_mut(), &serve_swing());

    let analysis = detector.analysis();
    assert_eq!(entry_frame(analysis, SwingPhase::Backswing), Some(15));
    assert_eq!(entry_frame(analysis, SwingPhase::Transition), Some(25));
    assert_eq!(entry_frame(analysis, SwingPhase::Downswing), Some(26));
    assert_eq!(entry_frame(analysis, SwingPhase::Impact), Some(39));
    assert_eq!(entry_frame(analysis, SwingPhase::FollowThrough), Some(45));
}

#[test]
fn test_low_confidence_stays_in_setup() {
    let frames: Vec<PoseFrame> = golf_swing(Handedness::Right)
        .into_iter()
        .map(|mut frame| {
            for confidence in frame.confidence.values_mut() {
                *confidence = 0.2;
            }
            frame
        })
        .collect();

    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    run(detector.as_mut(), &frames);

    let analysis = detector.analysis();
    assert_eq!(analysis.current_phase, SwingPhase::Setup);
    assert!(analysis.transitions.is_empty());
    assert!((analysis.confidence - 0.2).abs() < 1e-9);
}

#[test]
fn test_untracked_hands_never_error() {
    let frames: Vec<PoseFrame> = golf_swing(Handedness::Right)
        .into_iter()
        .map(|mut frame| {
            frame.joints.remove(&Joint::LeftWrist);
            frame
        })
        .collect();

    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    detector.set_minimum_confidence(0.0);
    run(detector.as_mut(), &frames);
    assert_eq!(detector.analysis().current_phase, SwingPhase::Setup);
}

#[test]
fn test_transitions_are_monotonic_under_noise() {
    for sport in Sport::ALL {
        let mut detector = detector_for(&SwingConfiguration::for_sport(sport));
        let frames: Vec<PoseFrame> = golf_swing(Handedness::Right)
            .into_iter()
            .chain(lateral_swing(Handedness::Right))
            .enumerate()
            .map(|(index, mut frame)| {
                frame.timestamp = timestamp(index);
                let jitter = ((index * 7919) % 13) as f64 * 0.002 - 0.012;
                for position in frame.joints.values_mut() {
                    *position += Vector3::new(jitter, -jitter, 0.0);
                }
                frame
            })
            .collect();
        run(detector.as_mut(), &frames);

        let entered = entered_phases(detector.analysis());
        assert_strictly_increasing(&entered);
        for transition in &detector.analysis().transitions {
            assert_eq!(
                transition.from_phase.and_then(SwingPhase::next),
                Some(transition.to_phase)
            );
        }
    }
}

#[test]
fn test_reset_returns_to_setup() {
    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    run(detector.as_mut(), &golf_swing(Handedness::Right));
    assert!(!detector.analysis().transitions.is_empty());

    detector.reset();
    assert_eq!(detector.analysis().current_phase, SwingPhase::Setup);
    assert!(detector.analysis().transitions.is_empty());
    assert!(detector.detected_phases().is_empty());
}

#[test]
fn test_detected_phases_cover_recording() {
    let frames = golf_swing(Handedness::Right);
    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Golf));
    let phases = detect_phases(detector.as_mut(), &frames);

    assert_eq!(phases.len(), 6);
    assert_eq!(phases[0].phase, SwingPhase::Setup);
    assert_eq!(phases[0].start_frame_index, 0);
    assert_eq!(phases[0].end_frame_index, 14);
    assert_eq!(phases[2].start_frame_index, 30);
    assert_eq!(phases[2].end_frame_index, 30);
    assert_eq!(phases[5].end_frame_index, frames.len() - 1);
    assert!((phases[5].end_time - timestamp(59)).abs() < 1e-9);
    for pair in phases.windows(2) {
        assert_eq!(pair[0].end_frame_index + 1, pair[1].start_frame_index);
        assert!((pair[0].end_time - pair[1].start_time).abs() < 1e-9);
    }
}

#[test]
fn test_minimum_confidence_is_clamped() {
    let mut detector = detector_for(&SwingConfiguration::for_sport(Sport::Tennis));
    detector.set_minimum_confidence(1.5);
    assert!((detector.minimum_confidence() - 1.0).abs() < f64::EPSILON);
    detector.set_minimum_confidence(-0.5);
    assert!(detector.minimum_confidence().abs() < f64::EPSILON);
}

#[test]
fn test_concrete_detector_exposes_thresholds() {
    let configuration = SwingConfiguration::for_sport(Sport::Golf)
        .with_implement(ImplementType::Putter);
    let detection = DetectionConfig::default();
    let detector = SwingStateMachine::with_strategy(GolfStrategy, &configuration, &detection);

    let expected = detection.golf.initiation_speed * 0.2;
    assert!((detector.thresholds().initiation_speed - expected).abs() < 1e-12);
    assert_eq!(detector.handedness(), Handedness::Right);
    assert_eq!(detector.frames_seen(), 0);
}

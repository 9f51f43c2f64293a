// ABOUTME: Shared synthetic pose fixtures for swing analysis integration tests
// ABOUTME: Builds full-body frames around scripted hand paths for golf, batting, and serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `swing_coach`
//!
//! Bodies stand still at the origin (hips at 0.9 m, shoulders at 1.4 m, head
//! at 1.7 m) while the hands follow a scripted path at 30 Hz. Elbows sit on
//! the shoulder-wrist segment, so arms are always fully extended.

use std::env;
use std::sync::Once;

use nalgebra::Vector3;
use swing_coach::core::models::{Handedness, Joint, PoseFrame, SwingAnalysis, SwingPhase};
use tracing::Level;

/// Capture rate of every fixture
pub const FRAME_RATE: f64 = 30.0;

/// Joint confidence used by fixtures
pub const CONFIDENCE: f64 = 0.9;

/// Half the distance between the wrists
const WRIST_OFFSET: f64 = 0.02;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Timestamp of a frame index
pub fn timestamp(index: usize) -> f64 {
    index as f64 / FRAME_RATE
}

/// A full-body frame with the hand midpoint at `hand` and hips centered at `hip_center`
pub fn body_frame_at(
    timestamp: f64,
    hand: Vector3<f64>,
    hip_center: Vector3<f64>,
    confidence: f64,
) -> PoseFrame {
    let left_shoulder = Vector3::new(-0.2, 1.4, 0.0);
    let right_shoulder = Vector3::new(0.2, 1.4, 0.0);
    let left_wrist = hand - Vector3::new(WRIST_OFFSET, 0.0, 0.0);
    let right_wrist = hand + Vector3::new(WRIST_OFFSET, 0.0, 0.0);

    PoseFrame::new(timestamp)
        .with_joint(Joint::Head, Vector3::new(0.0, 1.7, 0.0), confidence)
        .with_joint(Joint::Neck, Vector3::new(0.0, 1.5, 0.0), confidence)
        .with_joint(Joint::LeftShoulder, left_shoulder, confidence)
        .with_joint(Joint::RightShoulder, right_shoulder, confidence)
        .with_joint(Joint::LeftElbow, (left_shoulder + left_wrist) * 0.5, confidence)
        .with_joint(Joint::RightElbow, (right_shoulder + right_wrist) * 0.5, confidence)
        .with_joint(Joint::LeftWrist, left_wrist, confidence)
        .with_joint(Joint::RightWrist, right_wrist, confidence)
        .with_joint(
            Joint::LeftHip,
            hip_center - Vector3::new(0.15, 0.0, 0.0),
            confidence,
        )
        .with_joint(
            Joint::RightHip,
            hip_center + Vector3::new(0.15, 0.0, 0.0),
            confidence,
        )
        .with_joint(Joint::Root, hip_center, confidence)
        .with_joint(Joint::LeftKnee, Vector3::new(-0.2, 0.5, 0.0), confidence)
        .with_joint(Joint::RightKnee, Vector3::new(0.2, 0.5, 0.0), confidence)
        .with_joint(Joint::LeftAnkle, Vector3::new(-0.2, 0.05, 0.0), confidence)
        .with_joint(Joint::RightAnkle, Vector3::new(0.2, 0.05, 0.0), confidence)
}

/// A full-body frame with hips at the standard position
pub fn body_frame(timestamp: f64, hand: Vector3<f64>, confidence: f64) -> PoseFrame {
    body_frame_at(timestamp, hand, Vector3::new(0.0, 0.9, 0.0), confidence)
}

/// Mirror a frame across the sagittal plane for a left-handed athlete
pub fn mirrored(frame: &PoseFrame) -> PoseFrame {
    let mut mirror = frame.clone();
    for position in mirror.joints.values_mut() {
        position.x = -position.x;
    }
    mirror
}

fn build<F>(count: usize, handedness: Handedness, hand_path: F) -> Vec<PoseFrame>
where
    F: Fn(usize) -> (f64, f64),
{
    (0..count)
        .map(|index| {
            let (x, y) = hand_path(index);
            let frame = body_frame(timestamp(index), Vector3::new(x, y, 0.2), CONFIDENCE);
            match handedness {
                Handedness::Right => frame,
                Handedness::Left => mirrored(&frame),
            }
        })
        .collect()
}

/// Golf hand path (x, y) for a right-handed player
///
/// Address until frame 14, takeaway up and back to the top at frame 29, a
/// downswing bottoming out at frame 44, a quick rise through contact, then a
/// slow drift from frame 53.
pub fn golf_hand_path(index: usize) -> (f64, f64) {
    let i = index as f64;
    match index {
        0..=14 => (0.0, 1.0),
        15..=29 => (-0.03 * (i - 14.0), 0.06f64.mul_add(i - 14.0, 1.0)),
        30..=44 => (
            0.03f64.mul_add(i - 29.0, -0.45),
            (-0.065f64).mul_add(i - 29.0, 1.9),
        ),
        45..=52 => (0.05 * (i - 44.0), 0.02f64.mul_add(i - 44.0, 0.925)),
        _ => (0.01f64.mul_add(i - 52.0, 0.4), 1.085),
    }
}

/// 60 frames (2 s) of a canonical golf swing
pub fn golf_swing(handedness: Handedness) -> Vec<PoseFrame> {
    build(60, handedness, golf_hand_path)
}

/// Lateral hand path (x, y) for batting and groundstrokes, right-handed
///
/// Stance until frame 14, a load straight back to frame 24, a forward and
/// downward swing bottoming at frame 33, a rising finish, then a slow drift
/// from frame 42.
pub fn lateral_hand_path(index: usize) -> (f64, f64) {
    let i = index as f64;
    match index {
        0..=14 => (0.0, 1.3),
        15..=24 => (-0.02 * (i - 14.0), 1.3),
        25..=33 => (
            0.06f64.mul_add(i - 24.0, -0.2),
            (-0.02f64).mul_add(i - 24.0, 1.3),
        ),
        34..=41 => (
            0.04f64.mul_add(i - 33.0, 0.34),
            0.03f64.mul_add(i - 33.0, 1.12),
        ),
        _ => (
            0.005f64.mul_add(i - 41.0, 0.66),
            0.005f64.mul_add(i - 41.0, 1.36),
        ),
    }
}

/// 50 frames of a lateral swing (bat, forehand, paddle drive)
pub fn lateral_swing(handedness: Handedness) -> Vec<PoseFrame> {
    build(50, handedness, lateral_hand_path)
}

/// Overhead serve hand height by frame
///
/// Toss and trophy rise to frame 24, racquet drop to frame 30, upward swing to
/// contact at frame 38, fast descent to frame 44, then a slow finish.
pub fn serve_hand_height(index: usize) -> f64 {
    let i = index as f64;
    match index {
        0..=14 => 1.3,
        15..=24 => 0.05f64.mul_add(i - 14.0, 1.3),
        25..=30 => (-0.06f64).mul_add(i - 24.0, 1.8),
        31..=38 => 0.1f64.mul_add(i - 30.0, 1.44),
        39..=44 => (-0.08f64).mul_add(i - 38.0, 2.24),
        _ => (-0.005f64).mul_add(i - 44.0, 1.76),
    }
}

/// 52 frames of an overhead serve
pub fn serve_swing() -> Vec<PoseFrame> {
    build(52, Handedness::Right, |index| (0.0, serve_hand_height(index)))
}

/// Phases entered, in order
pub fn entered_phases(analysis: &SwingAnalysis) -> Vec<SwingPhase> {
    analysis
        .transitions
        .iter()
        .map(|transition| transition.to_phase)
        .collect()
}

/// Frame index at which a phase was entered
pub fn entry_frame(analysis: &SwingAnalysis, phase: SwingPhase) -> Option<usize> {
    analysis
        .transitions
        .iter()
        .find(|transition| transition.to_phase == phase)
        .map(|transition| transition.frame_index)
}

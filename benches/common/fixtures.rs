// ABOUTME: Benchmark fixtures generating synthetic golf swings of configurable length
// ABOUTME: Deterministic pose frames so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic swing fixtures for benchmarks.

use std::f64::consts::PI;

use nalgebra::Vector3;
use swing_coach::core::models::{Joint, PoseFrame};

/// Capture rate of generated swings
const FRAME_RATE: f64 = 30.0;

/// Joint confidence of generated frames
const CONFIDENCE: f64 = 0.9;

/// Predefined recording lengths
#[derive(Debug, Clone, Copy)]
pub enum SwingLength {
    /// Two seconds at 30 Hz
    Short,
    /// Ten seconds at 30 Hz, a swing padded with idle frames
    Long,
}

impl SwingLength {
    #[must_use]
    pub const fn frames(self) -> usize {
        match self {
            Self::Short => 60,
            Self::Long => 300,
        }
    }
}

/// Hand position along a golf arc at progress `t` in `[0, 1]`
fn hand_at(t: f64) -> Vector3<f64> {
    let angle = match t {
        t if t < 0.25 => 0.0,
        t if t < 0.5 => -PI * 0.75 * ((t - 0.25) / 0.25),
        t if t < 0.75 => PI.mul_add(-0.75, PI * 1.25 * ((t - 0.5) / 0.25)),
        _ => PI * 0.5,
    };
    Vector3::new(0.7 * angle.sin(), 0.7f64.mul_add(-angle.cos(), 1.7), 0.25)
}

/// One full-body frame with the hands at `hand`
#[must_use]
pub fn frame_at(timestamp: f64, hand: Vector3<f64>) -> PoseFrame {
    let left_shoulder = Vector3::new(-0.2, 1.4, 0.0);
    let right_shoulder = Vector3::new(0.2, 1.4, 0.0);
    let left_wrist = hand - Vector3::new(0.02, 0.0, 0.0);
    let right_wrist = hand + Vector3::new(0.02, 0.0, 0.0);
    PoseFrame::new(timestamp)
        .with_joint(Joint::Head, Vector3::new(0.0, 1.7, 0.0), CONFIDENCE)
        .with_joint(Joint::LeftShoulder, left_shoulder, CONFIDENCE)
        .with_joint(Joint::RightShoulder, right_shoulder, CONFIDENCE)
        .with_joint(Joint::LeftElbow, (left_shoulder + left_wrist) * 0.5, CONFIDENCE)
        .with_joint(Joint::RightElbow, (right_shoulder + right_wrist) * 0.5, CONFIDENCE)
        .with_joint(Joint::LeftWrist, left_wrist, CONFIDENCE)
        .with_joint(Joint::RightWrist, right_wrist, CONFIDENCE)
        .with_joint(Joint::LeftHip, Vector3::new(-0.15, 0.9, 0.0), CONFIDENCE)
        .with_joint(Joint::RightHip, Vector3::new(0.15, 0.9, 0.0), CONFIDENCE)
        .with_joint(Joint::LeftAnkle, Vector3::new(-0.2, 0.05, 0.0), CONFIDENCE)
        .with_joint(Joint::RightAnkle, Vector3::new(0.2, 0.05, 0.0), CONFIDENCE)
}

/// Generate a golf swing of the given length
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_swing(length: SwingLength) -> Vec<PoseFrame> {
    let count = length.frames();
    let last = (count - 1) as f64;
    (0..count)
        .map(|index| {
            let i = index as f64;
            frame_at(i / FRAME_RATE, hand_at(i / last))
        })
        .collect()
}

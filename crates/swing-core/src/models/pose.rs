// ABOUTME: Pose frame data carrier with named joints, 3D positions, and per-joint confidence
// ABOUTME: Untracked joints are exposed as absent rather than as zero positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::tracking::TRACKING_CONFIDENCE_THRESHOLD;

/// Body joints delivered by the pose source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Top of the head
    Head,
    /// Base of the neck
    Neck,
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
    /// Pelvis root
    Root,
    /// Left knee
    LeftKnee,
    /// Right knee
    RightKnee,
    /// Left ankle
    LeftAnkle,
    /// Right ankle
    RightAnkle,
}

impl Joint {
    /// Every joint, in skeleton order
    pub const ALL: [Self; 15] = [
        Self::Head,
        Self::Neck,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::Root,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Upper-body joints compared against a baseline swing
    pub const KEY_JOINTS: [Self; 8] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftElbow,
        Self::RightElbow,
    ];

    /// Joints averaged into a frame's overall confidence
    pub const CONFIDENCE_JOINTS: [Self; 6] = [
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftHip,
        Self::RightHip,
    ];
}

/// One timestamped snapshot of joint positions (meters) and confidences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Seconds since the start of the session
    pub timestamp: f64,
    /// Joint positions
    pub joints: HashMap<Joint, Vector3<f64>>,
    /// Joint confidences in `[0, 1]`
    pub confidence: HashMap<Joint, f64>,
}

impl PoseFrame {
    /// Create an empty frame at the given timestamp
    #[must_use]
    pub fn new(timestamp: f64) -> Self {
        Self {
            timestamp,
            joints: HashMap::new(),
            confidence: HashMap::new(),
        }
    }

    /// Builder-style helper that sets one joint's position and confidence
    #[must_use]
    pub fn with_joint(mut self, joint: Joint, position: Vector3<f64>, confidence: f64) -> Self {
        self.set_joint(joint, position, confidence);
        self
    }

    /// Set one joint's position and confidence
    pub fn set_joint(&mut self, joint: Joint, position: Vector3<f64>, confidence: f64) {
        self.joints.insert(joint, position);
        self.confidence.insert(joint, confidence.clamp(0.0, 1.0));
    }

    /// Confidence of a joint, zero when the joint was not reported
    #[must_use]
    pub fn joint_confidence(&self, joint: Joint) -> f64 {
        self.confidence.get(&joint).copied().unwrap_or(0.0)
    }

    /// Whether the joint is present with confidence above the tracking threshold
    #[must_use]
    pub fn is_tracked(&self, joint: Joint) -> bool {
        self.joints.contains_key(&joint)
            && self.joint_confidence(joint) > TRACKING_CONFIDENCE_THRESHOLD
    }

    /// Position of a tracked joint
    #[must_use]
    pub fn position(&self, joint: Joint) -> Option<Vector3<f64>> {
        if self.is_tracked(joint) {
            self.joints.get(&joint).copied()
        } else {
            None
        }
    }

    /// Midpoint of two tracked joints
    #[must_use]
    pub fn midpoint(&self, a: Joint, b: Joint) -> Option<Vector3<f64>> {
        Some((self.position(a)? + self.position(b)?) * 0.5)
    }

    /// Midpoint of both hips
    #[must_use]
    pub fn hip_center(&self) -> Option<Vector3<f64>> {
        self.midpoint(Joint::LeftHip, Joint::RightHip)
    }

    /// Midpoint of both shoulders
    #[must_use]
    pub fn shoulder_center(&self) -> Option<Vector3<f64>> {
        self.midpoint(Joint::LeftShoulder, Joint::RightShoulder)
    }

    /// Hand-position proxy: midpoint of both wrists, only when both are tracked
    #[must_use]
    pub fn hand_position(&self) -> Option<Vector3<f64>> {
        self.midpoint(Joint::LeftWrist, Joint::RightWrist)
    }

    /// Mean confidence over wrists, shoulders, and hips
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: fixed joint count of 6
    pub fn overall_confidence(&self) -> f64 {
        let total: f64 = Joint::CONFIDENCE_JOINTS
            .iter()
            .map(|joint| self.joint_confidence(*joint))
            .sum();
        total / Joint::CONFIDENCE_JOINTS.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_confidence_joint_is_absent() {
        let frame = PoseFrame::new(0.0)
            .with_joint(Joint::LeftWrist, Vector3::new(1.0, 2.0, 3.0), 0.3)
            .with_joint(Joint::RightWrist, Vector3::new(1.0, 2.0, 3.0), 0.9);
        assert!(frame.position(Joint::LeftWrist).is_none());
        assert!(frame.position(Joint::RightWrist).is_some());
        assert!(frame.hand_position().is_none());
    }

    #[test]
    fn test_overall_confidence_counts_missing_as_zero() {
        let frame = PoseFrame::new(0.0)
            .with_joint(Joint::LeftHip, Vector3::zeros(), 0.6)
            .with_joint(Joint::RightHip, Vector3::zeros(), 0.6);
        assert!((frame.overall_confidence() - 0.2).abs() < 1e-12);
    }
}

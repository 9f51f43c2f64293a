// ABOUTME: Integration tests for the vector geometry helpers shared by detectors and analyzers
// ABOUTME: Checks angle bounds, joint angles on fixture bodies, and velocity edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{body_frame, CONFIDENCE};
use nalgebra::Vector3;
use swing_coach::core::models::Joint;
use swing_coach::intelligence::geometry::{
    angle_between, fraction_index, joint_angle, joint_distance, joint_velocity, line_rotation,
    velocity,
};

#[test]
fn test_angles_stay_within_bounds() {
    let vectors = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 1e-12, 0.0),
        Vector3::new(0.3, -0.7, 2.0),
        Vector3::new(1e6, 1e-6, -1e6),
        Vector3::new(-0.5, -0.5, -0.5),
    ];
    for a in &vectors {
        for b in &vectors {
            let angle = angle_between(a, b).unwrap();
            assert!((0.0..=180.0).contains(&angle), "angle {angle} out of bounds");
        }
    }
}

#[test]
fn test_parallel_and_antiparallel_vectors() {
    let v = Vector3::new(0.2, 0.4, -0.1);
    assert!(angle_between(&v, &(v * 3.5)).unwrap().abs() < 1e-6);
    assert!((angle_between(&v, &(v * -0.01)).unwrap() - 180.0).abs() < 1e-6);
}

#[test]
fn test_fixture_elbows_are_straight() {
    let frame = body_frame(0.0, Vector3::new(0.4, 1.1, 0.3), CONFIDENCE);
    let left = joint_angle(&frame, Joint::LeftShoulder, Joint::LeftElbow, Joint::LeftWrist)
        .unwrap();
    let right = joint_angle(
        &frame,
        Joint::RightShoulder,
        Joint::RightElbow,
        Joint::RightWrist,
    )
    .unwrap();
    assert!((left - 180.0).abs() < 1e-6);
    assert!((right - 180.0).abs() < 1e-6);
}

#[test]
fn test_shoulder_width() {
    let frame = body_frame(0.0, Vector3::new(0.0, 1.0, 0.2), CONFIDENCE);
    let width = joint_distance(&frame, Joint::LeftShoulder, Joint::RightShoulder).unwrap();
    assert!((width - 0.4).abs() < 1e-12);
}

#[test]
fn test_equal_timestamps_have_no_velocity() {
    let before = body_frame(1.0, Vector3::new(0.0, 1.0, 0.2), CONFIDENCE);
    let after = body_frame(1.0, Vector3::new(0.5, 1.0, 0.2), CONFIDENCE);
    assert!(joint_velocity(&before, &after, Joint::RightWrist).is_none());

    let later = body_frame(1.5, Vector3::new(0.5, 1.0, 0.2), CONFIDENCE);
    let v = joint_velocity(&before, &later, Joint::RightWrist).unwrap();
    assert!((v.x - 1.0).abs() < 1e-12);
    assert!(v.y.abs() < 1e-12);

    let p = Vector3::zeros();
    assert!(velocity(&p, 2.0, &p, 1.0).is_none());
    assert!(velocity(&p, 0.0, &p, f64::INFINITY).is_none());
}

#[test]
fn test_line_rotation_ignores_vertical_tilt() {
    let setup = body_frame(0.0, Vector3::new(0.0, 1.0, 0.2), CONFIDENCE);
    let mut tilted = setup.clone();
    tilted.set_joint(Joint::LeftShoulder, Vector3::new(-0.2, 1.2, 0.0), CONFIDENCE);
    tilted.set_joint(Joint::RightShoulder, Vector3::new(0.2, 1.6, 0.0), CONFIDENCE);

    let rotation =
        line_rotation(&setup, &tilted, Joint::LeftShoulder, Joint::RightShoulder).unwrap();
    assert!(rotation.abs() < 1e-9);
}

#[test]
fn test_fraction_index_clamps() {
    assert_eq!(fraction_index(0, 0.5), 0);
    assert_eq!(fraction_index(10, 0.7), 7);
    assert_eq!(fraction_index(10, 1.0), 9);
    assert_eq!(fraction_index(10, -1.0), 0);
    assert_eq!(fraction_index(3, 0.3), 0);
}

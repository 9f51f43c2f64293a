// ABOUTME: Pure kinematics helpers shared by the phase detectors and the analyzers
// ABOUTME: Joint angles, finite-difference velocity, distances, rotations, and range scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Geometry and Kinematics
//!
//! Stateless functions over pose frames. Every function that needs a joint
//! returns `None` when that joint is untracked, and every function that
//! divides by a duration returns `None` when the duration is not positive.
//! Angles are in degrees throughout.

use std::f64::consts::PI;

use nalgebra::Vector3;
use swing_core::models::{Joint, PoseFrame};

/// Vectors shorter than this have no direction
const MIN_VECTOR_LENGTH: f64 = 1e-9;

/// Vertical reference axis
#[must_use]
pub fn vertical_axis() -> Vector3<f64> {
    Vector3::y()
}

/// Angle between two vectors in degrees, in `[0, 180]`
///
/// Uses `acos(clamp(dot(â, b̂), -1, 1))`; the clamp keeps rounding overshoot
/// out of the `acos` domain. Returns `None` for a zero-length vector.
#[must_use]
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> Option<f64> {
    let a_norm = a.norm();
    let b_norm = b.norm();
    if a_norm < MIN_VECTOR_LENGTH || b_norm < MIN_VECTOR_LENGTH {
        return None;
    }
    let cos_angle = (a.dot(b) / (a_norm * b_norm)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Angle at `vertex` formed by the segments to `a` and `c`
#[must_use]
pub fn angle_at(a: &Vector3<f64>, vertex: &Vector3<f64>, c: &Vector3<f64>) -> Option<f64> {
    angle_between(&(a - vertex), &(c - vertex))
}

/// Angle at the `vertex` joint between two other joints of one frame
#[must_use]
pub fn joint_angle(frame: &PoseFrame, a: Joint, vertex: Joint, c: Joint) -> Option<f64> {
    angle_at(
        &frame.position(a)?,
        &frame.position(vertex)?,
        &frame.position(c)?,
    )
}

/// Finite-difference velocity between two positions
///
/// Returns `None` unless `current_time > previous_time`.
#[must_use]
pub fn velocity(
    previous: &Vector3<f64>,
    previous_time: f64,
    current: &Vector3<f64>,
    current_time: f64,
) -> Option<Vector3<f64>> {
    let dt = current_time - previous_time;
    if dt <= 0.0 || !dt.is_finite() {
        return None;
    }
    Some((current - previous) / dt)
}

/// Velocity of one joint between two frames
#[must_use]
pub fn joint_velocity(previous: &PoseFrame, current: &PoseFrame, joint: Joint) -> Option<Vector3<f64>> {
    velocity(
        &previous.position(joint)?,
        previous.timestamp,
        &current.position(joint)?,
        current.timestamp,
    )
}

/// Euclidean distance between two joints of one frame
#[must_use]
pub fn joint_distance(frame: &PoseFrame, a: Joint, b: Joint) -> Option<f64> {
    Some((frame.position(a)? - frame.position(b)?).norm())
}

/// Projection onto the horizontal (x/z) plane
#[must_use]
pub fn horizontal(v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, 0.0, v.z)
}

/// Vector from the left joint to the right joint
#[must_use]
pub fn body_line(frame: &PoseFrame, left: Joint, right: Joint) -> Option<Vector3<f64>> {
    Some(frame.position(right)? - frame.position(left)?)
}

/// Horizontal rotation of a body line between two frames
#[must_use]
pub fn line_rotation(before: &PoseFrame, after: &PoseFrame, left: Joint, right: Joint) -> Option<f64> {
    angle_between(
        &horizontal(&body_line(before, left, right)?),
        &horizontal(&body_line(after, left, right)?),
    )
}

/// Heading of a vector in the horizontal plane, radians in `(-π, π]`
#[must_use]
pub fn heading(v: &Vector3<f64>) -> Option<f64> {
    let flat = horizontal(v);
    if flat.norm() < MIN_VECTOR_LENGTH {
        return None;
    }
    Some(flat.z.atan2(flat.x))
}

/// Smallest signed difference between two headings, radians in `[-π, π]`
#[must_use]
pub fn heading_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    while delta > PI {
        delta -= 2.0 * PI;
    }
    while delta < -PI {
        delta += 2.0 * PI;
    }
    delta
}

/// Angular speed of a body line between two frames, degrees per second
#[must_use]
pub fn line_angular_speed(
    previous: &PoseFrame,
    current: &PoseFrame,
    left: Joint,
    right: Joint,
) -> Option<f64> {
    let dt = current.timestamp - previous.timestamp;
    if dt <= 0.0 {
        return None;
    }
    let before = heading(&body_line(previous, left, right)?)?;
    let after = heading(&body_line(current, left, right)?)?;
    Some(heading_delta(before, after).abs().to_degrees() / dt)
}

/// Score a value against an optimal range
///
/// Values inside `[low, high]` score 100; outside, the score falls linearly
/// to 0 over `tolerance`.
#[must_use]
pub fn range_score(value: f64, (low, high): (f64, f64), tolerance: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let distance = if value < low {
        low - value
    } else if value > high {
        value - high
    } else {
        return 100.0;
    };
    if tolerance <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - distance / tolerance)).clamp(0.0, 100.0)
}

/// Arithmetic mean, zero for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Index of a fractional position in a sequence of `len` items
#[must_use]
pub fn fraction_index(len: usize, fraction: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let index = (len as f64 * fraction.clamp(0.0, 1.0)).floor() as usize;
    index.min(len - 1)
}

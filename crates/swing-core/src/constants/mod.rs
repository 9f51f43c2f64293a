// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tracking thresholds, unit conversions, and biomechanical reference ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Pose tracking constants
pub mod tracking {
    /// A joint is tracked only when its confidence exceeds this value
    pub const TRACKING_CONFIDENCE_THRESHOLD: f64 = 0.3;
    /// Default minimum overall frame confidence for phase detection
    pub const DEFAULT_MINIMUM_CONFIDENCE: f64 = 0.5;
    /// Default trailing history window (about one second at 30 fps)
    pub const DEFAULT_HISTORY_CAPACITY: usize = 30;
}

/// Unit conversion constants
pub mod units {
    /// Meters per second to miles per hour
    pub const MPS_TO_MPH: f64 = 2.236_936_292_054_402;
    /// Full extension of a joint, in degrees
    pub const STRAIGHT_ANGLE_DEGREES: f64 = 180.0;
}

/// Metrics pipeline constants
pub mod metrics {
    /// Minimum frames for the speed analyzer to produce non-zero metrics
    pub const MIN_SPEED_FRAMES: usize = 3;
    /// Minimum frames for streaming (partial) metrics
    pub const DEFAULT_STREAMING_MIN_FRAMES: usize = 10;
    /// Hip-center displacement that counts as a full weight transfer
    pub const WEIGHT_TRANSFER_REFERENCE: f64 = 0.3;
    /// Maximum proportional sample points compared against a baseline
    pub const POSITION_SAMPLE_POINTS: usize = 10;
    /// Fractional key-frame fallbacks when no phases are available
    pub const BACKSWING_FALLBACK_FRACTION: f64 = 0.3;
    /// Impact key-frame fallback fraction
    pub const IMPACT_FALLBACK_FRACTION: f64 = 0.7;
}

/// Optimal ranges used by the composite scores
///
/// Each range is `(low, high)`; values inside score 100 and values outside
/// fall off linearly over the matching tolerance.
pub mod optimal_ranges {
    /// Hip rotation between setup and impact, degrees
    pub const HIP_ROTATION: (f64, f64) = (40.0, 55.0);
    /// Shoulder rotation between setup and impact, degrees
    pub const SHOULDER_ROTATION: (f64, f64) = (80.0, 100.0);
    /// Separation between shoulder and hip rotation, degrees
    pub const X_FACTOR: (f64, f64) = (35.0, 55.0);
    /// Change in spine angle between setup and impact, degrees
    pub const SPINE_DEVIATION: (f64, f64) = (0.0, 5.0);
    /// Weight transfer, percent
    pub const WEIGHT_TRANSFER: (f64, f64) = (60.0, 90.0);
    /// Arm extension score
    pub const ARM_EXTENSION: (f64, f64) = (80.0, 100.0);
    /// Angular tolerance for the form ranges
    pub const FORM_ANGLE_TOLERANCE: f64 = 30.0;
    /// Percentage tolerance for the form ranges
    pub const FORM_PERCENT_TOLERANCE: f64 = 40.0;

    /// Peak hand speed, mph
    pub const PEAK_SPEED: (f64, f64) = (15.0, 30.0);
    /// Impact hand speed, mph
    pub const IMPACT_SPEED: (f64, f64) = (12.0, 30.0);
    /// Mean hand speed during the power phase, mph
    pub const POWER_PHASE_SPEED: (f64, f64) = (10.0, 25.0);
    /// Peak hand acceleration, mph per second
    pub const PEAK_ACCELERATION: (f64, f64) = (100.0, 400.0);

    /// Kinetic chain gap between consecutive segment peaks, seconds
    pub const KINETIC_CHAIN_GAP: (f64, f64) = (0.05, 0.15);
}

/// Consistency scoring constants
pub mod consistency {
    /// Speed variance tolerated without penalty, mph
    pub const SPEED_VARIANCE_FREE: f64 = 5.0;
    /// Speed variance above the free band that is penalized, mph
    pub const SPEED_VARIANCE_CAP: f64 = 10.0;
    /// Points lost per mph of penalized speed variance
    pub const SPEED_PENALTY_PER_MPH: f64 = 3.0;
    /// Position variance tolerated without penalty
    pub const POSITION_VARIANCE_FREE: f64 = 0.1;
    /// Position variance at which the penalty saturates
    pub const POSITION_VARIANCE_CAP: f64 = 0.3;
    /// Maximum position penalty
    pub const POSITION_PENALTY_MAX: f64 = 30.0;
    /// Multiplier applied to the mean form-metric difference
    pub const FORM_PENALTY_FACTOR: f64 = 0.2;
    /// Timing variance tolerated without penalty, seconds
    pub const TIMING_VARIANCE_FREE: f64 = 0.05;
    /// Timing variance at which the penalty saturates, seconds
    pub const TIMING_VARIANCE_CAP: f64 = 0.15;
    /// Maximum timing penalty
    pub const TIMING_PENALTY_MAX: f64 = 20.0;
}

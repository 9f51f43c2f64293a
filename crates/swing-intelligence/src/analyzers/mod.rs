// ABOUTME: Form, speed, and consistency analyzers over a recorded swing
// ABOUTME: Each analyzer reads the same immutable frames and phases independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Swing analyzers
//!
//! The form and speed analyzers are synchronous and side-effect free. The
//! consistency analyzer awaits the injected baseline repository.

/// Baseline comparison and repeatability scoring
pub mod consistency;
/// Rotation, posture, weight transfer, and arm extension
pub mod form;
/// Hand speed, acceleration, and kinetic chain timing
pub mod speed;

pub use consistency::ConsistencyAnalyzer;
pub use form::{FormAnalyzer, KeyFrames};
pub use speed::SpeedAnalyzer;

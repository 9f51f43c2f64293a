// ABOUTME: Core types and constants for the swing phase detection and metrics engine
// ABOUTME: Foundation crate with error handling, pose frames, swing phases, metrics, and scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Core
//!
//! Foundation crate providing shared types and constants for the swing
//! analysis engine. It carries no analysis logic so that it changes
//! infrequently, keeping incremental compilation of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AnalysisError`
//! - **constants**: Tracking thresholds, unit conversions, and biomechanical reference values
//! - **models**: Pose frames, sports, swing phases, metrics, scores, and baselines

/// Unified error handling system with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Core data models (`PoseFrame`, `Sport`, `SwingPhase`, metrics, scores)
pub mod models;

// ABOUTME: Swing analysis engine: phase detection, kinematics, metrics, and scoring
// ABOUTME: Separate crate from the root package for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Intelligence
//!
//! Segments a stream of pose frames into swing phases and derives form,
//! speed and consistency metrics, culminating in a graded score.
//!
//! ## Modules
//!
//! - **geometry**: Vector angles, finite-difference velocities, and range scoring
//! - **detection**: Per-sport phase detectors sharing one state machine driver
//! - **analyzers**: Form, speed, and consistency analyzers
//! - **`metrics_calculator`**: Batch and streaming orchestration with decimation
//! - **`score_generator`**: Weighted scores, letter grades, and suggestions
//! - **baseline**: Ideal baseline repository interface and in-memory store
//! - **config**: Analysis configuration with environment overrides

/// Form, speed, and consistency analyzers
pub mod analyzers;

/// Ideal baseline storage
pub mod baseline;

/// Analysis configuration
pub mod config;

/// Swing phase detection
pub mod detection;

/// Geometry and kinematics helpers
pub mod geometry;

/// Metrics orchestration
pub mod metrics_calculator;

/// Scoring and suggestions
pub mod score_generator;

pub use analyzers::{ConsistencyAnalyzer, FormAnalyzer, SpeedAnalyzer};
pub use baseline::{BaselineRepository, InMemoryBaselineStore};
pub use config::AnalysisConfig;
pub use detection::{PhaseDetector, PhaseDetectorFactory};
pub use metrics_calculator::SwingMetricsCalculator;
pub use score_generator::ScoreGenerator;

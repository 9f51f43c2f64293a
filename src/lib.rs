// ABOUTME: Main library entry point for the swing coaching toolkit
// ABOUTME: Re-exports the analysis engine and adds logging setup and live capture sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Swing Coach
//!
//! Segments a recorded or live stream of 3D pose frames into swing phases
//! and scores the swing for golf, baseball, softball, tennis, and pickleball.
//!
//! ## Architecture
//!
//! - **`swing_core`**: Errors, constants, and value types (`PoseFrame`, `SwingMetrics`, `ScoreResult`)
//! - **`swing_intelligence`**: Phase detectors, analyzers, metrics orchestration, and scoring
//! - **live**: Channel-driven live sessions for real-time phase feedback
//! - **logging**: `tracing` subscriber configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use swing_coach::core::models::{PoseFrame, Sport, SwingConfiguration};
//! use swing_coach::intelligence::detection::detect_phases;
//! use swing_coach::intelligence::{PhaseDetectorFactory, ScoreGenerator, SwingMetricsCalculator};
//!
//! # async fn run(frames: Vec<PoseFrame>) -> anyhow::Result<()> {
//! let configuration = SwingConfiguration::for_sport(Sport::Golf);
//! let mut detector = PhaseDetectorFactory::create(&configuration);
//! let phases = detect_phases(detector.as_mut(), &frames);
//!
//! let metrics = SwingMetricsCalculator::new()
//!     .calculate_metrics(&frames, Sport::Golf, Some(&phases))
//!     .await?;
//! let score = ScoreGenerator::new().generate_score(&metrics, Sport::Golf);
//! println!("{} ({:.1})", score.grade, score.overall_score);
//! # Ok(())
//! # }
//! ```

/// Live capture sessions
pub mod live;

/// Structured logging configuration
pub mod logging;

/// Foundation types re-exported from `swing-core`
pub use swing_core as core;

/// Analysis engine re-exported from `swing-intelligence`
pub use swing_intelligence as intelligence;

pub use live::{LiveSessionOutcome, LiveSwingSession};

// ABOUTME: Core data models for swing phase detection and metrics
// ABOUTME: Re-exports PoseFrame, Sport, SwingPhase, metric records, scores, and baselines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types shared by the detector, the analyzers, and callers.
//!
//! ## Coordinate convention
//!
//! Positions are meters. `+y` points up, `+z` toward the camera, and `+x`
//! toward the target for a right-handed athlete; handedness flips the sign
//! of the lateral axis only.
//!
//! ## Core Models
//!
//! - `PoseFrame`: one timestamped snapshot of joint positions and confidences
//! - `SwingPhase`, `DetectedPhase`, `SwingAnalysis`: phase segmentation
//! - `FormMetrics`, `SpeedMetrics`, `ConsistencyMetrics`, `SwingMetrics`
//! - `ScoreResult`, `LetterGrade`, `ImprovementSuggestion`
//! - `BaselineSwing`: the ideal reference swing for a sport

mod baseline;
mod metrics;
mod phase;
mod pose;
mod score;
mod sport;

pub use baseline::BaselineSwing;
pub use metrics::{
    ComponentWeights, ConsistencyMetrics, FormMetrics, KineticChainAnalysis, SpeedMetrics,
    SwingMetrics,
};
pub use phase::{find_phase, DetectedPhase, PhaseTransition, SwingAnalysis, SwingPhase};
pub use pose::{Joint, PoseFrame};
pub use score::{
    ComponentScores, ImprovementSuggestion, LetterGrade, ScoreResult, SuggestionCategory,
    SuggestionPriority,
};
pub use sport::{Handedness, ImplementType, Sport, StrokeType, SwingConfiguration};

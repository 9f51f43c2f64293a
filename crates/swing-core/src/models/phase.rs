// ABOUTME: Swing phase enumeration, transitions, detected phase ranges, and live analysis state
// ABOUTME: Phases follow a strict canonical order from Setup to FollowThrough
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical swing phases in the order they occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingPhase {
    /// Address / ready position
    Setup,
    /// Loading away from the target
    Backswing,
    /// Change of direction at the top
    Transition,
    /// Acceleration toward the ball
    Downswing,
    /// Contact zone
    Impact,
    /// Deceleration after contact
    FollowThrough,
}

impl SwingPhase {
    /// Every phase in canonical order
    pub const ALL: [Self; 6] = [
        Self::Setup,
        Self::Backswing,
        Self::Transition,
        Self::Downswing,
        Self::Impact,
        Self::FollowThrough,
    ];

    /// The phase that follows this one, `None` for the terminal phase
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Setup => Some(Self::Backswing),
            Self::Backswing => Some(Self::Transition),
            Self::Transition => Some(Self::Downswing),
            Self::Downswing => Some(Self::Impact),
            Self::Impact => Some(Self::FollowThrough),
            Self::FollowThrough => None,
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Backswing => "Backswing",
            Self::Transition => "Transition",
            Self::Downswing => "Downswing",
            Self::Impact => "Impact",
            Self::FollowThrough => "Follow Through",
        }
    }
}

impl fmt::Display for SwingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One recorded phase change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase being left; `None` for the initial entry
    pub from_phase: Option<SwingPhase>,
    /// Phase being entered
    pub to_phase: SwingPhase,
    /// Timestamp of the frame that triggered the transition
    pub timestamp: f64,
    /// Overall confidence of that frame
    pub confidence: f64,
    /// Index of that frame among the frames fed to the detector
    pub frame_index: usize,
}

/// A phase with its time and frame-index range (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedPhase {
    /// The phase
    pub phase: SwingPhase,
    /// Timestamp of the first frame
    pub start_time: f64,
    /// Timestamp at which the phase ends
    pub end_time: f64,
    /// Index of the first frame
    pub start_frame_index: usize,
    /// Index of the last frame
    pub end_frame_index: usize,
}

impl DetectedPhase {
    /// Duration in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }

    /// Whether the frame index falls inside this phase
    #[must_use]
    pub const fn contains(&self, frame_index: usize) -> bool {
        frame_index >= self.start_frame_index && frame_index <= self.end_frame_index
    }
}

/// Find a phase in a detected sequence
#[must_use]
pub fn find_phase(phases: &[DetectedPhase], phase: SwingPhase) -> Option<&DetectedPhase> {
    phases.iter().find(|detected| detected.phase == phase)
}

/// Live detector state, returned as a snapshot after each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingAnalysis {
    /// Phase the swing is currently in
    pub current_phase: SwingPhase,
    /// Timestamp at which the current phase started
    pub phase_start_time: f64,
    /// Transitions in the order they occurred
    pub transitions: Vec<PhaseTransition>,
    /// Overall confidence of the most recent frame
    pub confidence: f64,
}

impl Default for SwingAnalysis {
    fn default() -> Self {
        Self {
            current_phase: SwingPhase::Setup,
            phase_start_time: 0.0,
            transitions: Vec::new(),
            confidence: 0.0,
        }
    }
}

impl SwingAnalysis {
    /// Fresh analysis in `Setup` with no transitions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the swing has reached its terminal phase
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_phase == SwingPhase::FollowThrough
    }

    /// Advance exactly one phase, recording the transition
    ///
    /// Returns the new phase, or `None` when already terminal.
    pub fn advance(
        &mut self,
        timestamp: f64,
        confidence: f64,
        frame_index: usize,
    ) -> Option<SwingPhase> {
        let next = self.current_phase.next()?;
        self.transitions.push(PhaseTransition {
            from_phase: Some(self.current_phase),
            to_phase: next,
            timestamp,
            confidence,
            frame_index,
        });
        self.current_phase = next;
        self.phase_start_time = timestamp;
        Some(next)
    }
}

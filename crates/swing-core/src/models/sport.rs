// ABOUTME: Sport, handedness, implement, and stroke enumerations for swing analysis
// ABOUTME: Defines the SwingConfiguration bundle used to select and tune phase detectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Swing sports supported by the analysis engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Golf full swing
    Golf,
    /// Baseball batting
    Baseball,
    /// Softball batting
    Softball,
    /// Tennis strokes
    Tennis,
    /// Pickleball strokes
    Pickleball,
}

impl Sport {
    /// Every supported sport
    pub const ALL: [Self; 5] = [
        Self::Golf,
        Self::Baseball,
        Self::Softball,
        Self::Tennis,
        Self::Pickleball,
    ];

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Golf => "Golf",
            Self::Baseball => "Baseball",
            Self::Softball => "Softball",
            Self::Tennis => "Tennis",
            Self::Pickleball => "Pickleball",
        }
    }

    /// Noun for the implement, used in coaching text
    #[must_use]
    pub const fn implement_noun(self) -> &'static str {
        match self {
            Self::Golf => "club",
            Self::Baseball | Self::Softball => "bat",
            Self::Tennis => "racquet",
            Self::Pickleball => "paddle",
        }
    }

    /// Implement assumed when none is configured
    #[must_use]
    pub const fn default_implement(self) -> ImplementType {
        match self {
            Self::Golf => ImplementType::Driver,
            Self::Baseball | Self::Softball => ImplementType::Bat,
            Self::Tennis => ImplementType::Racquet,
            Self::Pickleball => ImplementType::Paddle,
        }
    }

    /// Whether the sport is a batting sport
    #[must_use]
    pub const fn is_batting(self) -> bool {
        matches!(self, Self::Baseball | Self::Softball)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "golf" => Ok(Self::Golf),
            "baseball" => Ok(Self::Baseball),
            "softball" => Ok(Self::Softball),
            "tennis" => Ok(Self::Tennis),
            "pickleball" => Ok(Self::Pickleball),
            other => Err(AppError::invalid_input(format!("unknown sport: {other}"))),
        }
    }
}

/// Dominant side of the athlete (batting side for baseball/softball)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Handedness {
    /// Right-handed; the target lies along +x
    #[default]
    Right,
    /// Left-handed; the target lies along -x
    Left,
}

impl Handedness {
    /// Sign applied to lateral (x axis) predicates
    #[must_use]
    pub const fn lateral_sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

impl FromStr for Handedness {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" | "r" => Ok(Self::Right),
            "left" | "l" => Ok(Self::Left),
            other => Err(AppError::invalid_input(format!(
                "unknown handedness: {other}"
            ))),
        }
    }
}

/// Implement being swung
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImplementType {
    /// Golf driver
    Driver,
    /// Golf iron
    Iron,
    /// Golf wedge
    Wedge,
    /// Golf putter
    Putter,
    /// Baseball or softball bat
    Bat,
    /// Tennis racquet
    Racquet,
    /// Pickleball paddle
    Paddle,
}

impl ImplementType {
    /// Multiplier applied to detector speed thresholds
    ///
    /// Shorter or slower implements move the hands less quickly, so the
    /// initiation and downswing speed gates are scaled down for them.
    #[must_use]
    pub const fn speed_scale(self) -> f64 {
        match self {
            Self::Driver | Self::Bat | Self::Racquet => 1.0,
            Self::Iron => 0.9,
            Self::Wedge => 0.75,
            Self::Putter => 0.2,
            Self::Paddle => 0.8,
        }
    }
}

/// Racquet-sport stroke family
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StrokeType {
    /// Forehand/backhand; primarily lateral hand motion
    #[default]
    Groundstroke,
    /// Overhead serve; primarily vertical hand motion
    Serve,
}

/// Athlete and equipment configuration consumed by the detector factory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SwingConfiguration {
    /// Sport being analyzed
    pub sport: Sport,
    /// Dominant side
    pub handedness: Handedness,
    /// Implement in use
    pub implement: ImplementType,
    /// Stroke family (racquet sports only)
    pub stroke: StrokeType,
    /// Overrides the configured minimum frame confidence
    pub minimum_confidence: Option<f64>,
}

impl SwingConfiguration {
    /// Default configuration for a sport: right-handed, default implement
    #[must_use]
    pub const fn for_sport(sport: Sport) -> Self {
        Self {
            sport,
            handedness: Handedness::Right,
            implement: sport.default_implement(),
            stroke: StrokeType::Groundstroke,
            minimum_confidence: None,
        }
    }

    /// Set the handedness
    #[must_use]
    pub const fn with_handedness(mut self, handedness: Handedness) -> Self {
        self.handedness = handedness;
        self
    }

    /// Set the implement
    #[must_use]
    pub const fn with_implement(mut self, implement: ImplementType) -> Self {
        self.implement = implement;
        self
    }

    /// Set the stroke family
    #[must_use]
    pub const fn with_stroke(mut self, stroke: StrokeType) -> Self {
        self.stroke = stroke;
        self
    }

    /// Override the minimum frame confidence
    #[must_use]
    pub const fn with_minimum_confidence(mut self, minimum_confidence: f64) -> Self {
        self.minimum_confidence = Some(minimum_confidence);
        self
    }
}

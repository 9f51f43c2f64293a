// ABOUTME: Score result, thirteen-level letter grade, and improvement suggestion types
// ABOUTME: Immutable values produced once per completed swing analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Sport;

/// Letter grade, with lower bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    /// 97 and above
    #[serde(rename = "A+")]
    APlus,
    /// 93 to below 97
    #[serde(rename = "A")]
    A,
    /// 90 to below 93
    #[serde(rename = "A-")]
    AMinus,
    /// 87 to below 90
    #[serde(rename = "B+")]
    BPlus,
    /// 83 to below 87
    #[serde(rename = "B")]
    B,
    /// 80 to below 83
    #[serde(rename = "B-")]
    BMinus,
    /// 77 to below 80
    #[serde(rename = "C+")]
    CPlus,
    /// 73 to below 77
    #[serde(rename = "C")]
    C,
    /// 70 to below 73
    #[serde(rename = "C-")]
    CMinus,
    /// 67 to below 70
    #[serde(rename = "D+")]
    DPlus,
    /// 63 to below 67
    #[serde(rename = "D")]
    D,
    /// 60 to below 63
    #[serde(rename = "D-")]
    DMinus,
    /// Below 60
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    const TABLE: [(f64, Self); 12] = [
        (97.0, Self::APlus),
        (93.0, Self::A),
        (90.0, Self::AMinus),
        (87.0, Self::BPlus),
        (83.0, Self::B),
        (80.0, Self::BMinus),
        (77.0, Self::CPlus),
        (73.0, Self::C),
        (70.0, Self::CMinus),
        (67.0, Self::DPlus),
        (63.0, Self::D),
        (60.0, Self::DMinus),
    ];

    /// Map a score to its grade
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        Self::TABLE
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map_or(Self::F, |(_, grade)| *grade)
    }

    /// Display form such as `"A+"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area a suggestion addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    /// Body mechanics
    Form,
    /// Hand and implement speed
    Speed,
    /// Repeatability against the baseline
    Consistency,
    /// Tempo and sequencing
    Timing,
}

/// Suggestion priority; higher values sort first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
    /// Nice to have
    Low,
    /// Worth working on
    Medium,
    /// Work on first
    High,
}

impl SuggestionPriority {
    /// Numeric sort value (high=3, medium=2, low=1)
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// One rule-based coaching suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    /// Area addressed
    pub category: SuggestionCategory,
    /// Priority
    pub priority: SuggestionPriority,
    /// Coaching text
    pub message: String,
    /// Name of the offending metric
    pub metric_name: String,
    /// Value of the offending metric
    pub metric_value: f64,
}

/// Per-component composites that fed the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Form composite
    pub form: f64,
    /// Speed composite
    pub speed: f64,
    /// Consistency composite, absent without a baseline
    pub consistency: Option<f64>,
}

/// Final graded result of one swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Overall score in `[0, 100]`
    pub overall_score: f64,
    /// Letter grade for the overall score
    pub grade: LetterGrade,
    /// Component composites
    pub components: ComponentScores,
    /// Suggestions, highest priority first
    pub suggestions: Vec<ImprovementSuggestion>,
    /// Sport analyzed
    pub sport: Sport,
    /// When the score was generated
    pub created_at: DateTime<Utc>,
}

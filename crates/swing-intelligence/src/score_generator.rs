// ABOUTME: Score generator combining component composites into a graded result
// ABOUTME: Applies sport weights, letter grades, and threshold-based coaching suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Score Generator
//!
//! A missing consistency component is dropped from the weighting and the
//! remaining sport weights are renormalized. Suggestion rules are evaluated
//! in a fixed order and sorted stably by priority, so ties keep that order.

use chrono::Utc;
use swing_core::models::{
    ComponentScores, ImprovementSuggestion, LetterGrade, ScoreResult, Sport, SuggestionCategory,
    SuggestionPriority, SwingMetrics,
};
use tracing::debug;

use crate::config::{AnalysisConfig, ScoringConfig};

/// Peak hand speed (mph) below which a speed suggestion is raised
const fn peak_speed_floor(sport: Sport) -> f64 {
    match sport {
        Sport::Golf => 18.0,
        Sport::Baseball | Sport::Softball => 20.0,
        Sport::Tennis => 16.0,
        Sport::Pickleball => 12.0,
    }
}

/// Produces `ScoreResult`s from computed metrics
#[derive(Debug, Clone)]
pub struct ScoreGenerator {
    config: ScoringConfig,
}

impl Default for ScoreGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreGenerator {
    /// Generator using the global scoring configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::global().scoring.clone())
    }

    /// Generator with an explicit configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a swing for the given sport
    #[must_use]
    pub fn generate_score(&self, metrics: &SwingMetrics, sport: Sport) -> ScoreResult {
        let weights = self.config.weights_for(sport);
        let components = ComponentScores {
            form: metrics.form.composite_score,
            speed: metrics.speed.composite_score,
            consistency: metrics.consistency.map(|c| c.composite_score),
        };
        let overall_score = weights.combine(components.form, components.speed, components.consistency);
        let grade = LetterGrade::from_score(overall_score);
        let suggestions = self.suggestions(metrics, sport);

        debug!(
            sport = %sport,
            overall_score,
            grade = %grade,
            suggestions = suggestions.len(),
            "swing scored"
        );
        ScoreResult {
            overall_score,
            grade,
            components,
            suggestions,
            sport,
            created_at: Utc::now(),
        }
    }

    /// Threshold rules over the metrics, highest priority first
    #[must_use]
    pub fn suggestions(&self, metrics: &SwingMetrics, sport: Sport) -> Vec<ImprovementSuggestion> {
        let limits = &self.config.suggestions;
        let form = &metrics.form;
        let speed = &metrics.speed;
        let implement = sport.implement_noun();
        let mut rules = Vec::new();

        if form.hip_rotation < limits.min_hip_rotation {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::High,
                "hip_rotation",
                form.hip_rotation,
                format!(
                    "Increase hip rotation: turn your hips at least {:.0} degrees through the swing",
                    limits.min_hip_rotation
                ),
            ));
        }
        if form.shoulder_rotation < limits.min_shoulder_rotation {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::High,
                "shoulder_rotation",
                form.shoulder_rotation,
                "Increase shoulder turn: rotate your shoulders fully away from the target".to_owned(),
            ));
        }
        if form.x_factor() < limits.min_x_factor {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::Medium,
                "x_factor",
                form.x_factor(),
                "Create more separation between shoulder and hip rotation to store power".to_owned(),
            ));
        }
        if form.spine_angle_deviation() > limits.max_spine_deviation {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::High,
                "spine_angle_deviation",
                form.spine_angle_deviation(),
                "Maintain your spine angle from setup through impact".to_owned(),
            ));
        }
        if form.weight_transfer < limits.min_weight_transfer {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::Medium,
                "weight_transfer",
                form.weight_transfer,
                "Shift more weight onto your lead side before contact".to_owned(),
            ));
        }
        if form.arm_extension < limits.min_arm_extension {
            rules.push(suggestion(
                SuggestionCategory::Form,
                SuggestionPriority::Medium,
                "arm_extension",
                form.arm_extension,
                "Extend your arms through contact instead of bending the elbows".to_owned(),
            ));
        }
        if speed.peak_speed > 0.0
            && speed.impact_speed < limits.min_impact_speed_ratio * speed.peak_speed
        {
            rules.push(suggestion(
                SuggestionCategory::Speed,
                SuggestionPriority::Medium,
                "impact_speed",
                speed.impact_speed,
                format!("Your {implement} is slowing before contact: release later so peak speed arrives at impact"),
            ));
        }
        if speed.peak_speed < peak_speed_floor(sport) {
            rules.push(suggestion(
                SuggestionCategory::Speed,
                SuggestionPriority::Medium,
                "peak_speed",
                speed.peak_speed,
                format!("Generate more {implement} speed by accelerating through the hitting zone"),
            ));
        }
        if let Some(chain) = speed.kinetic_chain.filter(|chain| !chain.proper_sequence) {
            rules.push(suggestion(
                SuggestionCategory::Timing,
                SuggestionPriority::Low,
                "sequencing_score",
                chain.sequencing_score,
                "Start the downswing with the hips, then the shoulders, then the hands".to_owned(),
            ));
        }
        if let Some(consistency) = &metrics.consistency {
            if consistency.repeatability_score < limits.min_repeatability {
                rules.push(suggestion(
                    SuggestionCategory::Consistency,
                    SuggestionPriority::Medium,
                    "repeatability_score",
                    consistency.repeatability_score,
                    "Focus on repeating the same motion as your baseline swing".to_owned(),
                ));
            }
            if consistency.timing_variance > limits.max_timing_variance {
                rules.push(suggestion(
                    SuggestionCategory::Timing,
                    SuggestionPriority::Low,
                    "timing_variance",
                    consistency.timing_variance,
                    "Keep a steady tempo: your timing differs from your baseline".to_owned(),
                ));
            }
        }

        rules.sort_by(|a, b| b.priority.value().cmp(&a.priority.value()));
        rules
    }
}

fn suggestion(
    category: SuggestionCategory,
    priority: SuggestionPriority,
    metric_name: &str,
    metric_value: f64,
    message: String,
) -> ImprovementSuggestion {
    ImprovementSuggestion {
        category,
        priority,
        message,
        metric_name: metric_name.to_owned(),
        metric_value,
    }
}

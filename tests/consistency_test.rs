// ABOUTME: Integration tests for baseline storage and consistency analysis
// ABOUTME: Compares swings against stored baselines, including missing and failing repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{golf_swing, lateral_swing};
use nalgebra::Vector3;
use swing_coach::core::errors::{AppError, AppResult};
use swing_coach::core::models::{
    BaselineSwing, FormMetrics, Handedness, PoseFrame, SpeedMetrics, Sport,
};
use swing_coach::intelligence::analyzers::consistency::{
    compare_with_baseline, form_variance, position_variance, speed_variance,
};
use swing_coach::intelligence::config::{FormConfig, MetricsConfig};
use swing_coach::intelligence::{
    BaselineRepository, ConsistencyAnalyzer, FormAnalyzer, InMemoryBaselineStore,
    SwingMetricsCalculator,
};
use uuid::Uuid;

struct FailingRepository;

#[async_trait]
impl BaselineRepository for FailingRepository {
    async fn get_baseline(&self, _sport: Sport) -> AppResult<Option<BaselineSwing>> {
        Err(AppError::internal("baseline storage offline"))
    }

    async fn set_baseline(&self, _baseline: BaselineSwing) -> AppResult<Option<BaselineSwing>> {
        Err(AppError::internal("baseline storage offline"))
    }

    async fn clear_baseline(&self, _sport: Sport) -> AppResult<bool> {
        Err(AppError::internal("baseline storage offline"))
    }
}

fn calculator() -> SwingMetricsCalculator {
    common::init_test_logging();
    SwingMetricsCalculator::with_config(
        MetricsConfig::default(),
        FormAnalyzer::with_config(FormConfig::default()),
    )
}

async fn baseline_for(frames: &[PoseFrame], sport: Sport) -> BaselineSwing {
    let metrics = calculator()
        .calculate_metrics(frames, sport, None)
        .await
        .unwrap();
    BaselineSwing::new(Uuid::new_v4(), frames.to_vec(), metrics)
}

#[tokio::test]
async fn test_identical_swing_is_perfectly_consistent() {
    let frames = golf_swing(Handedness::Right);
    let baseline = baseline_for(&frames, Sport::Golf).await;
    let store = Arc::new(InMemoryBaselineStore::new());
    store.set_baseline(baseline.clone()).await.unwrap();

    let analyzer = ConsistencyAnalyzer::new(store);
    let consistency = analyzer
        .analyze(
            &frames,
            &baseline.metrics.form,
            &baseline.metrics.speed,
            Sport::Golf,
        )
        .await
        .unwrap();

    assert!(consistency.speed_variance.abs() < f64::EPSILON);
    assert!(consistency.position_variance.abs() < f64::EPSILON);
    assert!(consistency.form_variance.abs() < f64::EPSILON);
    assert!(consistency.timing_variance.abs() < f64::EPSILON);
    assert!((consistency.repeatability_score - 100.0).abs() < f64::EPSILON);
    assert!((consistency.composite_score - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_baseline_yields_none() {
    let frames = golf_swing(Handedness::Right);
    let baseline = baseline_for(&frames, Sport::Golf).await;
    let store = Arc::new(InMemoryBaselineStore::new());
    store.set_baseline(baseline.clone()).await.unwrap();

    let analyzer = ConsistencyAnalyzer::new(store);
    let result = analyzer
        .analyze(
            &frames,
            &baseline.metrics.form,
            &baseline.metrics.speed,
            Sport::Tennis,
        )
        .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_failing_repository_yields_none() {
    let frames = golf_swing(Handedness::Right);
    let metrics = calculator()
        .calculate_metrics(&frames, Sport::Golf, None)
        .await
        .unwrap();

    let analyzer = ConsistencyAnalyzer::new(Arc::new(FailingRepository));
    let result = analyzer
        .analyze(&frames, &metrics.form, &metrics.speed, Sport::Golf)
        .await;
    assert!(result.is_none());

    let with_failing = calculator().with_baseline_repository(Arc::new(FailingRepository));
    let metrics = with_failing
        .calculate_metrics(&frames, Sport::Golf, None)
        .await
        .unwrap();
    assert!(metrics.consistency.is_none());
}

#[tokio::test]
async fn test_store_replaces_and_clears() {
    let store = InMemoryBaselineStore::new();
    assert!(store.is_empty());

    let golf = golf_swing(Handedness::Right);
    let first = baseline_for(&golf, Sport::Golf).await;
    let second = baseline_for(&golf, Sport::Golf).await;
    let first_id = first.session_id;
    let second_id = second.session_id;

    assert!(store.set_baseline(first).await.unwrap().is_none());
    let replaced = store.set_baseline(second).await.unwrap().unwrap();
    assert_eq!(replaced.session_id, first_id);
    assert_eq!(store.len(), 1);

    let tennis = baseline_for(&lateral_swing(Handedness::Right), Sport::Tennis).await;
    store.set_baseline(tennis).await.unwrap();
    assert_eq!(store.len(), 2);

    let stored = store.get_baseline(Sport::Golf).await.unwrap().unwrap();
    assert_eq!(stored.session_id, second_id);

    assert!(store.clear_baseline(Sport::Golf).await.unwrap());
    assert!(!store.clear_baseline(Sport::Golf).await.unwrap());
    assert!(store.get_baseline(Sport::Golf).await.unwrap().is_none());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_shifted_swing_loses_consistency() {
    let frames = golf_swing(Handedness::Right);
    let baseline = baseline_for(&frames, Sport::Golf).await;

    let shifted: Vec<PoseFrame> = frames
        .iter()
        .cloned()
        .map(|mut frame| {
            for position in frame.joints.values_mut() {
                *position += Vector3::new(0.2, 0.0, 0.0);
            }
            frame
        })
        .collect();
    let consistency = compare_with_baseline(
        &shifted,
        &baseline.metrics.form,
        &baseline.metrics.speed,
        &baseline,
    );

    assert!((consistency.position_variance - 0.2).abs() < 1e-9);
    assert!((consistency.repeatability_score - 85.0).abs() < 1e-6);
    assert!(consistency.composite_score < 100.0);
}

#[test]
fn test_position_variance_aligns_by_progress() {
    let long = golf_swing(Handedness::Right);
    let short: Vec<PoseFrame> = long.iter().step_by(2).cloned().collect();
    // Proportional samples land on matching swing positions only approximately
    let variance = position_variance(&long, &short);
    assert!(variance < 0.05, "variance {variance}");
    assert!(position_variance(&long, &[]).abs() < f64::EPSILON);
}

#[test]
fn test_speed_variance_weights() {
    let current = SpeedMetrics {
        peak_speed: 20.0,
        impact_speed: 18.0,
        average_power_phase_speed: 10.0,
        ..SpeedMetrics::default()
    };
    let baseline = SpeedMetrics {
        peak_speed: 25.0,
        impact_speed: 18.0,
        average_power_phase_speed: 5.0,
        ..SpeedMetrics::default()
    };
    // 0.4 * 5 + 0.4 * 0 + 0.2 * 5
    assert!((speed_variance(&current, &baseline) - 3.0).abs() < 1e-9);
}

#[test]
fn test_form_variance_is_mean_difference() {
    let baseline = FormMetrics::default();
    let form = FormMetrics {
        hip_rotation: 12.0,
        arm_extension: 6.0,
        ..FormMetrics::default()
    };
    assert!((form_variance(&form, &baseline) - 3.0).abs() < 1e-9);
}

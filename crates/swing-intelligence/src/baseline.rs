// ABOUTME: Ideal baseline repository interface with an in-memory implementation
// ABOUTME: Stores at most one baseline per sport, replaced when a new one is designated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Baseline storage
//!
//! The consistency analyzer reads baselines through [`BaselineRepository`];
//! applications inject their own persistence behind it.

use async_trait::async_trait;
use dashmap::DashMap;
use swing_core::errors::AppResult;
use swing_core::models::{BaselineSwing, Sport};
use tracing::info;

/// Key-addressed store of ideal baselines
#[async_trait]
pub trait BaselineRepository: Send + Sync {
    /// Baseline for a sport, `None` when none has been designated
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn get_baseline(&self, sport: Sport) -> AppResult<Option<BaselineSwing>>;

    /// Designate a baseline for its sport, returning the one it replaced
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    async fn set_baseline(&self, baseline: BaselineSwing) -> AppResult<Option<BaselineSwing>>;

    /// Remove the baseline for a sport, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    async fn clear_baseline(&self, sport: Sport) -> AppResult<bool>;
}

/// Concurrent in-memory baseline store
#[derive(Debug, Default)]
pub struct InMemoryBaselineStore {
    baselines: DashMap<Sport, BaselineSwing>,
}

impl InMemoryBaselineStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sports with a baseline
    #[must_use]
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Whether no baseline is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

#[async_trait]
impl BaselineRepository for InMemoryBaselineStore {
    async fn get_baseline(&self, sport: Sport) -> AppResult<Option<BaselineSwing>> {
        Ok(self.baselines.get(&sport).map(|entry| entry.value().clone()))
    }

    async fn set_baseline(&self, baseline: BaselineSwing) -> AppResult<Option<BaselineSwing>> {
        info!(
            sport = %baseline.sport,
            session_id = %baseline.session_id,
            frames = baseline.frames.len(),
            "designating ideal baseline"
        );
        Ok(self.baselines.insert(baseline.sport, baseline))
    }

    async fn clear_baseline(&self, sport: Sport) -> AppResult<bool> {
        Ok(self.baselines.remove(&sport).is_some())
    }
}

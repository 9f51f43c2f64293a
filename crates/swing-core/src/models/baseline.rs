// ABOUTME: Ideal baseline swing stored per sport for consistency comparison
// ABOUTME: Holds the reference frame sequence and its computed metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PoseFrame, Sport, SwingMetrics};

/// Reference swing designated by the athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSwing {
    /// Session the baseline was taken from
    pub session_id: Uuid,
    /// Sport the baseline applies to
    pub sport: Sport,
    /// Recorded frames
    pub frames: Vec<PoseFrame>,
    /// Metrics computed for the recording
    pub metrics: SwingMetrics,
    /// When the athlete designated it
    pub designated_at: DateTime<Utc>,
}

impl BaselineSwing {
    /// Designate a recording as the baseline for its sport
    #[must_use]
    pub fn new(session_id: Uuid, frames: Vec<PoseFrame>, metrics: SwingMetrics) -> Self {
        Self {
            session_id,
            sport: metrics.sport,
            frames,
            metrics,
            designated_at: Utc::now(),
        }
    }
}

// ABOUTME: Typed analysis errors for the metrics pipeline entry points
// ABOUTME: Provides structured failures that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Error Types
//!
//! Only true precondition violations surface as errors. Untracked joints,
//! missing baselines and detector non-progress are represented in the
//! returned values instead.

use super::{AppError, ErrorCode};
use serde_json::Value;
use thiserror::Error;

/// Errors raised by the top-level analysis entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The recording is too short to analyze; the athlete should re-record
    #[error("insufficient frames: need at least {required}, got {actual}")]
    InsufficientFrames {
        /// Minimum number of frames the operation needs
        required: usize,
        /// Number of frames supplied
        actual: usize,
    },

    /// Frame decimation factor must be at least 1
    #[error("invalid decimation factor {0}: must be >= 1")]
    InvalidDecimation(usize),

    /// Analyzer configuration failed validation
    #[error("invalid analysis configuration: {0}")]
    InvalidConfiguration(String),
}

impl AnalysisError {
    /// Create an insufficient-frames error
    #[must_use]
    pub const fn insufficient_frames(required: usize, actual: usize) -> Self {
        Self::InsufficientFrames { required, actual }
    }

    /// Get the corresponding `ErrorCode`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InsufficientFrames { .. } => ErrorCode::InsufficientData,
            Self::InvalidDecimation(_) => ErrorCode::ValueOutOfRange,
            Self::InvalidConfiguration(_) => ErrorCode::ConfigInvalid,
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        let details = match &error {
            AnalysisError::InsufficientFrames { required, actual } => serde_json::json!({
                "required_frames": required,
                "actual_frames": actual,
            }),
            AnalysisError::InvalidDecimation(factor) => serde_json::json!({
                "decimation_factor": factor,
            }),
            AnalysisError::InvalidConfiguration(_) => Value::Null,
        };
        Self::new(error.error_code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_frames_converts_to_app_error() {
        let app_error: AppError = AnalysisError::insufficient_frames(1, 0).into();
        assert_eq!(app_error.code, ErrorCode::InsufficientData);
        assert_eq!(app_error.details["required_frames"], 1);
        assert!(app_error.message.contains("need at least 1"));
    }
}

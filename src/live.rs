// ABOUTME: Live swing session feeding pose frames from a bounded channel into one detector
// ABOUTME: Publishes phase snapshots and streaming metrics on watch channels for UI consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Live Swing Session
//!
//! A capture source pushes frames into a bounded `mpsc` channel; a dedicated
//! task owns the detector so frame delivery is serialized per session. Each
//! processed frame publishes a `SwingAnalysis` snapshot, and once enough
//! frames are buffered, partial metrics. Dropping every sender ends the
//! session and the task returns the collected frames and phases.

use swing_core::errors::{AppError, AppResult};
use swing_core::models::{DetectedPhase, PoseFrame, Sport, SwingAnalysis, SwingConfiguration, SwingMetrics};
use swing_intelligence::{PhaseDetector, PhaseDetectorFactory, SwingMetricsCalculator};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Default capacity of the frame channel (one second at 30 Hz)
pub const DEFAULT_FRAME_BUFFER: usize = 30;

/// Result of a finished live session
#[derive(Debug, Clone)]
pub struct LiveSessionOutcome {
    /// Every frame received, in delivery order
    pub frames: Vec<PoseFrame>,
    /// Phases derived from the detector's transitions
    pub phases: Vec<DetectedPhase>,
    /// Final detector state
    pub analysis: SwingAnalysis,
}

/// Handle to a running live session
pub struct LiveSwingSession {
    frames: mpsc::Sender<PoseFrame>,
    analysis: watch::Receiver<SwingAnalysis>,
    metrics: watch::Receiver<Option<SwingMetrics>>,
    task: JoinHandle<LiveSessionOutcome>,
}

impl LiveSwingSession {
    /// Start a session with the detector the factory picks for `configuration`
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(configuration: &SwingConfiguration, buffer: usize) -> Self {
        Self::with_detector(
            PhaseDetectorFactory::create(configuration),
            SwingMetricsCalculator::new(),
            buffer,
        )
    }

    /// Start a session with an explicit detector and calculator
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn with_detector(
        mut detector: Box<dyn PhaseDetector>,
        calculator: SwingMetricsCalculator,
        buffer: usize,
    ) -> Self {
        let (frames_tx, mut frames_rx) = mpsc::channel::<PoseFrame>(buffer.max(1));
        let (analysis_tx, analysis_rx) = watch::channel(SwingAnalysis::new());
        let (metrics_tx, metrics_rx) = watch::channel(None);
        let sport = detector.sport();

        detector.reset();
        let task = tokio::spawn(async move {
            let mut frames = Vec::new();
            while let Some(frame) = frames_rx.recv().await {
                let snapshot = detector.detect_phase(&frame);
                frames.push(frame);
                let transitions = snapshot.transitions.len();
                let _ = analysis_tx.send(snapshot);
                publish_metrics(&metrics_tx, &calculator, &frames, detector.as_ref(), sport);
                debug!(frames = frames.len(), transitions, "live frame processed");
            }

            let analysis = detector.analysis().clone();
            let phases = detector.detected_phases();
            info!(
                sport = %sport,
                frames = frames.len(),
                final_phase = %analysis.current_phase,
                "live session finished"
            );
            LiveSessionOutcome {
                frames,
                phases,
                analysis,
            }
        });

        Self {
            frames: frames_tx,
            analysis: analysis_rx,
            metrics: metrics_rx,
            task,
        }
    }

    /// Another sender for a capture source
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<PoseFrame> {
        self.frames.clone()
    }

    /// Deliver one frame, waiting for channel capacity
    ///
    /// # Errors
    ///
    /// Returns an error if the processing task has stopped
    pub async fn push(&self, frame: PoseFrame) -> AppResult<()> {
        self.frames
            .send(frame)
            .await
            .map_err(|_| AppError::internal("live session task is no longer receiving frames"))
    }

    /// Subscribe to phase snapshots
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SwingAnalysis> {
        self.analysis.clone()
    }

    /// Subscribe to streaming metrics, `None` until enough frames arrive
    #[must_use]
    pub fn subscribe_metrics(&self) -> watch::Receiver<Option<SwingMetrics>> {
        self.metrics.clone()
    }

    /// Latest phase snapshot
    #[must_use]
    pub fn latest(&self) -> SwingAnalysis {
        self.analysis.borrow().clone()
    }

    /// Close the frame channel and wait for the processing task
    ///
    /// Frames still queued in the channel are processed first. Senders
    /// obtained from [`Self::sender`] must be dropped for this to complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the processing task panicked or was cancelled
    pub async fn finish(self) -> AppResult<LiveSessionOutcome> {
        let Self { frames, task, .. } = self;
        drop(frames);
        task.await
            .map_err(|e| AppError::internal("live session task failed").with_source(e))
    }
}

fn publish_metrics(
    metrics_tx: &watch::Sender<Option<SwingMetrics>>,
    calculator: &SwingMetricsCalculator,
    frames: &[PoseFrame],
    detector: &dyn PhaseDetector,
    sport: Sport,
) {
    if frames.len() < calculator.config().streaming_min_frames {
        return;
    }
    let phases = detector.detected_phases();
    match calculator.calculate_streaming_metrics(frames, sport, Some(&phases)) {
        Ok(metrics) => {
            let _ = metrics_tx.send(Some(metrics));
        }
        Err(error) => {
            warn!(
                sport = %sport,
                frames = frames.len(),
                error = %error,
                "streaming metrics failed, keeping previous snapshot"
            );
        }
    }
}

// ABOUTME: Command-line swing analyzer reading recorded pose frames from JSON
// ABOUTME: Runs phase detection, metrics, and scoring and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Offline swing analysis.
//!
//! Usage:
//! ```bash
//! # Score a golf swing recorded as a JSON array of pose frames
//! cargo run --bin swing-analyze -- --frames swing.json
//!
//! # Left-handed tennis serve compared against a stored baseline
//! cargo run --bin swing-analyze -- --frames serve.json --sport tennis \
//!     --handedness left --serve --baseline ideal_serve.json
//!
//! # Halve the frame rate before analysis and include phases and metrics
//! cargo run --bin swing-analyze -- --frames swing.json --decimation 2 --full
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use swing_coach::core::models::{
    BaselineSwing, Handedness, PoseFrame, Sport, StrokeType, SwingConfiguration,
};
use swing_coach::intelligence::config::AnalysisConfig;
use swing_coach::intelligence::detection::detect_phases;
use swing_coach::intelligence::{
    BaselineRepository, FormAnalyzer, InMemoryBaselineStore, PhaseDetectorFactory, ScoreGenerator,
    SwingMetricsCalculator,
};
use swing_coach::logging::LoggingConfig;
use tokio::fs;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "swing-analyze",
    about = "Swing phase detection and scoring",
    long_about = "Detect swing phases in a recorded pose sequence, compute form, speed and consistency metrics, and print a graded score"
)]
struct AnalyzeArgs {
    /// JSON file holding an array of pose frames
    #[arg(long)]
    frames: PathBuf,

    /// Sport (golf, baseball, softball, tennis, pickleball)
    #[arg(long, default_value = "golf")]
    sport: Sport,

    /// Athlete handedness or batting side (right, left)
    #[arg(long, default_value = "right")]
    handedness: Handedness,

    /// Treat a racquet swing as an overhead serve
    #[arg(long)]
    serve: bool,

    /// JSON file holding an ideal baseline swing for consistency scoring
    #[arg(long)]
    baseline: Option<PathBuf>,

    /// Keep every Nth frame before computing metrics
    #[arg(long)]
    decimation: Option<usize>,

    /// Print detected phases and metrics alongside the score
    #[arg(long)]
    full: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = AnalyzeArgs::parse();

    let logging = LoggingConfig::from_env();
    let logging = if args.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let frames: Vec<PoseFrame> = serde_json::from_slice(&fs::read(&args.frames).await?)?;
    info!(
        path = %args.frames.display(),
        frames = frames.len(),
        sport = %args.sport,
        "loaded pose frames"
    );

    let stroke = if args.serve {
        StrokeType::Serve
    } else {
        StrokeType::Groundstroke
    };
    let configuration = SwingConfiguration::for_sport(args.sport)
        .with_handedness(args.handedness)
        .with_stroke(stroke);

    let mut detector = PhaseDetectorFactory::create(&configuration);
    let phases = detect_phases(detector.as_mut(), &frames);
    info!(phases = phases.len(), "phase detection complete");

    let calculator = build_calculator(&args).await?;
    let metrics = calculator
        .calculate_metrics(&frames, args.sport, Some(&phases))
        .await?;
    let score = ScoreGenerator::new().generate_score(&metrics, args.sport);

    let output = if args.full {
        json!({
            "phases": phases,
            "metrics": metrics,
            "score": score,
        })
    } else {
        serde_json::to_value(&score)?
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

async fn build_calculator(args: &AnalyzeArgs) -> Result<SwingMetricsCalculator> {
    let config = AnalysisConfig::global();
    let mut metrics_config = config.metrics.clone();
    if let Some(factor) = args.decimation {
        metrics_config.decimation_factor = factor;
    }
    metrics_config.validate()?;

    let calculator = SwingMetricsCalculator::with_config(
        metrics_config,
        FormAnalyzer::with_config(config.form.clone()),
    );

    let Some(path) = &args.baseline else {
        return Ok(calculator);
    };
    let baseline: BaselineSwing = serde_json::from_slice(&fs::read(path).await?)?;
    if baseline.sport != args.sport {
        anyhow::bail!(
            "baseline is for {}, but the swing is {}",
            baseline.sport,
            args.sport
        );
    }
    let store = Arc::new(InMemoryBaselineStore::new());
    store.set_baseline(baseline).await?;
    Ok(calculator.with_baseline_repository(store))
}

// ABOUTME: FitGym CLI - runs the grouping and plateau engines over a workout snapshot
// ABOUTME: Prints exercise groups, per-exercise plateau checks, and whole-workout analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack
//!
//! Usage:
//! ```bash
//! # Show supersets, circuits, and completion for the active plan
//! fitgym-cli group workout.json
//!
//! # Check one exercise against what is about to be logged
//! fitgym-cli plateau workout.json --exercise 7 --weight 80 --reps 8
//!
//! # Require four sessions of evidence instead of three
//! fitgym-cli plateau workout.json --exercise 7 --min-sessions 4
//!
//! # Analyze the whole workout with human-readable output
//! fitgym-cli --format pretty analyze workout.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitgym::config::environment::{AppConfig, OutputFormat};
use fitgym::errors::AppError;
use fitgym::intelligence::PlateauDetector;
use fitgym::logging::LoggingConfig;
use helpers::display;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "fitgym-cli",
    about = "FitGymTrack training engine CLI",
    long_about = "Runs exercise grouping, plateau detection, and progression suggestions over a workout snapshot file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or pretty (defaults to FITGYM_OUTPUT_FORMAT, then json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Group the plan into supersets, circuits, and single exercises
    Group {
        /// Workout snapshot file
        snapshot: PathBuf,
    },

    /// Check one exercise for a plateau
    Plateau {
        /// Workout snapshot file
        snapshot: PathBuf,

        /// Exercise id to check
        #[arg(long)]
        exercise: i64,

        /// Weight about to be logged (kg); defaults to the snapshot's live input
        #[arg(long, requires = "reps")]
        weight: Option<f64>,

        /// Reps about to be logged; defaults to the snapshot's live input
        #[arg(long, requires = "weight")]
        reps: Option<u32>,

        /// Consecutive sessions required as evidence
        #[arg(long)]
        min_sessions: Option<usize>,
    },

    /// Analyze the whole workout: groups, completion, and plateau badges
    Analyze {
        /// Workout snapshot file
        snapshot: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Resolved without `AppConfig` so configuration failures are reported in the same format
    let error_format = cli
        .format
        .as_deref()
        .map_or_else(OutputFormat::from_env, OutputFormat::from_str_or_default);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let code = match err.downcast::<AppError>() {
                Ok(app_error) => {
                    let code = app_error.code.exit_code();
                    display::report_error(error_format, app_error);
                    code
                }
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    1
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env().map_err(|err| AppError::config(format!("{err:#}")))?;

    let logging = LoggingConfig::from_env().with_level(config.log_level);
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging
        .init()
        .map_err(|err| AppError::internal(format!("Failed to initialize logging: {err:#}")))?;

    let format = cli
        .format
        .as_deref()
        .map_or(config.output_format, OutputFormat::from_str_or_default);
    debug!(?format, environment = %config.environment, "fitgym-cli starting");

    let detector = PlateauDetector::with_config(config.intelligence);

    match cli.command {
        Command::Group { snapshot } => commands::group::run(&snapshot, format)?,
        Command::Plateau {
            snapshot,
            exercise,
            weight,
            reps,
            min_sessions,
        } => {
            let detector = match min_sessions {
                Some(min_sessions) => detector.with_min_sessions(min_sessions),
                None => detector,
            };
            let live = weight.zip(reps);
            commands::plateau::run(&snapshot, exercise, live, &detector, format)?;
        }
        Command::Analyze { snapshot } => commands::analyze::run(&snapshot, detector, format)?,
    }

    Ok(())
}

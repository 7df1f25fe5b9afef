// ABOUTME: Training intelligence crate for FitGymTrack
// ABOUTME: Exercise grouping, session grouping, plateau detection, and progression advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

#![deny(unsafe_code)]

//! # `fitgym-intelligence`
//!
//! Pure, synchronous algorithms over caller-supplied workout data. Nothing in
//! this crate performs I/O or keeps state between calls; every function can
//! be invoked concurrently for different exercises.
//!
//! - [`ExerciseGrouper`] partitions a plan into supersets, circuits, and singles
//! - [`PlateauDetector`] decides whether an exercise has stalled
//! - [`ProgressionAdvisor`] classifies plateaus and ranks ways forward
//! - [`WorkoutAnalyzer`] runs all of the above for an active workout

/// Intelligence configuration (plateau detection, progression)
pub mod config;
/// Superset and circuit grouping with completion accounting
pub mod exercise_grouping;
/// Plateau detection over completed-series history
pub mod plateau_detection;
/// Plateau classification and progression suggestions
pub mod progression;
/// Grouping of history into training sessions
pub mod session_grouping;
/// Whole-workout analysis for the active-workout display
pub mod workout_analysis;

pub use config::{ConfigError, IntelligenceConfig, PlateauDetectionConfig, ProgressionConfig};
pub use exercise_grouping::{
    completed_series_count, ExerciseGroup, ExerciseGrouper, GroupKind, GroupProgress,
};
#[cfg(feature = "simulated-plateau")]
pub use plateau_detection::simulated_plateau_candidate;
pub use plateau_detection::PlateauDetector;
pub use progression::{format_weight, ProgressionAdvisor};
pub use session_grouping::{group_into_sessions, Session};
pub use workout_analysis::{GroupAnalysis, WorkoutAnalysis, WorkoutAnalyzer};

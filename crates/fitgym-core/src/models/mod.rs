// ABOUTME: Workout domain models shared by the grouping and plateau engines
// ABOUTME: Re-exports history, plan, and plateau result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Workout domain models
//!
//! All models are immutable value objects. History and plans are supplied by
//! the caller on every call; plateau results are computed fresh each time.

/// Planned exercises and their set-type tags
pub mod exercise;
/// Plateau detection results and progression suggestions
pub mod plateau;
/// Completed series history and live input
pub mod series;

pub use exercise::{SetType, WorkoutExercise};
pub use plateau::{PlateauInfo, PlateauType, ProgressionSuggestion, SuggestionType};
pub use series::{CompletedSeries, CurrentInput};

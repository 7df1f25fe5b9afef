// ABOUTME: Groups an exercise's completed series into training sessions
// ABOUTME: Uses calendar-day keys with a fixed-window fallback for single-day histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Session grouping
//!
//! History carries no explicit session identifier. A session is taken to be
//! every series of one exercise logged on the same calendar day, where the
//! day is the literal date prefix of the timestamp (no timezone conversion).
//! When an entire history collapses into a single day but is long enough to
//! clearly span several workouts, it is re-cut into fixed windows instead.

use fitgym_core::models::CompletedSeries;
use std::collections::HashMap;
use tracing::trace;

use crate::config::PlateauDetectionConfig;

/// Series of one exercise performed in one session, in history order
pub type Session<'a> = Vec<&'a CompletedSeries>;

/// Split an exercise's history into chronologically ordered sessions
#[must_use]
pub fn group_into_sessions<'a>(
    series: &'a [CompletedSeries],
    config: &PlateauDetectionConfig,
) -> Vec<Session<'a>> {
    let mut sessions = group_by_day(series);

    if sessions.len() == 1 && series.len() >= config.chunk_fallback_min_series {
        let chunk_size = config.chunk_size.max(1);
        trace!(
            series = series.len(),
            chunk_size,
            "single-day history, falling back to fixed session windows"
        );
        sessions = series
            .chunks(chunk_size)
            .map(|chunk| chunk.iter().collect())
            .collect();
    }

    sessions
}

fn group_by_day(series: &[CompletedSeries]) -> Vec<Session<'_>> {
    let mut day_index: HashMap<&str, usize> = HashMap::new();
    let mut sessions: Vec<Session<'_>> = Vec::new();

    for entry in series {
        let slot = *day_index.entry(entry.session_day()).or_insert_with(|| {
            sessions.push(Vec::new());
            sessions.len() - 1
        });
        sessions[slot].push(entry);
    }

    // Stable: days whose first series share a timestamp keep history order
    sessions.sort_by(|a, b| first_timestamp(a).cmp(first_timestamp(b)));
    sessions
}

fn first_timestamp<'a>(session: &Session<'a>) -> &'a str {
    session.first().map_or("", |entry| entry.timestamp.as_str())
}

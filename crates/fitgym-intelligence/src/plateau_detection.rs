// ABOUTME: Plateau detection over an exercise's completed-series history
// ABOUTME: Compares aligned set positions across recent sessions and degrades gracefully on sparse data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Plateau detection
//!
//! An exercise is on a plateau when the same set positions have been logged
//! at the same weight and reps (within tolerance) for several consecutive
//! sessions. Detection never fails: thin history falls back to cheaper
//! checks, and anything inconclusive is reported as "no plateau".

use fitgym_core::constants::plateau::LIVE_SET_POSITION;
#[cfg(feature = "simulated-plateau")]
use fitgym_core::constants::simulated;
use fitgym_core::models::{CompletedSeries, CurrentInput, PlateauInfo};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::config::{IntelligenceConfig, PlateauDetectionConfig};
use crate::progression::ProgressionAdvisor;
use crate::session_grouping::{group_into_sessions, Session};

/// Outcome of comparing one set position across the evidence window
#[derive(Debug, Clone, Copy)]
struct BucketVerdict<'a> {
    serie_number: u32,
    in_plateau: bool,
    most_recent: &'a CompletedSeries,
}

/// Plateau detection engine
///
/// Holds only immutable configuration, so one detector can be shared across
/// threads and reused for every exercise.
#[derive(Debug, Clone, Default)]
pub struct PlateauDetector {
    config: PlateauDetectionConfig,
    advisor: ProgressionAdvisor,
}

impl PlateauDetector {
    /// Create a detector with the default three-session evidence window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector from a full intelligence configuration
    #[must_use]
    pub fn with_config(config: IntelligenceConfig) -> Self {
        Self {
            config: config.plateau,
            advisor: ProgressionAdvisor::with_config(config.progression),
        }
    }

    /// Override the number of consecutive sessions required as evidence
    #[must_use]
    pub fn with_min_sessions(mut self, min_sessions: usize) -> Self {
        self.config.min_sessions_for_plateau = min_sessions;
        self
    }

    /// Active plateau configuration
    #[must_use]
    pub const fn config(&self) -> &PlateauDetectionConfig {
        &self.config
    }

    /// Detect whether an exercise has stalled
    ///
    /// `current` is what the user is about to log; `history` maps exercise
    /// ids to their completed series. Returns `None` when no plateau is found
    /// or the live input is not a finite, non-negative weight.
    #[must_use]
    pub fn detect_plateau(
        &self,
        exercise_id: i64,
        exercise_name: &str,
        current: CurrentInput,
        history: &HashMap<i64, Vec<CompletedSeries>>,
    ) -> Option<PlateauInfo> {
        if !current.is_well_formed() {
            debug!(exercise_id, weight = current.weight, "ignoring malformed live input");
            return None;
        }

        let series = usable_history(history, exercise_id);
        let min_sessions = self.config.effective_min_sessions();

        if series.is_empty() {
            return self.detect_without_history(exercise_id, exercise_name, current);
        }

        let sessions = group_into_sessions(&series, &self.config);
        if sessions.len() < min_sessions {
            debug!(
                exercise_id,
                sessions = sessions.len(),
                min_sessions,
                "limited history, comparing against the latest series"
            );
            return self.detect_with_limited_data(exercise_id, exercise_name, current, &series);
        }

        let recent = &sessions[sessions.len() - min_sessions..];
        self.detect_across_sessions(exercise_id, exercise_name, current, recent, &series)
    }

    /// Full analysis: compare each set position across the evidence window
    fn detect_across_sessions(
        &self,
        exercise_id: i64,
        exercise_name: &str,
        current: CurrentInput,
        recent: &[Session<'_>],
        series: &[CompletedSeries],
    ) -> Option<PlateauInfo> {
        let min_sessions = self.config.effective_min_sessions();
        let verdicts = self.evaluate_buckets(current, recent);
        if verdicts.is_empty() {
            debug!(exercise_id, "no set position logged in enough sessions");
            return None;
        }

        let in_plateau = verdicts.iter().filter(|verdict| verdict.in_plateau).count();
        let required = (verdicts.len() / 2).max(1);
        debug!(
            exercise_id,
            checked = verdicts.len(),
            in_plateau,
            required,
            "set position comparison finished"
        );
        if in_plateau < required {
            return None;
        }

        // Buckets are ordered by set position, so the first is position 1 when present
        let representative = verdicts
            .iter()
            .find(|verdict| verdict.serie_number == LIVE_SET_POSITION)
            .or_else(|| verdicts.first())
            .map(|verdict| verdict.most_recent)?;

        Some(self.build_info(
            exercise_id,
            exercise_name,
            CurrentInput::from(representative),
            min_sessions,
            series,
        ))
    }

    fn evaluate_buckets<'a>(
        &self,
        current: CurrentInput,
        recent: &[Session<'a>],
    ) -> Vec<BucketVerdict<'a>> {
        let min_sessions = self.config.effective_min_sessions();
        let mut buckets: BTreeMap<u32, Vec<&'a CompletedSeries>> = BTreeMap::new();
        for &entry in recent.iter().flatten() {
            buckets.entry(entry.serie_number).or_default().push(entry);
        }

        buckets
            .into_iter()
            .filter(|(_, entries)| entries.len() >= min_sessions)
            .filter_map(|(serie_number, entries)| {
                let window = &entries[entries.len() - min_sessions..];
                let reference = *window.first()?;
                let most_recent = *window.last()?;

                let stable = window
                    .iter()
                    .all(|entry| self.within_tolerance(entry.weight, entry.reps, reference));
                let matches_live = serie_number != LIVE_SET_POSITION
                    || self.within_tolerance(current.weight, current.reps, reference);

                Some(BucketVerdict {
                    serie_number,
                    in_plateau: stable && matches_live,
                    most_recent,
                })
            })
            .collect()
    }

    /// Sparse history: compare the live input with the most recent series only
    fn detect_with_limited_data(
        &self,
        exercise_id: i64,
        exercise_name: &str,
        current: CurrentInput,
        series: &[CompletedSeries],
    ) -> Option<PlateauInfo> {
        // max_by returns the last of equal timestamps, i.e. the latest logged
        let latest = series
            .iter()
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp))?;

        if !self.within_tolerance(current.weight, current.reps, latest) {
            return None;
        }

        Some(self.build_info(exercise_id, exercise_name, current, 1, series))
    }

    #[cfg(feature = "simulated-plateau")]
    fn detect_without_history(
        &self,
        exercise_id: i64,
        exercise_name: &str,
        current: CurrentInput,
    ) -> Option<PlateauInfo> {
        if !simulated_plateau_candidate(exercise_id, exercise_name, current) {
            debug!(exercise_id, "no history, simulated plateau heuristic did not match");
            return None;
        }
        debug!(exercise_id, "no history, simulated plateau heuristic matched");
        Some(self.build_info(
            exercise_id,
            exercise_name,
            current,
            self.config.effective_min_sessions(),
            &[],
        ))
    }

    #[cfg(not(feature = "simulated-plateau"))]
    fn detect_without_history(
        &self,
        exercise_id: i64,
        _exercise_name: &str,
        _current: CurrentInput,
    ) -> Option<PlateauInfo> {
        debug!(exercise_id, "no history, insufficient data for plateau detection");
        None
    }

    fn within_tolerance(&self, weight: f64, reps: u32, reference: &CompletedSeries) -> bool {
        (weight - reference.weight).abs() <= self.config.weight_tolerance
            && reps.abs_diff(reference.reps) <= self.config.reps_tolerance
    }

    fn build_info(
        &self,
        exercise_id: i64,
        exercise_name: &str,
        stuck_at: CurrentInput,
        sessions_in_plateau: usize,
        series: &[CompletedSeries],
    ) -> PlateauInfo {
        PlateauInfo {
            exercise_id,
            exercise_name: exercise_name.to_owned(),
            plateau_type: self
                .advisor
                .determine_plateau_type(stuck_at.weight, stuck_at.reps),
            sessions_in_plateau,
            current_weight: stuck_at.weight,
            current_reps: stuck_at.reps,
            suggestions: self
                .advisor
                .generate_suggestions(stuck_at.weight, stuck_at.reps, series),
        }
    }
}

/// History of one exercise without entries whose weight is not a number
fn usable_history(
    history: &HashMap<i64, Vec<CompletedSeries>>,
    exercise_id: i64,
) -> Cow<'_, [CompletedSeries]> {
    let Some(series) = history.get(&exercise_id) else {
        return Cow::Borrowed(&[]);
    };
    if series.iter().all(|entry| entry.weight.is_finite()) {
        Cow::Borrowed(series.as_slice())
    } else {
        Cow::Owned(
            series
                .iter()
                .filter(|entry| entry.weight.is_finite())
                .cloned()
                .collect(),
        )
    }
}

/// Placeholder heuristic for exercises that have never been logged
///
/// Flags round plate loads in a hypertrophy rep range on even ids, or common
/// isolation/compound movement names above 10 kg on ids ≡ 1 (mod 3). It does
/// not reflect real stagnation and is compiled only with `simulated-plateau`.
#[cfg(feature = "simulated-plateau")]
#[must_use]
pub fn simulated_plateau_candidate(
    exercise_id: i64,
    exercise_name: &str,
    current: CurrentInput,
) -> bool {
    let (min_reps, max_reps) = simulated::REP_RANGE;
    let round_load = current.weight > 0.0
        && simulated::ROUND_WEIGHT_STEPS
            .iter()
            .any(|step| is_multiple_of(current.weight, *step));
    let parity_match = round_load
        && (min_reps..=max_reps).contains(&current.reps)
        && exercise_id.rem_euclid(2) == 0;

    let name = exercise_name.to_lowercase();
    let keyword_match = simulated::KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
        && current.weight >= simulated::KEYWORD_MIN_WEIGHT
        && exercise_id.rem_euclid(3) == 1;

    parity_match || keyword_match
}

#[cfg(feature = "simulated-plateau")]
fn is_multiple_of(value: f64, step: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    let remainder = value.rem_euclid(step);
    remainder < EPSILON || (step - remainder) < EPSILON
}

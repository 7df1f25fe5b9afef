// ABOUTME: Integration tests for plateau detection over completed-series history
// ABOUTME: Covers set-position comparison, tolerances, majority rule, and sparse-data fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{first_sets, history_of, init_test_logging, repeated_sessions, series};
use fitgym::config::{IntelligenceConfig, PlateauDetectionConfig};
use fitgym::intelligence::PlateauDetector;
use fitgym::models::{CompletedSeries, CurrentInput, PlateauInfo, PlateauType, SuggestionType};
use std::collections::HashMap;

const BENCH: i64 = 1;

fn detect(
    history: &HashMap<i64, Vec<CompletedSeries>>,
    weight: f64,
    reps: u32,
) -> Option<PlateauInfo> {
    init_test_logging();
    PlateauDetector::new().detect_plateau(
        BENCH,
        "Bench Press",
        CurrentInput::new(weight, reps),
        history,
    )
}

// ============================================================================
// Full Set-Position Comparison
// ============================================================================

#[test]
fn test_identical_sessions_report_moderate_plateau() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]));

    let plateau = detect(&history, 80.0, 8).expect("plateau expected");

    assert_eq!(plateau.exercise_id, BENCH);
    assert_eq!(plateau.exercise_name, "Bench Press");
    assert_eq!(plateau.plateau_type, PlateauType::Moderate);
    assert_eq!(plateau.sessions_in_plateau, 3);
    assert!((plateau.current_weight - 80.0).abs() < f64::EPSILON);
    assert_eq!(plateau.current_reps, 8);
}

#[test]
fn test_weight_difference_of_one_is_still_constant() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (81.0, 8)]));

    let plateau = detect(&history, 80.0, 8).expect("plateau expected");

    // The reported values come from the most recent session
    assert!((plateau.current_weight - 81.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_difference_above_one_breaks_plateau() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (81.5, 8)]));

    assert!(detect(&history, 80.0, 8).is_none());
}

#[test]
fn test_rep_tolerance_is_one() {
    let within = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 9), (80.0, 7)]));
    assert!(detect(&within, 80.0, 8).is_some());

    let beyond = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 10)]));
    assert!(detect(&beyond, 80.0, 8).is_none());
}

#[test]
fn test_live_input_must_match_first_set_position() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]));

    assert!(detect(&history, 85.0, 8).is_none());
    assert!(detect(&history, 80.0, 10).is_none());
    assert!(detect(&history, 81.0, 9).is_some());
}

#[test]
fn test_only_the_latest_sessions_are_compared() {
    let history = history_of(
        BENCH,
        first_sets(BENCH, &[(100.0, 5), (80.0, 8), (80.0, 8), (80.0, 8)]),
    );

    assert!(detect(&history, 80.0, 8).is_some());
}

#[test]
fn test_sessions_are_ordered_by_first_timestamp() {
    // Logged out of order: the oldest session is the odd one out
    let history = history_of(
        BENCH,
        vec![
            series(BENCH, 7, 1, 80.0, 8),
            series(BENCH, 1, 1, 100.0, 5),
            series(BENCH, 3, 1, 80.0, 8),
            series(BENCH, 5, 1, 80.0, 8),
        ],
    );

    let plateau = detect(&history, 80.0, 8).expect("plateau expected");
    assert_eq!(plateau.sessions_in_plateau, 3);
}

// ============================================================================
// Majority Rule Across Set Positions
// ============================================================================

fn four_position_sessions(stable_positions: u32) -> Vec<CompletedSeries> {
    let drifting = [70.0, 60.0, 50.0];
    (0..3_u32)
        .flat_map(|session| {
            let day = (session + 1) * 2;
            (1..=4_u32).map(move |position| {
                let weight = if position <= stable_positions {
                    85.0 - f64::from(position) * 5.0
                } else {
                    drifting[session as usize]
                };
                series(BENCH, day, position, weight, 8)
            })
        })
        .collect()
}

#[test]
fn test_half_of_four_positions_confirms_plateau() {
    let history = history_of(BENCH, four_position_sessions(2));

    let plateau = detect(&history, 80.0, 8).expect("two of four positions qualify");
    assert!((plateau.current_weight - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_one_of_four_positions_is_not_enough() {
    let history = history_of(BENCH, four_position_sessions(1));

    assert!(detect(&history, 80.0, 8).is_none());
}

#[test]
fn test_live_mismatch_only_fails_the_first_position() {
    // Two positions checked, one required: position 2 carries the verdict
    let history = history_of(BENCH, repeated_sessions(BENCH, 3, &[(80.0, 8), (75.0, 8)]));

    assert!(detect(&history, 90.0, 8).is_some());
}

#[test]
fn test_representative_falls_back_to_lowest_position() {
    let history = history_of(
        BENCH,
        (1..=3_u32)
            .flat_map(|session| {
                [
                    series(BENCH, session * 2, 2, 60.0, 10),
                    series(BENCH, session * 2, 3, 55.0, 10),
                ]
            })
            .collect(),
    );

    let plateau = detect(&history, 100.0, 3).expect("plateau expected");

    assert!((plateau.current_weight - 60.0).abs() < f64::EPSILON);
    assert_eq!(plateau.current_reps, 10);
}

#[test]
fn test_positions_logged_in_too_few_sessions_are_ignored() {
    let history = history_of(
        BENCH,
        vec![
            series(BENCH, 2, 1, 80.0, 8),
            series(BENCH, 4, 2, 80.0, 8),
            series(BENCH, 6, 3, 80.0, 8),
        ],
    );

    assert!(detect(&history, 80.0, 8).is_none());
}

// ============================================================================
// Sparse Data Fallbacks
// ============================================================================

#[test]
fn test_limited_history_compares_against_latest_series() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (82.0, 8)]));

    let plateau = detect(&history, 81.0, 9).expect("matches the latest series");

    assert_eq!(plateau.sessions_in_plateau, 1);
    assert!((plateau.current_weight - 81.0).abs() < f64::EPSILON);
    assert_eq!(plateau.current_reps, 9);
    assert!(detect(&history, 84.0, 8).is_none());
}

#[test]
fn test_single_day_history_is_chunked_into_sessions() {
    let history = history_of(
        BENCH,
        (0..9_u32)
            .map(|index| series(BENCH, 2, index % 3 + 1, 80.0, 8))
            .collect(),
    );

    let plateau = detect(&history, 80.0, 8).expect("three pseudo-sessions");
    assert_eq!(plateau.sessions_in_plateau, 3);
}

#[test]
fn test_short_single_day_history_uses_limited_check() {
    let history = history_of(
        BENCH,
        (1..=5_u32)
            .map(|position| series(BENCH, 2, position, 80.0, 8))
            .collect(),
    );

    let plateau = detect(&history, 80.0, 8).expect("latest series matches");
    assert_eq!(plateau.sessions_in_plateau, 1);
}

#[test]
fn test_history_of_other_exercises_is_ignored() {
    let history = history_of(42, first_sets(42, &[(80.0, 8), (80.0, 8), (80.0, 8)]));

    init_test_logging();
    let plateau = PlateauDetector::new().detect_plateau(
        BENCH,
        "Lat Pulldown",
        CurrentInput::new(80.0, 8),
        &history,
    );
    assert!(plateau.is_none());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_min_sessions_override() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]));
    let detector = PlateauDetector::new().with_min_sessions(4);

    let plateau = detector
        .detect_plateau(BENCH, "Bench Press", CurrentInput::new(80.0, 8), &history)
        .expect("limited check against the latest series");

    assert_eq!(plateau.sessions_in_plateau, 1);
}

#[test]
fn test_zero_min_sessions_behaves_as_one() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8)]));
    let detector = PlateauDetector::new().with_min_sessions(0);

    let plateau = detector
        .detect_plateau(BENCH, "Bench Press", CurrentInput::new(80.0, 8), &history)
        .expect("one session is enough evidence");

    assert_eq!(plateau.sessions_in_plateau, 1);
}

#[test]
fn test_custom_weight_tolerance() {
    let config = IntelligenceConfig {
        plateau: PlateauDetectionConfig {
            weight_tolerance: 2.5,
            ..PlateauDetectionConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    let detector = PlateauDetector::with_config(config);
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (82.5, 8)]));

    assert!(detector
        .detect_plateau(BENCH, "Bench Press", CurrentInput::new(80.0, 8), &history)
        .is_some());
}

// ============================================================================
// Classification and Suggestions
// ============================================================================

#[test]
fn test_plateau_type_follows_stuck_values() {
    let cases = [
        ((8.0, 12), PlateauType::LightWeight),
        ((120.0, 3), PlateauType::HeavyWeight),
        ((40.0, 3), PlateauType::LowReps),
        ((20.0, 20), PlateauType::HighReps),
        ((10.0, 15), PlateauType::Moderate),
    ];

    for ((weight, reps), expected) in cases {
        let history = history_of(
            BENCH,
            first_sets(BENCH, &[(weight, reps), (weight, reps), (weight, reps)]),
        );
        let plateau = detect(&history, weight, reps).expect("plateau expected");
        assert_eq!(plateau.plateau_type, expected, "{weight} kg x {reps}");
    }
}

#[test]
fn test_suggestions_ranked_by_confidence() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]));

    let plateau = detect(&history, 80.0, 8).unwrap();
    let kinds: Vec<SuggestionType> = plateau
        .suggestions
        .iter()
        .map(|suggestion| suggestion.suggestion_type)
        .collect();

    assert_eq!(kinds, vec![SuggestionType::IncreaseReps, SuggestionType::IncreaseWeight]);
    assert_eq!(plateau.suggestions[0].description, "Keep 80 kg and aim for 10 reps");
    assert_eq!(
        plateau.suggestions[1].description,
        "Increase weight to 82.5 kg for 8 reps"
    );
    assert!(plateau
        .suggestions
        .windows(2)
        .all(|pair| pair[0].confidence >= pair[1].confidence));
    assert_eq!(
        plateau.top_suggestion().map(|s| s.suggestion_type),
        Some(SuggestionType::IncreaseReps)
    );
}

#[test]
fn test_heavy_high_rep_plateau_gets_advanced_technique() {
    let history = history_of(BENCH, first_sets(BENCH, &[(60.0, 12), (60.0, 12), (60.0, 12)]));

    let plateau = detect(&history, 60.0, 12).unwrap();

    assert_eq!(plateau.suggestions.len(), 3);
    let top = plateau.top_suggestion().unwrap();
    assert_eq!(top.suggestion_type, SuggestionType::AdvancedTechnique);
    assert!((top.confidence - 0.7).abs() < f64::EPSILON);
}

// ============================================================================
// Defensive Input Handling
// ============================================================================

#[test]
fn test_malformed_live_weight_is_never_a_plateau() {
    let history = history_of(BENCH, first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]));

    assert!(detect(&history, f64::NAN, 8).is_none());
    assert!(detect(&history, f64::INFINITY, 8).is_none());
    assert!(detect(&history, -80.0, 8).is_none());
}

#[test]
fn test_non_finite_history_entries_are_skipped() {
    let mut sets = first_sets(BENCH, &[(80.0, 8), (80.0, 8), (80.0, 8)]);
    sets.push(series(BENCH, 20, 1, f64::NAN, 8));
    let history = history_of(BENCH, sets);

    let plateau = detect(&history, 80.0, 8).expect("NaN session ignored");
    assert_eq!(plateau.sessions_in_plateau, 3);
}

// ============================================================================
// No History
// ============================================================================

#[test]
fn test_empty_history_never_panics() {
    let empty = HashMap::new();

    assert!(detect(&empty, 7.0, 10).is_none());
    assert!(detect(&empty, 0.0, 0).is_none());
}

#[test]
fn test_extreme_rep_counts_do_not_overflow() {
    let stuck = history_of(BENCH, first_sets(BENCH, &[(80.0, u32::MAX); 3]));

    let plateau = detect(&stuck, 80.0, u32::MAX).expect("plateau expected");
    assert_eq!(plateau.plateau_type, PlateauType::HighReps);
    let increase = plateau
        .suggestions
        .iter()
        .find(|s| s.suggestion_type == SuggestionType::IncreaseReps)
        .expect("rep suggestion");
    assert_eq!(increase.new_reps, u32::MAX);

    let empty = HashMap::new();
    if let Some(plateau) = detect(&empty, 60.0, u32::MAX) {
        assert!(plateau.suggestions.iter().all(|s| s.new_reps == u32::MAX));
    }
}

#[cfg(feature = "simulated-plateau")]
#[test]
fn test_simulated_plateau_without_history() {
    use fitgym::intelligence::simulated_plateau_candidate;

    let empty = HashMap::new();
    let detector = PlateauDetector::new();

    let plateau = detector
        .detect_plateau(4, "Deadlift", CurrentInput::new(60.0, 10), &empty)
        .expect("round load, hypertrophy reps, even id");
    assert_eq!(plateau.sessions_in_plateau, 3);
    assert_eq!(plateau.plateau_type, PlateauType::Moderate);
    assert!(plateau.suggestions.len() >= 2);

    assert!(simulated_plateau_candidate(7, "Cable FLY", CurrentInput::new(12.5, 12)));
    assert!(simulated_plateau_candidate(-2, "Row", CurrentInput::new(50.0, 8)));
    assert!(!simulated_plateau_candidate(3, "Lat Pulldown", CurrentInput::new(60.0, 10)));
    assert!(!simulated_plateau_candidate(4, "Deadlift", CurrentInput::new(60.0, 20)));
    assert!(!simulated_plateau_candidate(4, "Deadlift", CurrentInput::new(61.0, 10)));
}

#[cfg(not(feature = "simulated-plateau"))]
#[test]
fn test_no_history_means_no_plateau() {
    let empty = HashMap::new();

    assert!(PlateauDetector::new()
        .detect_plateau(4, "Deadlift", CurrentInput::new(60.0, 10), &empty)
        .is_none());
}

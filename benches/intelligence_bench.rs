// ABOUTME: Criterion benchmarks for the grouping and plateau detection engines
// ABOUTME: Measures detection over growing histories, plan grouping, and whole-workout analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Criterion benchmarks for the training engines.
//!
//! Detection is called on every input change of an active workout, so it is
//! measured against histories from a few weeks up to several years.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    generate_history, generate_plan, generate_plan_history, HistorySize, SETS_PER_SESSION,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitgym::config::PlateauDetectionConfig;
use fitgym::intelligence::{
    group_into_sessions, ExerciseGrouper, PlateauDetector, WorkoutAnalyzer,
};
use fitgym::models::CurrentInput;
use std::collections::HashMap;

const EXERCISE_ID: i64 = 7;

fn bench_plateau_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("plateau_detection");
    let detector = PlateauDetector::new();

    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let history = HashMap::from([(EXERCISE_ID, generate_history(EXERCISE_ID, size))]);
        let live = history[&EXERCISE_ID]
            .last()
            .map_or(CurrentInput::new(60.0, 8), CurrentInput::from);

        group.throughput(Throughput::Elements(u64::from(size.sessions() * SETS_PER_SESSION)));
        group.bench_with_input(
            BenchmarkId::new("detect_plateau", size.label()),
            &history,
            |b, history| {
                b.iter(|| {
                    detector.detect_plateau(
                        black_box(EXERCISE_ID),
                        "Bench Press",
                        black_box(live),
                        black_box(history),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_session_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_grouping");
    let config = PlateauDetectionConfig::default();

    for size in [HistorySize::Medium, HistorySize::Large] {
        let series = generate_history(EXERCISE_ID, size);
        group.bench_with_input(
            BenchmarkId::new("group_into_sessions", size.label()),
            &series,
            |b, series| {
                b.iter(|| group_into_sessions(black_box(series), &config).len());
            },
        );
    }

    group.finish();
}

fn bench_exercise_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_grouping");

    for count in [8_usize, 64, 512] {
        let plan = generate_plan(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("group", count), &plan, |b, plan| {
            b.iter(|| ExerciseGrouper::group(black_box(plan)));
        });
    }

    group.finish();
}

fn bench_workout_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_analysis");
    let analyzer = WorkoutAnalyzer::new();
    let plan = generate_plan(12);

    for size in [HistorySize::Small, HistorySize::Medium] {
        let history = generate_plan_history(&plan, size);
        group.bench_with_input(
            BenchmarkId::new("analyze", size.label()),
            &history,
            |b, history| {
                b.iter(|| analyzer.analyze(black_box(&plan), &HashMap::new(), black_box(history)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_plateau_detection,
    bench_session_grouping,
    bench_exercise_grouping,
    bench_workout_analysis,
);
criterion_main!(benches);

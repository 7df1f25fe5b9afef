// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Plateau detection thresholds, classification bounds, and progression increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Constants module
//!
//! Pure data constants grouped by the engine concern that uses them. The
//! intelligence configuration seeds its defaults from these values.

/// Session grouping and plateau evidence thresholds
pub mod plateau {
    /// Consecutive sessions required before a plateau is reported
    pub const DEFAULT_MIN_SESSIONS_FOR_PLATEAU: usize = 3;
    /// Maximum weight difference (kg) still considered "the same weight"
    pub const WEIGHT_TOLERANCE_KG: f64 = 1.0;
    /// Maximum rep difference still considered "the same reps"
    pub const REPS_TOLERANCE: u32 = 1;
    /// Number of characters of a timestamp that identify the calendar day
    pub const SESSION_DAY_PREFIX_LEN: usize = 10;
    /// Series per pseudo-session when day grouping collapses into one day
    pub const FALLBACK_CHUNK_SIZE: usize = 3;
    /// Minimum series in a single day before the chunk fallback applies
    pub const FALLBACK_CHUNK_MIN_SERIES: usize = 6;
    /// Set position checked against the live input
    pub const LIVE_SET_POSITION: u32 = 1;
}

/// Placeholder heuristic used when an exercise has no history at all
pub mod simulated {
    /// Weight steps recognised as "round" plate loads
    pub const ROUND_WEIGHT_STEPS: [f64; 2] = [2.5, 5.0];
    /// Inclusive rep range for the parity heuristic
    pub const REP_RANGE: (u32, u32) = (6, 15);
    /// Minimum weight for the keyword heuristic
    pub const KEYWORD_MIN_WEIGHT: f64 = 10.0;
    /// Exercise-name keywords that trigger the keyword heuristic
    pub const KEYWORDS: [&str; 8] = [
        "chest",
        "press",
        "fly",
        "curl",
        "extension",
        "raise",
        "squat",
        "lunge",
    ];
}

/// Plateau type classification bounds (all exclusive)
pub mod classification {
    /// Below this weight the plateau is `LightWeight`
    pub const LIGHT_WEIGHT_BELOW: f64 = 10.0;
    /// Above this weight the plateau is `HeavyWeight`
    pub const HEAVY_WEIGHT_ABOVE: f64 = 100.0;
    /// Below this rep count the plateau is `LowReps`
    pub const LOW_REPS_BELOW: u32 = 5;
    /// Above this rep count the plateau is `HighReps`
    pub const HIGH_REPS_ABOVE: u32 = 15;
}

/// Progression suggestion increments and confidence scores
pub mod progression {
    /// Weight increment tiers as (exclusive upper bound, increment in kg)
    pub const WEIGHT_INCREMENT_TIERS: [(f64, f64); 3] = [(10.0, 0.5), (50.0, 1.25), (100.0, 2.5)];
    /// Weight increment above the last tier
    pub const WEIGHT_INCREMENT_MAX: f64 = 5.0;
    /// Rep increment tiers as (exclusive upper bound, increment)
    pub const REPS_INCREMENT_TIERS: [(u32, u32); 2] = [(8, 1), (12, 2)];
    /// Rep increment above the last tier
    pub const REPS_INCREMENT_MAX: u32 = 3;

    /// Ratio of current to historic max weight considered "far below" the ceiling
    pub const WEIGHT_RATIO_LOW: f64 = 0.8;
    /// Ratio of current to historic max weight considered "near" the ceiling
    pub const WEIGHT_RATIO_NEAR: f64 = 0.95;
    /// Ratio at which the current weight reaches the historic ceiling
    pub const WEIGHT_RATIO_AT_MAX: f64 = 1.0;
    /// Confidence when far below the weight ceiling
    pub const WEIGHT_CONFIDENCE_LOW_RATIO: f64 = 0.9;
    /// Confidence when near the weight ceiling
    pub const WEIGHT_CONFIDENCE_NEAR_RATIO: f64 = 0.7;
    /// Confidence when at or above the weight ceiling
    pub const WEIGHT_CONFIDENCE_AT_MAX: f64 = 0.5;
    /// Confidence between "near" and "at" the weight ceiling
    pub const WEIGHT_CONFIDENCE_OTHER: f64 = 0.6;

    /// Ratio of current to historic max reps considered "far below" the ceiling
    pub const REPS_RATIO_LOW: f64 = 0.8;
    /// Ratio of current to historic max reps at the ceiling
    pub const REPS_RATIO_AT_MAX: f64 = 1.0;
    /// Confidence when far below the rep ceiling
    pub const REPS_CONFIDENCE_LOW_RATIO: f64 = 0.8;
    /// Confidence when at or below the rep ceiling
    pub const REPS_CONFIDENCE_AT_MAX: f64 = 0.6;
    /// Confidence when above the rep ceiling
    pub const REPS_CONFIDENCE_ABOVE_MAX: f64 = 0.4;
    /// Confidence for unclassifiable rep ratios
    pub const REPS_CONFIDENCE_OTHER: f64 = 0.5;

    /// Weight above which advanced techniques are suggested
    pub const ADVANCED_TECHNIQUE_MIN_WEIGHT: f64 = 50.0;
    /// Reps above which advanced techniques are suggested
    pub const ADVANCED_TECHNIQUE_MIN_REPS: u32 = 10;
    /// Fixed confidence of the advanced technique suggestion
    pub const ADVANCED_TECHNIQUE_CONFIDENCE: f64 = 0.7;
}

/// Raw set-type tags carried by the workout plan data source
pub mod set_type_tags {
    /// Superset tag
    pub const SUPERSET: &str = "superset";
    /// Legacy numeric alias for superset
    pub const SUPERSET_LEGACY: &str = "1";
    /// Circuit tag
    pub const CIRCUIT: &str = "circuit";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Command-line tool service name
    pub const FITGYM_CLI: &str = "fitgym-cli";
}

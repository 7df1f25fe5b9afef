// ABOUTME: Intelligence configuration root combining plateau and progression settings
// ABOUTME: Loads overrides from FITGYM_* environment variables and validates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Intelligence configuration
//!
//! Defaults reproduce the engine's reference behaviour. A handful of plateau
//! parameters can be overridden from the environment for experimentation.

mod error;
mod plateau;
mod progression;

pub use error::ConfigError;
pub use plateau::PlateauDetectionConfig;
pub use progression::{AdvancedTechniqueConfig, ClassificationThresholds, ProgressionConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Environment variable overriding the plateau evidence window
pub const ENV_MIN_SESSIONS: &str = "FITGYM_PLATEAU_MIN_SESSIONS";
/// Environment variable overriding the weight tolerance
pub const ENV_WEIGHT_TOLERANCE: &str = "FITGYM_PLATEAU_WEIGHT_TOLERANCE";
/// Environment variable overriding the rep tolerance
pub const ENV_REPS_TOLERANCE: &str = "FITGYM_PLATEAU_REPS_TOLERANCE";
/// Environment variable overriding the chunk fallback window
pub const ENV_CHUNK_SIZE: &str = "FITGYM_PLATEAU_CHUNK_SIZE";

/// Complete intelligence configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Plateau detection settings
    pub plateau: PlateauDetectionConfig,
    /// Classification and suggestion settings
    pub progression: ProgressionConfig,
}

impl IntelligenceConfig {
    /// Build the configuration from defaults plus environment overrides
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but unparsable, or a
    /// validation error if the resulting configuration is inconsistent
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(min_sessions) = parse_env(ENV_MIN_SESSIONS)? {
            config.plateau.min_sessions_for_plateau = min_sessions;
        }
        if let Some(tolerance) = parse_env(ENV_WEIGHT_TOLERANCE)? {
            config.plateau.weight_tolerance = tolerance;
        }
        if let Some(tolerance) = parse_env(ENV_REPS_TOLERANCE)? {
            config.plateau.reps_tolerance = tolerance;
        }
        if let Some(chunk_size) = parse_env(ENV_CHUNK_SIZE)? {
            config.plateau.chunk_size = chunk_size;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.plateau.validate()?;
        self.progression.validate()
    }
}

fn parse_env<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(error) => Err(ConfigError::EnvVar(error)),
    }
}

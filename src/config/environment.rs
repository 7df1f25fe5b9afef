// ABOUTME: Environment configuration management for the engine tools
// ABOUTME: Parses deployment mode, log level, output format, and intelligence overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! Environment-based runtime configuration
//!
//! The engine has no configuration files; everything comes from the
//! environment with safe defaults.

use anyhow::{Context, Result};
use fitgym_intelligence::config::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, Level};

/// Environment variable selecting the report format
pub const ENV_OUTPUT_FORMAT: &str = "FITGYM_OUTPUT_FORMAT";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Detection branch decisions
    Debug,
    /// Everything, including session grouping internals
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON
    #[default]
    Json,
    /// Human-readable text
    Pretty,
}

impl OutputFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" | "text" | "human" => Self::Pretty,
            _ => Self::Json,
        }
    }

    /// Format selected by `FITGYM_OUTPUT_FORMAT`, JSON when unset
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_str_or_default(&env::var(ENV_OUTPUT_FORMAT).unwrap_or_default())
    }
}

/// Runtime configuration for the engine tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Report output format
    pub output_format: OutputFormat,
    /// Plateau detection and progression settings
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an intelligence override is set but invalid
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );
        let log_level =
            LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
        let output_format = OutputFormat::from_env();
        let intelligence =
            IntelligenceConfig::from_env().context("Invalid intelligence configuration")?;

        let config = Self {
            environment,
            log_level,
            output_format,
            intelligence,
        };
        debug!(
            environment = %config.environment,
            log_level = %config.log_level,
            min_sessions = config.intelligence.plateau.min_sessions_for_plateau,
            "configuration loaded"
        );
        Ok(config)
    }
}

// ABOUTME: Planned workout exercises and the closed set-type enumeration
// ABOUTME: Normalizes legacy string tags (superset, circuit, "1") at the ingestion boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::set_type_tags;

/// How an exercise is performed relative to its neighbours in the plan
///
/// The plan data source stores this as a free-form string. `from_tag` maps
/// those strings onto the closed set, so engine logic never compares raw tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    /// Performed on its own with normal rest
    #[default]
    Standalone,
    /// Performed back-to-back with the linked exercises
    Superset,
    /// Part of a multi-exercise circuit
    Circuit,
}

impl SetType {
    /// Normalize a raw set-type tag from the plan data source
    ///
    /// `"superset"` and the legacy numeric tag `"1"` map to `Superset`,
    /// `"circuit"` maps to `Circuit`, and everything else is `Standalone`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case(set_type_tags::SUPERSET) || tag == set_type_tags::SUPERSET_LEGACY
        {
            Self::Superset
        } else if tag.eq_ignore_ascii_case(set_type_tags::CIRCUIT) {
            Self::Circuit
        } else {
            Self::Standalone
        }
    }

    /// Whether exercises of this type chain into a shared group
    #[must_use]
    pub const fn links_exercises(self) -> bool {
        matches!(self, Self::Superset | Self::Circuit)
    }

    /// Canonical tag for this set type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Superset => set_type_tags::SUPERSET,
            Self::Circuit => set_type_tags::CIRCUIT,
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SetType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Plan exports carry the tag either as a string or as a bare number
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTag {
            Text(String),
            Number(i64),
        }

        Ok(match RawTag::deserialize(deserializer)? {
            RawTag::Text(tag) => Self::from_tag(&tag),
            RawTag::Number(number) => Self::from_tag(&number.to_string()),
        })
    }
}

/// One exercise of a workout plan, in plan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Exercise identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Grouping tag
    #[serde(default, alias = "setType")]
    pub set_type: SetType,
    /// Whether this exercise continues the group started by the previous one
    #[serde(default, alias = "linkedToPrevious")]
    pub linked_to_previous: bool,
    /// Sets required to mark the exercise complete
    #[serde(alias = "targetSeries")]
    pub target_series: u32,
}

impl WorkoutExercise {
    /// Create a standalone exercise
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, target_series: u32) -> Self {
        Self {
            id,
            name: name.into(),
            set_type: SetType::Standalone,
            linked_to_previous: false,
            target_series,
        }
    }

    /// Set the grouping tag
    #[must_use]
    pub const fn with_set_type(mut self, set_type: SetType) -> Self {
        self.set_type = set_type;
        self
    }

    /// Mark this exercise as continuing the previous exercise's group
    #[must_use]
    pub const fn linked(mut self) -> Self {
        self.linked_to_previous = true;
        self
    }

    /// Whether the exercise is tagged as part of a superset
    #[must_use]
    pub fn is_superset(&self) -> bool {
        self.set_type == SetType::Superset
    }

    /// Whether the exercise is tagged as part of a circuit
    #[must_use]
    pub fn is_circuit(&self) -> bool {
        self.set_type == SetType::Circuit
    }
}

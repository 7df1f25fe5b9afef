// ABOUTME: Error module re-exports from fitgym-core crate
// ABOUTME: Preserves crate::errors import paths for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

pub use fitgym_core::errors::*;

// ABOUTME: Re-exports command modules for fitgym-cli
// ABOUTME: Provides access to the group, plateau, and analyze commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

pub mod analyze;
pub mod group;
pub mod plateau;

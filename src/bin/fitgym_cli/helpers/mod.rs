// ABOUTME: Re-exports helper modules for fitgym-cli
// ABOUTME: Provides access to report envelopes and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

pub mod display;

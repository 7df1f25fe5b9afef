// ABOUTME: Model re-exports from fitgym-core crate
// ABOUTME: Exposes history, plan, and plateau result types under crate::models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

pub use fitgym_core::models::*;

// ABOUTME: Intelligence module re-exports from fitgym-intelligence crate
// ABOUTME: Exposes grouping, plateau detection, and workout analysis under crate::intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGymTrack

//! # Intelligence Module
//!
//! Re-exports the `fitgym-intelligence` crate so callers depend on one crate.

pub use fitgym_intelligence::*;

// ABOUTME: Common benchmark utilities and fixtures for swing analysis performance tests
// ABOUTME: Provides deterministic pose-frame generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;

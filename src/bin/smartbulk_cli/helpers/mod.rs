// ABOUTME: Helper modules for smartbulk-cli
// ABOUTME: Profile argument resolution and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

pub mod display;
pub mod profile;

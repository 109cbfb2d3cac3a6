// ABOUTME: Re-exports command modules for smartbulk-cli
// ABOUTME: Target calculation and plan generation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

pub mod plans;
pub mod targets;

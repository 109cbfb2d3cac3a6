// ABOUTME: Re-exports of the domain models defined in smartbulk-core
// ABOUTME: Metrics, targets, catalog templates, and assembled plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

pub use smartbulk_core::models::*;

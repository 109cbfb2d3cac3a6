// ABOUTME: Re-exports of the unified error types defined in smartbulk-core
// ABOUTME: Lets binaries and tests depend on the application crate alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

pub use smartbulk_core::errors::{
    AppError, AppResult, CalculationError, ErrorCode, ErrorContext, ErrorResponse,
};

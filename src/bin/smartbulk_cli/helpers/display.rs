// ABOUTME: Output formatting helpers for smartbulk-cli
// ABOUTME: Prints calculator results as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use serde::Serialize;
use smartbulk::errors::AppResult;

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

// ABOUTME: Error kinds raised by the energy, macro, and plan calculators
// ABOUTME: Converts each kind into an AppError with a stable code and structured details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Local computation failures. Nothing here is retryable: the caller has to
/// change the inputs and call again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// A field required by the selected method is absent
    #[error("{method} requires `{field}`")]
    MissingInput {
        /// Calculation method that needs the field
        method: &'static str,
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric input (or a value derived from it) is physically implausible
    #[error("`{field}` = {value} is out of range: {reason}")]
    InvalidRange {
        /// Offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
        /// Accepted bounds
        reason: &'static str,
    },

    /// Protein and fat already exceed the calorie target, so carbs would go negative
    #[error(
        "{target_calories} kcal cannot cover {committed_kcal} kcal already committed to protein and fat"
    )]
    MacroAllocation {
        /// Daily calorie target handed to the allocator
        target_calories: u32,
        /// Calories taken by the protein and fat allocations
        committed_kcal: u32,
    },

    /// No catalog entry matches the requested category/goal/level combination
    #[error("no catalog entries for {category} ({context})")]
    EmptyCatalog {
        /// Catalog category that came up empty
        category: String,
        /// Goal, level, or restriction set that was requested
        context: String,
    },
}

impl CalculationError {
    /// Shorthand for an `InvalidRange` error
    #[must_use]
    pub const fn out_of_range(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidRange {
            field,
            value,
            reason,
        }
    }

    /// Shorthand for an `EmptyCatalog` error
    #[must_use]
    pub fn empty_catalog(category: impl Into<String>, context: impl Into<String>) -> Self {
        Self::EmptyCatalog {
            category: category.into(),
            context: context.into(),
        }
    }

    /// Error code this kind maps to at the application boundary
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingInput { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidRange { .. } => ErrorCode::ValueOutOfRange,
            Self::MacroAllocation { .. } => ErrorCode::UnsatisfiableTarget,
            Self::EmptyCatalog { .. } => ErrorCode::ResourceNotFound,
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(error: CalculationError) -> Self {
        let details = match &error {
            CalculationError::MissingInput { method, field } => {
                json!({ "method": method, "field": field })
            }
            CalculationError::InvalidRange { field, value, .. } => {
                json!({ "field": field, "value": value })
            }
            CalculationError::MacroAllocation {
                target_calories,
                committed_kcal,
            } => json!({
                "target_calories": target_calories,
                "committed_kcal": committed_kcal
            }),
            CalculationError::EmptyCatalog { category, context } => {
                json!({ "category": category, "context": context })
            }
        };

        Self::new(error.code(), error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

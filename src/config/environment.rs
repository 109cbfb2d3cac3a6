// ABOUTME: Environment configuration for deployment-specific settings
// ABOUTME: Parses environment mode, catalog path, and plan seed from variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Environment-based application configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Catalog override path
pub const CATALOG_PATH_ENV: &str = "SMARTBULK_CATALOG_PATH";
/// Fixed seed for meal plan generation
pub const PLAN_SEED_ENV: &str = "SMARTBULK_PLAN_SEED";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application settings resolved from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// External catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Seed that makes meal plans reproducible
    pub plan_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SMARTBULK_PLAN_SEED` is set but is not an unsigned integer
    pub fn from_env() -> AppResult<Self> {
        let plan_seed = match env::var(PLAN_SEED_ENV) {
            Ok(value) => Some(value.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("Invalid {PLAN_SEED_ENV} value: {value}")).with_source(e)
            })?),
            Err(_) => None,
        };

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            catalog_path: env::var(CATALOG_PATH_ENV)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            plan_seed,
        };

        info!(
            environment = %config.environment,
            catalog_override = config.catalog_path.is_some(),
            seeded = config.plan_seed.is_some(),
            "Application configuration loaded"
        );
        Ok(config)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

// ABOUTME: User profile arguments shared by every smartbulk-cli subcommand
// ABOUTME: Builds UserMetrics from a JSON profile file, individual flags, or both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use smartbulk::errors::{AppError, AppResult, ErrorCode};
use smartbulk::models::{
    ActivityLevel, DietaryRestriction, ExperienceLevel, FitnessGoal, Sex, UserMetrics,
};
use tracing::debug;

/// Body metrics and preferences, from flags and/or a profile file
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// JSON profile file; any flag given below overrides the matching field
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Biological sex (`male`, `female`)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<f64>,

    /// Activity level (`sedentary` .. `extremely_active`)
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// Fitness goal (`weight_loss`, `muscle_gain`, `maintenance`, `endurance`, ...)
    #[arg(long)]
    pub goal: Option<FitnessGoal>,

    /// Training experience (`beginner`, `intermediate`, `advanced`)
    #[arg(long)]
    pub experience: Option<ExperienceLevel>,

    /// Body fat percentage, required by `katch_mcardle`
    #[arg(long)]
    pub body_fat: Option<f64>,

    /// Dietary restrictions, comma separated or repeated
    #[arg(long = "restriction", value_delimiter = ',')]
    pub restrictions: Vec<DietaryRestriction>,
}

impl ProfileArgs {
    /// Resolve the arguments into metrics
    ///
    /// # Errors
    ///
    /// Returns an error if the profile file cannot be read or parsed, or if a
    /// required metric is missing when no profile file is given
    pub fn resolve(&self) -> AppResult<UserMetrics> {
        let mut metrics = match &self.profile {
            Some(path) => load_profile(path)?,
            None => UserMetrics::new(
                required(self.age, "age")?,
                required(self.sex, "sex")?,
                required(self.weight, "weight")?,
                required(self.height, "height")?,
            ),
        };

        if let Some(age) = self.age {
            metrics.age_years = age;
        }
        if let Some(sex) = self.sex {
            metrics.sex = sex;
        }
        if let Some(weight) = self.weight {
            metrics.weight_kg = weight;
        }
        if let Some(height) = self.height {
            metrics.height_cm = height;
        }
        if let Some(activity) = self.activity {
            metrics.activity_level = activity;
        }
        if let Some(goal) = self.goal {
            metrics.fitness_goal = goal;
        }
        if let Some(experience) = self.experience {
            metrics.experience_level = experience;
        }
        if let Some(body_fat) = self.body_fat {
            metrics.body_fat_percent = Some(body_fat);
        }
        metrics
            .dietary_restrictions
            .extend(self.restrictions.iter().copied());

        debug!(
            goal = %metrics.fitness_goal,
            activity = %metrics.activity_level,
            restrictions = metrics.dietary_restrictions.len(),
            "Resolved user profile"
        );
        Ok(metrics)
    }
}

fn required<T>(value: Option<T>, flag: &str) -> AppResult<T> {
    value.ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            format!("--{flag} is required when --profile is not given"),
        )
    })
}

fn load_profile(path: &Path) -> AppResult<UserMetrics> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::not_found(format!("Profile {}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;
    Ok(serde_json::from_str(&content)?)
}

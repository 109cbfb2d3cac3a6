// ABOUTME: SmartBulk CLI - command-line front end for the nutrition and training calculator
// ABOUTME: Parses profile flags or a JSON profile and prints targets and plans as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors
//!
//! Usage:
//! ```bash
//! # Daily energy and macro targets
//! smartbulk-cli targets --age 25 --sex male --weight 70 --height 175 --goal muscle_gain
//!
//! # Katch-McArdle needs a body fat percentage
//! smartbulk-cli targets --profile me.json --method katch_mcardle --body-fat 15
//!
//! # Weekly workout plan, overriding the frequency table
//! smartbulk-cli workout-plan --profile me.json --sessions 4
//!
//! # Reproducible vegan meal plan
//! smartbulk-cli meal-plan --profile me.json --restriction vegan --seed 42
//!
//! # Shopping list for a generated meal plan
//! smartbulk-cli shopping-list --profile me.json --seed 42
//!
//! # Everything at once
//! smartbulk-cli recommend --profile me.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use smartbulk::config::AppConfig;
use smartbulk::errors::AppResult;
use smartbulk::logging::LoggingConfig;
use smartbulk::models::BmrMethod;
use smartbulk::recommendation::RecommendationService;
use tracing::{error, info};

use commands::{plans, targets};
use helpers::display::print_json;
use helpers::profile::ProfileArgs;

#[derive(Parser)]
#[command(
    name = "smartbulk-cli",
    about = "SmartBulk nutrition and training target calculator",
    long_about = "Computes calorie and macronutrient targets, a weekly workout plan, a daily meal plan, and a shopping list from body metrics and a fitness goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog JSON file replacing the built-in exercises and foods
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible meal plans
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// BMR, TDEE, calorie target, macros, body composition, and nutrient timing
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// BMR formula (`mifflin_st_jeor`, `harris_benedict`, `katch_mcardle`)
        #[arg(long)]
        method: Option<BmrMethod>,
    },

    /// Weekly workout schedule
    WorkoutPlan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Sessions per week (2-6), overriding the activity/experience table
        #[arg(long)]
        sessions: Option<u8>,
    },

    /// Daily meal plan with several options per meal
    MealPlan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// BMR formula used for the calorie target
        #[arg(long)]
        method: Option<BmrMethod>,
    },

    /// Shopping list aggregated over a generated meal plan
    ShoppingList {
        #[command(flatten)]
        profile: ProfileArgs,

        /// BMR formula used for the calorie target
        #[arg(long)]
        method: Option<BmrMethod>,
    },

    /// Complete recommendation: targets, workout plan, meal plan, and shopping list
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// BMR formula used for the calorie target
        #[arg(long)]
        method: Option<BmrMethod>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = run(cli) {
        error!(code = ?e.code, "{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut app_config = AppConfig::from_env()?;
    if let Some(path) = cli.catalog {
        app_config.catalog_path = Some(path);
    }
    if let Some(seed) = cli.seed {
        app_config.plan_seed = Some(seed);
    }

    let service = RecommendationService::from_app_config(&app_config)?;
    info!("SmartBulk calculator ready");

    match cli.command {
        Command::Targets { profile, method } => {
            targets::run(&service, &profile.resolve()?, method)
        }
        Command::WorkoutPlan { profile, sessions } => {
            plans::workout(&service, &profile.resolve()?, sessions)
        }
        Command::MealPlan { profile, method } => {
            plans::meal(&service, &profile.resolve()?, method)
        }
        Command::ShoppingList { profile, method } => {
            plans::shopping(&service, &profile.resolve()?, method)
        }
        Command::Recommend { profile, method } => {
            let recommendation = service.recommend(&profile.resolve()?, method)?;
            print_json(&recommendation)
        }
    }
}

// ABOUTME: Weekly workout plan assembly from the catalog's goal and level exercise lists
// ABOUTME: Frequency lookup, fixed training-day rotations, and even exercise slicing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use chrono::Weekday;
use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{
    ActivityLevel, DaySchedule, ExerciseTemplate, ExperienceLevel, FitnessGoal, WorkoutPlan,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::intelligence::TrainingConfig;

/// Monday through Sunday
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Sessions per week for an activity and experience level
#[must_use]
pub fn weekly_frequency(
    activity: ActivityLevel,
    level: ExperienceLevel,
    config: &TrainingConfig,
) -> u8 {
    config.frequency.sessions_for(activity, level)
}

/// Training days for a weekly frequency, spaced to leave recovery days between sessions
///
/// # Errors
///
/// Returns `InvalidRange` if `sessions_per_week` is outside 2..=6
pub fn training_days(sessions_per_week: u8) -> Result<&'static [Weekday], CalculationError> {
    use Weekday::{Fri, Mon, Sat, Thu, Tue, Wed};

    match sessions_per_week {
        2 => Ok(&[Mon, Thu]),
        3 => Ok(&[Mon, Wed, Fri]),
        4 => Ok(&[Mon, Tue, Thu, Fri]),
        5 => Ok(&[Mon, Tue, Wed, Fri, Sat]),
        6 => Ok(&[Mon, Tue, Wed, Thu, Fri, Sat]),
        other => Err(CalculationError::out_of_range(
            "sessions_per_week",
            f64::from(other),
            "must be between 2 and 6",
        )),
    }
}

/// Split `exercises` across `days` training days.
///
/// Slices are contiguous and differ in size by at most one, earlier days
/// taking the extra. With fewer exercises than days, day `i` gets entry
/// `i mod n` so no training day is empty.
fn distribute(exercises: &[ExerciseTemplate], days: usize) -> Vec<Vec<ExerciseTemplate>> {
    let total = exercises.len();
    if total < days {
        return (0..days)
            .map(|day| vec![exercises[day % total].clone()])
            .collect();
    }

    let base = total / days;
    let extra = total % days;
    let mut start = 0;
    (0..days)
        .map(|day| {
            let len = base + usize::from(day < extra);
            let slice = exercises[start..start + len].to_vec();
            start += len;
            slice
        })
        .collect()
}

/// Assemble a Monday-to-Sunday workout plan
///
/// # Errors
///
/// - `InvalidRange` if `sessions_per_week` is outside 2..=6
/// - `EmptyCatalog` if the catalog has no exercises for the goal and level
pub fn assemble_workout_plan(
    goal: FitnessGoal,
    level: ExperienceLevel,
    sessions_per_week: u8,
    catalog: &Catalog,
    config: &TrainingConfig,
) -> Result<WorkoutPlan, CalculationError> {
    let days = training_days(sessions_per_week)?;

    let exercises = catalog.exercises_for(goal, level);
    if exercises.is_empty() {
        return Err(CalculationError::empty_catalog(
            "exercises",
            format!("{goal} / {level}"),
        ));
    }

    let mut slices = distribute(exercises, days.len()).into_iter();
    let schedule: Vec<DaySchedule> = WEEK
        .iter()
        .map(|day| {
            if days.contains(day) {
                let day_exercises = slices.next().unwrap_or_default();
                DaySchedule {
                    day: *day,
                    estimated_minutes: config.session.minutes_for(day_exercises.len()),
                    exercises: day_exercises,
                    rest_activities: Vec::new(),
                }
            } else {
                DaySchedule {
                    day: *day,
                    exercises: Vec::new(),
                    rest_activities: catalog.rest_day_activities().to_vec(),
                    estimated_minutes: 0,
                }
            }
        })
        .collect();

    let estimated_weekly_minutes: u32 = schedule.iter().map(|day| day.estimated_minutes).sum();
    let total_workouts = days.len() as u8;

    debug!(
        goal = %goal,
        level = %level,
        sessions_per_week,
        estimated_weekly_minutes,
        "Assembled workout plan"
    );

    Ok(WorkoutPlan {
        goal,
        experience_level: level,
        sessions_per_week,
        schedule,
        total_workouts,
        estimated_weekly_minutes,
    })
}

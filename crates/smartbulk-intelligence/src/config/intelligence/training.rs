// ABOUTME: Training configuration for weekly workout plan assembly
// ABOUTME: Session frequency table by activity and experience, and session length estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use serde::{Deserialize, Serialize};
use smartbulk_core::constants::limits::{MAX_SESSIONS_PER_WEEK, MIN_SESSIONS_PER_WEEK};
use smartbulk_core::models::{ActivityLevel, ExperienceLevel};

use super::error::ConfigError;

/// Training plan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Sessions per week by activity and experience
    pub frequency: FrequencyTableConfig,
    /// Session length estimate
    pub session: SessionDurationConfig,
}

/// Sessions per week for each experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelFrequency {
    /// Beginner sessions per week
    pub beginner: u8,
    /// Intermediate sessions per week
    pub intermediate: u8,
    /// Advanced sessions per week
    pub advanced: u8,
}

impl LevelFrequency {
    const fn new(beginner: u8, intermediate: u8, advanced: u8) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
        }
    }

    const fn for_level(self, level: ExperienceLevel) -> u8 {
        match level {
            ExperienceLevel::Beginner => self.beginner,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
        }
    }
}

/// Weekly frequency table (activity level x experience level)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyTableConfig {
    /// Sedentary: 2/3/3
    pub sedentary: LevelFrequency,
    /// Lightly active: 3/3/4
    pub lightly_active: LevelFrequency,
    /// Moderately active: 3/4/5
    pub moderately_active: LevelFrequency,
    /// Very active: 4/5/5
    pub very_active: LevelFrequency,
    /// Extremely active: 4/5/6
    pub extremely_active: LevelFrequency,
}

impl Default for FrequencyTableConfig {
    fn default() -> Self {
        Self {
            sedentary: LevelFrequency::new(2, 3, 3),
            lightly_active: LevelFrequency::new(3, 3, 4),
            moderately_active: LevelFrequency::new(3, 4, 5),
            very_active: LevelFrequency::new(4, 5, 5),
            extremely_active: LevelFrequency::new(4, 5, 6),
        }
    }
}

impl FrequencyTableConfig {
    /// Sessions per week for an activity and experience level
    #[must_use]
    pub const fn sessions_for(&self, activity: ActivityLevel, level: ExperienceLevel) -> u8 {
        let row = match activity {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        };
        row.for_level(level)
    }

    /// Validate every cell is a supported weekly frequency
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any cell is outside 2..=6
    pub fn validate(&self) -> Result<(), ConfigError> {
        for activity in ActivityLevel::ALL {
            for level in ExperienceLevel::ALL {
                let sessions = self.sessions_for(activity, level);
                if !(MIN_SESSIONS_PER_WEEK..=MAX_SESSIONS_PER_WEEK).contains(&sessions) {
                    return Err(ConfigError::ValueOutOfRange(
                        "Weekly frequency must be between 2 and 6 sessions",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Session length estimate: `exercises x minutes_per_exercise + warmup_cooldown_minutes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDurationConfig {
    /// Minutes per exercise: 3
    pub minutes_per_exercise: u32,
    /// Fixed warm-up plus cool-down: 10
    pub warmup_cooldown_minutes: u32,
}

impl Default for SessionDurationConfig {
    fn default() -> Self {
        Self {
            minutes_per_exercise: 3,
            warmup_cooldown_minutes: 10,
        }
    }
}

impl SessionDurationConfig {
    /// Estimated minutes for a session with `exercise_count` exercises
    #[must_use]
    pub fn minutes_for(&self, exercise_count: usize) -> u32 {
        let count = u32::try_from(exercise_count).unwrap_or(u32::MAX);
        count
            .saturating_mul(self.minutes_per_exercise)
            .saturating_add(self.warmup_cooldown_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_corners() {
        let table = FrequencyTableConfig::default();
        assert_eq!(
            table.sessions_for(ActivityLevel::Sedentary, ExperienceLevel::Beginner),
            2
        );
        assert_eq!(
            table.sessions_for(ActivityLevel::ExtremelyActive, ExperienceLevel::Advanced),
            6
        );
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_frequency_table_rejects_seven_sessions() {
        let mut table = FrequencyTableConfig::default();
        table.very_active.advanced = 7;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_session_minutes() {
        let session = SessionDurationConfig::default();
        assert_eq!(session.minutes_for(4), 22);
        assert_eq!(session.minutes_for(0), 10);
    }
}

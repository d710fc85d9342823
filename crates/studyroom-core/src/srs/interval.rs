//! Base interval table and date arithmetic shared by activation and
//! rescheduling.
//!
//! A chain walks the table cumulatively: each interval is added to the date
//! produced by the previous one, so the default table `[1, 2, 4, 8, 15]`
//! lands reviews at +1, +3, +7, +15 and +30 days.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::model::{Difficulty, Review};
use crate::error::ConfigError;

/// Canonical review cadence in days.
pub const BASE_INTERVALS: [u32; 5] = [1, 2, 4, 8, 15];

/// Every activated subtheme carries exactly this many reviews.
pub const REVIEWS_PER_SUBTHEME: usize = BASE_INTERVALS.len();

/// Scale applied to the next interval after an `easy` review (rounded up).
pub const EASY_MULTIPLIER: f64 = 1.8;

/// Scale applied to the next interval after a `hard` review (rounded down, at least 1).
pub const HARD_MULTIPLIER: f64 = 0.7;

/// Interval for the review at `step_index` (0-based) given the difficulty
/// reported for the review before it.
pub fn calculate_next_interval(step_index: usize, difficulty: Difficulty) -> u32 {
    scale(
        base_interval(&BASE_INTERVALS, step_index),
        difficulty,
        EASY_MULTIPLIER,
        HARD_MULTIPLIER,
    )
}

/// Table lookup that saturates at the last entry instead of failing.
fn base_interval(table: &[u32], step_index: usize) -> u32 {
    table
        .get(step_index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(1)
}

fn scale(base: u32, difficulty: Difficulty, easy: f64, hard: f64) -> u32 {
    match difficulty {
        Difficulty::Easy => (f64::from(base) * easy).ceil() as u32,
        Difficulty::Hard => ((f64::from(base) * hard).floor() as u32).max(1),
        Difficulty::Medium => base,
    }
}

/// `date + days`, clamped at the calendar's upper bound.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Tunable interval table; defaults reproduce the fixed product cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalPolicy {
    #[serde(default = "default_base_intervals")]
    pub base_intervals: Vec<u32>,
    #[serde(default = "default_easy_multiplier")]
    pub easy_multiplier: f64,
    #[serde(default = "default_hard_multiplier")]
    pub hard_multiplier: f64,
}

fn default_base_intervals() -> Vec<u32> {
    BASE_INTERVALS.to_vec()
}
fn default_easy_multiplier() -> f64 {
    EASY_MULTIPLIER
}
fn default_hard_multiplier() -> f64 {
    HARD_MULTIPLIER
}

impl Default for IntervalPolicy {
    fn default() -> Self {
        Self {
            base_intervals: default_base_intervals(),
            easy_multiplier: default_easy_multiplier(),
            hard_multiplier: default_hard_multiplier(),
        }
    }
}

impl IntervalPolicy {
    pub fn next_interval(&self, step_index: usize, difficulty: Difficulty) -> u32 {
        scale(
            base_interval(&self.base_intervals, step_index),
            difficulty,
            self.easy_multiplier,
            self.hard_multiplier,
        )
    }

    /// Pending reviews for a subtheme introduced on `start`, all at medium cadence.
    pub fn initial_schedule(&self, start: NaiveDate) -> Vec<Review> {
        let mut running = start;
        (0..REVIEWS_PER_SUBTHEME)
            .map(|index| {
                running = add_days(running, self.next_interval(index, Difficulty::Medium));
                Review::pending(index as u32 + 1, running)
            })
            .collect()
    }

    /// Reject tables the engine could not walk sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_intervals.len() != REVIEWS_PER_SUBTHEME {
            return Err(ConfigError::InvalidValue {
                key: "scheduling.base_intervals".into(),
                message: format!(
                    "must contain exactly {REVIEWS_PER_SUBTHEME} intervals, got {}",
                    self.base_intervals.len()
                ),
            });
        }
        if self.base_intervals.contains(&0) {
            return Err(ConfigError::InvalidValue {
                key: "scheduling.base_intervals".into(),
                message: "intervals must be at least one day".into(),
            });
        }
        for (key, value) in [
            ("scheduling.easy_multiplier", self.easy_multiplier),
            ("scheduling.hard_multiplier", self.hard_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

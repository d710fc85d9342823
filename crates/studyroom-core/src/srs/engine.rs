//! Clock-bound front end for the scheduling operations.

use super::activation::{self, DailyUpdate};
use super::completion::{self, CompletionOutcome};
use super::interval::IntervalPolicy;
use super::model::{Difficulty, Theme};
use crate::clock::{Clock, SystemClock};
use chrono::NaiveDate;

/// Runs the activation gate and the rescheduler against an injected clock.
///
/// Holds no study state: each call takes a snapshot and returns a new one
/// for the caller to persist.
#[derive(Debug, Clone)]
pub struct SchedulingEngine<C = SystemClock> {
    clock: C,
    policy: IntervalPolicy,
}

impl SchedulingEngine<SystemClock> {
    /// Engine on the local wall clock with the default cadence.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> SchedulingEngine<C> {
    pub fn new(clock: C) -> Self {
        Self::with_policy(clock, IntervalPolicy::default())
    }

    pub fn with_policy(clock: C, policy: IntervalPolicy) -> Self {
        Self { clock, policy }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Introduce at most one queued subtheme today.
    ///
    /// `None` means no change: nothing to write back.
    pub fn process_daily_updates(
        &self,
        themes: &[Theme],
        last_processed: Option<NaiveDate>,
    ) -> Option<DailyUpdate> {
        activation::process_daily_updates(themes, last_processed, self.today(), &self.policy)
    }

    /// Complete a review and reschedule the rest of its chain.
    pub fn complete_review(
        &self,
        themes: &[Theme],
        subtheme_id: &str,
        review_number: u32,
        difficulty: Difficulty,
    ) -> CompletionOutcome {
        completion::complete_review(
            themes,
            subtheme_id,
            review_number,
            difficulty,
            self.clock.now(),
            &self.policy,
        )
    }
}

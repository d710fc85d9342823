//! Review completion and adaptive rescheduling.
//!
//! Completing a review re-anchors every later review in the chain at the
//! completion day. Only the review immediately after the completed one is
//! scaled by the reported difficulty; the rest fall back to the medium
//! cadence.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

use super::interval::{add_days, IntervalPolicy};
use super::model::{Difficulty, ReviewStatus, SubthemeStatus, Theme};

/// Result of a completion attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub themes: Vec<Theme>,
    /// `false` means nothing was applied and `themes` equals the input
    pub awarded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    UnknownSubtheme,
    UnknownReview,
    NotYetDue,
}

/// Complete review `review_number` of `subtheme_id` at instant `now`.
pub fn complete_review(
    themes: &[Theme],
    subtheme_id: &str,
    review_number: u32,
    difficulty: Difficulty,
    now: DateTime<FixedOffset>,
    policy: &IntervalPolicy,
) -> CompletionOutcome {
    let mut updated = themes.to_vec();
    match apply(&mut updated, subtheme_id, review_number, difficulty, now, policy) {
        Ok(()) => CompletionOutcome {
            themes: updated,
            awarded: true,
        },
        Err(reason) => {
            debug!(subtheme_id, review_number, ?reason, "review completion rejected");
            CompletionOutcome {
                themes: updated,
                awarded: false,
            }
        }
    }
}

// All checks run before the first write so a rejection leaves `themes` untouched.
fn apply(
    themes: &mut [Theme],
    subtheme_id: &str,
    review_number: u32,
    difficulty: Difficulty,
    now: DateTime<FixedOffset>,
    policy: &IntervalPolicy,
) -> Result<(), Rejection> {
    let today = now.date_naive();
    let subtheme = themes
        .iter_mut()
        .flat_map(|t| t.subthemes.iter_mut())
        .find(|s| s.id == subtheme_id)
        .ok_or(Rejection::UnknownSubtheme)?;

    let position = subtheme
        .reviews
        .iter()
        .position(|r| r.number == review_number)
        .ok_or(Rejection::UnknownReview)?;

    if !subtheme.reviews[position].is_due(today) {
        return Err(Rejection::NotYetDue);
    }

    let review = &mut subtheme.reviews[position];
    review.status = ReviewStatus::Completed;
    review.completed_at = Some(now);
    review.difficulty = Some(difficulty);

    let mut anchor = today;
    for (offset, next) in subtheme.reviews[position + 1..].iter_mut().enumerate() {
        let scaled_by = if offset == 0 {
            difficulty
        } else {
            Difficulty::Medium
        };
        let step_index = next.number.saturating_sub(1) as usize;
        anchor = add_days(anchor, policy.next_interval(step_index, scaled_by));
        next.date = anchor;
    }

    info!(
        subtheme_id,
        review_number,
        %difficulty,
        date = %today,
        "review completed"
    );

    if subtheme.all_reviews_completed() && subtheme.status != SubthemeStatus::Completed {
        subtheme.status = SubthemeStatus::Completed;
        info!(subtheme_id, "subtheme completed");
    }

    Ok(())
}

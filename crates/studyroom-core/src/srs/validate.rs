//! Structural checks for snapshots coming from outside the engine.
//!
//! The engine only ever produces consistent subthemes; these checks guard
//! data loaded from disk or hand-edited before the engine sees it.

use std::collections::HashSet;

use super::interval::REVIEWS_PER_SUBTHEME;
use super::model::{Subtheme, SubthemeStatus, Theme};
use crate::error::ValidationError;

/// Validate ids and per-subtheme status invariants.
pub fn validate_themes(themes: &[Theme]) -> Result<(), ValidationError> {
    let mut theme_ids = HashSet::new();
    let mut subtheme_ids = HashSet::new();

    for theme in themes {
        if !theme_ids.insert(theme.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                kind: "theme",
                id: theme.id.clone(),
            });
        }
        for sub in &theme.subthemes {
            if !subtheme_ids.insert(sub.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    kind: "subtheme",
                    id: sub.id.clone(),
                });
            }
            validate_subtheme(sub)?;
        }
    }
    Ok(())
}

/// Check that a subtheme's status agrees with its reviews.
pub fn validate_subtheme(sub: &Subtheme) -> Result<(), ValidationError> {
    let broken = |message: &str| ValidationError::SubthemeInvariant {
        id: sub.id.clone(),
        message: message.to_string(),
    };

    for (index, review) in sub.reviews.iter().enumerate() {
        if review.number as usize != index + 1 {
            return Err(broken("review numbers must run 1, 2, 3, ... in order"));
        }
        if review.is_completed() != review.completed_at.is_some() {
            return Err(broken("completedAt must be set exactly on completed reviews"));
        }
    }

    if sub.status != SubthemeStatus::Queue && sub.reviews.len() != REVIEWS_PER_SUBTHEME {
        return Err(broken(&format!(
            "activated subtheme must have exactly {REVIEWS_PER_SUBTHEME} reviews"
        )));
    }

    match sub.status {
        SubthemeStatus::Queue => {
            if !sub.reviews.is_empty() || sub.introduction_date.is_some() {
                return Err(broken("queued subtheme must have no reviews and no introduction date"));
            }
        }
        SubthemeStatus::Active => {
            if sub.introduction_date.is_none() {
                return Err(broken("active subtheme needs an introduction date"));
            }
            if sub.all_reviews_completed() {
                return Err(broken("active subtheme has every review completed"));
            }
        }
        SubthemeStatus::Completed => {
            if !sub.all_reviews_completed() {
                return Err(broken("completed subtheme has pending reviews"));
            }
        }
    }
    Ok(())
}

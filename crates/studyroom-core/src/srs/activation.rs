//! Daily activation gate.
//!
//! Promotes at most one queued subtheme per day, across the whole
//! collection, into active rotation. Pacing is global: with several themes
//! holding queued material, only the first queued subtheme in theme order,
//! then subtheme order, is introduced.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::interval::IntervalPolicy;
use super::model::{SubthemeStatus, Theme};

/// Result of a gate run that changed something worth persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyUpdate {
    pub themes: Vec<Theme>,
    /// Stamp to persist as the next call's `last_processed`
    pub processed_date: NaiveDate,
    /// Id of the subtheme introduced by this run, if any
    pub activated: Option<String>,
}

/// Whether any subtheme in the collection was introduced on `day`.
pub fn has_introduction_on(themes: &[Theme], day: NaiveDate) -> bool {
    themes
        .iter()
        .flat_map(|t| t.subthemes.iter())
        .any(|s| s.introduction_date == Some(day))
}

/// Run the gate for `today`.
///
/// Returns `None` when nothing needs to be written back: either a
/// subtheme was already introduced today and the stamp is current, or
/// the stamp is current and there is nothing to introduce.
pub fn process_daily_updates(
    themes: &[Theme],
    last_processed: Option<NaiveDate>,
    today: NaiveDate,
    policy: &IntervalPolicy,
) -> Option<DailyUpdate> {
    let introduced_today = has_introduction_on(themes, today);
    let stamped_today = last_processed == Some(today);

    if introduced_today && stamped_today {
        debug!(%today, "daily update already applied");
        return None;
    }

    let mut updated = themes.to_vec();
    let activated = if introduced_today {
        None
    } else {
        activate_first_queued(&mut updated, today, policy)
    };

    if activated.is_none() && stamped_today {
        debug!(%today, "no queued subtheme to introduce");
        return None;
    }

    Some(DailyUpdate {
        themes: updated,
        processed_date: today,
        activated,
    })
}

fn activate_first_queued(
    themes: &mut [Theme],
    today: NaiveDate,
    policy: &IntervalPolicy,
) -> Option<String> {
    let subtheme = themes
        .iter_mut()
        .flat_map(|t| t.subthemes.iter_mut())
        .find(|s| s.is_queued())?;

    subtheme.status = SubthemeStatus::Active;
    subtheme.introduction_date = Some(today);
    subtheme.reviews = policy.initial_schedule(today);

    info!(
        subtheme_id = %subtheme.id,
        date = %today,
        reviews = subtheme.reviews.len(),
        "subtheme activated"
    );
    Some(subtheme.id.clone())
}

//! Read-only views over a study snapshot: what is due, what is coming up,
//! and how far each subtheme has progressed.

use chrono::NaiveDate;
use serde::Serialize;

use super::interval::add_days;
use super::model::{SubthemeStatus, Theme};

/// A pending review located within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    pub theme_id: String,
    pub theme_name: String,
    pub subtheme_id: String,
    pub subtheme_name: String,
    pub review_number: u32,
    pub date: NaiveDate,
    /// Days past the due date; 0 when due today, negative when upcoming
    pub days_overdue: i64,
}

/// Per-subtheme progress summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubthemeProgress {
    pub theme_id: String,
    pub subtheme_id: String,
    pub subtheme_name: String,
    pub status: SubthemeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction_date: Option<NaiveDate>,
    pub completed_reviews: usize,
    pub total_reviews: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due: Option<NaiveDate>,
}

fn pending_entries(themes: &[Theme], today: NaiveDate) -> impl Iterator<Item = AgendaEntry> + '_ {
    themes.iter().flat_map(move |theme| {
        theme.subthemes.iter().flat_map(move |sub| {
            sub.reviews
                .iter()
                .filter(|r| !r.is_completed())
                .map(move |r| AgendaEntry {
                    theme_id: theme.id.clone(),
                    theme_name: theme.name.clone(),
                    subtheme_id: sub.id.clone(),
                    subtheme_name: sub.name.clone(),
                    review_number: r.number,
                    date: r.date,
                    days_overdue: (today - r.date).num_days(),
                })
        })
    })
}

/// Pending reviews that can be completed today, most overdue first.
///
/// Ties keep collection order (theme, subtheme, review number).
pub fn due_reviews(themes: &[Theme], today: NaiveDate) -> Vec<AgendaEntry> {
    let mut due: Vec<_> = pending_entries(themes, today)
        .filter(|e| e.date <= today)
        .collect();
    due.sort_by_key(|e| e.date);
    due
}

/// Pending reviews due after today and within `horizon_days`.
pub fn upcoming_reviews(themes: &[Theme], today: NaiveDate, horizon_days: u32) -> Vec<AgendaEntry> {
    let until = add_days(today, horizon_days);
    let mut upcoming: Vec<_> = pending_entries(themes, today)
        .filter(|e| e.date > today && e.date <= until)
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}

/// Progress of every subtheme in collection order.
pub fn progress(themes: &[Theme]) -> Vec<SubthemeProgress> {
    themes
        .iter()
        .flat_map(|theme| {
            theme.subthemes.iter().map(move |sub| SubthemeProgress {
                theme_id: theme.id.clone(),
                subtheme_id: sub.id.clone(),
                subtheme_name: sub.name.clone(),
                status: sub.status,
                introduction_date: sub.introduction_date,
                completed_reviews: sub.completed_reviews(),
                total_reviews: sub.reviews.len(),
                next_due: sub.next_pending().map(|r| r.date),
            })
        })
        .collect()
}

//! Theme → Subtheme → Review entity graph.
//!
//! These are the logical shapes the scheduling engine reads and returns.
//! Field names serialize in camelCase so snapshots line up with the
//! application's hosted data store.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A named grouping of subthemes, iterated in order by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subthemes: Vec<Subtheme>,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subthemes: Vec::new(),
        }
    }

    /// Append a subtheme, keeping insertion order.
    pub fn with_subtheme(mut self, subtheme: Subtheme) -> Self {
        self.subthemes.push(subtheme);
        self
    }
}

/// Lifecycle of a unit of study material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubthemeStatus {
    /// Waiting for the activation gate
    #[default]
    Queue,
    /// Has a review schedule in progress
    Active,
    /// Every review done; never revisited
    Completed,
}

impl SubthemeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubthemeStatus::Queue => "queue",
            SubthemeStatus::Active => "active",
            SubthemeStatus::Completed => "completed",
        }
    }
}

/// The unit of study material under scheduling control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtheme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: SubthemeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction_date: Option<NaiveDate>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Subtheme {
    /// A fresh subtheme waiting in the queue.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: SubthemeStatus::Queue,
            introduction_date: None,
            reviews: Vec::new(),
        }
    }

    pub fn is_queued(&self) -> bool {
        self.status == SubthemeStatus::Queue
    }

    pub fn all_reviews_completed(&self) -> bool {
        !self.reviews.is_empty() && self.reviews.iter().all(Review::is_completed)
    }

    pub fn completed_reviews(&self) -> usize {
        self.reviews.iter().filter(|r| r.is_completed()).count()
    }

    /// Earliest pending review in sequence order.
    pub fn next_pending(&self) -> Option<&Review> {
        self.reviews.iter().find(|r| !r.is_completed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Completed,
}

/// User-reported recall difficulty for a completed review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("expected easy, medium or hard, got '{other}'"),
            }),
        }
    }
}

/// One scheduled study event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// 1-based position in the subtheme's chain
    pub number: u32,
    /// Due day
    pub date: NaiveDate,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl Review {
    pub fn pending(number: u32, date: NaiveDate) -> Self {
        Self {
            number,
            date,
            status: ReviewStatus::Pending,
            completed_at: None,
            difficulty: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReviewStatus::Completed
    }

    /// Whether the review may be completed on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.date <= today
    }
}

//! Spaced-repetition scheduling engine.
//!
//! Two pure operations over the Theme → Subtheme → Review graph:
//!
//! - [`process_daily_updates`]: the daily activation gate, introducing at
//!   most one queued subtheme per day across the whole collection
//! - [`complete_review`]: date-gated completion that reschedules the rest
//!   of the subtheme's chain
//!
//! Neither performs I/O. Both take a snapshot and hand back a new one for
//! the caller to persist.
//!
//! # Usage
//! ```rust,ignore
//! use studyroom_core::srs::{Difficulty, SchedulingEngine};
//!
//! let engine = SchedulingEngine::system();
//! if let Some(update) = engine.process_daily_updates(&themes, last_processed) {
//!     store.save(&update.themes, update.processed_date)?;
//! }
//! let outcome = engine.complete_review(&themes, "subtheme-id", 1, Difficulty::Easy);
//! ```

pub mod activation;
pub mod agenda;
pub mod completion;
pub mod engine;
pub mod interval;
pub mod model;
pub mod validate;

pub use activation::{has_introduction_on, process_daily_updates, DailyUpdate};
pub use agenda::{due_reviews, progress, upcoming_reviews, AgendaEntry, SubthemeProgress};
pub use completion::{complete_review, CompletionOutcome};
pub use engine::SchedulingEngine;
pub use interval::{
    add_days, calculate_next_interval, IntervalPolicy, BASE_INTERVALS, REVIEWS_PER_SUBTHEME,
};
pub use model::{Difficulty, Review, ReviewStatus, Subtheme, SubthemeStatus, Theme};
pub use validate::{validate_subtheme, validate_themes};

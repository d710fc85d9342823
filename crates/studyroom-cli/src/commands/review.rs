//! Review commands: completion, and due/upcoming listings.

use clap::Subcommand;
use studyroom_core::srs::{due_reviews, upcoming_reviews};
use studyroom_core::{Clock, Config, Difficulty, StudyStore};

use super::CliResult;

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Complete a due review and reschedule the rest of the chain
    Complete {
        /// Subtheme ID
        subtheme_id: String,
        /// Review number (1-based)
        number: u32,
        /// Reported difficulty: easy, medium or hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
    },
    /// List pending reviews due today or earlier
    Due,
    /// List pending reviews due in the coming days
    Upcoming {
        /// Horizon in days (default: display.upcoming_days)
        #[arg(long)]
        days: Option<u32>,
    },
}

pub fn run(action: ReviewAction, clock: &dyn Clock) -> CliResult {
    let store = StudyStore::open()?;
    let mut state = store.load()?;

    match action {
        ReviewAction::Complete {
            subtheme_id,
            number,
            difficulty,
        } => {
            let engine = super::engine(clock)?;
            let outcome = engine.complete_review(&state.themes, &subtheme_id, number, difficulty);
            if outcome.awarded {
                state.themes = outcome.themes;
                store.save(&state)?;
            }
            println!("awarded: {}", outcome.awarded);
        }
        ReviewAction::Due => {
            let due = due_reviews(&state.themes, clock.today());
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        ReviewAction::Upcoming { days } => {
            let horizon = match days {
                Some(days) => days,
                None => Config::load()?.display.upcoming_days,
            };
            let upcoming = upcoming_reviews(&state.themes, clock.today(), horizon);
            println!("{}", serde_json::to_string_pretty(&upcoming)?);
        }
    }
    Ok(())
}

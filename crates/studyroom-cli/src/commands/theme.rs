//! Theme management commands for CLI.

use clap::Subcommand;
use studyroom_core::{StudyStore, Theme};
use uuid::Uuid;

use super::CliResult;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Create a new theme
    Add {
        /// Theme name
        name: String,
    },
    /// List themes with their subthemes
    List,
}

pub fn run(action: ThemeAction) -> CliResult {
    let store = StudyStore::open()?;
    let mut state = store.load()?;

    match action {
        ThemeAction::Add { name } => {
            let theme = Theme::new(Uuid::new_v4().to_string(), name);
            println!("Theme created: {}", theme.id);
            state.themes.push(theme);
            store.save(&state)?;
        }
        ThemeAction::List => {
            println!("{}", serde_json::to_string_pretty(&state.themes)?);
        }
    }
    Ok(())
}

use clap::Subcommand;
use studyroom_core::{StudyStore, Subtheme};
use uuid::Uuid;

use super::CliResult;

#[derive(Subcommand)]
pub enum SubthemeAction {
    /// Queue a new subtheme under a theme
    Add {
        /// Theme ID
        theme_id: String,
        /// Subtheme name
        name: String,
    },
    /// Get subtheme details including its reviews
    Get {
        /// Subtheme ID
        id: String,
    },
}

pub fn run(action: SubthemeAction) -> CliResult {
    let store = StudyStore::open()?;
    let mut state = store.load()?;

    match action {
        SubthemeAction::Add { theme_id, name } => {
            let theme = state
                .themes
                .iter_mut()
                .find(|t| t.id == theme_id)
                .ok_or_else(|| format!("theme not found: {theme_id}"))?;
            let subtheme = Subtheme::new(Uuid::new_v4().to_string(), name);
            println!("Subtheme queued: {}", subtheme.id);
            theme.subthemes.push(subtheme);
            store.save(&state)?;
        }
        SubthemeAction::Get { id } => {
            let subtheme = state
                .themes
                .iter()
                .flat_map(|t| &t.subthemes)
                .find(|s| s.id == id)
                .ok_or_else(|| format!("subtheme not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(subtheme)?);
        }
    }
    Ok(())
}

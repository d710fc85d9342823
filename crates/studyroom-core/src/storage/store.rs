//! Study snapshot persistence.
//!
//! Keeps the theme collection and the activation gate's last processed
//! date in a single JSON document, `study.json`, next to the config.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::Result;
use crate::srs::{validate_themes, Theme};

/// Everything the caller persists between engine calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyState {
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_processed_date: Option<NaiveDate>,
}

/// File-backed store for [`StudyState`].
pub struct StudyStore {
    path: PathBuf,
}

impl StudyStore {
    /// Open the store in the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join("study.json"),
        })
    }

    /// Create a store with a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the snapshot; a missing file is an empty study plan.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// snapshot breaks the subtheme invariants.
    pub fn load(&self) -> Result<StudyState> {
        if !self.path.exists() {
            return Ok(StudyState::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let state: StudyState = serde_json::from_str(&content)?;
        validate_themes(&state.themes)?;
        Ok(state)
    }

    /// Write the snapshot, replacing the previous one.
    pub fn save(&self, state: &StudyState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), themes = state.themes.len(), "study state saved");
        Ok(())
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

mod config;
pub mod store;

pub use config::{Config, DisplayConfig};
pub use store::{StudyState, StudyStore};

use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Returns the directory holding `config.toml` and `study.json`.
///
/// `STUDYROOM_DATA_DIR` wins when set. Otherwise `~/.config/studyroom[-dev]/`
/// based on STUDYROOM_ENV; set STUDYROOM_ENV=dev to use the development
/// data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("STUDYROOM_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYROOM_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("studyroom-dev")
            } else {
                base_dir.join("studyroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| CoreError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

use studyroom_core::srs::progress;
use studyroom_core::StudyStore;

use super::CliResult;

pub fn run() -> CliResult {
    let state = StudyStore::open()?.load()?;
    println!("{}", serde_json::to_string_pretty(&progress(&state.themes))?);
    Ok(())
}

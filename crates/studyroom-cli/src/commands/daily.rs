use studyroom_core::{Clock, StudyStore};

use super::CliResult;

pub fn run(clock: &dyn Clock) -> CliResult {
    let engine = super::engine(clock)?;
    let store = StudyStore::open()?;
    let mut state = store.load()?;

    match engine.process_daily_updates(&state.themes, state.last_processed_date) {
        Some(update) => {
            state.themes = update.themes;
            state.last_processed_date = Some(update.processed_date);
            store.save(&state)?;

            println!("processed: {}", update.processed_date);
            match update.activated {
                Some(id) => println!("activated: {id}"),
                None => println!("activated: none"),
            }
        }
        None => println!("nothing to do"),
    }
    Ok(())
}

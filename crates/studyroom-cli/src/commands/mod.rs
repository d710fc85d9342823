pub mod config;
pub mod daily;
pub mod review;
pub mod status;
pub mod subtheme;
pub mod theme;

use studyroom_core::{Clock, Config, FixedClock, SchedulingEngine, SystemClock};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// System clock, or a frozen one when `--now` is given.
pub fn clock_from(now: Option<&str>) -> Result<Box<dyn Clock>, Box<dyn std::error::Error>> {
    match now {
        None => Ok(Box::new(SystemClock)),
        Some(value) => FixedClock::parse(value)
            .map(|clock| Box::new(clock) as Box<dyn Clock>)
            .ok_or_else(|| format!("invalid --now value '{value}': expected RFC 3339 or YYYY-MM-DD").into()),
    }
}

/// Engine configured from `config.toml`.
pub fn engine(clock: &dyn Clock) -> Result<SchedulingEngine<&dyn Clock>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    Ok(SchedulingEngine::with_policy(clock, config.scheduling))
}

//! # Studyroom Core Library
//!
//! This library provides the scheduling logic behind Studyroom's review
//! planner. All operations are available via the standalone CLI binary,
//! which is a thin shell over the same core library.
//!
//! ## Architecture
//!
//! - **Scheduling Engine**: A pure state machine over themes, subthemes and
//!   reviews. The caller supplies a snapshot and a [`Clock`] and persists
//!   whatever comes back
//! - **Storage**: TOML-based configuration and a JSON study snapshot
//!
//! ## Key Components
//!
//! - [`SchedulingEngine`]: Daily activation gate and review rescheduler
//! - [`IntervalPolicy`]: Base interval table and difficulty multipliers
//! - [`StudyStore`]: Snapshot persistence for the CLI
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod srs;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use srs::{
    CompletionOutcome, DailyUpdate, Difficulty, IntervalPolicy, Review, ReviewStatus,
    SchedulingEngine, Subtheme, SubthemeStatus, Theme,
};
pub use storage::{Config, StudyState, StudyStore};

//! Session orchestration for EcoArchitect.
//!
//! This crate sequences a play session around the board and the scoring
//! engine: scenario start, planning, building against the countdown,
//! submission and review, plus the player's persistent progress.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `ecoarchitect-config.yaml`
//!   into strongly-typed structs.
//! - [`progress`] -- Applying scores to [`PlayerProgress`] and the
//!   [`ProgressStore`] persistence seam.
//! - [`session`] -- The [`Session`] phase machine.
//! - [`command`] -- Serde-tagged scripted commands.
//! - [`runner`] -- Async countdown driver with live previews.
//!
//! [`PlayerProgress`]: ecoarchitect_types::PlayerProgress
//! [`ProgressStore`]: progress::ProgressStore
//! [`Session`]: session::Session

pub mod command;
pub mod config;
pub mod progress;
pub mod runner;
pub mod session;

pub use command::SessionCommand;
pub use config::{ConfigError, GameConfig, LogFormat};
pub use progress::{
    JsonFileStore, MemoryStore, NullStore, ProgressError, ProgressStore, ReputationRule,
    apply_result,
};
pub use runner::{NoOpPreview, PreviewCallback, RunnerError, RunnerTiming, run_countdown};
pub use session::{Session, SessionError};

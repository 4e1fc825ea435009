//! EcoArchitect engine binary.
//!
//! Plays one scenario headlessly and prints the score breakdown as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ecoarchitect-config.yaml` (or the path given
//!    as the first argument)
//! 2. Initialize structured logging (tracing)
//! 3. Load the reference catalog and the player's progress
//! 4. Start the configured scenario and apply the scripted plan
//! 5. Submit, or drive the countdown until it forces a submission
//! 6. Print the breakdown

mod error;
mod preview_log;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ecoarchitect_catalog::Catalog;
use ecoarchitect_core::{
    GameConfig, JsonFileStore, LogFormat, RunnerTiming, Session, run_countdown,
};
use ecoarchitect_types::{ScoreBreakdown, SessionPhase};
use tokio::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::preview_log::LogPreview;

/// Default configuration file, relative to the working directory.
const CONFIG_FILE: &str = "ecoarchitect-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or catalog loading fails, the
/// scenario cannot be started, or the run ends without a score.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config_path, config) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config);
    info!(
        config = %config_path.display(),
        scenario_id = %config.session.scenario_id,
        plan_steps = config.session.plan.len(),
        "ecoarchitect-engine starting"
    );

    // 3. Catalog and progress.
    let catalog = Arc::new(load_catalog(config.catalog.path.as_deref())?);
    let store = JsonFileStore::new(&config.progress.path);
    info!(progress = %store.path().display(), "Progress store ready");
    let mut session = Session::new(
        catalog,
        Box::new(store),
        config.progress.reputation_rule(),
    );

    // 4. Scenario and plan.
    session
        .start_scenario(&config.session.scenario_id)
        .map_err(EngineError::from)?;
    for (step, command) in config.session.plan.iter().enumerate() {
        match command.apply(&mut session) {
            Ok(Some(breakdown)) => {
                info!(step, overall = breakdown.overall_score, "Plan step scored");
            }
            Ok(None) => {}
            Err(err) => warn!(step, %err, ?command, "Plan step rejected"),
        }
    }

    // 5. Finish the round.
    let breakdown = finish(session, &config).await?;
    info!(
        overall = breakdown.overall_score,
        passed = breakdown.passed,
        stars = breakdown.stars,
        "ecoarchitect-engine finished"
    );

    // 6. Report.
    let report = serde_json::to_string_pretty(&breakdown).map_err(EngineError::from)?;
    println!("{report}");
    Ok(())
}

/// Load configuration from the first argument or `ecoarchitect-config.yaml`.
///
/// A missing file means defaults.
fn load_config() -> Result<(PathBuf, GameConfig), EngineError> {
    let path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);
    let config = GameConfig::load_or_default(&path)?;
    Ok((path, config))
}

fn init_tracing(config: &GameConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    match config.logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

/// The configured catalog, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, EngineError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog");
            Ok(Catalog::from_path(path)?)
        }
        None => Ok(Catalog::standard()),
    }
}

/// Submit now, or run the countdown out when configured to wait.
async fn finish(mut session: Session, config: &GameConfig) -> Result<ScoreBreakdown, EngineError> {
    // The plan may already have submitted.
    if let (SessionPhase::Review, Some(breakdown)) = (session.phase(), session.last_score()) {
        return Ok(breakdown.clone());
    }
    if !config.session.wait_for_countdown {
        return Ok(session.submit()?);
    }
    if session.phase() == SessionPhase::Planning {
        session.start_building()?;
    }

    info!(seconds = session.time_remaining(), "Waiting for countdown");
    let timing = RunnerTiming::from_millis(
        config.session.tick_interval_ms,
        config.session.preview_interval_ms,
    );
    let shared = Mutex::new(session);
    Ok(run_countdown(&shared, timing, &mut LogPreview::new()).await?)
}

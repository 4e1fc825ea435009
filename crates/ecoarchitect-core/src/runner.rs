//! Real-time countdown driver.
//!
//! [`run_countdown`] ticks a shared [`Session`] once per interval while it
//! is building and optionally emits live score previews on a second
//! interval. Ticks are processed one at a time on a single task and missed
//! ticks are skipped, so a slow tick can never cause a double decrement.
//!
//! The loop ends when the countdown forces a submission, or when someone
//! else moves the session out of building (an explicit submit, a restart or
//! a reset).

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use ecoarchitect_types::{ScoreBreakdown, SessionPhase};

use crate::session::Session;

/// Errors that can end the countdown runner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunnerError {
    /// The session stopped building without producing a score.
    #[error("session left building without a score (now {phase:?})")]
    Interrupted {
        /// The phase the session was found in.
        phase: SessionPhase,
    },
}

/// Callback invoked with each live preview.
pub trait PreviewCallback: Send {
    /// Called with the current preview and the seconds left.
    fn on_preview(&mut self, breakdown: &ScoreBreakdown, seconds_remaining: u32);
}

/// A preview callback that ignores everything.
pub struct NoOpPreview;

impl PreviewCallback for NoOpPreview {
    fn on_preview(&mut self, _breakdown: &ScoreBreakdown, _seconds_remaining: u32) {}
}

/// How fast the runner ticks and previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerTiming {
    /// Real time per countdown second.
    pub tick: Duration,
    /// Real time between previews; `None` disables them.
    pub preview: Option<Duration>,
}

impl RunnerTiming {
    /// Timing from millisecond settings. A zero tick interval is raised to
    /// 1 ms; a zero preview interval disables previews.
    pub const fn from_millis(tick_ms: u64, preview_ms: u64) -> Self {
        let tick_ms = if tick_ms == 0 { 1 } else { tick_ms };
        Self {
            tick: Duration::from_millis(tick_ms),
            preview: if preview_ms == 0 {
                None
            } else {
                Some(Duration::from_millis(preview_ms))
            },
        }
    }
}

/// Drive the countdown of a building session to its end.
///
/// Returns the submitted breakdown, whether the countdown forced the
/// submission or the session was submitted from elsewhere.
///
/// # Errors
///
/// Returns [`RunnerError::Interrupted`] if the session is (or ends up) in a
/// phase other than building without a fresh score, e.g. after a reset.
pub async fn run_countdown(
    session: &Mutex<Session>,
    timing: RunnerTiming,
    callback: &mut dyn PreviewCallback,
) -> Result<ScoreBreakdown, RunnerError> {
    let mut ticker = interval_after(timing.tick);
    let mut preview = timing.preview.map(interval_after);

    info!(tick = ?timing.tick, preview = ?timing.preview, "Countdown runner starting");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut guard = session.lock().await;
                if guard.phase() != SessionPhase::Building {
                    return finished(&guard);
                }
                if let Some(breakdown) = guard.tick() {
                    info!(overall = breakdown.overall_score, "Countdown runner finished");
                    return Ok(breakdown);
                }
            }
            () = next_tick(preview.as_mut()) => {
                let guard = session.lock().await;
                let building = guard.phase() == SessionPhase::Building;
                if let Some(breakdown) = building.then(|| guard.live_score().ok()).flatten() {
                    let remaining = guard.time_remaining();
                    debug!(overall = breakdown.overall_score, remaining, "Preview");
                    callback.on_preview(&breakdown, remaining);
                }
            }
        }
    }
}

/// An interval whose first tick is one period from now.
fn interval_after(period: Duration) -> Interval {
    let start = Instant::now()
        .checked_add(period)
        .unwrap_or_else(Instant::now);
    let mut interval = tokio::time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

async fn next_tick(interval: Option<&mut Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn finished(session: &Session) -> Result<ScoreBreakdown, RunnerError> {
    match (session.phase(), session.last_score()) {
        (SessionPhase::Review, Some(breakdown)) => Ok(breakdown.clone()),
        (phase, _) => {
            info!(phase = ?phase, "Countdown runner stopped, session left building");
            Err(RunnerError::Interrupted { phase })
        }
    }
}

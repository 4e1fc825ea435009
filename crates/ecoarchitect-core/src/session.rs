//! Session orchestration.
//!
//! A [`Session`] walks one player through
//! `Idle -> Planning -> Building -> Review` and back. It owns the board,
//! the active scenario and the player's progress; scoring goes through
//! [`calculate_score`] and progress is saved best-effort after every
//! submission.
//!
//! Board mutations are only accepted while planning or building. Anything
//! else is a [`SessionError::WrongPhase`] and changes nothing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use ecoarchitect_board::{Board, BoardError, TickOutcome};
use ecoarchitect_catalog::Catalog;
use ecoarchitect_scoring::calculate_score;
use ecoarchitect_types::{
    AgentId, AgentType, ConnectionId, HabitatId, HabitatType, PlayerProgress, Position, Scenario,
    ScoreBreakdown, SessionPhase,
};

use crate::progress::{ProgressStore, ReputationRule, apply_result};

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The operation is not allowed in the current phase.
    #[error("{action} is not allowed while {phase:?}")]
    WrongPhase {
        /// What was attempted.
        action: &'static str,
        /// The phase the session was in.
        phase: SessionPhase,
    },

    /// No scenario with this id exists in the catalog.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    /// The scenario exists but its predecessor has not been completed.
    #[error("scenario {0} is locked")]
    Locked(String),

    /// The active scenario is the last one.
    #[error("no scenario follows {0}")]
    NoNextScenario(String),

    /// The operation needs an active scenario.
    #[error("no scenario is active")]
    NoActiveScenario,

    /// A scripted command referenced a position that does not exist.
    #[error("no {what} at index {index}")]
    IndexOutOfRange {
        /// The kind of thing being indexed.
        what: &'static str,
        /// The requested index.
        index: usize,
    },

    /// The board rejected the mutation.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// One player's play session.
pub struct Session {
    catalog: Arc<Catalog>,
    board: Board,
    phase: SessionPhase,
    scenario: Option<Scenario>,
    last_score: Option<ScoreBreakdown>,
    progress: PlayerProgress,
    store: Box<dyn ProgressStore>,
    reputation: ReputationRule,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("phase", &self.phase)
            .field("scenario", &self.scenario.as_ref().map(|s| s.id.as_str()))
            .field("credits", &self.board.credits())
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// An idle session. Progress is read from `store`; a failed read is
    /// logged and replaced by default progress.
    pub fn new(
        catalog: Arc<Catalog>,
        store: Box<dyn ProgressStore>,
        reputation: ReputationRule,
    ) -> Self {
        let progress = store.load().unwrap_or_else(|err| {
            warn!(%err, "Failed to load player progress, starting fresh");
            PlayerProgress::default()
        });
        Self {
            board: Board::new(Arc::clone(&catalog), 0),
            catalog,
            phase: SessionPhase::Idle,
            scenario: None,
            last_score: None,
            progress,
            store,
            reputation,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current phase.
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The board.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Reference data.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active scenario.
    pub const fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// The most recent submission's breakdown.
    pub const fn last_score(&self) -> Option<&ScoreBreakdown> {
        self.last_score.as_ref()
    }

    /// The player's progress.
    pub const fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    /// Seconds left on the countdown.
    pub const fn time_remaining(&self) -> u32 {
        self.board.countdown().remaining()
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Seed the board for scenario `id` and enter planning.
    ///
    /// Allowed from any phase; the previous board is discarded.
    pub fn start_scenario(&mut self, id: &str) -> Result<(), SessionError> {
        let scenario = self
            .catalog
            .scenario(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownScenario(id.to_owned()))?;
        self.board = Board::seeded(Arc::clone(&self.catalog), &scenario);
        info!(
            scenario_id = %scenario.id,
            credits = scenario.credits,
            seconds = self.board.countdown().remaining(),
            "Scenario started"
        );
        self.scenario = Some(scenario);
        self.last_score = None;
        self.phase = SessionPhase::Planning;
        Ok(())
    }

    /// Start the countdown.
    pub fn start_building(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Planning {
            return Err(self.wrong_phase("start_building"));
        }
        self.board.resume_countdown();
        self.phase = SessionPhase::Building;
        info!(seconds = self.time_remaining(), "Building started");
        Ok(())
    }

    /// Score the board without committing anything.
    pub fn live_score(&self) -> Result<ScoreBreakdown, SessionError> {
        let scenario = self.scenario.as_ref().ok_or(SessionError::NoActiveScenario)?;
        let breakdown = calculate_score(&self.catalog, self.board.snapshot(), scenario);
        debug!(
            scenario_id = %scenario.id,
            overall = breakdown.overall_score,
            "Live score preview"
        );
        Ok(breakdown)
    }

    /// Score the board authoritatively and move to review.
    ///
    /// Stops the countdown, folds the result into the player's progress and
    /// saves it. A failed save is logged and otherwise ignored.
    pub fn submit(&mut self) -> Result<ScoreBreakdown, SessionError> {
        if !matches!(self.phase, SessionPhase::Planning | SessionPhase::Building) {
            return Err(self.wrong_phase("submit"));
        }
        let scenario = self.scenario.as_ref().ok_or(SessionError::NoActiveScenario)?;
        let breakdown = calculate_score(&self.catalog, self.board.snapshot(), scenario);
        self.board.pause_countdown();

        let update = apply_result(&mut self.progress, &scenario.id, &breakdown, self.reputation);
        info!(
            scenario_id = %scenario.id,
            overall = breakdown.overall_score,
            passed = breakdown.passed,
            stars = breakdown.stars,
            first_completion = update.first_completion,
            new_best = update.new_best,
            reputation = self.progress.reputation,
            "Score submitted"
        );
        if let Err(err) = self.store.save(&self.progress) {
            warn!(%err, "Failed to save player progress");
        }

        self.phase = SessionPhase::Review;
        self.last_score = Some(breakdown.clone());
        Ok(breakdown)
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the breakdown when this tick exhausted the countdown and
    /// forced a submission. Outside building nothing happens.
    pub fn tick(&mut self) -> Option<ScoreBreakdown> {
        if self.phase != SessionPhase::Building {
            return None;
        }
        match self.board.tick() {
            TickOutcome::Expired => {
                info!("Countdown expired, submitting");
                self.submit().ok()
            }
            TickOutcome::Running(_) | TickOutcome::Idle => None,
        }
    }

    /// Re-seed the active scenario from scratch.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let id = self.active_scenario_id()?;
        self.start_scenario(&id)
    }

    /// Start the scenario after the active one, if it is unlocked.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        let current = self.active_scenario_id()?;
        let next = self
            .catalog
            .next_scenario(&current)
            .map(|s| s.id.clone())
            .ok_or(SessionError::NoNextScenario(current))?;
        if !self.catalog.is_unlocked(&next, &self.progress) {
            return Err(SessionError::Locked(next));
        }
        self.start_scenario(&next)
    }

    /// Back to idle: no scenario, empty board, no credits, countdown off.
    pub fn reset(&mut self) {
        self.board = Board::new(Arc::clone(&self.catalog), 0);
        self.scenario = None;
        self.last_score = None;
        self.phase = SessionPhase::Idle;
        info!("Session reset");
    }

    // -----------------------------------------------------------------------
    // Board mutations
    // -----------------------------------------------------------------------

    /// See [`Board::place_habitat`].
    pub fn place_habitat(
        &mut self,
        habitat_type: HabitatType,
        position: Position,
    ) -> Result<HabitatId, SessionError> {
        self.ensure_editable("place_habitat")?;
        Ok(self.board.place_habitat(habitat_type, position)?)
    }

    /// See [`Board::remove_habitat`].
    pub fn remove_habitat(&mut self, id: HabitatId) -> Result<u32, SessionError> {
        self.ensure_editable("remove_habitat")?;
        Ok(self.board.remove_habitat(id)?)
    }

    /// See [`Board::move_habitat`].
    pub fn move_habitat(&mut self, id: HabitatId, position: Position) -> Result<(), SessionError> {
        self.ensure_editable("move_habitat")?;
        Ok(self.board.move_habitat(id, position)?)
    }

    /// See [`Board::upgrade_habitat`].
    pub fn upgrade_habitat(&mut self, id: HabitatId) -> Result<u8, SessionError> {
        self.ensure_editable("upgrade_habitat")?;
        Ok(self.board.upgrade_habitat(id)?)
    }

    /// See [`Board::place_agent`].
    pub fn place_agent(
        &mut self,
        agent_type: AgentType,
        habitat: HabitatId,
    ) -> Result<AgentId, SessionError> {
        self.ensure_editable("place_agent")?;
        Ok(self.board.place_agent(agent_type, habitat)?)
    }

    /// See [`Board::remove_agent`].
    pub fn remove_agent(&mut self, id: AgentId) -> Result<u32, SessionError> {
        self.ensure_editable("remove_agent")?;
        Ok(self.board.remove_agent(id)?)
    }

    /// See [`Board::start_connection`].
    pub fn start_connection(&mut self, habitat: HabitatId) -> Result<(), SessionError> {
        self.ensure_editable("start_connection")?;
        Ok(self.board.start_connection(habitat)?)
    }

    /// See [`Board::complete_connection`].
    pub fn complete_connection(&mut self, target: HabitatId) -> Result<ConnectionId, SessionError> {
        self.ensure_editable("complete_connection")?;
        Ok(self.board.complete_connection(target)?)
    }

    /// See [`Board::cancel_connection`].
    pub fn cancel_connection(&mut self) -> Result<(), SessionError> {
        self.ensure_editable("cancel_connection")?;
        self.board.cancel_connection();
        Ok(())
    }

    /// See [`Board::remove_connection`].
    pub fn remove_connection(&mut self, id: ConnectionId) -> Result<u32, SessionError> {
        self.ensure_editable("remove_connection")?;
        Ok(self.board.remove_connection(id)?)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn ensure_editable(&self, action: &'static str) -> Result<(), SessionError> {
        if matches!(self.phase, SessionPhase::Planning | SessionPhase::Building) {
            Ok(())
        } else {
            Err(self.wrong_phase(action))
        }
    }

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        debug!(action, phase = ?self.phase, "Session action rejected");
        SessionError::WrongPhase {
            action,
            phase: self.phase,
        }
    }

    fn active_scenario_id(&self) -> Result<String, SessionError> {
        self.scenario
            .as_ref()
            .map(|s| s.id.clone())
            .ok_or(SessionError::NoActiveScenario)
    }
}

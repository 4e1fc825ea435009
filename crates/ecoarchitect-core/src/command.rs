//! Scripted session commands.
//!
//! Commands name habitats, agents and connections by their position on the
//! board (placement order), since ids are generated at runtime. They are
//! serde-tagged on `command` so a plan can be written in YAML or JSON:
//!
//! ```yaml
//! - command: place_habitat
//!   habitat_type: payment
//!   x: 450
//!   y: 200
//! - command: place_agent
//!   agent_type: paymentGateway
//!   habitat: 1
//! - command: connect
//!   from: 0
//!   to: 1
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use ecoarchitect_types::{
    AgentId, AgentType, ConnectionId, HabitatId, HabitatType, Position, ScoreBreakdown,
};

use crate::session::{Session, SessionError};

/// One step of a scripted plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Start the countdown.
    StartBuilding,
    /// Place a habitat.
    PlaceHabitat {
        /// Habitat type.
        habitat_type: HabitatType,
        /// Horizontal position.
        #[serde(default)]
        x: i32,
        /// Vertical position.
        #[serde(default)]
        y: i32,
    },
    /// Remove the habitat at this board index.
    RemoveHabitat {
        /// Board index of the habitat.
        habitat: usize,
    },
    /// Move the habitat at this board index.
    MoveHabitat {
        /// Board index of the habitat.
        habitat: usize,
        /// New horizontal position.
        x: i32,
        /// New vertical position.
        y: i32,
    },
    /// Upgrade the habitat at this board index.
    UpgradeHabitat {
        /// Board index of the habitat.
        habitat: usize,
    },
    /// Place an agent into the habitat at this board index.
    PlaceAgent {
        /// Agent type.
        agent_type: AgentType,
        /// Board index of the owning habitat.
        habitat: usize,
    },
    /// Remove the agent at this board index.
    RemoveAgent {
        /// Board index of the agent.
        agent: usize,
    },
    /// Start and complete a connection between two habitats.
    Connect {
        /// Board index of the source habitat.
        from: usize,
        /// Board index of the target habitat.
        to: usize,
    },
    /// Drop any pending connection attempt.
    CancelConnection,
    /// Remove the connection at this board index.
    RemoveConnection {
        /// Board index of the connection.
        connection: usize,
    },
    /// Compute a live score.
    Preview,
    /// Submit the board for scoring.
    Submit,
}

impl SessionCommand {
    /// Apply this command to `session`.
    ///
    /// Returns the breakdown for [`Preview`](Self::Preview) and
    /// [`Submit`](Self::Submit), `None` otherwise.
    pub fn apply(&self, session: &mut Session) -> Result<Option<ScoreBreakdown>, SessionError> {
        debug!(command = ?self, "Applying session command");
        match *self {
            Self::StartBuilding => session.start_building()?,
            Self::PlaceHabitat { habitat_type, x, y } => {
                session.place_habitat(habitat_type, Position::new(x, y))?;
            }
            Self::RemoveHabitat { habitat } => {
                session.remove_habitat(habitat_at(session, habitat)?)?;
            }
            Self::MoveHabitat { habitat, x, y } => {
                session.move_habitat(habitat_at(session, habitat)?, Position::new(x, y))?;
            }
            Self::UpgradeHabitat { habitat } => {
                session.upgrade_habitat(habitat_at(session, habitat)?)?;
            }
            Self::PlaceAgent {
                agent_type,
                habitat,
            } => {
                session.place_agent(agent_type, habitat_at(session, habitat)?)?;
            }
            Self::RemoveAgent { agent } => {
                session.remove_agent(agent_at(session, agent)?)?;
            }
            Self::Connect { from, to } => {
                let source = habitat_at(session, from)?;
                let target = habitat_at(session, to)?;
                session.start_connection(source)?;
                session.complete_connection(target)?;
            }
            Self::CancelConnection => session.cancel_connection()?,
            Self::RemoveConnection { connection } => {
                session.remove_connection(connection_at(session, connection)?)?;
            }
            Self::Preview => return session.live_score().map(Some),
            Self::Submit => return session.submit().map(Some),
        }
        Ok(None)
    }
}

fn habitat_at(session: &Session, index: usize) -> Result<HabitatId, SessionError> {
    session
        .board()
        .snapshot()
        .habitats
        .get(index)
        .map(|h| h.id)
        .ok_or(SessionError::IndexOutOfRange {
            what: "habitat",
            index,
        })
}

fn agent_at(session: &Session, index: usize) -> Result<AgentId, SessionError> {
    session
        .board()
        .snapshot()
        .agents
        .get(index)
        .map(|a| a.id)
        .ok_or(SessionError::IndexOutOfRange {
            what: "agent",
            index,
        })
}

fn connection_at(session: &Session, index: usize) -> Result<ConnectionId, SessionError> {
    session
        .board()
        .snapshot()
        .connections
        .get(index)
        .map(|c| c.id)
        .ok_or(SessionError::IndexOutOfRange {
            what: "connection",
            index,
        })
}

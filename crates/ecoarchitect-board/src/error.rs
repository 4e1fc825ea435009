//! Error types for the `ecoarchitect-board` crate.
//!
//! Every variant is an ordinary rejected player action. Callers may ignore
//! them: the board is left exactly as it was (see
//! [`Board::complete_connection`](crate::Board::complete_connection) for the
//! one documented exception).

use ecoarchitect_types::{AgentId, AgentType, ConnectionId, HabitatId, HabitatType};

/// Reasons a board mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Not enough credits for the action.
    #[error("insufficient credits: need {needed}, have {available}")]
    InsufficientCredits {
        /// Credits the action costs.
        needed: u32,
        /// Credits currently held.
        available: u32,
    },

    /// No placed habitat has this id.
    #[error("habitat not found: {0}")]
    UnknownHabitat(HabitatId),

    /// No placed agent has this id.
    #[error("agent not found: {0}")]
    UnknownAgent(AgentId),

    /// No connection has this id.
    #[error("connection not found: {0}")]
    UnknownConnection(ConnectionId),

    /// The catalog has no definition for this habitat type.
    #[error("habitat type not in catalog: {0}")]
    UnknownHabitatType(HabitatType),

    /// The catalog has no definition for this agent type.
    #[error("agent type not in catalog: {0}")]
    UnknownAgentType(AgentType),

    /// The habitat already holds as many agents as it can.
    #[error("habitat {habitat} is at capacity ({capacity})")]
    AtCapacity {
        /// The full habitat.
        habitat: HabitatId,
        /// Its effective capacity.
        capacity: u32,
    },

    /// The habitat is already at the highest level.
    #[error("habitat {0} is already at max level")]
    MaxLevel(HabitatId),

    /// The two habitats are already connected.
    #[error("habitats {from} and {to} are already connected")]
    DuplicateConnection {
        /// Pending source habitat.
        from: HabitatId,
        /// Target habitat.
        to: HabitatId,
    },

    /// A connection cannot join a habitat to itself.
    #[error("habitat {0} cannot connect to itself")]
    SelfConnection(HabitatId),

    /// No connection attempt is in progress.
    #[error("no pending connection")]
    NoPendingConnection,
}

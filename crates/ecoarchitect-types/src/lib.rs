//! Shared type definitions for the EcoArchitect habitat simulation.
//!
//! This crate is the single source of truth for all types used across the
//! EcoArchitect workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for board instances
//! - [`enums`] -- Catalog keys, metrics, feedback tags, session phases
//! - [`structs`] -- Catalog definitions, board instances, score breakdown,
//!   player progress

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AgentFit, AgentType, BestFit, BonusType, FeedbackKind, HabitatType, SatisfactionBand,
    SessionPhase, StakeholderMetric, SynergyCategory,
};
pub use ids::{AgentId, ConnectionId, HabitatId};
pub use structs::{
    AgentDefinition, BoardSnapshot, ComponentScores, Connection, DEFAULT_REPUTATION,
    FeedbackEntry, GivenHabitat, HabitatDefinition, LectureReference, PlacedAgent,
    PlacedHabitat, PlayerProgress, Position, Requirement, Scenario, ScoreBreakdown, Stakeholder,
    StakeholderScore, Synergy,
};

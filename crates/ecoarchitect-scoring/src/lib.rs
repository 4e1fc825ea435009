//! Scoring engine for the EcoArchitect simulation.
//!
//! [`calculate_score`] maps a board snapshot and a scenario to a
//! [`ScoreBreakdown`](ecoarchitect_types::ScoreBreakdown). It owns no state
//! and never fails.
//!
//! The score is built in three layers:
//!
//! 1. Five components in `[0, 100]` (agent quality, habitat match, synergy,
//!    connections, requirements) combined with fixed weights.
//! 2. Flat penalties subtracted from the weighted sum, giving a clamped,
//!    rounded seed.
//! 3. Per-stakeholder adjustments of the seed, weight-averaged into the
//!    reported overall score, which decides pass/fail and stars.
//!
//! # Modules
//!
//! - [`components`] -- The five weighted components and their tallies.
//! - [`engine`] -- [`calculate_score`].
//! - [`feedback`] -- Ordered feedback messages.
//! - [`fit`] -- Agent fit hints and active synergies.
//! - [`math`] -- Decimal rounding and ratio helpers.
//! - [`penalties`] -- Named flat penalties.
//! - [`stakeholders`] -- Stakeholder adjustments, overall score, stars.
//! - [`weights`] -- Weights, penalty sizes and thresholds.

pub mod components;
pub mod engine;
pub mod feedback;
pub mod fit;
pub mod math;
pub mod penalties;
pub mod stakeholders;
pub mod weights;

pub use engine::calculate_score;
pub use fit::{active_synergies, active_synergy_labels, agent_fit};
pub use penalties::Penalties;

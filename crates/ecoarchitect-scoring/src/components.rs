//! The five weighted score components.
//!
//! Each component is a number in `[0, 100]`. Counting helpers
//! ([`PlacementTally`], [`ConnectionReport`], [`RequirementsReport`]) are
//! returned alongside so penalties and feedback can reuse them without
//! re-walking the board.

use rust_decimal::Decimal;
use tracing::warn;

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{AgentType, BoardSnapshot, HabitatId, HabitatType, Scenario};

use crate::math::{capped_steps, clamp_score, percent, round_u32, scaled_ratio};
use crate::weights::{
    CONNECTION_BONUS_STEP, DISPLAY_BONUS_CAP, SYNERGY_BONUS_STEP, SYNERGY_TARGET,
    WRONG_PLACEMENT_RATE,
};

// ---------------------------------------------------------------------------
// Agent quality
// ---------------------------------------------------------------------------

/// Mean of every placed agent's efficiency and reliability, pooled.
///
/// Agent types missing from the catalog add nothing to the sum but still
/// count in the denominator. An empty board scores 0.
pub fn agent_quality(catalog: &Catalog, snapshot: &BoardSnapshot) -> Decimal {
    let mut total: u64 = 0;
    for agent in &snapshot.agents {
        match catalog.agent(agent.agent_type) {
            Some(def) => {
                total = total
                    .saturating_add(u64::from(def.efficiency))
                    .saturating_add(u64::from(def.reliability));
            }
            None => warn!(agent_type = %agent.agent_type, "Agent type missing from catalog, skipped"),
        }
    }
    let ratings = snapshot.agents.len().saturating_mul(2);
    if ratings == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(total)
        .checked_div(Decimal::from(ratings))
        .unwrap_or(Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Habitat match
// ---------------------------------------------------------------------------

/// Agents classified by placement.
///
/// `total` counts every placed agent; agents whose type or owning habitat
/// is unknown are neither correct nor wrong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementTally {
    /// Agents in their best-fit habitat, or wildcards.
    pub correct: usize,
    /// Agents in some other habitat.
    pub wrong: usize,
    /// All placed agents.
    pub total: usize,
}

impl PlacementTally {
    /// Whether at least one agent exists and every agent is correct.
    pub const fn all_correct(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Classify every placed agent against its owning habitat.
pub fn placement_tally(catalog: &Catalog, snapshot: &BoardSnapshot) -> PlacementTally {
    let mut tally = PlacementTally {
        total: snapshot.agents.len(),
        ..PlacementTally::default()
    };
    for agent in &snapshot.agents {
        let Some(def) = catalog.agent(agent.agent_type) else {
            continue;
        };
        let Some(habitat) = snapshot.habitat(agent.habitat_id) else {
            continue;
        };
        if def.best_fit.accepts(habitat.habitat_type) {
            tally.correct = tally.correct.saturating_add(1);
        } else {
            tally.wrong = tally.wrong.saturating_add(1);
        }
    }
    tally
}

/// `correct% - wrong% * 0.3`, floored at 0. An empty board scores 0.
pub fn habitat_match_score(tally: &PlacementTally) -> Decimal {
    let correct = percent(tally.correct, tally.total);
    let deduction = scaled_ratio(tally.wrong, tally.total, Decimal::from(WRONG_PLACEMENT_RATE));
    correct
        .checked_sub(deduction)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}

/// Display bonus for correct placements: `round(correct / total * 15)`.
pub fn habitat_match_bonus(tally: &PlacementTally) -> u32 {
    let bonus = scaled_ratio(
        tally.correct,
        tally.total.max(1),
        Decimal::from(DISPLAY_BONUS_CAP),
    );
    round_u32(bonus).min(DISPLAY_BONUS_CAP)
}

// ---------------------------------------------------------------------------
// Synergy
// ---------------------------------------------------------------------------

/// `active / min(defined, 4) * 100`, capped at 100. 0 when the catalog
/// defines no synergies.
pub fn synergy_score(active: usize, defined: usize) -> Decimal {
    clamp_score(percent(active, defined.min(SYNERGY_TARGET)))
}

/// Display bonus: 5 per active synergy, at most 15.
pub fn synergy_bonus(active: usize) -> u32 {
    capped_steps(active, SYNERGY_BONUS_STEP, DISPLAY_BONUS_CAP)
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

/// Connection coverage of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Component score.
    pub score: Decimal,
    /// Display bonus: 5 per connection, at most 15.
    pub bonus: u32,
    /// Number of connections.
    pub connections: usize,
    /// Habitats touching no connection, in placement order. Only filled
    /// when at least two habitats exist.
    pub disconnected: Vec<HabitatId>,
    /// Whether the board has two or more habitats, so coverage applies.
    pub applies: bool,
}

/// Measure connection coverage.
///
/// A lone habitat counts as fully connected; an empty board scores 0.
pub fn connection_report(snapshot: &BoardSnapshot) -> ConnectionReport {
    let habitats = &snapshot.habitats;
    let connections = snapshot.connections.len();
    let bonus = capped_steps(connections, CONNECTION_BONUS_STEP, DISPLAY_BONUS_CAP);

    match habitats.len() {
        0 => ConnectionReport {
            score: Decimal::ZERO,
            bonus,
            connections,
            disconnected: Vec::new(),
            applies: false,
        },
        1 => ConnectionReport {
            score: Decimal::ONE_HUNDRED,
            bonus,
            connections,
            disconnected: Vec::new(),
            applies: false,
        },
        total => {
            let disconnected: Vec<HabitatId> = habitats
                .iter()
                .filter(|h| !snapshot.connections.iter().any(|c| c.touches(h.id)))
                .map(|h| h.id)
                .collect();
            let connected = total.saturating_sub(disconnected.len());
            ConnectionReport {
                score: percent(connected, total),
                bonus,
                connections,
                disconnected,
                applies: true,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Which scenario requirements the board meets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsReport {
    /// Component score.
    pub score: Decimal,
    /// Critical agent types absent from the board, in scenario order.
    pub missing_agents: Vec<AgentType>,
    /// Required habitat types absent from the board, in scenario order.
    pub missing_habitats: Vec<HabitatType>,
}

/// Check critical agents and required habitat types.
///
/// With no requirements the score is 100.
pub fn requirements_report(snapshot: &BoardSnapshot, scenario: &Scenario) -> RequirementsReport {
    let missing_agents: Vec<AgentType> = scenario
        .critical_agents
        .iter()
        .copied()
        .filter(|t| !snapshot.has_agent_type(*t))
        .collect();
    let missing_habitats: Vec<HabitatType> = scenario
        .required_habitat_types
        .iter()
        .copied()
        .filter(|t| !snapshot.has_habitat_type(*t))
        .collect();

    let total = scenario
        .critical_agents
        .len()
        .saturating_add(scenario.required_habitat_types.len());
    let score = if total == 0 {
        Decimal::ONE_HUNDRED
    } else {
        let missing = missing_agents.len().saturating_add(missing_habitats.len());
        percent(total.saturating_sub(missing), total)
    };

    RequirementsReport {
        score,
        missing_agents,
        missing_habitats,
    }
}

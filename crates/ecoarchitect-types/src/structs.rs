//! Core structs for the EcoArchitect simulation.
//!
//! Three groups of types live here:
//!
//! - catalog definitions (immutable reference data),
//! - board instances (what the player has placed) and the [`BoardSnapshot`]
//!   handed to the scoring engine,
//! - computed or persisted results ([`ScoreBreakdown`], [`PlayerProgress`]).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AgentType, BestFit, BonusType, FeedbackKind, HabitatType, SatisfactionBand,
    StakeholderMetric, SynergyCategory,
};
use crate::ids::{AgentId, ConnectionId, HabitatId};

// ---------------------------------------------------------------------------
// Catalog definitions
// ---------------------------------------------------------------------------

/// Static definition of a habitat type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct HabitatDefinition {
    /// The catalog key.
    #[serde(rename = "type")]
    pub habitat_type: HabitatType,
    /// Display name used in feedback messages.
    pub name: String,
    /// Credits charged on placement.
    pub cost: u32,
    /// Agent capacity at level 1.
    pub capacity: u32,
    /// Human-readable bonus description.
    pub special_bonus: String,
    /// Bonus category, matched against stakeholder metrics.
    pub bonus_type: BonusType,
    /// Bonus magnitude (informational).
    pub bonus_value: u32,
}

/// Static definition of an agent type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AgentDefinition {
    /// The catalog key.
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Display name used in feedback messages.
    pub name: String,
    /// Efficiency rating, 0 to 100.
    pub efficiency: u32,
    /// Reliability rating, 0 to 100.
    pub reliability: u32,
    /// Credits charged on placement.
    pub cost: u32,
    /// Habitat the agent performs best in.
    #[serde(rename = "bestHabitat")]
    pub best_fit: BestFit,
}

/// A bonus unlocked when two agent types are both present on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Synergy {
    /// The unordered pair of agent types.
    pub agents: (AgentType, AgentType),
    /// Bonus category.
    pub bonus_type: SynergyCategory,
    /// Label shown to the player; stakeholder adjustments search it.
    pub bonus_label: String,
    /// Bonus magnitude (informational).
    pub bonus_value: u32,
}

impl Synergy {
    /// Whether both agent types of the pair appear in `present`.
    pub fn is_active_among(&self, present: &[AgentType]) -> bool {
        present.contains(&self.agents.0) && present.contains(&self.agents.1)
    }
}

/// A weighted scoring perspective within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Stakeholder {
    /// Identifier, unique within the scenario.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the group wants, in a few words.
    pub want: String,
    /// Metric used for score adjustments.
    pub primary_metric: StakeholderMetric,
    /// Score the group hopes for, 0 to 100.
    pub target_percent: u32,
    /// Relative weight in the overall score.
    #[ts(as = "String")]
    pub weight: Decimal,
}

/// A descriptive scenario requirement shown during planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Requirement {
    /// Short label.
    pub label: String,
    /// Longer description.
    pub description: String,
}

/// A habitat pre-placed when a scenario starts, with its agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct GivenHabitat {
    /// Habitat type to place.
    #[serde(rename = "type")]
    pub habitat_type: HabitatType,
    /// Agent types placed inside it.
    #[serde(default)]
    pub agents: Vec<AgentType>,
}

/// A course concept a scenario exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LectureReference {
    /// Architecture layer or habitat function.
    pub layer: String,
    /// How the scenario applies it.
    pub description: String,
}

/// Full configuration of one playable challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Scenario {
    /// Catalog identifier, e.g. `scenario-1`.
    pub id: String,
    /// Title.
    pub title: String,
    /// Subtitle.
    pub subtitle: String,
    /// Difficulty from 1 to 5.
    pub difficulty: u8,
    /// Countdown length in minutes.
    pub time_minutes: u32,
    /// Starting credits.
    pub credits: u32,
    /// One-line description.
    pub description: String,
    /// Planning briefing.
    pub briefing: String,
    /// Descriptive requirements.
    pub requirements: Vec<Requirement>,
    /// Weighted stakeholder groups.
    pub stakeholders: Vec<Stakeholder>,
    /// Planning hint.
    pub hint: String,
    /// Habitats placed for free when the scenario starts.
    #[serde(default)]
    pub given: Vec<GivenHabitat>,
    /// Learning objectives.
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    /// Concepts passed through to the breakdown.
    #[serde(default)]
    pub lecture_references: Vec<LectureReference>,
    /// Agent types that must be on the board.
    #[serde(default)]
    pub critical_agents: Vec<AgentType>,
    /// Habitat types that must be on the board.
    #[serde(default)]
    pub required_habitat_types: Vec<HabitatType>,
}

// ---------------------------------------------------------------------------
// Board instances
// ---------------------------------------------------------------------------

/// A board coordinate. Pure presentation data; scoring ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A habitat placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlacedHabitat {
    /// Instance id.
    pub id: HabitatId,
    /// Catalog key.
    #[serde(rename = "type")]
    pub habitat_type: HabitatType,
    /// Upgrade level, 1 to 3.
    pub level: u8,
    /// Ids of the agents housed here, in placement order.
    pub agents: Vec<AgentId>,
    /// Board coordinate.
    pub position: Position,
}

impl PlacedHabitat {
    /// Capacity including level bonuses: `base + (level - 1)`.
    pub fn effective_capacity(&self, base_capacity: u32) -> u32 {
        base_capacity.saturating_add(u32::from(self.level.saturating_sub(1)))
    }

    /// Number of agents currently housed.
    pub fn occupancy(&self) -> u32 {
        u32::try_from(self.agents.len()).unwrap_or(u32::MAX)
    }
}

/// An agent placed inside a habitat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlacedAgent {
    /// Instance id.
    pub id: AgentId,
    /// Catalog key.
    #[serde(rename = "type")]
    pub agent_type: AgentType,
    /// Owning habitat.
    pub habitat_id: HabitatId,
}

/// An undirected link between two distinct habitats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Connection {
    /// Instance id.
    pub id: ConnectionId,
    /// Habitat the connection was drawn from.
    pub from: HabitatId,
    /// Habitat the connection was drawn to.
    pub to: HabitatId,
}

impl Connection {
    /// Whether this connection has `habitat` as an endpoint.
    pub fn touches(&self, habitat: HabitatId) -> bool {
        self.from == habitat || self.to == habitat
    }

    /// Whether this connection links `a` and `b`, in either direction.
    pub fn joins(&self, a: HabitatId, b: HabitatId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Everything placed on the board at one instant.
///
/// This is the input the scoring engine reads. The board container owns one
/// and hands out shared references to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BoardSnapshot {
    /// Placed habitats, in placement order.
    pub habitats: Vec<PlacedHabitat>,
    /// Placed agents, in placement order.
    pub agents: Vec<PlacedAgent>,
    /// Connections, in creation order.
    pub connections: Vec<Connection>,
}

impl BoardSnapshot {
    /// Look up a placed habitat.
    pub fn habitat(&self, id: HabitatId) -> Option<&PlacedHabitat> {
        self.habitats.iter().find(|h| h.id == id)
    }

    /// Look up a placed agent.
    pub fn agent(&self, id: AgentId) -> Option<&PlacedAgent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// The agent types on the board, one entry per placed agent.
    pub fn agent_types(&self) -> Vec<AgentType> {
        self.agents.iter().map(|a| a.agent_type).collect()
    }

    /// Whether a habitat of `habitat_type` is on the board.
    ///
    /// Always false for [`HabitatType::Unknown`]: two unrecognised keys are
    /// not the same type.
    pub fn has_habitat_type(&self, habitat_type: HabitatType) -> bool {
        habitat_type.is_known() && self.habitats.iter().any(|h| h.habitat_type == habitat_type)
    }

    /// Whether an agent of `agent_type` is on the board.
    ///
    /// Always false for [`AgentType::Unknown`].
    pub fn has_agent_type(&self, agent_type: AgentType) -> bool {
        agent_type.is_known() && self.agents.iter().any(|a| a.agent_type == agent_type)
    }
}

// ---------------------------------------------------------------------------
// Score breakdown
// ---------------------------------------------------------------------------

/// One feedback line in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FeedbackEntry {
    /// Success or warning.
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    /// Player-facing message.
    pub message: String,
}

impl FeedbackEntry {
    /// A success entry.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    /// A warning entry.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            message: message.into(),
        }
    }
}

/// The five weighted component scores, each on a 0 to 100 scale, unrounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ComponentScores {
    /// Mean of pooled efficiency and reliability ratings.
    #[ts(as = "String")]
    pub agent_quality: Decimal,
    /// Placement match score, already floored at zero.
    #[ts(as = "String")]
    pub habitat_match: Decimal,
    /// Synergy score, already capped at 100.
    #[ts(as = "String")]
    pub synergy: Decimal,
    /// Share of habitats touching a connection.
    #[ts(as = "String")]
    pub connection: Decimal,
    /// Share of requirement slots fulfilled.
    #[ts(as = "String")]
    pub requirements: Decimal,
    /// Weighted sum before penalties.
    #[ts(as = "String")]
    pub weighted: Decimal,
    /// Rounded, clamped score after flat penalties; seeds stakeholder scores.
    pub seed: u32,
}

/// A stakeholder's adjusted score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct StakeholderScore {
    /// The stakeholder's id.
    pub id: String,
    /// Adjusted score, 0 to 100.
    pub score: u32,
    /// The stakeholder's target.
    pub target_percent: u32,
    /// Score relative to target.
    pub band: SatisfactionBand,
}

/// Detailed, explainable result of scoring a board against a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ScoreBreakdown {
    /// Rounded agent quality.
    pub base_score: u32,
    /// Display bonus for correct placements (0 to 15).
    pub habitat_match_bonus: u32,
    /// Display bonus for active synergies (0 to 15).
    pub synergy_bonus: u32,
    /// Display bonus for connections (0 to 15).
    pub connection_bonus: u32,
    /// Flat penalty for misplaced agents.
    pub wrong_habitat_penalty: u32,
    /// Flat penalty for habitats over capacity.
    pub over_capacity_penalty: u32,
    /// Flat penalty for missing critical agents and required habitats.
    pub missing_critical_penalty: u32,
    /// Flat penalty for habitats without a connection.
    pub disconnected_penalty: u32,
    /// The weighted components behind the score.
    pub components: ComponentScores,
    /// Per-stakeholder scores, in scenario order.
    pub stakeholder_scores: Vec<StakeholderScore>,
    /// Final score, 0 to 100.
    pub overall_score: u32,
    /// Whether the overall score reaches the pass mark.
    pub passed: bool,
    /// Star rating, 0 to 3.
    pub stars: u8,
    /// Ordered feedback.
    pub feedback: Vec<FeedbackEntry>,
    /// Scenario lecture references, passed through.
    pub concepts_applied: Vec<LectureReference>,
}

impl ScoreBreakdown {
    /// The score recorded for stakeholder `id`, if the scenario has one.
    pub fn stakeholder_score(&self, id: &str) -> Option<u32> {
        self.stakeholder_scores
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.score)
    }
}

// ---------------------------------------------------------------------------
// Player progress
// ---------------------------------------------------------------------------

/// Reputation a new player starts with.
pub const DEFAULT_REPUTATION: u32 = 50;

const fn default_reputation() -> u32 {
    DEFAULT_REPUTATION
}

/// Durable player progress. Stored verbatim by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerProgress {
    /// Reputation counter.
    #[serde(default = "default_reputation")]
    pub reputation: u32,
    /// Ids of passed scenarios, in completion order.
    #[serde(default)]
    pub completed_scenarios: Vec<String>,
    /// Best overall score per scenario id.
    #[serde(default)]
    pub best_scores: BTreeMap<String, u32>,
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self {
            reputation: DEFAULT_REPUTATION,
            completed_scenarios: Vec::new(),
            best_scores: BTreeMap::new(),
        }
    }
}

impl PlayerProgress {
    /// Whether `scenario_id` has been passed before.
    pub fn has_completed(&self, scenario_id: &str) -> bool {
        self.completed_scenarios.iter().any(|s| s == scenario_id)
    }

    /// Best recorded score for `scenario_id`, 0 if none.
    pub fn best_score(&self, scenario_id: &str) -> u32 {
        self.best_scores.get(scenario_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn habitat(level: u8, agents: usize) -> PlacedHabitat {
        PlacedHabitat {
            id: HabitatId::new(),
            habitat_type: HabitatType::Data,
            level,
            agents: (0..agents).map(|_| AgentId::new()).collect(),
            position: Position::default(),
        }
    }

    #[test]
    fn effective_capacity_grows_one_per_level() {
        assert_eq!(habitat(1, 0).effective_capacity(3), 3);
        assert_eq!(habitat(2, 0).effective_capacity(3), 4);
        assert_eq!(habitat(3, 0).effective_capacity(3), 5);
    }

    #[test]
    fn malformed_level_zero_does_not_underflow() {
        assert_eq!(habitat(0, 0).effective_capacity(3), 3);
    }

    #[test]
    fn connection_join_is_direction_independent() {
        let a = HabitatId::new();
        let b = HabitatId::new();
        let c = Connection {
            id: ConnectionId::new(),
            from: a,
            to: b,
        };
        assert!(c.joins(a, b));
        assert!(c.joins(b, a));
        assert!(c.touches(a));
        assert!(!c.touches(HabitatId::new()));
    }

    #[test]
    fn legacy_progress_with_extra_keys_parses() {
        let json = r#"{
            "reputation": 60,
            "completedScenarios": ["scenario-1"],
            "achievements": [],
            "totalCreditsEarned": 0,
            "bestScores": {"scenario-1": 84}
        }"#;
        let progress: PlayerProgress = serde_json::from_str(json).unwrap();
        assert_eq!(progress.reputation, 60);
        assert!(progress.has_completed("scenario-1"));
        assert_eq!(progress.best_score("scenario-1"), 84);
        assert_eq!(progress.best_score("scenario-2"), 0);
    }

    #[test]
    fn empty_progress_object_uses_defaults() {
        let progress: PlayerProgress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress, PlayerProgress::default());
    }

    #[test]
    fn synergy_activation_ignores_duplicates() {
        let synergy = Synergy {
            agents: (AgentType::PaymentGateway, AgentType::CurrencyConverter),
            bonus_type: SynergyCategory::Speed,
            bonus_label: "Payment + Currency = +15% Speed".to_owned(),
            bonus_value: 15,
        };
        let present = [
            AgentType::PaymentGateway,
            AgentType::PaymentGateway,
            AgentType::CurrencyConverter,
        ];
        assert!(synergy.is_active_among(&present));
        assert!(!synergy.is_active_among(&[AgentType::PaymentGateway]));
    }
}

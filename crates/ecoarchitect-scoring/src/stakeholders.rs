//! Per-stakeholder adjustment, overall score and rating.
//!
//! Every stakeholder starts from the same seed (the clamped, penalised
//! weighted score) and gets small additive adjustments keyed by its primary
//! metric. The overall score is the weight-averaged stakeholder scores.

use rust_decimal::Decimal;

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{
    AgentType, BoardSnapshot, HabitatType, SatisfactionBand, Stakeholder, StakeholderMetric,
};

use crate::components::PlacementTally;
use crate::math::{clamp_score, round_u32};
use crate::weights::{PASS_THRESHOLD, THREE_STAR_THRESHOLD, TWO_STAR_THRESHOLD};

/// Points per habitat whose bonus category is the stakeholder's metric.
const HABITAT_BONUS_POINTS: i64 = 2;

/// Margin above target for [`SatisfactionBand::Exceeded`].
const EXCEEDED_MARGIN: u32 = 10;

/// Everything the adjustments read, computed once per board.
#[derive(Debug, Clone, Copy)]
pub struct StakeholderContext<'a> {
    /// Reference data.
    pub catalog: &'a Catalog,
    /// The scored board.
    pub snapshot: &'a BoardSnapshot,
    /// The scenario's starting credits.
    pub budget: u32,
    /// Labels of active synergies.
    pub active_synergies: &'a [String],
    /// Placement classification.
    pub tally: PlacementTally,
}

impl StakeholderContext<'_> {
    fn synergy_label_contains(&self, needle: &str) -> bool {
        self.active_synergies.iter().any(|l| l.contains(needle))
    }
}

/// Catalog cost of every placed agent and habitat.
///
/// Types missing from the catalog cost nothing.
pub fn total_spend(catalog: &Catalog, snapshot: &BoardSnapshot) -> u64 {
    let agents = snapshot
        .agents
        .iter()
        .filter_map(|a| catalog.agent(a.agent_type))
        .fold(0_u64, |sum, d| sum.saturating_add(u64::from(d.cost)));
    let habitats = snapshot
        .habitats
        .iter()
        .filter_map(|h| catalog.habitat(h.habitat_type))
        .fold(0_u64, |sum, d| sum.saturating_add(u64::from(d.cost)));
    agents.saturating_add(habitats)
}

/// +5 below 70% of budget, -3 above 95%, otherwise 0.
///
/// Compared in whole numbers, so a zero budget makes any spend over budget
/// and no spend neutral.
pub fn budget_adjustment(spend: u64, budget: u32) -> i64 {
    let spent = spend.saturating_mul(100);
    let budget = u64::from(budget);
    if spent < budget.saturating_mul(70) {
        5
    } else if spent > budget.saturating_mul(95) {
        -3
    } else {
        0
    }
}

/// `value` when `condition` holds, else 0.
const fn points(condition: bool, value: i64) -> i64 {
    if condition { value } else { 0 }
}

/// Adjustment from the stakeholder's primary metric.
pub fn metric_adjustment(metric: StakeholderMetric, ctx: &StakeholderContext<'_>) -> i64 {
    let board = ctx.snapshot;
    match metric {
        StakeholderMetric::Speed => points(ctx.synergy_label_contains("Speed"), 5),
        StakeholderMetric::Trust => {
            let security =
                ctx.synergy_label_contains("Trust") || ctx.synergy_label_contains("Security");
            points(board.has_habitat_type(HabitatType::Trust), 5)
                .saturating_add(points(security, 3))
        }
        StakeholderMetric::Cost => budget_adjustment(total_spend(ctx.catalog, board), ctx.budget),
        StakeholderMetric::Efficiency => points(ctx.tally.all_correct(), 5)
            .saturating_add(points(ctx.synergy_label_contains("Efficiency"), 3)),
        StakeholderMetric::UserSatisfaction => {
            points(board.has_habitat_type(HabitatType::Marketplace), 4)
                .saturating_add(points(board.has_agent_type(AgentType::ReviewSystem), 2))
                .saturating_add(points(board.has_agent_type(AgentType::RecommendationAi), 2))
        }
        StakeholderMetric::Value => points(board.connections.len() >= 2, 3)
            .saturating_add(points(ctx.active_synergies.len() >= 2, 3)),
    }
}

/// +2 for every placed habitat whose bonus category is `metric`.
pub fn habitat_bonus(metric: StakeholderMetric, ctx: &StakeholderContext<'_>) -> i64 {
    ctx.snapshot
        .habitats
        .iter()
        .filter_map(|h| ctx.catalog.habitat(h.habitat_type))
        .filter(|d| d.bonus_type.matches(metric))
        .fold(0_i64, |sum, _| sum.saturating_add(HABITAT_BONUS_POINTS))
}

/// Seed plus adjustments, clamped to `[0, 100]`.
pub fn stakeholder_score(seed: u32, stakeholder: &Stakeholder, ctx: &StakeholderContext<'_>) -> u32 {
    let metric = stakeholder.primary_metric;
    let adjusted = i64::from(seed)
        .saturating_add(metric_adjustment(metric, ctx))
        .saturating_add(habitat_bonus(metric, ctx))
        .clamp(0, 100);
    u32::try_from(adjusted).unwrap_or(0)
}

/// Where `score` sits relative to `target`.
pub fn satisfaction_band(score: u32, target: u32) -> SatisfactionBand {
    if score >= target.saturating_add(EXCEEDED_MARGIN) {
        SatisfactionBand::Exceeded
    } else if score >= target {
        SatisfactionBand::Met
    } else if u64::from(score).saturating_mul(5) >= u64::from(target).saturating_mul(4) {
        SatisfactionBand::Close
    } else {
        SatisfactionBand::Unmet
    }
}

/// `round(clamp(sum(score * weight), 0, 100))`.
///
/// Weights are relative and need not sum to 1.
pub fn overall_score<'a>(scores: impl IntoIterator<Item = (u32, &'a Decimal)>) -> u32 {
    let total = scores
        .into_iter()
        .fold(Decimal::ZERO, |sum, (score, weight)| {
            sum.saturating_add(Decimal::from(score).saturating_mul(*weight))
        });
    round_u32(clamp_score(total))
}

/// Whether an overall score passes.
pub const fn passed(overall: u32) -> bool {
    overall >= PASS_THRESHOLD
}

/// Star rating for an overall score.
pub const fn stars(overall: u32) -> u8 {
    if overall >= THREE_STAR_THRESHOLD {
        3
    } else if overall >= TWO_STAR_THRESHOLD {
        2
    } else if overall >= PASS_THRESHOLD {
        1
    } else {
        0
    }
}

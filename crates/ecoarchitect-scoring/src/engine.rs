//! Score calculation entry point.

use rust_decimal::Decimal;

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{BoardSnapshot, ComponentScores, Scenario, ScoreBreakdown, StakeholderScore};

use crate::components::{
    agent_quality, connection_report, habitat_match_bonus, habitat_match_score, placement_tally,
    requirements_report, synergy_bonus, synergy_score,
};
use crate::feedback::FeedbackLog;
use crate::fit::active_synergy_labels;
use crate::math::{clamp_score, round_u32, settle};
use crate::penalties::{
    Penalties, disconnected_penalty, missing_critical_penalty, over_capacity,
    over_capacity_penalty, wrong_placement_penalty,
};
use crate::stakeholders::{
    StakeholderContext, overall_score, passed, satisfaction_band, stakeholder_score, stars,
};
use crate::weights::{
    AGENT_QUALITY_WEIGHT, CONNECTION_WEIGHT, HABITAT_MATCH_WEIGHT, REQUIREMENTS_WEIGHT,
    SYNERGY_WEIGHT,
};

/// Sum of `weight * component`.
fn weighted_sum(parts: &[(Decimal, Decimal)]) -> Decimal {
    parts.iter().fold(Decimal::ZERO, |sum, (weight, value)| {
        sum.saturating_add(weight.saturating_mul(*value))
    })
}

/// Score a board against a scenario.
///
/// Pure and deterministic: the same inputs always give the same breakdown,
/// so this serves both live previews and final submissions. Unknown catalog
/// keys contribute nothing instead of failing.
pub fn calculate_score(
    catalog: &Catalog,
    snapshot: &BoardSnapshot,
    scenario: &Scenario,
) -> ScoreBreakdown {
    let mut feedback = FeedbackLog::new();

    // 1. Agent quality
    let quality = agent_quality(catalog, snapshot);

    // 2. Habitat match
    let tally = placement_tally(catalog, snapshot);
    let match_score = habitat_match_score(&tally);
    let match_bonus = habitat_match_bonus(&tally);
    let wrong_placement = wrong_placement_penalty(&tally);
    feedback.placement(&tally, wrong_placement, match_bonus);

    // 3. Synergy
    let present = snapshot.agent_types();
    let active = active_synergy_labels(catalog, &present);
    let synergy = synergy_score(active.len(), catalog.synergies().len());
    feedback.synergies(&active);

    // 4. Connections
    let connections = connection_report(snapshot);
    let disconnected = disconnected_penalty(&connections);
    feedback.connections(catalog, snapshot, &connections, disconnected);

    // 5. Requirements
    let requirements = requirements_report(snapshot, scenario);
    let missing_critical = missing_critical_penalty(&requirements);
    feedback.requirements(
        catalog,
        &requirements.missing_agents,
        &requirements.missing_habitats,
    );

    let over = over_capacity(catalog, snapshot);
    feedback.over_capacity(catalog, &over);

    let penalties = Penalties {
        wrong_placement,
        over_capacity: over_capacity_penalty(&over),
        disconnected,
        missing_critical,
    };

    let weighted = settle(weighted_sum(&[
        (AGENT_QUALITY_WEIGHT, quality),
        (HABITAT_MATCH_WEIGHT, match_score),
        (SYNERGY_WEIGHT, synergy),
        (CONNECTION_WEIGHT, connections.score),
        (REQUIREMENTS_WEIGHT, requirements.score),
    ]));
    let seed = round_u32(clamp_score(
        weighted.saturating_sub(Decimal::from(penalties.total())),
    ));

    let ctx = StakeholderContext {
        catalog,
        snapshot,
        budget: scenario.credits,
        active_synergies: &active,
        tally,
    };
    let stakeholder_scores: Vec<StakeholderScore> = scenario
        .stakeholders
        .iter()
        .map(|s| {
            let score = stakeholder_score(seed, s, &ctx);
            StakeholderScore {
                id: s.id.clone(),
                score,
                target_percent: s.target_percent,
                band: satisfaction_band(score, s.target_percent),
            }
        })
        .collect();

    let overall = overall_score(
        stakeholder_scores
            .iter()
            .zip(scenario.stakeholders.iter())
            .map(|(scored, s)| (scored.score, &s.weight)),
    );
    let pass = passed(overall);
    if pass {
        feedback.announce_pass(overall);
    }

    ScoreBreakdown {
        base_score: round_u32(quality),
        habitat_match_bonus: match_bonus,
        synergy_bonus: synergy_bonus(active.len()),
        connection_bonus: connections.bonus,
        wrong_habitat_penalty: penalties.wrong_placement,
        over_capacity_penalty: penalties.over_capacity,
        missing_critical_penalty: penalties.missing_critical,
        disconnected_penalty: penalties.disconnected,
        components: ComponentScores {
            agent_quality: quality,
            habitat_match: match_score,
            synergy,
            connection: connections.score,
            requirements: requirements.score,
            weighted,
            seed,
        },
        stakeholder_scores,
        overall_score: overall,
        passed: pass,
        stars: stars(overall),
        feedback: feedback.into_entries(),
        concepts_applied: scenario.lecture_references.clone(),
    }
}

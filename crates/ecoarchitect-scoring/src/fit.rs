//! Agent-to-habitat fit and ecosystem-wide synergies.

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{AgentFit, AgentType, HabitatType, Synergy};

/// How well `agent_type` suits a habitat of `habitat_type`.
///
/// Wildcard agents suit every habitat. Agent types missing from the
/// catalog are [`AgentFit::Neutral`].
pub fn agent_fit(catalog: &Catalog, agent_type: AgentType, habitat_type: HabitatType) -> AgentFit {
    match catalog.agent(agent_type) {
        None => AgentFit::Neutral,
        Some(def) if def.best_fit.accepts(habitat_type) => AgentFit::Good,
        Some(_) => AgentFit::Poor,
    }
}

/// Synergies whose two agent types are both present, in catalog order.
///
/// Where the agents sit and how many copies exist do not matter.
pub fn active_synergies<'a>(catalog: &'a Catalog, present: &[AgentType]) -> Vec<&'a Synergy> {
    catalog
        .synergies()
        .iter()
        .filter(|s| s.is_active_among(present))
        .collect()
}

/// Labels of [`active_synergies`].
pub fn active_synergy_labels(catalog: &Catalog, present: &[AgentType]) -> Vec<String> {
    active_synergies(catalog, present)
        .into_iter()
        .map(|s| s.bonus_label.clone())
        .collect()
}

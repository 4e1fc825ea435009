//! Reference catalogs for the EcoArchitect simulation.
//!
//! A [`Catalog`] bundles the immutable reference data every other crate
//! reads: habitat and agent definitions keyed by type, the synergy list,
//! the ordered scenario list and the board's price table. It is built once
//! (either [`Catalog::standard`] or [`Catalog::from_json`]) and shared
//! read-only for the life of the process.
//!
//! # Modules
//!
//! - [`agents`] -- Standard agent definitions.
//! - [`error`] -- Error types for catalog loading.
//! - [`habitats`] -- Standard habitat definitions.
//! - [`pricing`] -- Upgrade, connection and refund prices.
//! - [`scenarios`] -- Standard scenario list.
//! - [`synergies`] -- Standard synergy pairs.

pub mod agents;
pub mod error;
pub mod habitats;
pub mod pricing;
pub mod scenarios;
pub mod synergies;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use ecoarchitect_types::{
    AgentDefinition, AgentType, HabitatDefinition, HabitatType, PlayerProgress, Scenario, Synergy,
};

pub use error::CatalogError;
pub use pricing::{
    CONNECTION_COST, LEVEL_THREE_UPGRADE_COST, LEVEL_TWO_UPGRADE_COST, MAX_LEVEL, Pricing,
    REFUND_PERCENT,
};

/// Shape of an authored catalog document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    habitats: Vec<HabitatDefinition>,
    agents: Vec<AgentDefinition>,
    #[serde(default)]
    synergies: Vec<Synergy>,
    #[serde(default)]
    scenarios: Vec<Scenario>,
    #[serde(default)]
    pricing: Pricing,
}

/// Immutable reference data for one running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    habitats: BTreeMap<HabitatType, HabitatDefinition>,
    agents: BTreeMap<AgentType, AgentDefinition>,
    synergies: Vec<Synergy>,
    scenarios: Vec<Scenario>,
    pricing: Pricing,
}

impl Catalog {
    /// The catalog shipped with the game.
    pub fn standard() -> Self {
        Self {
            habitats: HabitatType::ALL
                .into_iter()
                .filter_map(|t| habitats::standard_habitat(t).map(|d| (t, d)))
                .collect(),
            agents: AgentType::ALL
                .into_iter()
                .filter_map(|t| agents::standard_agent(t).map(|d| (t, d)))
                .collect(),
            synergies: synergies::standard_synergies(),
            scenarios: scenarios::standard_scenarios(),
            pricing: Pricing::default(),
        }
    }

    /// Parse and validate an authored catalog.
    ///
    /// Types missing from the document are simply absent; the scoring engine
    /// treats them as unknown and skips their contribution. Definitions and
    /// synergies keyed by a type this build does not recognise are dropped
    /// with a warning, so [`Catalog::agent`] and [`Catalog::habitat`] never
    /// resolve an unknown key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed documents and a
    /// validation variant for duplicate keys or self-paired synergies.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        let mut habitats = BTreeMap::new();
        for def in doc.habitats {
            let key = def.habitat_type;
            if !key.is_known() {
                warn!(name = %def.name, "Habitat definition with unrecognised type dropped");
                continue;
            }
            if habitats.insert(key, def).is_some() {
                return Err(CatalogError::DuplicateHabitat(key));
            }
        }

        let mut agents = BTreeMap::new();
        for def in doc.agents {
            let key = def.agent_type;
            if !key.is_known() {
                warn!(name = %def.name, "Agent definition with unrecognised type dropped");
                continue;
            }
            if agents.insert(key, def).is_some() {
                return Err(CatalogError::DuplicateAgent(key));
            }
        }

        let mut synergies = doc.synergies;
        synergies.retain(|s| {
            let known = s.agents.0.is_known() && s.agents.1.is_known();
            if !known {
                warn!(label = %s.bonus_label, "Synergy with unrecognised agent type dropped");
            }
            known
        });
        if let Some(bad) = synergies.iter().find(|s| s.agents.0 == s.agents.1) {
            return Err(CatalogError::SelfSynergy(bad.agents.0));
        }

        for (i, scenario) in doc.scenarios.iter().enumerate() {
            let seen_before = doc
                .scenarios
                .iter()
                .take(i)
                .any(|earlier| earlier.id == scenario.id);
            if seen_before {
                return Err(CatalogError::DuplicateScenario(scenario.id.clone()));
            }
        }

        info!(
            habitats = habitats.len(),
            agents = agents.len(),
            synergies = synergies.len(),
            scenarios = doc.scenarios.len(),
            "catalog loaded"
        );

        Ok(Self {
            habitats,
            agents,
            synergies,
            scenarios: doc.scenarios,
            pricing: doc.pricing,
        })
    }

    /// Read and validate an authored catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// whatever [`Catalog::from_json`] returns.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Definition for a habitat type, if the catalog has one.
    pub fn habitat(&self, habitat_type: HabitatType) -> Option<&HabitatDefinition> {
        self.habitats.get(&habitat_type)
    }

    /// Definition for an agent type, if the catalog has one.
    pub fn agent(&self, agent_type: AgentType) -> Option<&AgentDefinition> {
        self.agents.get(&agent_type)
    }

    /// Every habitat definition, ordered by type.
    pub fn habitats(&self) -> impl Iterator<Item = &HabitatDefinition> {
        self.habitats.values()
    }

    /// Every agent definition, ordered by type.
    pub fn agents(&self) -> impl Iterator<Item = &AgentDefinition> {
        self.agents.values()
    }

    /// Synergy pairs in catalog order.
    pub fn synergies(&self) -> &[Synergy] {
        &self.synergies
    }

    /// Scenarios in unlock order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Look up a scenario by id.
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Position of a scenario in unlock order.
    pub fn scenario_index(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }

    /// The scenario that follows `id`, if any.
    pub fn next_scenario(&self, id: &str) -> Option<&Scenario> {
        let index = self.scenario_index(id)?;
        self.scenarios.get(index.checked_add(1)?)
    }

    /// Whether the player may start scenario `id`.
    ///
    /// The first scenario is always open; any later one opens once its
    /// predecessor has been completed. Unknown ids are never unlocked.
    pub fn is_unlocked(&self, id: &str, progress: &PlayerProgress) -> bool {
        match self.scenario_index(id) {
            None => false,
            Some(0) => true,
            Some(index) => index
                .checked_sub(1)
                .and_then(|prev| self.scenarios.get(prev))
                .is_some_and(|prev| progress.has_completed(&prev.id)),
        }
    }

    /// Board prices.
    pub const fn pricing(&self) -> &Pricing {
        &self.pricing
    }
}

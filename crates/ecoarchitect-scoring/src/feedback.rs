//! Player-facing feedback messages.
//!
//! Entries are appended in the order the engine evaluates the board and are
//! never re-sorted; only the pass announcement is put in front.

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{AgentType, BoardSnapshot, FeedbackEntry, HabitatType};

use crate::components::{ConnectionReport, PlacementTally};
use crate::penalties::OverCapacity;

/// Accumulates feedback for one score calculation.
#[derive(Debug, Default)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
}

fn habitat_name(catalog: &Catalog, habitat_type: HabitatType) -> String {
    catalog
        .habitat(habitat_type)
        .map_or_else(|| habitat_type.as_str().to_owned(), |d| d.name.clone())
}

fn agent_name(catalog: &Catalog, agent_type: AgentType) -> String {
    catalog
        .agent(agent_type)
        .map_or_else(|| agent_type.as_str().to_owned(), |d| d.name.clone())
}

impl FeedbackLog {
    /// An empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wrong-placement warning, or the all-correct success.
    pub fn placement(&mut self, tally: &PlacementTally, penalty: u32, bonus: u32) {
        if tally.wrong > 0 {
            self.entries.push(FeedbackEntry::warning(format!(
                "{} agent(s) in wrong habitat (-{penalty}%)",
                tally.wrong
            )));
        } else if tally.correct > 0 {
            self.entries.push(FeedbackEntry::success(format!(
                "All agents in correct habitats (+{bonus}%)"
            )));
        }
    }

    /// One success per active synergy label.
    pub fn synergies(&mut self, labels: &[String]) {
        self.entries
            .extend(labels.iter().map(|l| FeedbackEntry::success(l.clone())));
    }

    /// Coverage result (only when two or more habitats exist) and the
    /// connection count milestone.
    pub fn connections(
        &mut self,
        catalog: &Catalog,
        snapshot: &BoardSnapshot,
        report: &ConnectionReport,
        penalty: u32,
    ) {
        let bonus = report.bonus;
        if report.applies {
            if report.disconnected.is_empty() {
                self.entries.push(FeedbackEntry::success(format!(
                    "All habitats connected! (+{bonus}%)"
                )));
            } else {
                let names: Vec<String> = report
                    .disconnected
                    .iter()
                    .filter_map(|id| snapshot.habitat(*id))
                    .map(|h| habitat_name(catalog, h.habitat_type))
                    .collect();
                self.entries.push(FeedbackEntry::warning(format!(
                    "Not connected: {} (-{penalty}%)",
                    names.join(", ")
                )));
            }
        }
        let count = report.connections;
        if count > 0 {
            self.entries.push(FeedbackEntry::success(format!(
                "{count} connection(s) active (+{bonus}%)"
            )));
        }
    }

    /// One warning per missing critical agent, then per missing habitat.
    pub fn requirements(
        &mut self,
        catalog: &Catalog,
        missing_agents: &[AgentType],
        missing_habitats: &[HabitatType],
    ) {
        for agent in missing_agents {
            self.entries.push(FeedbackEntry::warning(format!(
                "Missing critical agent: {}",
                agent_name(catalog, *agent)
            )));
        }
        for habitat in missing_habitats {
            self.entries.push(FeedbackEntry::warning(format!(
                "Missing required habitat: {}",
                habitat_name(catalog, *habitat)
            )));
        }
    }

    /// One warning per over-full habitat.
    pub fn over_capacity(&mut self, catalog: &Catalog, over: &[OverCapacity]) {
        for o in over {
            self.entries.push(FeedbackEntry::warning(format!(
                "{} is over capacity! ({}/{})",
                habitat_name(catalog, o.habitat_type),
                o.occupancy,
                o.capacity
            )));
        }
    }

    /// Put the pass announcement first.
    pub fn announce_pass(&mut self, overall: u32) {
        self.entries.insert(
            0,
            FeedbackEntry::success(format!("Ecosystem passed with {overall}% overall score!")),
        );
    }

    /// The accumulated entries.
    pub fn into_entries(self) -> Vec<FeedbackEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use ecoarchitect_types::FeedbackKind;

    use super::*;

    #[test]
    fn pass_announcement_goes_first() {
        let mut log = FeedbackLog::new();
        log.synergies(&["Delivery + API = +10% Logistics".to_owned()]);
        log.announce_pass(84);
        let entries = log.into_entries();
        assert_eq!(
            entries.first().map(|e| e.message.as_str()),
            Some("Ecosystem passed with 84% overall score!")
        );
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn wrong_placement_wording() {
        let mut log = FeedbackLog::new();
        let tally = PlacementTally {
            correct: 1,
            wrong: 2,
            total: 3,
        };
        log.placement(&tally, 10, 5);
        let entries = log.into_entries();
        assert_eq!(
            entries,
            vec![FeedbackEntry::warning("2 agent(s) in wrong habitat (-10%)")]
        );
        assert!(entries.iter().all(|e| e.kind == FeedbackKind::Warning));
    }

    #[test]
    fn empty_board_has_no_placement_feedback() {
        let mut log = FeedbackLog::new();
        log.placement(&PlacementTally::default(), 0, 0);
        assert!(log.into_entries().is_empty());
    }

    #[test]
    fn requirement_names_come_from_catalog() {
        let catalog = Catalog::standard();
        let mut log = FeedbackLog::new();
        log.requirements(
            &catalog,
            &[AgentType::KycVerification],
            &[HabitatType::Innovation],
        );
        let messages: Vec<String> = log.into_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec![
                "Missing critical agent: KYC Verification".to_owned(),
                "Missing required habitat: Innovation".to_owned(),
            ]
        );
    }
}

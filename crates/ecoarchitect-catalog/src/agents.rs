//! Standard agent definitions.
//!
//! Ratings are whole numbers from 0 to 100; costs are whole credits.

use ecoarchitect_types::{AgentDefinition, AgentType, BestFit};

/// Build one definition from its table row.
fn row(
    agent_type: AgentType,
    name: &str,
    efficiency: u32,
    reliability: u32,
    cost: u32,
    best_fit: BestFit,
) -> AgentDefinition {
    AgentDefinition {
        agent_type,
        name: name.to_owned(),
        efficiency,
        reliability,
        cost,
        best_fit,
    }
}

/// Return the standard definition for an [`AgentType`].
///
/// [`AgentType::Unknown`] has none.
pub fn standard_agent(agent_type: AgentType) -> Option<AgentDefinition> {
    let def = match agent_type {
        AgentType::PaymentGateway => row(agent_type, "Payment Gateway", 85, 90, 25, BestFit::Payment),
        AgentType::CurrencyConverter => {
            row(agent_type, "Currency Converter", 75, 80, 20, BestFit::Payment)
        }
        AgentType::UserAuth => row(agent_type, "User Auth", 90, 95, 15, BestFit::Trust),
        AgentType::FraudDetection => row(agent_type, "Fraud Detection", 70, 85, 30, BestFit::Trust),
        AgentType::RecommendationAi => {
            row(agent_type, "Recommendation AI", 80, 75, 25, BestFit::Data)
        }
        AgentType::AnalyticsEngine => row(agent_type, "Analytics Engine", 85, 80, 20, BestFit::Data),
        AgentType::ReviewSystem => {
            row(agent_type, "Review System", 75, 85, 15, BestFit::Marketplace)
        }
        AgentType::DeliveryTracker => {
            row(agent_type, "Delivery Tracker", 80, 90, 20, BestFit::Marketplace)
        }
        AgentType::PrototypeLab => {
            row(agent_type, "Prototype Lab", 70, 70, 35, BestFit::Innovation)
        }
        AgentType::AbTesting => row(agent_type, "A/B Testing", 75, 75, 25, BestFit::Innovation),
        AgentType::KycVerification => {
            row(agent_type, "KYC Verification", 85, 90, 30, BestFit::Trust)
        }
        AgentType::ApiConnector => row(agent_type, "API Connector", 80, 85, 20, BestFit::Any),
        AgentType::Unknown => return None,
    };
    Some(def)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ratings_stay_in_range() {
        for agent in AgentType::ALL {
            let def = standard_agent(agent).unwrap();
            assert_eq!(def.agent_type, agent);
            assert!(def.efficiency <= 100 && def.reliability <= 100);
        }
        assert!(standard_agent(AgentType::Unknown).is_none());
    }

    #[test]
    fn api_connector_is_the_only_wildcard() {
        let wildcards: Vec<AgentType> = AgentType::ALL
            .into_iter()
            .filter(|a| standard_agent(*a).is_some_and(|d| d.best_fit == BestFit::Any))
            .collect();
        assert_eq!(wildcards, vec![AgentType::ApiConnector]);
    }
}

//! Standard synergy pairs, in catalog order.
//!
//! Catalog order matters: active synergies are reported in this order.

use ecoarchitect_types::{AgentType, Synergy, SynergyCategory};

fn pair(
    first: AgentType,
    second: AgentType,
    bonus_type: SynergyCategory,
    label: &str,
    bonus_value: u32,
) -> Synergy {
    Synergy {
        agents: (first, second),
        bonus_type,
        bonus_label: label.to_owned(),
        bonus_value,
    }
}

/// The standard synergy list.
pub fn standard_synergies() -> Vec<Synergy> {
    vec![
        pair(
            AgentType::PaymentGateway,
            AgentType::CurrencyConverter,
            SynergyCategory::Speed,
            "Payment + Currency = +15% Speed",
            15,
        ),
        pair(
            AgentType::FraudDetection,
            AgentType::KycVerification,
            SynergyCategory::Trust,
            "Fraud Detection + KYC = +20% Trust",
            20,
        ),
        pair(
            AgentType::AnalyticsEngine,
            AgentType::RecommendationAi,
            SynergyCategory::Efficiency,
            "Analytics + Recommendation AI = +10% Efficiency",
            10,
        ),
        pair(
            AgentType::UserAuth,
            AgentType::FraudDetection,
            SynergyCategory::Trust,
            "User Auth + Fraud Detection = +12% Security",
            12,
        ),
        pair(
            AgentType::ReviewSystem,
            AgentType::RecommendationAi,
            SynergyCategory::UserSatisfaction,
            "Reviews + AI = +10% User Satisfaction",
            10,
        ),
        pair(
            AgentType::PrototypeLab,
            AgentType::AbTesting,
            SynergyCategory::Evolution,
            "Prototype + A/B Testing = +15% Innovation",
            15,
        ),
        pair(
            AgentType::DeliveryTracker,
            AgentType::ApiConnector,
            SynergyCategory::Efficiency,
            "Delivery + API = +10% Logistics",
            10,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_distinct_pairs() {
        let synergies = standard_synergies();
        assert_eq!(synergies.len(), 7);
        assert!(synergies.iter().all(|s| s.agents.0 != s.agents.1));
    }
}

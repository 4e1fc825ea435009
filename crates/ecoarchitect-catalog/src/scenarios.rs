//! Standard scenario list, easiest first.
//!
//! Scenario order defines unlock order: each scenario unlocks once the
//! previous one has been passed.

use rust_decimal::Decimal;

use ecoarchitect_types::{
    AgentType, GivenHabitat, HabitatType, LectureReference, Requirement, Scenario, Stakeholder,
    StakeholderMetric,
};

fn stakeholder(
    id: &str,
    name: &str,
    want: &str,
    primary_metric: StakeholderMetric,
    target_percent: u32,
    weight_pct: i64,
) -> Stakeholder {
    Stakeholder {
        id: id.to_owned(),
        name: name.to_owned(),
        want: want.to_owned(),
        primary_metric,
        target_percent,
        weight: Decimal::new(weight_pct, 2),
    }
}

fn requirement(label: &str, description: &str) -> Requirement {
    Requirement {
        label: label.to_owned(),
        description: description.to_owned(),
    }
}

fn lecture(layer: &str, description: &str) -> LectureReference {
    LectureReference {
        layer: layer.to_owned(),
        description: description.to_owned(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The standard scenario list.
#[allow(clippy::too_many_lines)] // One literal per scenario; splitting would scatter the table.
pub fn standard_scenarios() -> Vec<Scenario> {
    use StakeholderMetric::{Cost, Efficiency, Speed, Trust, UserSatisfaction, Value};

    vec![
        Scenario {
            id: "scenario-1".to_owned(),
            title: "Digital Food Court".to_owned(),
            subtitle: "Tutorial".to_owned(),
            difficulty: 1,
            time_minutes: 10,
            credits: 100,
            description: "Learn the basics of ecosystem design by building a simple digital food court.".to_owned(),
            briefing: "A local food court wants to go digital. They need an online ordering system where customers can browse menus, place orders, and pay. Start with the provided Marketplace habitat and add a Payment system.".to_owned(),
            requirements: vec![
                requirement("Ordering", "Customers can browse and order food"),
                requirement("Payment", "Accept digital payments"),
                requirement("Reviews", "Customers can rate their experience"),
            ],
            stakeholders: vec![
                stakeholder("customers", "Customers", "Easy ordering", UserSatisfaction, 70, 40),
                stakeholder("vendors", "Food Vendors", "More orders", Efficiency, 65, 35),
                stakeholder("management", "Management", "Profit", Value, 60, 25),
            ],
            hint: "Start with the given Marketplace, then add a Payment habitat and connect them. Place agents that match each habitat.".to_owned(),
            given: vec![GivenHabitat {
                habitat_type: HabitatType::Marketplace,
                agents: vec![AgentType::ReviewSystem, AgentType::DeliveryTracker],
            }],
            learning_objectives: strings(&[
                "Understand what habitats are",
                "Learn to place agents in matching habitats",
                "Create connections between habitats",
            ]),
            lecture_references: vec![
                lecture("Layer 4 (Platform)", "Digital ordering platform"),
                lecture("CONNECT Function", "Linking marketplace to payment"),
            ],
            critical_agents: vec![AgentType::PaymentGateway],
            required_habitat_types: vec![HabitatType::Marketplace, HabitatType::Payment],
        },
        Scenario {
            id: "scenario-2".to_owned(),
            title: "GrabPay Expansion".to_owned(),
            subtitle: "Resource Management".to_owned(),
            difficulty: 2,
            time_minutes: 12,
            credits: 155,
            description: "Expand a ride-hailing marketplace with payment capabilities under budget constraints.".to_owned(),
            briefing: "GrabPay wants to expand their payment ecosystem. You have a working Marketplace but need to add robust payment processing, fraud prevention, and user verification. Budget is tight, so choose wisely!".to_owned(),
            requirements: vec![
                requirement("Payments", "Process payments securely"),
                requirement("Security", "Prevent fraudulent transactions"),
                requirement("Speed", "Fast transaction processing"),
            ],
            stakeholders: vec![
                stakeholder("riders", "Riders", "Fast & Easy", Speed, 75, 30),
                stakeholder("drivers", "Drivers", "Quick payouts", Efficiency, 70, 25),
                stakeholder("regulators", "Regulators", "Compliance", Trust, 80, 25),
                stakeholder("company", "GrabPay", "Growth", Value, 65, 20),
            ],
            hint: "Payment + Trust habitats are essential. The Payment Gateway + Currency Converter synergy gives a big speed boost.".to_owned(),
            given: vec![GivenHabitat {
                habitat_type: HabitatType::Marketplace,
                agents: vec![AgentType::ReviewSystem],
            }],
            learning_objectives: strings(&[
                "Manage limited resources effectively",
                "Understand trade-offs between cost and quality",
                "Balance multiple stakeholder needs",
            ]),
            lecture_references: vec![
                lecture("Layer 3 (Infrastructure)", "Payment processing infrastructure"),
                lecture("Layer 5 (Services)", "Security and verification services"),
                lecture("SECURE Function", "Trust and fraud prevention"),
            ],
            critical_agents: vec![AgentType::PaymentGateway, AgentType::UserAuth],
            required_habitat_types: vec![HabitatType::Payment, HabitatType::Trust],
        },
        Scenario {
            id: "scenario-3".to_owned(),
            title: "Cross-Border Challenge".to_owned(),
            subtitle: "Multi-Stakeholder".to_owned(),
            difficulty: 3,
            time_minutes: 15,
            credits: 200,
            description: "Build a cross-border payment system for Thai tourists visiting Laos.".to_owned(),
            briefing: "Thai tourists visiting Laos need a seamless payment experience. Build a system that handles THB ↔ LAK currency conversion, complies with regulations in both countries, and keeps transaction fees low for local vendors.".to_owned(),
            requirements: vec![
                requirement("Speed", "Process transactions in < 3 seconds"),
                requirement("Currency", "THB ↔ LAK conversion"),
                requirement("Legal", "Compliant in both countries"),
            ],
            stakeholders: vec![
                stakeholder("tourists", "Tourists", "Fast, Easy", Speed, 80, 25),
                stakeholder("vendors", "Vendors", "Low Fees", Cost, 70, 25),
                stakeholder("regulators", "Regulators", "Legal Compliance", Trust, 90, 30),
                stakeholder("company", "Your Company", "Profit", Value, 60, 20),
            ],
            hint: "Start with Payment + Trust habitats. Currency Converter is essential. KYC Verification helps with compliance.".to_owned(),
            given: Vec::new(),
            learning_objectives: strings(&[
                "Design cross-border digital ecosystems",
                "Balance speed, cost, and compliance",
                "Manage stakeholders with conflicting needs",
            ]),
            lecture_references: vec![
                lecture("Layer 1 (Physical-Institutional)", "Dual-country compliance"),
                lecture("Layer 4 (Platform)", "Multi-service integration"),
                lecture("CONNECT Function", "Payment ↔ Trust migration"),
            ],
            critical_agents: vec![
                AgentType::PaymentGateway,
                AgentType::CurrencyConverter,
                AgentType::KycVerification,
            ],
            required_habitat_types: vec![HabitatType::Payment, HabitatType::Trust],
        },
        Scenario {
            id: "scenario-4".to_owned(),
            title: "Smart Agriculture Network".to_owned(),
            subtitle: "Complex Ecosystem".to_owned(),
            difficulty: 4,
            time_minutes: 16,
            credits: 250,
            description: "Connect farmers, buyers, and logistics in a data-driven agricultural ecosystem.".to_owned(),
            briefing: "Build a smart agriculture network that connects smallholder farmers with buyers, provides logistics tracking, and uses data analytics for market insights. The ecosystem must serve multiple stakeholder groups efficiently.".to_owned(),
            requirements: vec![
                requirement("Matching", "Connect farmers to buyers efficiently"),
                requirement("Logistics", "Track deliveries end-to-end"),
                requirement("Insights", "Provide market price analytics"),
                requirement("Payments", "Fair and fast payments to farmers"),
            ],
            stakeholders: vec![
                stakeholder("farmers", "Farmers", "Fair prices", Value, 75, 30),
                stakeholder("buyers", "Buyers", "Quality produce", Efficiency, 80, 25),
                stakeholder("logistics", "Logistics", "Efficient routes", Speed, 70, 20),
                stakeholder("government", "Government", "Food security", Trust, 75, 25),
            ],
            hint: "You need at least 3 habitat types. Marketplace for trading, Data for analytics, and Payment for transactions. Connect them all!".to_owned(),
            given: Vec::new(),
            learning_objectives: strings(&[
                "Design complex multi-habitat ecosystems",
                "Apply all 4 habitat functions",
                "Optimize agent placement across habitats",
            ]),
            lecture_references: vec![
                lecture("Layer 2 (Technology)", "IoT sensors and data collection"),
                lecture("Layer 6 (Actors)", "Multiple actor types in ecosystem"),
                lecture("OPTIMIZE Function", "Data-driven decision making"),
                lecture("CONNECT Function", "Multi-habitat connections"),
            ],
            critical_agents: vec![
                AgentType::AnalyticsEngine,
                AgentType::DeliveryTracker,
                AgentType::PaymentGateway,
            ],
            required_habitat_types: vec![
                HabitatType::Marketplace,
                HabitatType::Data,
                HabitatType::Payment,
            ],
        },
        Scenario {
            id: "scenario-5".to_owned(),
            title: "Telemedicine Platform".to_owned(),
            subtitle: "Trust & Security".to_owned(),
            difficulty: 4,
            time_minutes: 15,
            credits: 220,
            description: "Build a telemedicine platform serving patients, doctors, and pharmacies with high security.".to_owned(),
            briefing: "Design a telemedicine ecosystem where patients can consult doctors remotely and order prescriptions. Medical data security is paramount and the Trust habitat is critical. High reliability is required for all components.".to_owned(),
            requirements: vec![
                requirement("Consultations", "Video consultations between patients and doctors"),
                requirement("Prescriptions", "Digital prescription management"),
                requirement("Security", "HIPAA-level data protection"),
                requirement("Payments", "Insurance and direct payment"),
            ],
            stakeholders: vec![
                stakeholder("patients", "Patients", "Easy access", UserSatisfaction, 80, 30),
                stakeholder("doctors", "Doctors", "Reliable tools", Efficiency, 85, 25),
                stakeholder("pharmacies", "Pharmacies", "Order accuracy", Speed, 75, 20),
                stakeholder("regulators", "Health Board", "Data compliance", Trust, 90, 25),
            ],
            hint: "Trust habitat is absolutely critical here. KYC + Fraud Detection synergy gives +20% Trust. Don't skimp on security!".to_owned(),
            given: Vec::new(),
            learning_objectives: strings(&[
                "Understand the importance of trust in digital ecosystems",
                "Design high-reliability systems",
                "Balance accessibility with security",
            ]),
            lecture_references: vec![
                lecture("Layer 6 (Actors)", "Patient, Doctor, Pharmacy actors"),
                lecture("Layer 5 (Services)", "Healthcare digital services"),
                lecture("SECURE Function", "Medical data protection"),
            ],
            critical_agents: vec![
                AgentType::UserAuth,
                AgentType::KycVerification,
                AgentType::FraudDetection,
            ],
            required_habitat_types: vec![HabitatType::Trust, HabitatType::Marketplace],
        },
        Scenario {
            id: "scenario-6".to_owned(),
            title: "ASEAN Integration Master".to_owned(),
            subtitle: "Ultimate Challenge".to_owned(),
            difficulty: 5,
            time_minutes: 18,
            credits: 365,
            description: "Connect 3 ASEAN countries in a unified digital ecosystem: the ultimate test.".to_owned(),
            briefing: "Build the ultimate cross-border digital ecosystem connecting Thailand, Laos, and Vietnam. Handle multiple currencies (THB, LAK, VND), comply with 3 different regulatory frameworks, and serve diverse stakeholders across all countries. This is the final test of your ecosystem architecture skills.".to_owned(),
            requirements: vec![
                requirement("Multi-Currency", "Handle THB, LAK, and VND"),
                requirement("Compliance", "Meet regulations in 3 countries"),
                requirement("Trade", "Cross-border marketplace"),
                requirement("Data", "Unified analytics across borders"),
                requirement("Innovation", "Future-proof architecture"),
            ],
            stakeholders: vec![
                stakeholder("users", "Users (3 countries)", "Seamless experience", UserSatisfaction, 80, 25),
                stakeholder("businesses", "Businesses", "Market access", Efficiency, 75, 25),
                stakeholder("regulators", "Regulators (3)", "Full compliance", Trust, 85, 30),
                stakeholder("investors", "Investors", "Scalability", Value, 70, 20),
            ],
            hint: "You need ALL habitat types for this one. Build Payment + Trust first for compliance, then Marketplace for trade, Data for analytics, and Innovation for scalability.".to_owned(),
            given: Vec::new(),
            learning_objectives: strings(&[
                "Master full ecosystem integration",
                "Apply all 7 layers of the architecture",
                "Design scalable cross-border systems",
            ]),
            lecture_references: vec![
                lecture("Layer 1 (Physical-Institutional)", "Multi-country regulatory compliance"),
                lecture("Layer 2 (Technology)", "Cross-border infrastructure"),
                lecture("Layer 3 (Infrastructure)", "Multi-currency payment rails"),
                lecture("Layer 4 (Platform)", "Unified digital platform"),
                lecture("Layer 5 (Services)", "Localized services per country"),
                lecture("Layer 6 (Actors)", "Diverse stakeholder ecosystem"),
                lecture("Layer 7 (Governance)", "Cross-border governance framework"),
            ],
            critical_agents: vec![
                AgentType::PaymentGateway,
                AgentType::CurrencyConverter,
                AgentType::KycVerification,
                AgentType::AnalyticsEngine,
            ],
            required_habitat_types: HabitatType::ALL.to_vec(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn six_scenarios_with_unique_ids() {
        let scenarios = standard_scenarios();
        assert_eq!(scenarios.len(), 6);
        let mut ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn stakeholder_weights_sum_to_one() {
        for scenario in standard_scenarios() {
            let total: Decimal = scenario.stakeholders.iter().map(|s| s.weight).sum();
            assert_eq!(total, dec!(1.00), "{}", scenario.id);
        }
    }

    #[test]
    fn tutorial_gives_a_stocked_marketplace() {
        let scenarios = standard_scenarios();
        let tutorial = scenarios.first().map(|s| s.given.clone()).unwrap_or_default();
        assert_eq!(tutorial.len(), 1);
        assert_eq!(
            tutorial.first().map(|g| g.agents.clone()),
            Some(vec![AgentType::ReviewSystem, AgentType::DeliveryTracker])
        );
    }
}

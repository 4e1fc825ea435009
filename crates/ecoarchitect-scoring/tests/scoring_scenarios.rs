//! End-to-end scoring of boards built through real board mutations.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use ecoarchitect_board::Board;
use ecoarchitect_catalog::Catalog;
use ecoarchitect_scoring::calculate_score;
use ecoarchitect_types::{
    AgentId, AgentType, BoardSnapshot, FeedbackKind, HabitatId, HabitatType, PlacedAgent,
    PlacedHabitat, Position, SatisfactionBand, Scenario, ScoreBreakdown,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::standard())
}

fn scenario(catalog: &Catalog, id: &str) -> Scenario {
    catalog.scenario(id).unwrap().clone()
}

fn score(board: &Board, scenario: &Scenario) -> ScoreBreakdown {
    calculate_score(board.catalog(), board.snapshot(), scenario)
}

fn messages(breakdown: &ScoreBreakdown) -> Vec<&str> {
    breakdown
        .feedback
        .iter()
        .map(|f| f.message.as_str())
        .collect()
}

fn tutorial_solution() -> (Board, Scenario) {
    let catalog = catalog();
    let tutorial = scenario(&catalog, "scenario-1");
    let mut board = Board::seeded(catalog, &tutorial);
    let market = board.snapshot().habitats.first().unwrap().id;
    let payment = board
        .place_habitat(HabitatType::Payment, Position::new(450, 200))
        .unwrap();
    board.place_agent(AgentType::PaymentGateway, payment).unwrap();
    board.start_connection(market).unwrap();
    board.complete_connection(payment).unwrap();
    (board, tutorial)
}

#[test]
fn tutorial_solution_passes_with_two_stars() {
    let (board, tutorial) = tutorial_solution();
    assert_eq!(board.credits(), 15);

    let breakdown = score(&board, &tutorial);
    assert_eq!(breakdown.base_score, 84);
    assert_eq!(breakdown.habitat_match_bonus, 15);
    assert_eq!(breakdown.synergy_bonus, 0);
    assert_eq!(breakdown.connection_bonus, 5);
    assert_eq!(breakdown.wrong_habitat_penalty, 0);
    assert_eq!(breakdown.missing_critical_penalty, 0);
    assert_eq!(breakdown.disconnected_penalty, 0);
    assert_eq!(breakdown.components.habitat_match, dec!(100));
    assert_eq!(breakdown.components.requirements, dec!(100));
    assert_eq!(breakdown.components.seed, 81);

    assert_eq!(breakdown.stakeholder_score("customers"), Some(89));
    assert_eq!(breakdown.stakeholder_score("vendors"), Some(86));
    assert_eq!(breakdown.stakeholder_score("management"), Some(81));
    assert!(
        breakdown
            .stakeholder_scores
            .iter()
            .all(|s| s.band == SatisfactionBand::Exceeded)
    );

    assert_eq!(breakdown.overall_score, 86);
    assert!(breakdown.passed);
    assert_eq!(breakdown.stars, 2);
    assert_eq!(
        messages(&breakdown),
        vec![
            "Ecosystem passed with 86% overall score!",
            "All agents in correct habitats (+15%)",
            "All habitats connected! (+5%)",
            "1 connection(s) active (+5%)",
        ]
    );
    assert!(
        breakdown
            .feedback
            .iter()
            .all(|f| f.kind == FeedbackKind::Success)
    );
    assert_eq!(breakdown.concepts_applied, tutorial.lecture_references);
}

#[test]
fn untouched_tutorial_fails() {
    let catalog = catalog();
    let tutorial = scenario(&catalog, "scenario-1");
    let board = Board::seeded(catalog, &tutorial);

    let breakdown = score(&board, &tutorial);
    assert_eq!(breakdown.components.agent_quality, dec!(82.5));
    assert_eq!(breakdown.base_score, 83);
    assert_eq!(breakdown.missing_critical_penalty, 25);
    assert_eq!(breakdown.components.seed, 39);
    assert_eq!(breakdown.stakeholder_score("customers"), Some(47));
    assert_eq!(breakdown.stakeholder_score("vendors"), Some(44));
    assert_eq!(breakdown.stakeholder_score("management"), Some(39));
    assert_eq!(breakdown.overall_score, 44);
    assert!(!breakdown.passed);
    assert_eq!(breakdown.stars, 0);
    assert_eq!(
        messages(&breakdown),
        vec![
            "All agents in correct habitats (+15%)",
            "Missing critical agent: Payment Gateway",
            "Missing required habitat: Payment",
        ]
    );
}

#[test]
fn cross_border_with_speed_synergy() {
    let catalog = catalog();
    let cross_border = scenario(&catalog, "scenario-3");
    let mut board = Board::seeded(catalog, &cross_border);
    let payment = board
        .place_habitat(HabitatType::Payment, Position::default())
        .unwrap();
    let trust = board
        .place_habitat(HabitatType::Trust, Position::new(250, 0))
        .unwrap();
    board.place_agent(AgentType::PaymentGateway, payment).unwrap();
    board
        .place_agent(AgentType::CurrencyConverter, payment)
        .unwrap();
    board.place_agent(AgentType::KycVerification, trust).unwrap();
    board.start_connection(payment).unwrap();
    board.complete_connection(trust).unwrap();
    assert_eq!(board.credits(), 20);

    let breakdown = score(&board, &cross_border);
    assert_eq!(breakdown.components.synergy, dec!(25));
    assert_eq!(breakdown.synergy_bonus, 5);
    assert_eq!(breakdown.components.seed, 85);
    assert_eq!(breakdown.stakeholder_score("tourists"), Some(90));
    assert_eq!(breakdown.stakeholder_score("vendors"), Some(85));
    assert_eq!(breakdown.stakeholder_score("regulators"), Some(90));
    assert_eq!(breakdown.stakeholder_score("company"), Some(85));
    assert_eq!(breakdown.overall_score, 88);
    assert_eq!(breakdown.stars, 2);
    assert_eq!(
        messages(&breakdown),
        vec![
            "Ecosystem passed with 88% overall score!",
            "All agents in correct habitats (+15%)",
            "Payment + Currency = +15% Speed",
            "All habitats connected! (+5%)",
            "1 connection(s) active (+5%)",
        ]
    );
}

#[test]
fn wrong_placement_is_penalised_twice() {
    let catalog = catalog();
    let agriculture = scenario(&catalog, "scenario-4");
    let mut board = Board::seeded(catalog, &agriculture);
    let market = board
        .place_habitat(HabitatType::Marketplace, Position::default())
        .unwrap();
    let data = board
        .place_habitat(HabitatType::Data, Position::new(250, 0))
        .unwrap();
    board
        .place_habitat(HabitatType::Trust, Position::new(500, 0))
        .unwrap();
    board.place_agent(AgentType::PaymentGateway, data).unwrap();
    board.place_agent(AgentType::AnalyticsEngine, data).unwrap();
    board.start_connection(market).unwrap();
    board.complete_connection(data).unwrap();

    let breakdown = score(&board, &agriculture);
    // Depressed component and flat subtraction for the same agent.
    assert_eq!(breakdown.components.habitat_match, dec!(35));
    assert_eq!(breakdown.wrong_habitat_penalty, 8);
    assert_eq!(breakdown.habitat_match_bonus, 8);
    assert_eq!(breakdown.disconnected_penalty, 10);
    assert_eq!(breakdown.missing_critical_penalty, 25);
    assert_eq!(breakdown.components.seed, 12);
    assert_eq!(breakdown.stakeholder_score("government"), Some(17));
    assert_eq!(breakdown.overall_score, 13);
    assert_eq!(
        messages(&breakdown),
        vec![
            "1 agent(s) in wrong habitat (-8%)",
            "Not connected: Trust (-10%)",
            "1 connection(s) active (+5%)",
            "Missing critical agent: Delivery Tracker",
            "Missing required habitat: Payment",
        ]
    );
}

#[test]
fn thirds_summing_to_a_half_round_up() {
    let catalog = catalog();
    let agriculture = scenario(&catalog, "scenario-4");
    let mut board = Board::seeded(catalog, &agriculture);
    let payment = board
        .place_habitat(HabitatType::Payment, Position::default())
        .unwrap();
    for agent in [
        AgentType::ApiConnector,
        AgentType::PaymentGateway,
        AgentType::ReviewSystem,
    ] {
        board.place_agent(agent, payment).unwrap();
    }

    let breakdown = score(&board, &agriculture);
    // 500/6 * 0.25 + (200/3 - 10) * 0.20 + 0 + 100 * 0.15 + 100/3 * 0.25
    assert_eq!(breakdown.components.weighted, dec!(55.5));
    assert_eq!(breakdown.wrong_habitat_penalty, 5);
    assert_eq!(breakdown.missing_critical_penalty, 50);
    assert_eq!(breakdown.components.seed, 1);
    assert!(breakdown.stakeholder_scores.iter().all(|s| s.score == 1));
    assert_eq!(breakdown.overall_score, 1);
}

#[test]
fn persisted_snapshot_with_unrecognised_types_still_scores() {
    let catalog = catalog();
    let tutorial = scenario(&catalog, "scenario-1");
    let market = HabitatId::new();
    let agents = [AgentId::new(), AgentId::new(), AgentId::new()];
    let [review, delivery, chain] = agents;
    let json = serde_json::json!({
        "habitats": [
            {"id": market, "type": "marketplace", "level": 1, "agents": agents,
             "position": {"x": 200, "y": 200}},
            {"id": HabitatId::new(), "type": "orbitalStation", "level": 1, "agents": [],
             "position": {"x": 450, "y": 200}},
        ],
        "agents": [
            {"id": review, "type": "reviewSystem", "habitatId": market},
            {"id": delivery, "type": "deliveryTracker", "habitatId": market},
            {"id": chain, "type": "blockchainNode", "habitatId": market},
        ],
        "connections": [],
    });
    let snapshot: BoardSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(
        snapshot.agents.last().map(|a| a.agent_type),
        Some(AgentType::Unknown)
    );
    assert_eq!(
        snapshot.habitats.last().map(|h| h.habitat_type),
        Some(HabitatType::Unknown)
    );

    let breakdown = calculate_score(&catalog, &snapshot, &tutorial);
    // (75 + 85 + 80 + 90) over six ratings
    assert_eq!(breakdown.base_score, 55);
    assert_eq!(breakdown.habitat_match_bonus, 10);
    assert_eq!(breakdown.wrong_habitat_penalty, 0);
    assert_eq!(breakdown.over_capacity_penalty, 0);
    assert_eq!(breakdown.disconnected_penalty, 20);
    assert_eq!(breakdown.stakeholder_scores.len(), 3);
}

#[test]
fn live_preview_matches_submission() {
    let (board, tutorial) = tutorial_solution();
    let first = score(&board, &tutorial);
    let second = score(&board, &tutorial);
    assert_eq!(first, second);
}

#[test]
fn synergy_ignores_habitat_boundaries() {
    let catalog = catalog();
    let tutorial = scenario(&catalog, "scenario-1");
    let mut board = Board::new(Arc::clone(&catalog), 1000);
    let trust = board
        .place_habitat(HabitatType::Trust, Position::default())
        .unwrap();
    let data = board
        .place_habitat(HabitatType::Data, Position::default())
        .unwrap();
    board.place_agent(AgentType::FraudDetection, trust).unwrap();
    board.place_agent(AgentType::KycVerification, data).unwrap();
    board.place_agent(AgentType::KycVerification, trust).unwrap();

    let breakdown = score(&board, &tutorial);
    assert!(
        messages(&breakdown).contains(&"Fraud Detection + KYC = +20% Trust")
    );
    assert_eq!(breakdown.synergy_bonus, 5);
}

#[test]
fn overfull_habitat_from_edited_data() {
    let catalog = catalog();
    let tutorial = scenario(&catalog, "scenario-1");
    let market_id = HabitatId::new();
    let agents: Vec<PlacedAgent> = (0..5)
        .map(|_| PlacedAgent {
            id: AgentId::new(),
            agent_type: AgentType::ReviewSystem,
            habitat_id: market_id,
        })
        .collect();
    let snapshot = BoardSnapshot {
        habitats: vec![PlacedHabitat {
            id: market_id,
            habitat_type: HabitatType::Marketplace,
            level: 1,
            agents: agents.iter().map(|a| a.id).collect(),
            position: Position::default(),
        }],
        agents,
        connections: Vec::new(),
    };

    let breakdown = calculate_score(&catalog, &snapshot, &tutorial);
    assert_eq!(breakdown.over_capacity_penalty, 15);
    assert!(messages(&breakdown).contains(&"Marketplace is over capacity! (5/4)"));
}

#[test]
fn uncatalogued_types_contribute_nothing() {
    let json = r#"{
        "habitats": [{"type":"marketplace","name":"Marketplace","cost":40,"capacity":4,
                      "specialBonus":"+10% User Satisfaction","bonusType":"userSatisfaction","bonusValue":10}],
        "agents": [{"type":"reviewSystem","name":"Review System","efficiency":75,"reliability":85,
                    "cost":15,"bestHabitat":"marketplace"}]
    }"#;
    let sparse = Catalog::from_json(json).unwrap();
    let tutorial = scenario(&Catalog::standard(), "scenario-1");

    let market_id = HabitatId::new();
    let agents = vec![
        PlacedAgent {
            id: AgentId::new(),
            agent_type: AgentType::ReviewSystem,
            habitat_id: market_id,
        },
        PlacedAgent {
            id: AgentId::new(),
            agent_type: AgentType::UserAuth,
            habitat_id: market_id,
        },
    ];
    let snapshot = BoardSnapshot {
        habitats: vec![
            PlacedHabitat {
                id: market_id,
                habitat_type: HabitatType::Marketplace,
                level: 1,
                agents: agents.iter().map(|a| a.id).collect(),
                position: Position::default(),
            },
            PlacedHabitat {
                id: HabitatId::new(),
                habitat_type: HabitatType::Innovation,
                level: 2,
                agents: Vec::new(),
                position: Position::default(),
            },
        ],
        agents,
        connections: Vec::new(),
    };

    let breakdown = calculate_score(&sparse, &snapshot, &tutorial);
    // (75 + 85) over four ratings
    assert_eq!(breakdown.components.agent_quality, dec!(40));
    assert_eq!(breakdown.components.habitat_match, dec!(50));
    assert_eq!(breakdown.habitat_match_bonus, 8);
    assert_eq!(breakdown.over_capacity_penalty, 0);
    assert!(messages(&breakdown).contains(&"Not connected: Marketplace, innovation (-20%)"));
    assert!(breakdown.overall_score <= 100);
    assert!(breakdown.components.weighted >= Decimal::ZERO);
}

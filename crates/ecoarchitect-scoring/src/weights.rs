//! Scoring constants: component weights, flat penalties, display bonus
//! steps and rating thresholds.

use rust_decimal::Decimal;

/// Weight of the agent quality component (0.25).
pub const AGENT_QUALITY_WEIGHT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Weight of the habitat match component (0.20).
pub const HABITAT_MATCH_WEIGHT: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Weight of the synergy component (0.15).
pub const SYNERGY_WEIGHT: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Weight of the connection component (0.15).
pub const CONNECTION_WEIGHT: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Weight of the requirements component (0.25).
pub const REQUIREMENTS_WEIGHT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Upper bound of every component and of the final scores.
pub const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Points removed from the match component per 100% wrongly placed agents.
pub const WRONG_PLACEMENT_RATE: u32 = 30;

/// Cap on each display bonus, and the full wrong-placement penalty.
pub const DISPLAY_BONUS_CAP: u32 = 15;

/// Display bonus per active synergy.
pub const SYNERGY_BONUS_STEP: u32 = 5;

/// Display bonus per connection.
pub const CONNECTION_BONUS_STEP: u32 = 5;

/// Synergy component denominator cap: four active synergies score 100.
pub const SYNERGY_TARGET: usize = 4;

/// Flat penalty per missing critical agent type.
pub const MISSING_AGENT_PENALTY: u32 = 15;

/// Flat penalty per missing required habitat type.
pub const MISSING_HABITAT_PENALTY: u32 = 10;

/// Flat penalty per habitat touching no connection.
pub const DISCONNECTED_PENALTY: u32 = 10;

/// Flat penalty per habitat holding more agents than its capacity.
pub const OVER_CAPACITY_PENALTY: u32 = 15;

/// Lowest passing overall score.
pub const PASS_THRESHOLD: u32 = 70;

/// Lowest overall score earning two stars.
pub const TWO_STAR_THRESHOLD: u32 = 80;

/// Lowest overall score earning three stars.
pub const THREE_STAR_THRESHOLD: u32 = 90;

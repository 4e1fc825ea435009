//! Flat penalties subtracted from the weighted score.
//!
//! The wrong-placement penalty deliberately overlaps with the habitat match
//! component: a wrongly placed agent lowers that weighted component *and*
//! is subtracted again here. Each penalty is a separate function so the
//! overlap stays visible.

use rust_decimal::Decimal;

use ecoarchitect_catalog::Catalog;
use ecoarchitect_types::{BoardSnapshot, HabitatType};

use crate::components::{ConnectionReport, PlacementTally, RequirementsReport};
use crate::math::{count_u32, round_u32, scaled_ratio};
use crate::weights::{
    DISCONNECTED_PENALTY, DISPLAY_BONUS_CAP, MISSING_AGENT_PENALTY, MISSING_HABITAT_PENALTY,
    OVER_CAPACITY_PENALTY,
};

/// `round(wrong / total * 15)`.
pub fn wrong_placement_penalty(tally: &PlacementTally) -> u32 {
    round_u32(scaled_ratio(
        tally.wrong,
        tally.total.max(1),
        Decimal::from(DISPLAY_BONUS_CAP),
    ))
}

/// 15 per missing critical agent plus 10 per missing required habitat.
pub fn missing_critical_penalty(report: &RequirementsReport) -> u32 {
    let agents = count_u32(report.missing_agents.len()).saturating_mul(MISSING_AGENT_PENALTY);
    let habitats =
        count_u32(report.missing_habitats.len()).saturating_mul(MISSING_HABITAT_PENALTY);
    agents.saturating_add(habitats)
}

/// 10 per habitat touching no connection.
pub fn disconnected_penalty(report: &ConnectionReport) -> u32 {
    count_u32(report.disconnected.len()).saturating_mul(DISCONNECTED_PENALTY)
}

/// A habitat holding more agents than its effective capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverCapacity {
    /// The habitat's type.
    pub habitat_type: HabitatType,
    /// Agents it holds.
    pub occupancy: u32,
    /// Its effective capacity.
    pub capacity: u32,
}

/// Every over-full habitat, in placement order.
///
/// Habitat types missing from the catalog are skipped.
pub fn over_capacity(catalog: &Catalog, snapshot: &BoardSnapshot) -> Vec<OverCapacity> {
    snapshot
        .habitats
        .iter()
        .filter_map(|h| {
            let def = catalog.habitat(h.habitat_type)?;
            let capacity = h.effective_capacity(def.capacity);
            let occupancy = h.occupancy();
            (occupancy > capacity).then_some(OverCapacity {
                habitat_type: h.habitat_type,
                occupancy,
                capacity,
            })
        })
        .collect()
}

/// 15 per over-full habitat.
pub fn over_capacity_penalty(over: &[OverCapacity]) -> u32 {
    count_u32(over.len()).saturating_mul(OVER_CAPACITY_PENALTY)
}

/// All flat penalties for one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalties {
    /// See [`wrong_placement_penalty`].
    pub wrong_placement: u32,
    /// See [`over_capacity_penalty`].
    pub over_capacity: u32,
    /// See [`disconnected_penalty`].
    pub disconnected: u32,
    /// See [`missing_critical_penalty`].
    pub missing_critical: u32,
}

impl Penalties {
    /// Sum of every penalty.
    pub const fn total(&self) -> u32 {
        self.wrong_placement
            .saturating_add(self.over_capacity)
            .saturating_add(self.disconnected)
            .saturating_add(self.missing_critical)
    }
}

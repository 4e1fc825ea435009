//! Upgrade, connection and refund prices.
//!
//! All values are whole credits (`u32`). Refunds round down.

use serde::{Deserialize, Serialize};

/// Highest level a habitat can reach.
pub const MAX_LEVEL: u8 = 3;

/// Credits to reach level 2.
pub const LEVEL_TWO_UPGRADE_COST: u32 = 30;

/// Credits to reach level 3 from level 2.
pub const LEVEL_THREE_UPGRADE_COST: u32 = 50;

/// Credits to create one connection.
pub const CONNECTION_COST: u32 = 10;

/// Share of spend returned when something is removed, in percent.
pub const REFUND_PERCENT: u32 = 70;

/// Prices the board charges and refunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    /// Cost of upgrading from level 1 to level 2.
    pub level_two_upgrade: u32,
    /// Cost of upgrading from level 2 to level 3.
    pub level_three_upgrade: u32,
    /// Cost of one connection.
    pub connection_cost: u32,
    /// Refund percentage applied on removal.
    pub refund_percent: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            level_two_upgrade: LEVEL_TWO_UPGRADE_COST,
            level_three_upgrade: LEVEL_THREE_UPGRADE_COST,
            connection_cost: CONNECTION_COST,
            refund_percent: REFUND_PERCENT,
        }
    }
}

impl Pricing {
    /// Cost of upgrading a habitat *to* `target_level`.
    ///
    /// Returns `None` for levels that cannot be upgraded to (1, or above
    /// [`MAX_LEVEL`]).
    pub const fn upgrade_cost(&self, target_level: u8) -> Option<u32> {
        match target_level {
            2 => Some(self.level_two_upgrade),
            3 => Some(self.level_three_upgrade),
            _ => None,
        }
    }

    /// Total upgrade spend paid to bring a habitat to `level`.
    ///
    /// 0 at level 1, the level-2 price at level 2, both prices at level 3.
    pub const fn cumulative_upgrade_cost(&self, level: u8) -> u32 {
        match level {
            0 | 1 => 0,
            2 => self.level_two_upgrade,
            _ => self.level_two_upgrade.saturating_add(self.level_three_upgrade),
        }
    }

    /// Credits returned for removing something that cost `spent`.
    ///
    /// `floor(spent * refund_percent / 100)`.
    pub fn refund(&self, spent: u32) -> u32 {
        let scaled = u64::from(spent).saturating_mul(u64::from(self.refund_percent));
        let refunded = scaled.checked_div(100).unwrap_or(0);
        u32::try_from(refunded).unwrap_or(u32::MAX)
    }
}

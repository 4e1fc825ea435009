//! Standard habitat definitions.

use ecoarchitect_types::{BonusType, HabitatDefinition, HabitatType};

/// Return the standard definition for a [`HabitatType`].
///
/// [`HabitatType::Unknown`] has none.
pub fn standard_habitat(habitat_type: HabitatType) -> Option<HabitatDefinition> {
    let def = match habitat_type {
        HabitatType::Marketplace => HabitatDefinition {
            habitat_type,
            name: String::from("Marketplace"),
            cost: 40,
            capacity: 4,
            special_bonus: String::from("+10% User Satisfaction"),
            bonus_type: BonusType::UserSatisfaction,
            bonus_value: 10,
        },
        HabitatType::Payment => HabitatDefinition {
            habitat_type,
            name: String::from("Payment"),
            cost: 50,
            capacity: 3,
            special_bonus: String::from("+15% Transaction Speed"),
            bonus_type: BonusType::TransactionSpeed,
            bonus_value: 15,
        },
        HabitatType::Data => HabitatDefinition {
            habitat_type,
            name: String::from("Data"),
            cost: 35,
            capacity: 3,
            special_bonus: String::from("+10% System Efficiency"),
            bonus_type: BonusType::SystemEfficiency,
            bonus_value: 10,
        },
        HabitatType::Trust => HabitatDefinition {
            habitat_type,
            name: String::from("Trust"),
            cost: 45,
            capacity: 3,
            special_bonus: String::from("+20% Compliance Score"),
            bonus_type: BonusType::Compliance,
            bonus_value: 20,
        },
        HabitatType::Innovation => HabitatDefinition {
            habitat_type,
            name: String::from("Innovation"),
            cost: 60,
            capacity: 5,
            special_bonus: String::from("Faster Evolution"),
            bonus_type: BonusType::Evolution,
            bonus_value: 15,
        },
        HabitatType::Unknown => return None,
    };
    Some(def)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn definition_key_matches_requested_type() {
        for habitat in HabitatType::ALL {
            assert_eq!(standard_habitat(habitat).unwrap().habitat_type, habitat);
        }
        assert!(standard_habitat(HabitatType::Unknown).is_none());
    }

    #[test]
    fn payment_habitat_prices() {
        let payment = standard_habitat(HabitatType::Payment).unwrap();
        assert_eq!(payment.cost, 50);
        assert_eq!(payment.capacity, 3);
    }
}

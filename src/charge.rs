//! Charge composition rules shared by every hole of a run.

use crate::config::{format_number, DETONATOR, DETONATOR_AMOUNT, EXPLOSIVE};
use crate::model::{Amount, InputParameters, Material};

/// Build the ordered charge material list attached to every hole.
///
/// Always one detonator entry first, then one explosive entry whose
/// amounts hold the main charge mass at priority 1 and, for a dispersed
/// charge, the secondary mass at priority 2. The descriptive fields are
/// fixed domain constants; only the masses vary with the input.
pub fn plan_charge_materials(inputs: &InputParameters) -> Vec<Material> {
    let detonator = Material {
        material_code: DETONATOR.code.to_string(),
        material_shortname: DETONATOR.short_name.to_string(),
        is_explosive: DETONATOR.is_explosive.to_string(),
        material_density: DETONATOR.density.to_string(),
        cup_density: DETONATOR.cup_density.to_string(),
        amounts: vec![Amount {
            value: DETONATOR_AMOUNT.to_string(),
            priority: "1".to_string(),
        }],
    };

    let mut amounts = vec![Amount {
        value: format_number(inputs.main_charge_mass),
        priority: "1".to_string(),
    }];
    if inputs.dispersed_charge {
        amounts.push(Amount {
            value: format_number(inputs.secondary_charge_mass),
            priority: "2".to_string(),
        });
    }

    let explosive = Material {
        material_code: EXPLOSIVE.code.to_string(),
        material_shortname: EXPLOSIVE.short_name.to_string(),
        is_explosive: EXPLOSIVE.is_explosive.to_string(),
        material_density: EXPLOSIVE.density.to_string(),
        cup_density: EXPLOSIVE.cup_density.to_string(),
        amounts,
    };

    vec![detonator, explosive]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_charge_has_one_amount() {
        let inputs = InputParameters {
            dispersed_charge: false,
            main_charge_mass: 500.0,
            ..Default::default()
        };
        let materials = plan_charge_materials(&inputs);
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].is_explosive, "false");
        assert_eq!(materials[1].is_explosive, "true");
        assert_eq!(materials[1].amounts.len(), 1);
        assert_eq!(materials[1].amounts[0].value, "500");
        assert_eq!(materials[1].amounts[0].priority, "1");
    }

    #[test]
    fn test_dispersed_charge_adds_priority_two_amount() {
        let inputs = InputParameters {
            dispersed_charge: true,
            main_charge_mass: 500.0,
            secondary_charge_mass: 600.0,
            ..Default::default()
        };
        let materials = plan_charge_materials(&inputs);
        let amounts = &materials[1].amounts;
        assert_eq!(amounts.len(), 2);
        assert_eq!(amounts[0].priority, "1");
        assert_eq!(amounts[1].priority, "2");
        assert_eq!(amounts[1].value, "600");
    }

    #[test]
    fn test_detonator_entry_is_fixed() {
        let a = plan_charge_materials(&InputParameters::default());
        let b = plan_charge_materials(&InputParameters {
            main_charge_mass: 999.0,
            ..Default::default()
        });
        assert_eq!(a[0], b[0]);
        assert_eq!(a[0].cup_density, "0");
    }
}

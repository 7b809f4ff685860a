//! Micromine collar/interval builder.

use crate::config::{COLLAR_DIP, MICROMINE_HOLE_TYPE, MM_TO_M, STEMMING_INTERVAL_TYPE};
use crate::grid::build_grid;
use crate::model::{hole_number, CollarRecord, InputParameters, IntervalRecord};

/// Build the collar table: one row per hole in canonical order.
pub fn build_collar_records(inputs: &InputParameters) -> Vec<CollarRecord> {
    let block = inputs.blast_block_name();
    build_grid(inputs, |row, col, inputs, coords| CollarRecord {
        hole: hole_number(row, col),
        hole_type: MICROMINE_HOLE_TYPE.to_string(),
        block: block.clone(),
        east: coords.0,
        north: coords.1,
        rl: inputs.base_z,
        dip: COLLAR_DIP,
        azimuth: 0.0,
        depth: inputs.design_depth,
        row,
        hole_diameter: inputs.design_diameter * MM_TO_M,
        subdrill: 0.0,
        firing_sequence: None,
        firing_delay: None,
        spacing: inputs.distance,
        burden: inputs.distance,
    })
}

/// Build the interval table: a stemming interval followed by the charge
/// column for every hole. A dispersed charge splits the column into two
/// intervals carrying the main and secondary masses.
pub fn build_interval_records(inputs: &InputParameters) -> Vec<IntervalRecord> {
    let block = inputs.blast_block_name();
    let per_hole = build_grid(inputs, |row, col, inputs, _| {
        hole_intervals(&hole_number(row, col), &block, inputs)
    });
    per_hole.into_iter().flatten().collect()
}

fn hole_intervals(hole: &str, block: &str, inputs: &InputParameters) -> Vec<IntervalRecord> {
    let base = IntervalRecord {
        hole: hole.to_string(),
        hole_type: MICROMINE_HOLE_TYPE.to_string(),
        block: block.to_string(),
        from: 0.0,
        to: inputs.stemming_length,
        interval_type: STEMMING_INTERVAL_TYPE.to_string(),
        charge_density: 1.0,
        charge_length: None,
        charge_diameter: None,
        explosive_weight: None,
    };

    let charge_top = inputs.stemming_length;
    let charge_bottom = inputs.design_depth;
    let diameter = inputs.design_diameter * MM_TO_M;

    let charge = |from: f64, to: f64, weight: f64| IntervalRecord {
        hole: hole.to_string(),
        hole_type: MICROMINE_HOLE_TYPE.to_string(),
        block: block.to_string(),
        from,
        to,
        interval_type: inputs.explosive_name.clone(),
        charge_density: inputs.explosive_density,
        charge_length: Some(to - from),
        charge_diameter: Some(diameter),
        explosive_weight: Some(weight),
    };

    if inputs.dispersed_charge {
        let midpoint = (charge_top + charge_bottom) / 2.0;
        vec![
            base,
            charge(charge_top, midpoint, inputs.main_charge_mass),
            charge(midpoint, charge_bottom, inputs.secondary_charge_mass),
        ]
    } else {
        vec![
            base,
            charge(charge_top, charge_bottom, inputs.main_charge_mass),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> InputParameters {
        InputParameters {
            max_row: 2,
            max_col: 2,
            design_depth: 10.0,
            stemming_length: 4.0,
            design_diameter: 250.0,
            main_charge_mass: 500.0,
            secondary_charge_mass: 600.0,
            distance: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_collar_rows() {
        let collars = build_collar_records(&inputs());
        assert_eq!(collars.len(), 4);
        assert_eq!(collars[0].hole, "0000");
        assert_eq!(collars[3].hole, "0101");
        assert_eq!(collars[0].dip, -90.0);
        assert_eq!(collars[0].hole_diameter, 0.25);
        assert_eq!(collars[0].spacing, 5.0);
        assert_eq!(collars[2].row, 1);
    }

    #[test]
    fn test_single_charge_intervals() {
        let intervals = build_interval_records(&inputs());
        // 4 holes, stemming + one charge interval each.
        assert_eq!(intervals.len(), 8);
        let stemming = &intervals[0];
        assert_eq!(stemming.interval_type, STEMMING_INTERVAL_TYPE);
        assert_eq!(stemming.from, 0.0);
        assert_eq!(stemming.to, 4.0);
        assert!(stemming.explosive_weight.is_none());

        let charge = &intervals[1];
        assert_eq!(charge.from, 4.0);
        assert_eq!(charge.to, 10.0);
        assert_eq!(charge.charge_length, Some(6.0));
        assert_eq!(charge.explosive_weight, Some(500.0));
    }

    #[test]
    fn test_dispersed_charge_splits_column() {
        let inputs = InputParameters {
            dispersed_charge: true,
            ..inputs()
        };
        let intervals = build_interval_records(&inputs);
        assert_eq!(intervals.len(), 12);
        let first = &intervals[1];
        let second = &intervals[2];
        assert_eq!(first.to, second.from);
        assert_eq!(first.explosive_weight, Some(500.0));
        assert_eq!(second.explosive_weight, Some(600.0));
        assert_eq!(second.to, 10.0);
    }
}

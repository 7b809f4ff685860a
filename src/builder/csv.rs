//! Flat CSV blast project builder (hole + block point tables).

use chrono::{Local, Months, NaiveDate};

use crate::config::{CSV_EXPLOSIVE_NAME, MM_TO_M};
use crate::grid::{build_grid, corner_points};
use crate::model::{hole_number, BlastBlockPointRecord, BlastHoleRecord, InputParameters};

/// Planned blast date: one month from today, `dd.MM.yyyy`.
fn planned_blast_date() -> String {
    let today = Local::now().date_naive();
    let date = today.checked_add_months(Months::new(1)).unwrap_or(today);
    format_blast_date(date)
}

fn format_blast_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Build the flat hole table: one row per grid cell.
pub fn build_blast_hole_records(inputs: &InputParameters) -> Vec<BlastHoleRecord> {
    let block = inputs.blast_block_name();
    let blasted_date = planned_blast_date();
    build_grid(inputs, |row, col, inputs, coords| BlastHoleRecord {
        name: hole_number(row, col),
        x: coords.0,
        y: coords.1,
        z: inputs.base_z,
        blast_block_name: block.clone(),
        blast_block_blasted_date: blasted_date.clone(),
        design_charge_mass: inputs.main_charge_mass,
        design_charge_height: inputs.design_depth - inputs.stemming_length,
        design_explosive_name: CSV_EXPLOSIVE_NAME.to_string(),
        depth: inputs.design_depth,
        diameter: inputs.design_diameter * MM_TO_M,
        tamping: inputs.stemming_length,
    })
}

/// Build the block polygon table: the four grid corners with a running
/// sequence number.
pub fn build_block_point_records(inputs: &InputParameters) -> Vec<BlastBlockPointRecord> {
    let block = inputs.blast_block_name();
    corner_points(inputs)
        .into_iter()
        .enumerate()
        .map(|(sequence, (x, y))| BlastBlockPointRecord {
            blast_block_name: block.clone(),
            sequence: sequence as i32,
            x,
            y,
            z: inputs.base_z,
        })
        .collect()
}

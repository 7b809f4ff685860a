//! Geomix blast project builder.

use crate::config::{format_number, MM_TO_M};
use crate::grid::{build_grid, corner_points};
use crate::model::{
    hole_number, GeomixBlock, GeomixCharge, GeomixPoint, GeomixProject, GeomixProjects,
    GeomixWell, InputParameters,
};

/// Assemble the Geomix object graph: one project holding one block with
/// the four boundary points and one well per grid cell.
pub fn build_geomix_project(inputs: &InputParameters) -> GeomixProjects {
    let project_id = inputs.blast_block_name();
    tracing::debug!(project_id, "building Geomix blast project");

    let points = corner_points(inputs)
        .into_iter()
        .map(|(x, y)| GeomixPoint {
            x: format_number(x),
            y: format_number(y),
            z: format_number(inputs.base_z),
        })
        .collect();

    let charge = GeomixCharge::new(
        format_number(inputs.main_charge_mass),
        format_number(inputs.design_depth - inputs.stemming_length),
    );

    let wells = build_grid(inputs, |row, col, inputs, coords| {
        let number = hole_number(row, col);
        GeomixWell {
            wel_id: number.clone(),
            wel_number: number,
            depth: format_number(inputs.design_depth),
            x: format_number(coords.0),
            y: format_number(coords.1),
            z: format_number(inputs.base_z),
            dx: "0".to_string(),
            dy: "0".to_string(),
            dm: format_number(inputs.design_diameter * MM_TO_M),
            rig_id: String::new(),
            driver_id: String::new(),
            charges: vec![charge.clone()],
        }
    });

    GeomixProjects {
        projects: vec![GeomixProject {
            project_id: project_id.clone(),
            date_begin: String::new(),
            date_end: String::new(),
            blocks: vec![GeomixBlock {
                block_id: project_id,
                points,
                wells,
            }],
        }],
    }
}

//! MES blast project builder.

use uuid::Uuid;

use crate::charge::plan_charge_materials;
use crate::config::format_number;
use crate::grid::build_grid;
use crate::model::{hole_number, Hole, HoleItem, InputParameters, Material, MesPmv};

/// Assemble the MES object graph. One blast project id is generated per
/// run and shared by every hole; each hole gets a fresh unique id.
pub fn build_mes_project(inputs: &InputParameters) -> MesPmv {
    let blast_project_id = Uuid::new_v4().to_string();
    tracing::debug!(blast_project_id, "building MES blast project");

    let materials = plan_charge_materials(inputs);
    let holes = build_grid(inputs, |row, col, inputs, coords| {
        build_hole(&blast_project_id, row, col, inputs, coords, &materials)
    });

    MesPmv::new(holes)
}

fn build_hole(
    blast_project_id: &str,
    row: i32,
    col: i32,
    inputs: &InputParameters,
    coords: (f64, f64),
    materials: &[Material],
) -> Hole {
    let (level_code, block_name, block_code) = inputs.block_codes();
    let (hole_material, hole_material_code) = inputs.hole_material_type.mes_labeling();

    let mut item = HoleItem {
        blast_project_id: blast_project_id.to_string(),
        hole_id: Uuid::new_v4().to_string(),
        hole_number: hole_number(row, col),
        hole_material: hole_material.to_string(),
        hole_material_code: hole_material_code.to_string(),
        pit_code: inputs.pit_name.clone(),
        pit_name: inputs.pit_name.clone(),
        level_code: level_code.clone(),
        level_name: inputs.level.to_string(),
        block_code,
        block_name: block_name.clone(),
        block_drilling_code: format!("{}{}{}Drill", inputs.pit_name, level_code, block_name),
        block_drilling_name: block_name.clone(),
        block_blasting_code: format!("{}{}Blast", inputs.pit_name, block_name),
        block_blasting_name: block_name,
        depth_plan: format_number(inputs.design_depth),
        diameter_plan: format_number(inputs.design_diameter),
        x: format_number(coords.0),
        y: format_number(coords.1),
        z: format_number(inputs.base_z),
        is_drilling: inputs.is_drilling.to_string(),
        ..Default::default()
    };

    if inputs.is_drilling {
        // Fact coordinates simulate a realistic drilling deviation: x and
        // z add the deviation, y subtracts it.
        item.depth_fact = Some(format_number(inputs.real_depth));
        item.depth_fact_eom_id = Some(item.depth_plan_eom_id.clone());
        item.depth_fact_eom = Some(item.depth_plan_eom.clone());
        item.diameter_fact = Some(format_number(inputs.real_diameter));
        item.diameter_fact_eom_id = Some(item.diameter_eom_id.clone());
        item.diameter_fact_eom = Some(item.diameter_eom.clone());
        item.x_fact = Some(format_number(coords.0 + inputs.coordinates_deviation));
        item.y_fact = Some(format_number(coords.1 - inputs.coordinates_deviation));
        item.z_fact = Some(format_number(inputs.base_z + inputs.coordinates_deviation));
    }

    Hole {
        item,
        plan_charge_materials: materials.to_vec(),
        stemming_length_plan: format_number(inputs.stemming_length),
    }
}

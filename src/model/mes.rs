//! MES blast project object graph.
//!
//! Mirrors the `mes_pmv` document the plant execution system consumes.
//! Every value is carried as an invariant decimal string because the
//! target schema transmits all fields as attribute text.

use crate::config::{
    DEPTH_EOM, DEPTH_EOM_ID, DIAMETER_EOM, DIAMETER_EOM_ID, EXPLOSIVE_RATIO_BY_WELL,
    HOLE_TYPE_CODE, MES_MESSAGE_ID, MES_SYSTEM_ID, PLANNED_SUBDRILL,
};

/// Root of the MES blast project message.
#[derive(Debug, Clone, PartialEq)]
pub struct MesPmv {
    pub message_id: String,
    pub system_id: String,
    pub business_id: String,
    pub holes: Vec<Hole>,
}

impl MesPmv {
    pub fn new(holes: Vec<Hole>) -> Self {
        Self {
            message_id: MES_MESSAGE_ID.to_string(),
            system_id: MES_SYSTEM_ID.to_string(),
            business_id: String::new(),
            holes,
        }
    }
}

/// One blast hole: identity/geometry attributes, the plan charge
/// composition and the wrapped stemming length.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    pub item: HoleItem,
    pub plan_charge_materials: Vec<Material>,
    pub stemming_length_plan: String,
}

/// Attribute block of one hole. Plan fields are always present; fact
/// fields are populated only when drilling-completion data exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleItem {
    pub blast_project_id: String,
    pub hole_id: String,
    pub hole_number: String,
    pub hole_type_code: String,
    pub hole_material: String,
    pub hole_material_code: String,
    pub pit_code: String,
    pub pit_name: String,
    pub level_code: String,
    pub level_name: String,
    pub block_code: String,
    pub block_name: String,
    pub block_drilling_code: String,
    pub block_drilling_name: String,
    pub block_blasting_code: String,
    pub block_blasting_name: String,
    pub planned_subdrill: String,
    pub explosive_ratio_by_well: String,
    pub depth_plan: String,
    pub depth_plan_eom_id: String,
    pub depth_plan_eom: String,
    pub depth_fact: Option<String>,
    pub depth_fact_eom_id: Option<String>,
    pub depth_fact_eom: Option<String>,
    pub diameter_plan: String,
    pub diameter_eom_id: String,
    pub diameter_eom: String,
    pub diameter_fact: Option<String>,
    pub diameter_fact_eom_id: Option<String>,
    pub diameter_fact_eom: Option<String>,
    pub x: String,
    pub y: String,
    pub z: String,
    pub x_fact: Option<String>,
    pub y_fact: Option<String>,
    pub z_fact: Option<String>,
    pub is_drilling: String,
    pub is_defective: String,
    pub is_delete: String,
}

impl Default for HoleItem {
    fn default() -> Self {
        Self {
            blast_project_id: String::new(),
            hole_id: String::new(),
            hole_number: String::new(),
            hole_type_code: HOLE_TYPE_CODE.to_string(),
            hole_material: String::new(),
            hole_material_code: String::new(),
            pit_code: String::new(),
            pit_name: String::new(),
            level_code: String::new(),
            level_name: String::new(),
            block_code: String::new(),
            block_name: String::new(),
            block_drilling_code: String::new(),
            block_drilling_name: String::new(),
            block_blasting_code: String::new(),
            block_blasting_name: String::new(),
            planned_subdrill: PLANNED_SUBDRILL.to_string(),
            explosive_ratio_by_well: EXPLOSIVE_RATIO_BY_WELL.to_string(),
            depth_plan: String::new(),
            depth_plan_eom_id: DEPTH_EOM_ID.to_string(),
            depth_plan_eom: DEPTH_EOM.to_string(),
            depth_fact: None,
            depth_fact_eom_id: None,
            depth_fact_eom: None,
            diameter_plan: String::new(),
            diameter_eom_id: DIAMETER_EOM_ID.to_string(),
            diameter_eom: DIAMETER_EOM.to_string(),
            diameter_fact: None,
            diameter_fact_eom_id: None,
            diameter_fact_eom: None,
            x: String::new(),
            y: String::new(),
            z: String::new(),
            x_fact: None,
            y_fact: None,
            z_fact: None,
            is_drilling: "false".to_string(),
            is_defective: "false".to_string(),
            is_delete: "false".to_string(),
        }
    }
}

/// One charge material entry attached to a hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub material_code: String,
    pub material_shortname: String,
    pub is_explosive: String,
    pub material_density: String,
    pub cup_density: String,
    pub amounts: Vec<Amount>,
}

/// One mass amount of a charge material; a dispersed charge carries two
/// amounts with distinct priority ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub value: String,
    pub priority: String,
}

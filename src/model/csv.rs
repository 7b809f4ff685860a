//! Flat CSV blast project records (hole + block point tables).

use serde::Serialize;

/// One hole row of the flat CSV blast project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlastHoleRecord {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "x")]
    pub x: f64,
    #[serde(rename = "y")]
    pub y: f64,
    #[serde(rename = "z")]
    pub z: f64,
    #[serde(rename = "blast_block/name")]
    pub blast_block_name: String,
    #[serde(rename = "blast_block/blasted_date")]
    pub blast_block_blasted_date: String,
    #[serde(rename = "design_charge_mass")]
    pub design_charge_mass: f64,
    #[serde(rename = "design_charge_height")]
    pub design_charge_height: f64,
    #[serde(rename = "design_explosive_name")]
    pub design_explosive_name: String,
    #[serde(rename = "depth")]
    pub depth: f64,
    #[serde(rename = "diameter")]
    pub diameter: f64,
    #[serde(rename = "tamping")]
    pub tamping: f64,
}

/// One corner of the block polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlastBlockPointRecord {
    #[serde(rename = "blast_block/name")]
    pub blast_block_name: String,
    #[serde(rename = "sequence")]
    pub sequence: i32,
    #[serde(rename = "x")]
    pub x: f64,
    #[serde(rename = "y")]
    pub y: f64,
    #[serde(rename = "z")]
    pub z: f64,
}

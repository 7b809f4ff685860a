//! Micromine collar and interval records.
//!
//! Flat tabular rows with no nesting. Serde renames carry the exact
//! column headers the target tool matches on; the two tables must be
//! written as sibling files for Micromine to associate them.

use serde::Serialize;

/// One collar row per hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollarRecord {
    #[serde(rename = "HOLE")]
    pub hole: String,
    #[serde(rename = "HOLE_TYPE")]
    pub hole_type: String,
    #[serde(rename = "BLOCK")]
    pub block: String,
    #[serde(rename = "EAST")]
    pub east: f64,
    #[serde(rename = "NORTH")]
    pub north: f64,
    #[serde(rename = "RL")]
    pub rl: f64,
    #[serde(rename = "DIP")]
    pub dip: f64,
    #[serde(rename = "AZIMUTH")]
    pub azimuth: f64,
    #[serde(rename = "DEPTH")]
    pub depth: f64,
    #[serde(rename = "ROW")]
    pub row: i32,
    #[serde(rename = "HOLE DIAM")]
    pub hole_diameter: f64,
    #[serde(rename = "SUBDRILL")]
    pub subdrill: f64,
    #[serde(rename = "FIRING_SEQUENCE")]
    pub firing_sequence: Option<f64>,
    #[serde(rename = "FIRING_DELAY")]
    pub firing_delay: Option<f64>,
    #[serde(rename = "SPACING")]
    pub spacing: f64,
    #[serde(rename = "BURDEN")]
    pub burden: f64,
}

/// One down-hole interval row; every hole gets a stemming interval and
/// one charge interval per charge column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalRecord {
    #[serde(rename = "HOLE")]
    pub hole: String,
    #[serde(rename = "HOLE_TYPE")]
    pub hole_type: String,
    #[serde(rename = "BLOCK")]
    pub block: String,
    #[serde(rename = "FROM")]
    pub from: f64,
    #[serde(rename = "TO")]
    pub to: f64,
    #[serde(rename = "INTERVAL TYPE")]
    pub interval_type: String,
    #[serde(rename = "CHARGE DENSITY")]
    pub charge_density: f64,
    #[serde(rename = "CHARGE LENGTH")]
    pub charge_length: Option<f64>,
    #[serde(rename = "CHARGE DIAMETER")]
    pub charge_diameter: Option<f64>,
    #[serde(rename = "EXPLOSIVE WEIGHT")]
    pub explosive_weight: Option<f64>,
}

//! Input parameters describing one blast block generation run.

use serde::{Deserialize, Serialize};

use crate::config::{HoleMaterialType, MAX_WELLS_COUNT};
use crate::error::{GenerateError, Result};

/// The single source of truth for one generation run. Validated by the
/// input layer; builders assume well-formed values after
/// [`InputParameters::validate`] has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    /// Number of grid rows.
    pub max_row: i32,
    /// Number of grid columns.
    pub max_col: i32,
    /// Block rotation around the base point, degrees.
    pub rotation_angle: f64,
    /// Base point easting.
    pub base_x: f64,
    /// Base point northing.
    pub base_y: f64,
    /// Collar elevation shared by every hole.
    pub base_z: f64,
    /// Uniform hole spacing in both grid directions.
    pub distance: f64,
    /// Pit the block belongs to.
    pub pit_name: String,
    /// Bench level.
    pub level: i32,
    /// Block number within the level.
    pub block_number: i32,
    /// Design hole depth, meters.
    pub design_depth: f64,
    /// Design hole diameter, millimeters.
    pub design_diameter: f64,
    /// Inert stemming column length, meters.
    pub stemming_length: f64,
    /// Main charge mass, kilograms.
    pub main_charge_mass: f64,
    /// Secondary charge mass, used only for a dispersed charge.
    pub secondary_charge_mass: f64,
    /// Whether the charge is split into two columns.
    pub dispersed_charge: bool,
    /// Material the holes are drilled through.
    pub hole_material_type: HoleMaterialType,
    /// Whether drilling-completion data is available; enables fact fields.
    pub is_drilling: bool,
    /// As-drilled depth, meters.
    pub real_depth: f64,
    /// As-drilled diameter, millimeters.
    pub real_diameter: f64,
    /// Simulated deviation between plan and fact coordinates, meters.
    pub coordinates_deviation: f64,
    /// Explosive label for the tabular exports.
    pub explosive_name: String,
    /// Explosive density for the tabular exports.
    pub explosive_density: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            max_row: 100,
            max_col: 10,
            rotation_angle: 0.0,
            base_x: 72690.0,
            base_y: 98890.0,
            base_z: 980.66,
            distance: 5.0,
            pit_name: "Верхне Нижний".to_string(),
            level: 972,
            block_number: 101,
            design_depth: 9.5,
            design_diameter: 250.0,
            stemming_length: 4.59,
            main_charge_mass: 500.0,
            secondary_charge_mass: 600.0,
            dispersed_charge: false,
            hole_material_type: HoleMaterialType::Default,
            is_drilling: false,
            real_depth: 7.0,
            real_diameter: 230.0,
            coordinates_deviation: 0.5,
            explosive_name: "Гранулит М".to_string(),
            explosive_density: 1.0,
        }
    }
}

impl InputParameters {
    /// Number of grid cells this run will produce.
    pub fn cell_count(&self) -> u64 {
        (self.max_row.max(0) as u64) * (self.max_col.max(0) as u64)
    }

    /// Validate the grid shape. Runs once before any building begins; a
    /// violation rejects the whole request with no partial output.
    pub fn validate(&self) -> Result<()> {
        if self.max_row <= 0 {
            return Err(GenerateError::InvalidGridDimension {
                field: "max_row",
                value: self.max_row as i64,
            });
        }
        if self.max_col <= 0 {
            return Err(GenerateError::InvalidGridDimension {
                field: "max_col",
                value: self.max_col as i64,
            });
        }
        let cells = self.cell_count();
        if cells > MAX_WELLS_COUNT {
            return Err(GenerateError::GridTooLarge {
                cells,
                limit: MAX_WELLS_COUNT,
            });
        }
        Ok(())
    }

    /// Blast block display name: `{pit}{level}-{block}`.
    pub fn blast_block_name(&self) -> String {
        format!("{}{}-{}", self.pit_name, self.level, self.block_number)
    }

    /// Identity codes derived from the site identity fields:
    /// `(level_code, block_name, block_code)`.
    pub fn block_codes(&self) -> (String, String, String) {
        let level_code = format!("{}{}", self.pit_name, self.level);
        let block_name = format!("{}-{}", self.level, self.block_number);
        let block_code = format!("{}-{}", level_code, self.block_number);
        (level_code, block_name, block_code)
    }
}

/// Hole number for a grid cell: zero-padded row and column concatenated.
/// External systems match holes by this string; the format is a contract.
pub fn hole_number(row: i32, col: i32) -> String {
    format!("{:02}{:02}", row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default() {
        assert!(InputParameters::default().validate().is_ok());
    }

    #[test]
    fn test_validate_grid_ceiling() {
        let mut inputs = InputParameters {
            max_row: 70,
            max_col: 70,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());

        inputs.max_row = 71;
        inputs.max_col = 71;
        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            GenerateError::GridTooLarge {
                cells: 5041,
                limit: 5000
            }
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_dimensions() {
        let inputs = InputParameters {
            max_row: 0,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());

        let inputs = InputParameters {
            max_col: -3,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_block_codes() {
        let inputs = InputParameters {
            pit_name: "P".to_string(),
            level: 972,
            block_number: 101,
            ..Default::default()
        };
        let (level_code, block_name, block_code) = inputs.block_codes();
        assert_eq!(level_code, "P972");
        assert_eq!(block_name, "972-101");
        assert_eq!(block_code, "P972-101");
        assert_eq!(inputs.blast_block_name(), "P972-101");
    }

    #[test]
    fn test_hole_number_padding() {
        assert_eq!(hole_number(0, 0), "0000");
        assert_eq!(hole_number(1, 9), "0109");
        assert_eq!(hole_number(12, 34), "1234");
    }
}

//! Geomix blast project object graph.
//!
//! Project → Blocks → Block → {Points, Wells}; all values are rendered
//! as attribute strings with no namespace declarations.

use crate::config::{GEOMIX_BOOSTER_TYPE, GEOMIX_DETONATOR_TYPE, GEOMIX_EXPLOSIVE_TYPE};

/// Root `Projects` element.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomixProjects {
    pub projects: Vec<GeomixProject>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeomixProject {
    pub project_id: String,
    pub date_begin: String,
    pub date_end: String,
    pub blocks: Vec<GeomixBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeomixBlock {
    pub block_id: String,
    /// Four boundary points of the block polygon, in corner order.
    pub points: Vec<GeomixPoint>,
    /// One well per grid cell, in canonical numbering order.
    pub wells: Vec<GeomixWell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeomixPoint {
    pub x: String,
    pub y: String,
    pub z: String,
}

/// A well mirrors the hole geometry plus a depth and a single charge; it
/// carries none of the drilling fact fields the MES schema has.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomixWell {
    pub wel_id: String,
    pub wel_number: String,
    pub depth: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub dx: String,
    pub dy: String,
    pub dm: String,
    pub rig_id: String,
    pub driver_id: String,
    pub charges: Vec<GeomixCharge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeomixCharge {
    /// Charge quantity, kilograms.
    pub q: String,
    /// Charge column length, meters.
    pub l: String,
    pub explosive_type: String,
    pub booster_type: String,
    pub booster_type2: String,
    pub detonator_type: String,
    pub delay: String,
    pub detonator_type2: String,
    pub delay2: String,
}

impl GeomixCharge {
    pub fn new(q: String, l: String) -> Self {
        Self {
            q,
            l,
            explosive_type: GEOMIX_EXPLOSIVE_TYPE.to_string(),
            booster_type: GEOMIX_BOOSTER_TYPE.to_string(),
            booster_type2: GEOMIX_BOOSTER_TYPE.to_string(),
            detonator_type: GEOMIX_DETONATOR_TYPE.to_string(),
            delay: "0".to_string(),
            detonator_type2: String::new(),
            delay2: "0".to_string(),
        }
    }
}

//! Domain model: input parameters and the three export object graphs.

mod csv;
mod geomix;
mod input;
mod mes;
mod micromine;
mod soap;

pub use csv::{BlastBlockPointRecord, BlastHoleRecord};
pub use geomix::{
    GeomixBlock, GeomixCharge, GeomixPoint, GeomixProject, GeomixProjects, GeomixWell,
};
pub use input::{hole_number, InputParameters};
pub use mes::{Amount, Hole, HoleItem, Material, MesPmv};
pub use micromine::{CollarRecord, IntervalRecord};
pub use soap::SoapResponse;

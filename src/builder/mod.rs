//! Schema-specific object graph builders sharing the grid and charge core.

mod csv;
mod geomix;
mod mes;
mod micromine;

pub use csv::{build_blast_hole_records, build_block_point_records};
pub use geomix::build_geomix_project;
pub use mes::build_mes_project;
pub use micromine::{build_collar_records, build_interval_records};

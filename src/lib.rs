//! pmv-convert-rs - Blast hole grid generation and multi-format export.
//!
//! This library turns a small set of geometric and engineering parameters
//! (grid size, spacing, rotation, base coordinates, charge composition)
//! into ready-to-submit blast project documents in several external
//! schemas: a SOAP-wrapped MES message, a Geomix XML project, a
//! Micromine collar/interval file pair, and a flat CSV blast project.
//!
//! # Example
//!
//! ```no_run
//! use pmv_convert_rs::{generate_mes_document, InputParameters};
//!
//! let inputs = InputParameters::default();
//! let envelope = generate_mes_document(&inputs).unwrap();
//! println!("{}", envelope);
//! ```

pub mod builder;
pub mod charge;
pub mod config;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod model;

// Re-exports for convenience
pub use config::HoleMaterialType;
pub use encoder::parse_soap_response;
pub use error::{GenerateError, Result};
pub use model::{InputParameters, MesPmv, SoapResponse};

/// Generate the SOAP-wrapped MES blast project message.
///
/// Validates the grid, builds the hole list and renders the envelope
/// with the inner `mes_pmv` document carried as CDATA text.
pub fn generate_mes_document(inputs: &InputParameters) -> Result<String> {
    inputs.validate()?;
    tracing::debug!(
        rows = inputs.max_row,
        cols = inputs.max_col,
        "generating MES blast project"
    );
    let project = builder::build_mes_project(inputs);
    Ok(encoder::encode_soap_request(&project))
}

/// Generate the Geomix XML project document.
pub fn generate_geomix_document(inputs: &InputParameters) -> Result<String> {
    inputs.validate()?;
    tracing::debug!(
        rows = inputs.max_row,
        cols = inputs.max_col,
        "generating Geomix project"
    );
    let projects = builder::build_geomix_project(inputs);
    Ok(encoder::encode_geomix_projects(&projects))
}

/// Generate the Micromine export: the collar document and the interval
/// document, in that order.
pub fn generate_micromine_documents(inputs: &InputParameters) -> Result<(String, String)> {
    inputs.validate()?;
    tracing::debug!(
        rows = inputs.max_row,
        cols = inputs.max_col,
        "generating Micromine collar/interval pair"
    );
    let collars = encoder::encode_records(&builder::build_collar_records(inputs))?;
    let intervals = encoder::encode_records(&builder::build_interval_records(inputs))?;
    Ok((collars, intervals))
}

/// Generate the flat CSV export: the hole document and the block
/// boundary document, in that order.
pub fn generate_csv_documents(inputs: &InputParameters) -> Result<(String, String)> {
    inputs.validate()?;
    tracing::debug!(
        rows = inputs.max_row,
        cols = inputs.max_col,
        "generating CSV blast project pair"
    );
    let holes = encoder::encode_records(&builder::build_blast_hole_records(inputs))?;
    let points = encoder::encode_records(&builder::build_block_point_records(inputs))?;
    Ok((holes, points))
}

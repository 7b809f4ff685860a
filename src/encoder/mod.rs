//! Wire-format encoders for the generated domain objects.

pub mod geomix;
pub mod mes;
pub mod micromine;
pub mod xml;

pub use geomix::encode_geomix_projects;
pub use mes::{
    decode_mes_pmv, decode_soap_request, encode_mes_pmv, encode_soap_request, parse_soap_response,
};
pub use micromine::encode_records;

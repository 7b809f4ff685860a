//! Delimited-text encoding for the tabular exports.
//!
//! Both the Micromine collar/interval pair and the flat blast-project
//! pair are semicolon-delimited with a header row; column names come
//! from the record types' serde renames.

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::{GenerateError, Result};

/// Serialize records into a semicolon-delimited document with a header
/// row.
pub fn encode_records<T: Serialize>(records: &[T]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| encode_error::<T>(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| encode_error::<T>(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| encode_error::<T>(e.to_string()))
}

fn encode_error<T>(message: String) -> GenerateError {
    GenerateError::Encode {
        type_name: std::any::type_name::<T>(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_collar_records, build_interval_records};
    use crate::model::InputParameters;

    fn small_inputs() -> InputParameters {
        InputParameters {
            max_row: 1,
            max_col: 2,
            ..InputParameters::default()
        }
    }

    #[test]
    fn test_collar_header_and_delimiter() {
        let records = build_collar_records(&small_inputs());
        let doc = encode_records(&records).unwrap();

        let mut lines = doc.lines();
        assert_eq!(
            lines.next().unwrap(),
            "HOLE;HOLE_TYPE;BLOCK;EAST;NORTH;RL;DIP;AZIMUTH;DEPTH;ROW;HOLE DIAM;SUBDRILL;FIRING_SEQUENCE;FIRING_DELAY;SPACING;BURDEN"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_interval_header() {
        let records = build_interval_records(&small_inputs());
        let doc = encode_records(&records).unwrap();

        assert!(doc.starts_with(
            "HOLE;HOLE_TYPE;BLOCK;FROM;TO;INTERVAL TYPE;CHARGE DENSITY;CHARGE LENGTH;CHARGE DIAMETER;EXPLOSIVE WEIGHT"
        ));
    }

    #[test]
    fn test_no_records_yields_empty_document() {
        let records: Vec<crate::model::CollarRecord> = Vec::new();
        let doc = encode_records(&records).unwrap();
        assert!(doc.is_empty());
    }
}

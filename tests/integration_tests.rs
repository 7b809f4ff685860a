//! End-to-end tests through the public generation API.
//!
//! These tests validate the structural correctness of the generated
//! documents and the cross-format contracts (coordinate consistency,
//! hole numbering, grid guards) rather than byte-for-byte snapshots.

use pretty_assertions::assert_eq;

use pmv_convert_rs::encoder::{decode_soap_request, parse_soap_response};
use pmv_convert_rs::{
    generate_csv_documents, generate_geomix_document, generate_mes_document,
    generate_micromine_documents, GenerateError, InputParameters,
};

/// The flat 2x2 reference scenario: no rotation, 5 m spacing.
fn reference_inputs() -> InputParameters {
    InputParameters {
        max_row: 2,
        max_col: 2,
        rotation_angle: 0.0,
        base_x: 100.0,
        base_y: 200.0,
        distance: 5.0,
        pit_name: "P".to_string(),
        level: 1,
        block_number: 1,
        dispersed_charge: false,
        ..InputParameters::default()
    }
}

#[test]
fn test_reference_scenario_holes_and_coordinates() {
    let envelope = generate_mes_document(&reference_inputs()).unwrap();
    let project = decode_soap_request(&envelope).unwrap();

    let summary: Vec<(String, String, String)> = project
        .holes
        .iter()
        .map(|h| {
            (
                h.item.hole_number.clone(),
                h.item.x.clone(),
                h.item.y.clone(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("0000".to_string(), "100".to_string(), "200".to_string()),
            ("0001".to_string(), "105".to_string(), "200".to_string()),
            ("0100".to_string(), "100".to_string(), "205".to_string()),
            ("0101".to_string(), "105".to_string(), "205".to_string()),
        ]
    );

    for hole in &project.holes {
        assert_eq!(hole.plan_charge_materials.len(), 2);
        let explosive = hole
            .plan_charge_materials
            .iter()
            .find(|m| m.is_explosive == "true")
            .unwrap();
        assert_eq!(explosive.amounts.len(), 1);
        assert_eq!(explosive.amounts[0].priority, "1");
    }
}

#[test]
fn test_mes_round_trip_preserves_project() {
    let mut inputs = reference_inputs();
    inputs.is_drilling = true;
    inputs.dispersed_charge = true;
    inputs.rotation_angle = 17.5;

    let envelope = generate_mes_document(&inputs).unwrap();
    let decoded = decode_soap_request(&envelope).unwrap();
    let reencoded = generate_from_decoded(&decoded);
    assert_eq!(decode_soap_request(&reencoded).unwrap(), decoded);

    // One project id is shared by the batch; hole ids are all distinct.
    let project_ids: Vec<&str> = decoded
        .holes
        .iter()
        .map(|h| h.item.blast_project_id.as_str())
        .collect();
    assert!(project_ids.windows(2).all(|w| w[0] == w[1]));
    let mut hole_ids: Vec<&str> = decoded
        .holes
        .iter()
        .map(|h| h.item.hole_id.as_str())
        .collect();
    hole_ids.sort_unstable();
    hole_ids.dedup();
    assert_eq!(hole_ids.len(), 4);
}

fn generate_from_decoded(project: &pmv_convert_rs::MesPmv) -> String {
    pmv_convert_rs::encoder::encode_soap_request(project)
}

#[test]
fn test_grid_guard_through_public_api() {
    let ok = InputParameters {
        max_row: 70,
        max_col: 70,
        ..InputParameters::default()
    };
    assert!(generate_geomix_document(&ok).is_ok());

    let too_big = InputParameters {
        max_row: 71,
        max_col: 71,
        ..InputParameters::default()
    };
    let err = generate_geomix_document(&too_big).unwrap_err();
    match err {
        GenerateError::GridTooLarge { cells, limit } => {
            assert_eq!(cells, 5041);
            assert_eq!(limit, 5000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_all_formats_agree_on_coordinates() {
    let mut inputs = reference_inputs();
    inputs.rotation_angle = 30.0;

    let envelope = generate_mes_document(&inputs).unwrap();
    let mes = decode_soap_request(&envelope).unwrap();
    let expected: Vec<(f64, f64)> = mes
        .holes
        .iter()
        .map(|h| (h.item.x.parse().unwrap(), h.item.y.parse().unwrap()))
        .collect();

    let geomix = generate_geomix_document(&inputs).unwrap();
    let geomix_coords: Vec<(f64, f64)> = geomix
        .lines()
        .filter(|l| l.trim_start().starts_with("<Well "))
        .map(|l| (xml_attr(l, "X"), xml_attr(l, "Y")))
        .collect();
    assert_eq!(geomix_coords, expected);

    let (collars, _) = generate_micromine_documents(&inputs).unwrap();
    assert_eq!(csv_coords(&collars, 3, 4), expected);

    let (holes_csv, _) = generate_csv_documents(&inputs).unwrap();
    assert_eq!(csv_coords(&holes_csv, 1, 2), expected);
}

fn xml_attr(line: &str, name: &str) -> f64 {
    let marker = format!(" {name}=\"");
    let start = line.find(&marker).unwrap() + marker.len();
    let end = start + line[start..].find('"').unwrap();
    line[start..end].parse().unwrap()
}

fn csv_coords(document: &str, x_col: usize, y_col: usize) -> Vec<(f64, f64)> {
    document
        .lines()
        .skip(1)
        .map(|line| {
            let cells: Vec<&str> = line.split(';').collect();
            (cells[x_col].parse().unwrap(), cells[y_col].parse().unwrap())
        })
        .collect()
}

#[test]
fn test_all_formats_produce_one_record_per_cell() {
    let inputs = InputParameters {
        max_row: 3,
        max_col: 4,
        ..InputParameters::default()
    };

    let mes = decode_soap_request(&generate_mes_document(&inputs).unwrap()).unwrap();
    assert_eq!(mes.holes.len(), 12);

    let geomix = generate_geomix_document(&inputs).unwrap();
    assert_eq!(geomix.matches("<Well ").count(), 12);

    let (collars, intervals) = generate_micromine_documents(&inputs).unwrap();
    assert_eq!(collars.lines().count(), 13);
    // Two intervals per hole for a single (non-dispersed) charge.
    assert_eq!(intervals.lines().count(), 25);

    let (holes_csv, points_csv) = generate_csv_documents(&inputs).unwrap();
    assert_eq!(holes_csv.lines().count(), 13);
    // Block boundary: header plus four corner points.
    assert_eq!(points_csv.lines().count(), 5);
}

#[test]
fn test_response_classification_truth_table() {
    let cases = [
        ("true", "OK. Status code: 200", true),
        ("TRUE", "OK. Status code: 200", true),
        ("true", "Internal error. Status code: 500", false),
        ("false", "OK. Status code: 200", false),
        ("", "", false),
    ];
    for (status, error, expected) in cases {
        let doc = format!(
            r#"<x:Envelope xmlns:x="http://schemas.xmlsoap.org/soap/envelope/">
                 <x:Body>
                   <SoapXmlRequestResponse>
                     <xmlResponse>
                       <AsuSzmInSoapResponseDto>
                         <Status>{status}</Status>
                         <Error>{error}</Error>
                       </AsuSzmInSoapResponseDto>
                     </xmlResponse>
                   </SoapXmlRequestResponse>
                 </x:Body>
               </x:Envelope>"#
        );
        let response = parse_soap_response(&doc).unwrap();
        assert_eq!(
            response.is_success(),
            expected,
            "status={status:?} error={error:?}"
        );
    }
}

#[test]
fn test_malformed_response_is_an_error() {
    assert!(parse_soap_response("<Envelope><Body>").is_err());
    assert!(parse_soap_response("<Envelope><Body /></Envelope>").is_err());
}

#[test]
fn test_non_positive_dimensions_rejected() {
    for (rows, cols) in [(0, 10), (10, 0), (-1, 10)] {
        let inputs = InputParameters {
            max_row: rows,
            max_col: cols,
            ..InputParameters::default()
        };
        assert!(generate_mes_document(&inputs).is_err(), "{rows}x{cols}");
    }
}

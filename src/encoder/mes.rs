//! MES blast project encoding.
//!
//! The inner `mes_pmv` document and the outer SOAP envelope are two
//! independent serialization passes: the inner document is rendered to
//! a string first, then carried as an opaque CDATA payload of the
//! envelope's `tem:Message` element, prefixed with a synthetic XML
//! declaration. Decoding strips the declaration back out before
//! parsing the payload.

use crate::config::{SOAP_ENVELOPE_NS, TEMPURI_NS};
use crate::error::{GenerateError, Result};
use crate::model::{Amount, Hole, HoleItem, Material, MesPmv, SoapResponse};

use super::xml::{parse_document, XmlElement, XmlWriter};

const INNER_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// Render the inner `mes_pmv` document, without an XML declaration.
pub fn encode_mes_pmv(project: &MesPmv) -> String {
    let mut w = XmlWriter::new();
    w.begin_element("mes_pmv");
    w.attr("messageid", &project.message_id);
    w.attr("systemid", &project.system_id);
    w.attr("businessid", &project.business_id);

    w.begin_element("holes_in_blast_project");
    for hole in &project.holes {
        write_hole(&mut w, hole);
    }
    w.end_element();

    w.end_element();
    w.finish()
}

/// Render the full SOAP request: the inner document becomes the CDATA
/// payload of `tem:Message`, prefixed with a synthetic declaration.
pub fn encode_soap_request(project: &MesPmv) -> String {
    let inner = encode_mes_pmv(project);

    let mut w = XmlWriter::new();
    w.begin_element("x:Envelope");
    w.attr("xmlns:x", SOAP_ENVELOPE_NS);
    w.attr("xmlns:tem", TEMPURI_NS);

    w.begin_element("x:Header");
    w.end_element();

    w.begin_element("x:Body");
    w.begin_element("tem:SoapXmlRequest");
    w.begin_element("tem:xmlRequest");
    w.begin_element("tem:Message");
    w.cdata(&format!("{}\n{}", INNER_DECLARATION, inner));
    w.end_element();
    w.end_element();
    w.end_element();
    w.end_element();

    w.end_element();
    w.finish()
}

fn write_hole(w: &mut XmlWriter, hole: &Hole) {
    w.begin_element("hole");

    w.begin_element("holeitem");
    write_hole_item(w, &hole.item);
    w.end_element();

    w.begin_element("planChargeMaterials");
    for material in &hole.plan_charge_materials {
        write_material(w, material);
    }
    w.end_element();

    w.begin_element("stemming_length_plan");
    w.attr("value", &hole.stemming_length_plan);
    w.end_element();

    w.end_element();
}

fn write_hole_item(w: &mut XmlWriter, item: &HoleItem) {
    w.attr("blast_project_Id", &item.blast_project_id);
    w.attr("hole_id", &item.hole_id);
    w.attr("hole_number", &item.hole_number);
    w.attr("hole_type_code", &item.hole_type_code);
    w.attr("hole_material", &item.hole_material);
    w.attr("hole_material_code", &item.hole_material_code);
    w.attr("pit_code", &item.pit_code);
    w.attr("pit_name", &item.pit_name);
    w.attr("level_code", &item.level_code);
    w.attr("level_name", &item.level_name);
    w.attr("block_code", &item.block_code);
    w.attr("block_name", &item.block_name);
    w.attr("blockDrilling_code", &item.block_drilling_code);
    w.attr("blockDrilling_name", &item.block_drilling_name);
    w.attr("blockBlasting_code", &item.block_blasting_code);
    w.attr("blockBlasting_name", &item.block_blasting_name);
    w.attr("PlannedSubdrill", &item.planned_subdrill);
    w.attr("ExplosiveRatioByWell", &item.explosive_ratio_by_well);
    w.attr("depth_plan", &item.depth_plan);
    w.attr("depth_plan_eom_id", &item.depth_plan_eom_id);
    w.attr("depth_plan_eom", &item.depth_plan_eom);
    opt_attr(w, "depth_fact", &item.depth_fact);
    opt_attr(w, "depth_fact_eom_id", &item.depth_fact_eom_id);
    opt_attr(w, "depth_fact_eom", &item.depth_fact_eom);
    w.attr("diameter_plan", &item.diameter_plan);
    w.attr("diameter_eom_id", &item.diameter_eom_id);
    w.attr("diameter_eom", &item.diameter_eom);
    opt_attr(w, "diameter_fact", &item.diameter_fact);
    opt_attr(w, "diameter_fact_eom_id", &item.diameter_fact_eom_id);
    opt_attr(w, "diameter_fact_eom", &item.diameter_fact_eom);
    w.attr("x", &item.x);
    w.attr("y", &item.y);
    w.attr("z", &item.z);
    opt_attr(w, "x_fact", &item.x_fact);
    opt_attr(w, "y_fact", &item.y_fact);
    opt_attr(w, "z_fact", &item.z_fact);
    w.attr("isDrilling", &item.is_drilling);
    w.attr("isDefective", &item.is_defective);
    w.attr("isDelete", &item.is_delete);
}

fn write_material(w: &mut XmlWriter, material: &Material) {
    w.begin_element("material");
    w.attr("material_code", &material.material_code);
    w.attr("material_shortname", &material.material_shortname);
    w.attr("is_explosive", &material.is_explosive);
    w.attr("material_density", &material.material_density);
    w.attr("cup_density", &material.cup_density);

    w.begin_element("amounts");
    for amount in &material.amounts {
        w.begin_element("amount");
        w.attr("value", &amount.value);
        w.attr("priority", &amount.priority);
        w.end_element();
    }
    w.end_element();

    w.end_element();
}

fn opt_attr(w: &mut XmlWriter, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        w.attr(name, value);
    }
}

/// Extract and parse the inner `mes_pmv` document back out of a SOAP
/// request envelope.
pub fn decode_soap_request(document: &str) -> Result<MesPmv> {
    let envelope = parse_document(document)?;
    let message = descend(
        &envelope,
        &["Body", "SoapXmlRequest", "xmlRequest", "Message"],
        "soap request",
    )?;
    let payload = strip_declaration(&message.text);
    decode_mes_pmv(payload)
}

/// Parse a bare `mes_pmv` document.
pub fn decode_mes_pmv(document: &str) -> Result<MesPmv> {
    let root = parse_document(document)?;
    if root.local_name() != "mes_pmv" {
        return Err(GenerateError::MissingElement {
            name: "mes_pmv",
            document: "mes_pmv",
        });
    }

    let mut project = MesPmv {
        message_id: required_attr(&root, "messageid")?,
        system_id: required_attr(&root, "systemid")?,
        business_id: root.attr("businessid").unwrap_or_default().to_string(),
        holes: Vec::new(),
    };

    let holes = root
        .child("holes_in_blast_project")
        .ok_or(GenerateError::MissingElement {
            name: "holes_in_blast_project",
            document: "mes_pmv",
        })?;
    for hole in holes.children_named("hole") {
        project.holes.push(read_hole(hole)?);
    }
    Ok(project)
}

fn read_hole(element: &XmlElement) -> Result<Hole> {
    let item = element.child("holeitem").ok_or(GenerateError::MissingElement {
        name: "holeitem",
        document: "mes_pmv",
    })?;

    let mut materials = Vec::new();
    if let Some(list) = element.child("planChargeMaterials") {
        for material in list.children_named("material") {
            materials.push(read_material(material)?);
        }
    }

    let stemming = element
        .child("stemming_length_plan")
        .and_then(|e| e.attr("value"))
        .unwrap_or_default()
        .to_string();

    Ok(Hole {
        item: read_hole_item(item)?,
        plan_charge_materials: materials,
        stemming_length_plan: stemming,
    })
}

fn read_hole_item(e: &XmlElement) -> Result<HoleItem> {
    Ok(HoleItem {
        blast_project_id: required_attr(e, "blast_project_Id")?,
        hole_id: required_attr(e, "hole_id")?,
        hole_number: required_attr(e, "hole_number")?,
        hole_type_code: required_attr(e, "hole_type_code")?,
        hole_material: required_attr(e, "hole_material")?,
        hole_material_code: required_attr(e, "hole_material_code")?,
        pit_code: required_attr(e, "pit_code")?,
        pit_name: required_attr(e, "pit_name")?,
        level_code: required_attr(e, "level_code")?,
        level_name: required_attr(e, "level_name")?,
        block_code: required_attr(e, "block_code")?,
        block_name: required_attr(e, "block_name")?,
        block_drilling_code: required_attr(e, "blockDrilling_code")?,
        block_drilling_name: required_attr(e, "blockDrilling_name")?,
        block_blasting_code: required_attr(e, "blockBlasting_code")?,
        block_blasting_name: required_attr(e, "blockBlasting_name")?,
        planned_subdrill: required_attr(e, "PlannedSubdrill")?,
        explosive_ratio_by_well: required_attr(e, "ExplosiveRatioByWell")?,
        depth_plan: required_attr(e, "depth_plan")?,
        depth_plan_eom_id: required_attr(e, "depth_plan_eom_id")?,
        depth_plan_eom: required_attr(e, "depth_plan_eom")?,
        depth_fact: optional_attr(e, "depth_fact"),
        depth_fact_eom_id: optional_attr(e, "depth_fact_eom_id"),
        depth_fact_eom: optional_attr(e, "depth_fact_eom"),
        diameter_plan: required_attr(e, "diameter_plan")?,
        diameter_eom_id: required_attr(e, "diameter_eom_id")?,
        diameter_eom: required_attr(e, "diameter_eom")?,
        diameter_fact: optional_attr(e, "diameter_fact"),
        diameter_fact_eom_id: optional_attr(e, "diameter_fact_eom_id"),
        diameter_fact_eom: optional_attr(e, "diameter_fact_eom"),
        x: required_attr(e, "x")?,
        y: required_attr(e, "y")?,
        z: required_attr(e, "z")?,
        x_fact: optional_attr(e, "x_fact"),
        y_fact: optional_attr(e, "y_fact"),
        z_fact: optional_attr(e, "z_fact"),
        is_drilling: required_attr(e, "isDrilling")?,
        is_defective: required_attr(e, "isDefective")?,
        is_delete: required_attr(e, "isDelete")?,
    })
}

fn read_material(e: &XmlElement) -> Result<Material> {
    let mut amounts = Vec::new();
    if let Some(list) = e.child("amounts") {
        for amount in list.children_named("amount") {
            amounts.push(Amount {
                value: required_attr(amount, "value")?,
                priority: required_attr(amount, "priority")?,
            });
        }
    }
    Ok(Material {
        material_code: required_attr(e, "material_code")?,
        material_shortname: required_attr(e, "material_shortname")?,
        is_explosive: required_attr(e, "is_explosive")?,
        material_density: required_attr(e, "material_density")?,
        cup_density: required_attr(e, "cup_density")?,
        amounts,
    })
}

/// Parse a SOAP response envelope into the status/error pair.
pub fn parse_soap_response(document: &str) -> Result<SoapResponse> {
    let envelope = parse_document(document)?;
    let dto = descend(
        &envelope,
        &[
            "Body",
            "SoapXmlRequestResponse",
            "xmlResponse",
            "AsuSzmInSoapResponseDto",
        ],
        "soap response",
    )?;
    let status = dto
        .child("Status")
        .map(|e| e.text.clone())
        .unwrap_or_default();
    let error = dto
        .child("Error")
        .map(|e| e.text.clone())
        .unwrap_or_default();
    Ok(SoapResponse { status, error })
}

fn descend<'a>(
    root: &'a XmlElement,
    path: &[&'static str],
    document: &'static str,
) -> Result<&'a XmlElement> {
    let mut current = root;
    for &name in path {
        current = current.child(name).ok_or(GenerateError::MissingElement {
            name,
            document,
        })?;
    }
    Ok(current)
}

fn required_attr(element: &XmlElement, name: &'static str) -> Result<String> {
    element
        .attr(name)
        .map(str::to_string)
        .ok_or_else(|| GenerateError::MissingAttribute {
            name: name.to_string(),
            element: element.name.clone(),
        })
}

fn optional_attr(element: &XmlElement, name: &str) -> Option<String> {
    element.attr(name).map(str::to_string)
}

fn strip_declaration(payload: &str) -> &str {
    let trimmed = payload.trim_start();
    if trimmed.starts_with("<?xml") {
        match trimmed.find("?>") {
            Some(end) => trimmed[end + 2..].trim_start(),
            None => trimmed,
        }
    } else {
        trimmed
    }
}

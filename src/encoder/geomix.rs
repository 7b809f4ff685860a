//! Geomix project encoding: plain attribute XML, no namespaces, no
//! declaration.

use crate::model::{GeomixBlock, GeomixCharge, GeomixProjects, GeomixWell};

use super::xml::XmlWriter;

/// Render the `Projects` document.
pub fn encode_geomix_projects(projects: &GeomixProjects) -> String {
    let mut w = XmlWriter::new();
    w.begin_element("Projects");
    for project in &projects.projects {
        w.begin_element("Project");
        w.attr("ProjectID", &project.project_id);
        w.attr("DateBegin", &project.date_begin);
        w.attr("DateEnd", &project.date_end);
        w.begin_element("Blocks");
        for block in &project.blocks {
            write_block(&mut w, block);
        }
        w.end_element();
        w.end_element();
    }
    w.end_element();
    w.finish()
}

fn write_block(w: &mut XmlWriter, block: &GeomixBlock) {
    w.begin_element("Block");
    w.attr("BlockID", &block.block_id);

    w.begin_element("Points");
    for point in &block.points {
        w.begin_element("Point");
        w.attr("X", &point.x);
        w.attr("Y", &point.y);
        w.attr("Z", &point.z);
        w.end_element();
    }
    w.end_element();

    w.begin_element("Wells");
    for well in &block.wells {
        write_well(w, well);
    }
    w.end_element();

    w.end_element();
}

fn write_well(w: &mut XmlWriter, well: &GeomixWell) {
    w.begin_element("Well");
    w.attr("WelID", &well.wel_id);
    w.attr("WelNumber", &well.wel_number);
    w.attr("Depth", &well.depth);
    w.attr("X", &well.x);
    w.attr("Y", &well.y);
    w.attr("Z", &well.z);
    w.attr("DX", &well.dx);
    w.attr("DY", &well.dy);
    w.attr("DM", &well.dm);
    w.attr("RigID", &well.rig_id);
    w.attr("DriverID", &well.driver_id);

    w.begin_element("Charges");
    for charge in &well.charges {
        write_charge(w, charge);
    }
    w.end_element();

    w.end_element();
}

fn write_charge(w: &mut XmlWriter, charge: &GeomixCharge) {
    w.begin_element("Charge");
    w.attr("Q", &charge.q);
    w.attr("L", &charge.l);
    w.attr("E", &charge.explosive_type);
    w.attr("B", &charge.booster_type);
    w.attr("B1", &charge.booster_type2);
    w.attr("D", &charge.detonator_type);
    w.attr("DL", &charge.delay);
    w.attr("D1", &charge.detonator_type2);
    w.attr("DL1", &charge.delay2);
    w.end_element();
}

//! Layer document builders.
//!
//! Two document shapes share the unit symbol layout: the situation layer
//! (`.slf`, layer-definition-v4) and the plan layer (`.spl`,
//! plan-layer-definition-v1). The downstream C2 tool validates both against a
//! fixed schema, so element names, nesting and namespace declarations are
//! emitted exactly, not approximated.

use crate::error::Result;
use crate::export::xml::Element;
use crate::ident;
use crate::types::UnitRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;
use uuid::Uuid;

const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const LAYER_NS: &str = "http://schemas.systematic.com/2011/products/layer-definition-v4";
const PLAN_NS: &str = "http://schemas.systematic.com/2011/products/plan-layer-definition-v1";

const SITUATION_LAYER_NAME: &str = "foo";
const PLAN_LAYER_NAME: &str = "OPSUM 09OCT1500Z2025";
const SECURITY_CLASSIFICATION: &str = "Unmarked";
const EXTENSION_DESCRIPTION: &str = "This extension contains prefix and suffix for the security classification for the plan layer";

pub const SLF_FILE_NAME: &str = "LandPower.slf";
pub const SPL_FILE_NAME: &str = "LandPower.spl";

fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `Id/{FirstLong,SecondLong}` block, unsigned decimal halves.
fn id_element(id: &Uuid) -> Element {
    Element::new("Id")
        .child(Element::new("FirstLong").text(&ident::most_significant_bits(id).to_string()))
        .child(Element::new("SecondLong").text(&ident::least_significant_bits(id).to_string()))
}

fn extension_element() -> Element {
    Element::new("Extension")
        .attr("xmlns", LAYER_NS)
        .child(Element::new("ExtensionDescription").text(EXTENSION_DESCRIPTION))
        .child(Element::new("SecurityClassificationPrefix"))
        .child(Element::new("SecurityClassificationPostfix"))
}

/// One `Symbol` element. The unit's own identifier goes into the `Id` block;
/// a fresh identifier here would break symbol correlation across exports.
fn unit_symbol(record: &UnitRecord, reported: &str) -> Element {
    Element::new("Symbol")
        .attr("xsi:type", "Unit")
        .child(
            Element::new("Location")
                .attr("xsi:type", "Point")
                .child(Element::new("Latitude").text(&record.location.latitude.to_string()))
                .child(Element::new("Longitude").text(&record.location.longitude.to_string())),
        )
        .child(Element::new("Priority").text(&record.priority))
        .child(Element::new("Name").text(&record.name))
        .child(
            Element::new("Report")
                .child(Element::new("Comment").text(&record.comment))
                .child(Element::new("Reported").text(reported)),
        )
        .child(Element::new("SymbolCode").child(Element::new("SymbolCodeString").text(&record.symbol_code)))
        .child(Element::new("StaffComments").text(&record.staff_comments))
        .child(id_element(&record.uuid))
        .child(Element::new("AbbreviatedName").text(&record.abbreviated_name))
        .child(Element::new("OperationalStatus").text(&record.operational_status))
}

/// Build a situation layer document.
///
/// Mints one fresh document-level identifier; unit symbols keep the order of
/// `records` and reuse each record's own identifier.
pub fn build_situation_layer(records: &[UnitRecord], now: DateTime<Utc>) -> Element {
    let reported = format_timestamp(now);
    let document_id = ident::generate();

    Element::new("LayerFileFormatRoot")
        .attr("xmlns:xsd", XSD_NS)
        .attr("xmlns:xsi", XSI_NS)
        .attr("xmlns", LAYER_NS)
        .child(
            Element::new("Layers").child(
                Element::new("Layer")
                    .attr("xsi:type", "SituationLayer")
                    .child(Element::new("Name").text(SITUATION_LAYER_NAME))
                    .child(Element::new("SecurityClassification").text(SECURITY_CLASSIFICATION))
                    .child(Element::new("Symbols").children(records.iter().map(|r| unit_symbol(r, &reported))))
                    .child(id_element(&document_id).attr("xmlns", LAYER_NS))
                    .child(extension_element())
                    .child(Element::new("Category").text("GloballySignificant"))
                    .child(Element::new("Path")),
            ),
        )
        .child(Element::new("Version").text("4"))
}

/// Build a plan layer document.
///
/// Mints two fresh identifiers: the document-level `Id` and the `customId`
/// custom attribute value. Unit symbols behave as in the situation layer.
pub fn build_plan_layer(records: &[UnitRecord], now: DateTime<Utc>) -> Element {
    let reported = format_timestamp(now);
    let document_id = ident::generate();
    let custom_id = ident::generate();

    Element::new("PlanLayer")
        .attr("xmlns:xsd", XSD_NS)
        .attr("xmlns:xsi", XSI_NS)
        .attr("xmlns", PLAN_NS)
        .child(
            Element::new("CustomAttributes").attr("xmlns", LAYER_NS).child(
                Element::new("CustomAttributeEntry")
                    .child(Element::new("Key").text("customId"))
                    .child(Element::new("Value").text(&custom_id.to_string())),
            ),
        )
        .child(Element::new("Name").attr("xmlns", LAYER_NS).text(PLAN_LAYER_NAME))
        .child(Element::new("SecurityClassification").attr("xmlns", LAYER_NS).text(SECURITY_CLASSIFICATION))
        .child(
            Element::new("Symbols")
                .attr("xmlns", LAYER_NS)
                .children(records.iter().map(|r| unit_symbol(r, &reported))),
        )
        .child(id_element(&document_id).attr("xmlns", LAYER_NS))
        .child(extension_element())
        .child(Element::new("DevelopmentState").attr("xmlns", LAYER_NS).text("NotComplete"))
}

/// Render a built document and write it out in one shot. Nothing is written
/// if rendering fails.
pub fn write_document(document: &Element, path: &Path) -> Result<()> {
    let xml = document.to_document_string()?;
    std::fs::write(path, xml)?;
    Ok(())
}

//! Round-trip check: documents built by the layer builders must parse back to
//! the same unit tuples that went in.

use chrono::Utc;
use copview::export::layer;
use copview::extract;
use copview::ident;
use copview::types::UnitRecord;
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Default, Clone, PartialEq)]
struct ParsedSymbol {
    name: String,
    latitude: f64,
    longitude: f64,
    first_long: u64,
    second_long: u64,
}

/// Pull every `Symbol` out of a layer document, plus the document-level
/// `Id` halves (the `Id` whose parent is not a `Symbol`).
fn parse_layer(xml: &str) -> (Vec<ParsedSymbol>, Vec<(u64, u64)>) {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut symbols = Vec::new();
    let mut document_ids = Vec::new();
    let mut current = ParsedSymbol::default();
    let mut pending_id = (0u64, 0u64);

    loop {
        match reader.read_event().expect("XML parse error") {
            Event::Start(e) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Text(t) => {
                let text = t.unescape().expect("unescape failed").into_owned();
                let in_symbol = path.iter().any(|p| p == "Symbol");
                let leaf = path.last().map(String::as_str).unwrap_or("");
                let parent = path.iter().rev().nth(1).map(String::as_str).unwrap_or("");

                match (leaf, parent) {
                    ("Name", "Symbol") => current.name = text,
                    ("Latitude", "Location") => current.latitude = text.parse().unwrap(),
                    ("Longitude", "Location") => current.longitude = text.parse().unwrap(),
                    ("FirstLong", "Id") => {
                        let value = text.parse().unwrap();
                        if in_symbol {
                            current.first_long = value;
                        } else {
                            pending_id.0 = value;
                        }
                    }
                    ("SecondLong", "Id") => {
                        let value = text.parse().unwrap();
                        if in_symbol {
                            current.second_long = value;
                        } else {
                            pending_id.1 = value;
                        }
                    }
                    _ => {}
                }
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"Symbol" => symbols.push(std::mem::take(&mut current)),
                    b"Id" if !path.iter().any(|p| p == "Symbol") => {
                        document_ids.push(pending_id);
                    }
                    _ => {}
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    (symbols, document_ids)
}

fn sample_records() -> Vec<UnitRecord> {
    let raw = serde_json::json!({
        "Game Map": {
            "alpha_company": {
                "BasicName": "Alpha",
                "CurrentX": 100.5,
                "CurrentY": 250.25,
                "UUID": "f47ac10b-58cc-4372-a567-0e02b2c3d479"
            },
            "bravo_company": {
                "BasicName": "Bravo & Co <recon>",
                "CurrentX": 480,
                "CurrentY": 90,
                "UUID": "1b9d6bcd-bbfd-4b2d-9b5d-ab8dfbbd4bed"
            },
            "charlie_company": {
                "BasicName": "Charlie",
                "CurrentX": -3,
                "CurrentY": 9999,
                "UUID": "6ec0bd7f-11c0-43da-975e-2a8ad9ebae0b"
            }
        }
    });
    extract(&raw).expect("extraction failed")
}

fn expected_tuples(records: &[UnitRecord]) -> Vec<ParsedSymbol> {
    records
        .iter()
        .map(|r| ParsedSymbol {
            name: r.name.clone(),
            latitude: r.location.latitude,
            longitude: r.location.longitude,
            first_long: ident::most_significant_bits(&r.uuid),
            second_long: ident::least_significant_bits(&r.uuid),
        })
        .collect()
}

#[test]
fn test_plan_layer_round_trip() {
    let records = sample_records();
    let xml = layer::build_plan_layer(&records, Utc::now())
        .to_document_string()
        .unwrap();

    let (symbols, _) = parse_layer(&xml);
    assert_eq!(symbols, expected_tuples(&records));
}

#[test]
fn test_situation_layer_round_trip() {
    let records = sample_records();
    let xml = layer::build_situation_layer(&records, Utc::now())
        .to_document_string()
        .unwrap();

    let (symbols, _) = parse_layer(&xml);
    assert_eq!(symbols, expected_tuples(&records));
}

#[test]
fn test_document_id_is_fresh_not_reused() {
    let records = sample_records();
    let xml = layer::build_plan_layer(&records, Utc::now())
        .to_document_string()
        .unwrap();

    let (symbols, document_ids) = parse_layer(&xml);
    assert_eq!(document_ids.len(), 1);

    let doc_id = document_ids[0];
    for symbol in &symbols {
        assert_ne!((symbol.first_long, symbol.second_long), doc_id);
    }
}

#[test]
fn test_document_ids_differ_between_builds() {
    let records = sample_records();
    let now = Utc::now();

    let (_, first) = parse_layer(&layer::build_plan_layer(&records, now).to_document_string().unwrap());
    let (_, second) = parse_layer(&layer::build_plan_layer(&records, now).to_document_string().unwrap());

    assert_ne!(first, second);
}

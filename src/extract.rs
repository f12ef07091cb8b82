//! Extraction engine: projects the raw game map JSON into `UnitRecord`s.
//!
//! The projection is fixed and known at design time, so it is written out as
//! a plain function instead of going through a query language. Required
//! fields fail the whole extraction; everything else gets a documented
//! default.

use crate::error::{CopError, Result};
use crate::geo;
use crate::types::UnitRecord;
use serde_json::Value;

/// Top-level key holding the unit map in the source document.
pub const GAME_MAP_KEY: &str = "Game Map";

/// Placeholder symbology code until real unit typing lands upstream.
pub const SYMBOL_CODE: &str = "SFGPU------****";
pub const PRIORITY: &str = "Medium";
pub const STAFF_COMMENTS: &str = "50%";
pub const OPERATIONAL_STATUS: &str = "Operational";

fn required_str<'a>(unit: &'a Value, unit_name: &str, field: &str) -> Result<&'a str> {
    unit.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| CopError::InvalidRecord(format!("{unit_name}: missing or non-string {field}")))
}

fn required_f64(unit: &Value, unit_name: &str, field: &str) -> Result<f64> {
    unit.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| CopError::InvalidRecord(format!("{unit_name}: missing or non-numeric {field}")))
}

/// Project every entry under `"Game Map"` into a `UnitRecord`.
///
/// Output order follows the source document's entry order. Any missing or
/// mistyped required field (`BasicName`, `CurrentX`, `CurrentY`, `UUID`)
/// aborts the extraction; no partial record list is returned.
pub fn extract(raw: &Value) -> Result<Vec<UnitRecord>> {
    let units = raw
        .get(GAME_MAP_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| CopError::InvalidRecord(format!("missing or non-object '{GAME_MAP_KEY}' key")))?;

    let mut records = Vec::with_capacity(units.len());
    for (unit_name, unit) in units {
        if !unit.is_object() {
            return Err(CopError::InvalidRecord(format!("{unit_name}: entry is not an object")));
        }

        let name = required_str(unit, unit_name, "BasicName")?;
        let x = required_f64(unit, unit_name, "CurrentX")?;
        let y = required_f64(unit, unit_name, "CurrentY")?;
        let uuid = crate::ident::parse(required_str(unit, unit_name, "UUID")?)?;

        records.push(UnitRecord {
            symbol_code: SYMBOL_CODE.to_string(),
            name: name.to_string(),
            comment: String::new(),
            reported: String::new(),
            location: geo::to_geographic(x, y),
            priority: PRIORITY.to_string(),
            staff_comments: STAFF_COMMENTS.to_string(),
            uuid,
            abbreviated_name: String::new(),
            operational_status: OPERATIONAL_STATUS.to_string(),
        });
    }

    Ok(records)
}

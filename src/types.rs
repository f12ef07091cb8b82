//! Normalized record types shared by the XML and spreadsheet exporters.

use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One map symbol after extraction, before any serialization.
///
/// `reported` is empty after extraction: the timestamp is decided at build
/// time, so the document builders take an injected clock and write it
/// straight into the `Reported` element. The field holds the stamp only for
/// callers that keep records around after an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    pub symbol_code: String,
    pub name: String,
    pub comment: String,
    pub reported: String,
    pub location: GeoPoint,
    pub priority: String,
    pub staff_comments: String,
    pub uuid: Uuid,
    pub abbreviated_name: String,
    pub operational_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo;

    #[test]
    fn test_record_round_trips_through_json() {
        let record = UnitRecord {
            symbol_code: crate::extract::SYMBOL_CODE.to_string(),
            name: "Alpha".to_string(),
            comment: String::new(),
            reported: String::new(),
            location: geo::to_geographic(100.0, 250.0),
            priority: crate::extract::PRIORITY.to_string(),
            staff_comments: crate::extract::STAFF_COMMENTS.to_string(),
            uuid: crate::ident::parse("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap(),
            abbreviated_name: String::new(),
            operational_status: crate::extract::OPERATIONAL_STATUS.to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"uuid\":\"f47ac10b-58cc-4372-a567-0e02b2c3d479\""));

        let parsed: UnitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}

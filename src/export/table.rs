//! Flat tabular export for spreadsheet consumption.

use crate::error::{CopError, Result};
use crate::types::UnitRecord;
use rust_xlsxwriter::{Format, Workbook};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Column labels, in output order.
pub const COLUMNS: [&str; 6] = ["Symbol Code", "Name", "Comment", "Latitude", "Longitude", "Key"];

pub const SHEET_NAME: &str = "First Sheet";
pub const XLSX_FILE_NAME: &str = "COP View.xlsx";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub symbol_code: String,
    pub name: String,
    pub comment: String,
    pub latitude: f64,
    pub longitude: f64,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: [&'static str; 6],
    pub rows: Vec<TableRow>,
}

/// Stable content-derived row key: hex SHA-256 of the unit name. Same name,
/// same key, across runs and machines.
fn row_key(name: &str) -> String {
    hex::encode(Sha256::digest(name.as_bytes()))
}

/// Map records into the fixed-column table. Pure; writing the workbook is a
/// separate step.
pub fn to_table(records: &[UnitRecord]) -> Table {
    let rows = records
        .iter()
        .map(|r| TableRow {
            symbol_code: r.symbol_code.clone(),
            name: r.name.clone(),
            comment: r.comment.clone(),
            latitude: r.location.latitude,
            longitude: r.location.longitude,
            key: row_key(&r.name),
        })
        .collect();

    Table { columns: COLUMNS, rows }
}

/// Render the table as a single-sheet workbook and save it.
pub fn write_workbook(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| CopError::ExcelExport(format!("sheet name: {e}")))?;

    for (col, label) in table.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *label, &header_format)
            .map_err(|e| CopError::ExcelExport(format!("header: {e}")))?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet
            .write_string(r, 0, &row.symbol_code)
            .and_then(|ws| ws.write_string(r, 1, &row.name))
            .and_then(|ws| ws.write_string(r, 2, &row.comment))
            .and_then(|ws| ws.write_number(r, 3, row.latitude))
            .and_then(|ws| ws.write_number(r, 4, row.longitude))
            .and_then(|ws| ws.write_string(r, 5, &row.key))
            .map_err(|e| CopError::ExcelExport(format!("row {r}: {e}")))?;
    }

    workbook
        .save(path)
        .map_err(|e| CopError::ExcelExport(format!("save: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo;

    fn record(name: &str) -> UnitRecord {
        UnitRecord {
            symbol_code: crate::extract::SYMBOL_CODE.to_string(),
            name: name.to_string(),
            comment: String::new(),
            reported: String::new(),
            location: geo::to_geographic(50.0, 75.0),
            priority: crate::extract::PRIORITY.to_string(),
            staff_comments: crate::extract::STAFF_COMMENTS.to_string(),
            uuid: crate::ident::generate(),
            abbreviated_name: String::new(),
            operational_status: crate::extract::OPERATIONAL_STATUS.to_string(),
        }
    }

    #[test]
    fn test_column_labels_and_order() {
        let table = to_table(&[record("Alpha")]);
        assert_eq!(table.columns, ["Symbol Code", "Name", "Comment", "Latitude", "Longitude", "Key"]);
    }

    #[test]
    fn test_rows_carry_record_fields() {
        let rec = record("Alpha");
        let table = to_table(std::slice::from_ref(&rec));

        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.symbol_code, "SFGPU------****");
        assert_eq!(row.name, "Alpha");
        assert_eq!(row.comment, "");
        assert_eq!(row.latitude, rec.location.latitude);
        assert_eq!(row.longitude, rec.location.longitude);
    }

    #[test]
    fn test_key_is_deterministic_per_name() {
        let table = to_table(&[record("Alpha"), record("Alpha")]);
        assert_eq!(table.rows[0].key, table.rows[1].key);
    }

    #[test]
    fn test_distinct_names_do_not_collide() {
        let table = to_table(&[record("Alpha"), record("Bravo"), record("Charlie")]);
        assert_ne!(table.rows[0].key, table.rows[1].key);
        assert_ne!(table.rows[1].key, table.rows[2].key);
        assert_ne!(table.rows[0].key, table.rows[2].key);
    }

    #[test]
    fn test_empty_record_set() {
        let table = to_table(&[]);
        assert!(table.rows.is_empty());
    }
}

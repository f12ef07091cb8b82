//! Exporters: XML layer documents and the spreadsheet table.

pub mod layer;
pub mod table;
pub mod xml;

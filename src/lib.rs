//! copview: game map to COP spreadsheet / C2 layer export.
//!
//! Pipeline: raw JSON → [`extract`] → [`types::UnitRecord`]s → either
//! [`export::layer`] (situation/plan XML documents) or [`export::table`]
//! (xlsx table). The two consumers are independent; only the extraction
//! output is shared.

pub mod cli;
pub mod error;
pub mod export;
pub mod extract;
pub mod geo;
pub mod ident;
pub mod types;

pub use error::{CopError, Result};
pub use extract::extract;
pub use geo::{to_geographic, GeoPoint};
pub use types::UnitRecord;

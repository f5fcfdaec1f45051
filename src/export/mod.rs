//! Export module for envelope-balance
//!
//! Machine-readable renderings of a balance report:
//! - CSV: one row per transfer (spreadsheet-compatible)
//! - JSON: the full report with schema versioning

pub mod csv;
pub mod json;

pub use self::csv::export_transfers_csv;
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};

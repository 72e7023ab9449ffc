//! Data export
//!
//! Pure presentation over read-only storage: CSV expense table, full JSON
//! dump, and a plain-text summary report.

pub mod csv;
pub mod json;
pub mod report;

pub use csv::export_expenses_csv;
pub use json::{export_all_json, DatabaseExport};
pub use report::export_report;

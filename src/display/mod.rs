//! Terminal display formatting
//!
//! Pure formatting over model and report data; no I/O and no storage access.

pub mod budget;
pub mod expense;
pub mod income;
pub mod report;

pub use budget::format_budget_report;
pub use expense::{format_expense_details, format_expense_table};
pub use income::format_income_table;
pub use report::{format_spending_report, format_summary, format_trend_report, SummaryView};

//! CLI command handlers
//!
//! Each subcommand family lives in its own module with a clap
//! `Subcommand` enum and a `handle_*_command` function that takes the
//! loaded storage and settings.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod income;
pub mod payment;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use report::{handle_report_command, ReportCommands};

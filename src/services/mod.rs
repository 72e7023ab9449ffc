//! Business logic layer
//!
//! Services wrap the storage repositories with the ledger's mutation rules:
//! validation, persistence, and the reactive budget recomputation that runs
//! after expense changes.

pub mod budget;
pub mod expense;
pub mod income;
pub mod summary;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use income::IncomeService;
pub use summary::SummaryService;

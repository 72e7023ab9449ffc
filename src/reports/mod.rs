//! Analytics reports
//!
//! Pure derivations over storage: spending breakdowns, the 7-day trend, and
//! budget utilization. Reports never mutate the ledger (budget reports
//! refresh the derived spent figures first, which is itself idempotent).

pub mod budgets;
pub mod spending;
pub mod trend;

pub use budgets::{BudgetReport, BudgetStatus, BudgetUtilization};
pub use spending::{CategorySpending, PaymentMethodSpending, SpendingReport};
pub use trend::{DailySpending, TrendReport};

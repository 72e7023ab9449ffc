//! Core data models for Tally
//!
//! This module contains all the data structures that represent the expense
//! tracking domain: expenses, income, budgets, categories, and payment
//! methods.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod payment;
pub mod recurrence;

pub use budget::{Budget, BudgetPeriod};
pub use category::Category;
pub use expense::{Expense, ExpensePatch};
pub use ids::{BudgetId, CategoryId, ExpenseId, IncomeId, PaymentMethodId};
pub use income::{Income, IncomePatch};
pub use money::Money;
pub use payment::{PaymentMethod, PaymentMethodKind};
pub use recurrence::{Frequency, Recurrence};

//! Budget utilization report
//!
//! Per-budget utilization built on freshly recomputed spent figures.

use chrono::NaiveDate;

use crate::error::TallyResult;
use crate::models::{Budget, BudgetPeriod, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Traffic-light status for a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Under 80% of the limit
    Good,
    /// Over 80% of the limit
    Warning,
    /// Over the limit
    Over,
}

impl BudgetStatus {
    fn from_percentage(pct: f64) -> Self {
        if pct > 100.0 {
            BudgetStatus::Over
        } else if pct > 80.0 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        }
    }
}

/// Utilization of one budget
#[derive(Debug, Clone)]
pub struct BudgetUtilization {
    pub category: String,
    pub period: BudgetPeriod,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage: f64,
    pub status: BudgetStatus,
}

impl BudgetUtilization {
    fn from_budget(budget: &Budget) -> Self {
        let percentage = budget.percent_used();
        Self {
            category: budget.category.clone(),
            period: budget.period,
            limit: budget.limit,
            spent: budget.spent,
            remaining: budget.remaining(),
            percentage,
            status: BudgetStatus::from_percentage(percentage),
        }
    }
}

/// Budget report across all budgets
#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub budgets: Vec<BudgetUtilization>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetReport {
    /// Generate the report, recomputing spent figures first so the report
    /// never shows stale values
    pub fn generate(storage: &Storage, today: NaiveDate) -> TallyResult<Self> {
        let service = BudgetService::new(storage);
        service.recompute_spent(today)?;

        let budgets = service.list()?;
        let total_limit: Money = budgets.iter().map(|b| b.limit).sum();
        let total_spent: Money = budgets.iter().map(|b| b.spent).sum();

        Ok(Self {
            budgets: budgets.iter().map(BudgetUtilization::from_budget).collect(),
            total_limit,
            total_spent,
        })
    }
}

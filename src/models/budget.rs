//! Budget model
//!
//! A budget sets a spending limit for one category over a rolling period.
//! The `spent` figure is derived: it is recomputed from matching expenses
//! and never edited directly.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// The rolling window a budget applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Trailing 7 days including today
    Weekly,
    /// Current calendar month
    #[default]
    Monthly,
    /// Current calendar year
    Yearly,
}

impl BudgetPeriod {
    /// Check whether a date falls inside this period's window relative to
    /// `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            BudgetPeriod::Weekly => {
                let week_ago = today - Days::new(7);
                date >= week_ago && date <= today
            }
            BudgetPeriod::Monthly => {
                date.month() == today.month() && date.year() == today.year()
            }
            BudgetPeriod::Yearly => date.year() == today.year(),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            _ => Err(format!("Unknown budget period: {}", s)),
        }
    }
}

/// A per-category spending limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget covers (one budget per category)
    pub category: String,

    /// Spending limit for the period
    pub limit: Money,

    /// Derived amount spent in the current period window
    ///
    /// Only ever written by recomputation from expenses.
    #[serde(default)]
    pub spent: Money,

    /// Window the limit applies to
    #[serde(default)]
    pub period: BudgetPeriod,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget with spent initialized to zero
    pub fn new(category: impl Into<String>, limit: Money, period: BudgetPeriod) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            spent: Money::zero(),
            period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        Ok(())
    }

    /// Amount left before the limit is hit (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Spent as a percentage of the limit (0.0 when the limit is zero)
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            0.0
        } else {
            self.spent.cents() as f64 / self.limit.cents() as f64 * 100.0
        }
    }

    /// Check if spending has exceeded the limit
    pub fn is_overspent(&self) -> bool {
        self.spent > self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_budget_spent_is_zero() {
        let b = Budget::new("Food & Dining", Money::from_cents(50000), BudgetPeriod::Monthly);
        assert!(b.spent.is_zero());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn test_monthly_window() {
        let today = date(2025, 3, 15);
        let p = BudgetPeriod::Monthly;

        assert!(p.contains(date(2025, 3, 1), today));
        assert!(p.contains(date(2025, 3, 31), today));
        assert!(!p.contains(date(2025, 2, 28), today));
        assert!(!p.contains(date(2024, 3, 15), today));
    }

    #[test]
    fn test_weekly_window() {
        let today = date(2025, 3, 15);
        let p = BudgetPeriod::Weekly;

        assert!(p.contains(today, today));
        assert!(p.contains(date(2025, 3, 8), today));
        assert!(!p.contains(date(2025, 3, 7), today));
        assert!(!p.contains(date(2025, 3, 16), today));
    }

    #[test]
    fn test_yearly_window() {
        let today = date(2025, 3, 15);
        let p = BudgetPeriod::Yearly;

        assert!(p.contains(date(2025, 1, 1), today));
        assert!(p.contains(date(2025, 12, 31), today));
        assert!(!p.contains(date(2024, 12, 31), today));
    }

    #[test]
    fn test_remaining_and_percent() {
        let mut b = Budget::new("Food & Dining", Money::from_cents(50000), BudgetPeriod::Monthly);
        b.spent = Money::from_cents(10000);

        assert_eq!(b.remaining().cents(), 40000);
        assert!((b.percent_used() - 20.0).abs() < f64::EPSILON);
        assert!(!b.is_overspent());

        b.spent = Money::from_cents(60000);
        assert!(b.is_overspent());
        assert_eq!(b.remaining().cents(), -10000);
    }

    #[test]
    fn test_percent_used_zero_limit() {
        let mut b = Budget::new("Misc", Money::zero(), BudgetPeriod::Monthly);
        b.spent = Money::from_cents(100);
        assert_eq!(b.percent_used(), 0.0);
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("weekly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Weekly);
        assert_eq!("Monthly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert!("quarterly".parse::<BudgetPeriod>().is_err());
    }
}

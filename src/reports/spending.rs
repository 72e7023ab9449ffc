//! Spending report
//!
//! Category and payment-method breakdowns over the full expense history.

use std::collections::HashMap;

use crate::error::TallyResult;
use crate::models::{Money, PaymentMethodId};
use crate::storage::Storage;

/// Spending breakdown for one category
#[derive(Debug, Clone)]
pub struct CategorySpending {
    /// Category name
    pub name: String,
    /// Category icon (fallback when the category is not seeded)
    pub icon: String,
    /// Total spending in the category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Spending breakdown for one payment method
#[derive(Debug, Clone)]
pub struct PaymentMethodSpending {
    /// Method display name ("Unknown" when the id has no match)
    pub name: String,
    /// Method icon
    pub icon: String,
    /// Total spending through this method
    pub total: Money,
    /// Number of expenses
    pub count: usize,
}

/// Spending report over the whole ledger
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Per-category breakdown, largest first, zero-spend categories omitted
    pub categories: Vec<CategorySpending>,
    /// Per-payment-method breakdown, largest first
    pub payment_methods: Vec<PaymentMethodSpending>,
    /// Total spending across all expenses
    pub total_spending: Money,
}

impl SpendingReport {
    /// Generate the report from current storage state
    pub fn generate(storage: &Storage) -> TallyResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let categories = storage.categories.get_all()?;

        let total_spending: Money = expenses.iter().map(|e| e.amount).sum();

        // Aggregate per category name; expenses may reference categories
        // that were never seeded
        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        for expense in &expenses {
            let entry = by_category
                .entry(expense.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let icon_by_name: HashMap<&str, &str> = categories
            .iter()
            .map(|c| (c.name.as_str(), c.icon.as_str()))
            .collect();

        let mut category_rows: Vec<CategorySpending> = by_category
            .into_iter()
            .filter(|(_, (total, _))| !total.is_zero())
            .map(|(name, (total, count))| {
                let percentage = if total_spending.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / total_spending.cents() as f64 * 100.0
                };
                let icon = icon_by_name.get(name.as_str()).unwrap_or(&"💰").to_string();
                CategorySpending {
                    name,
                    icon,
                    total,
                    count,
                    percentage,
                }
            })
            .collect();
        category_rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.name.cmp(&b.name)));

        // Aggregate per payment method id, falling back to "Unknown" for
        // ids with no match
        let mut by_method: HashMap<PaymentMethodId, (Money, usize)> = HashMap::new();
        for expense in &expenses {
            let entry = by_method
                .entry(expense.payment_method)
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let mut method_rows: Vec<PaymentMethodSpending> = by_method
            .into_iter()
            .map(|(id, (total, count))| {
                let method = storage.payment_methods.get(id)?;
                let (name, icon) = match method {
                    Some(m) => (m.name, m.icon),
                    None => ("Unknown".to_string(), "💰".to_string()),
                };
                Ok(PaymentMethodSpending {
                    name,
                    icon,
                    total,
                    count,
                })
            })
            .collect::<TallyResult<_>>()?;
        method_rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.name.cmp(&b.name)));

        Ok(Self {
            categories: category_rows,
            payment_methods: method_rows,
            total_spending,
        })
    }
}

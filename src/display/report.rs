//! Report display formatting
//!
//! Renders the summary dashboard, spending breakdown, and 7-day trend.

use crate::config::Settings;
use crate::models::{Expense, Money};
use crate::reports::{SpendingReport, TrendReport};

const BAR_WIDTH: usize = 30;

/// Summary dashboard figures
pub struct SummaryView {
    pub total_balance: Money,
    pub monthly_income: Money,
    pub monthly_spent: Money,
    pub total_budget_limit: Money,
    pub recent: Vec<Expense>,
}

/// Format the summary dashboard
pub fn format_summary(view: &SummaryView, settings: &Settings) -> String {
    let currency = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str("Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Total balance:   {}\n",
        view.total_balance.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Income (month):  {}\n",
        view.monthly_income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Spent (month):   {}\n",
        view.monthly_spent.format_with_symbol(currency)
    ));

    if !view.total_budget_limit.is_zero() {
        let used = view.monthly_spent.cents() as f64 / view.total_budget_limit.cents() as f64
            * 100.0;
        output.push_str(&format!(
            "Budget used:     {:.0}% of {}\n",
            used,
            view.total_budget_limit.format_with_symbol(currency)
        ));
    }

    if !view.recent.is_empty() {
        output.push('\n');
        output.push_str("Recent expenses:\n");
        for expense in &view.recent {
            output.push_str(&format!(
                "  {}  {:24} {:16} -{}\n",
                expense.date.format(&settings.date_format),
                super::expense::truncate(&expense.title, 24),
                super::expense::truncate(&expense.category, 16),
                expense.amount.format_with_symbol(currency)
            ));
        }
    }

    output
}

/// Format the spending breakdown (categories and payment methods)
pub fn format_spending_report(report: &SpendingReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Spending by Category\n");
    output.push_str(&"=".repeat(56));
    output.push('\n');

    if report.categories.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    for cat in &report.categories {
        output.push_str(&format!(
            "{} {:20} {:>10}  {:>5.1}%  ({} transactions)\n",
            cat.icon,
            super::expense::truncate(&cat.name, 20),
            cat.total.format_with_symbol(currency),
            cat.percentage,
            cat.count
        ));
    }

    output.push('\n');
    output.push_str("Payment Methods\n");
    output.push_str(&"=".repeat(56));
    output.push('\n');

    for method in &report.payment_methods {
        output.push_str(&format!(
            "{} {:20} {:>10}  ({} transactions)\n",
            method.icon,
            super::expense::truncate(&method.name, 20),
            method.total.format_with_symbol(currency),
            method.count
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Total spending: {}\n",
        report.total_spending.format_with_symbol(currency)
    ));

    output
}

/// Format the 7-day trend with scaled bars
pub fn format_trend_report(report: &TrendReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Last 7 Days\n");
    output.push_str(&"=".repeat(56));
    output.push('\n');

    for day in &report.days {
        let bar_len = if report.max_daily.is_zero() {
            0
        } else {
            ((day.total.cents() as f64 / report.max_daily.cents() as f64) * BAR_WIDTH as f64)
                .round() as usize
        };

        output.push_str(&format!(
            "{}  {:30} {:>10}\n",
            day.date.format("%a %m-%d"),
            "█".repeat(bar_len),
            day.total.format_with_symbol(currency)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethodId};
    use chrono::NaiveDate;

    #[test]
    fn test_summary_includes_budget_line_only_with_budgets() {
        let mut view = SummaryView {
            total_balance: Money::from_cents(100000),
            monthly_income: Money::from_cents(200000),
            monthly_spent: Money::from_cents(50000),
            total_budget_limit: Money::zero(),
            recent: vec![],
        };
        let settings = Settings::default();
        assert!(!format_summary(&view, &settings).contains("Budget used"));

        view.total_budget_limit = Money::from_cents(100000);
        let out = format_summary(&view, &settings);
        assert!(out.contains("Budget used:     50%"));
    }

    #[test]
    fn test_summary_recent_expenses_use_date_format() {
        let view = SummaryView {
            total_balance: Money::zero(),
            monthly_income: Money::zero(),
            monthly_spent: Money::zero(),
            total_budget_limit: Money::zero(),
            recent: vec![Expense::new(
                "Lunch",
                Money::from_cents(1250),
                "Food & Dining",
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                PaymentMethodId::new(),
            )],
        };
        let out = format_summary(&view, &Settings::default());
        assert!(out.contains("Lunch"));
        assert!(out.contains("2025-03-10"));
        assert!(out.contains("-$12.50"));

        let settings = Settings {
            date_format: "%d.%m.%Y".to_string(),
            ..Settings::default()
        };
        assert!(format_summary(&view, &settings).contains("10.03.2025"));
    }
}

//! Expense display formatting
//!
//! Renders expense listings as terminal tables and single expenses as a
//! detail view. Reference-data lookups that miss fall back to a default
//! label instead of failing.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Expense, PaymentMethod};

/// Fallback label for missing reference data
pub const UNKNOWN: &str = "Unknown";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Paid With")]
    payment: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Look up a payment method name, falling back to "Unknown"
fn payment_name(expense: &Expense, methods: &[PaymentMethod]) -> String {
    methods
        .iter()
        .find(|m| m.id == expense.payment_method)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Format a list of expenses as a table
pub fn format_expense_table(
    expenses: &[Expense],
    methods: &[PaymentMethod],
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.format(&settings.date_format).to_string(),
            title: truncate(&e.title, 24),
            category: e.category.clone(),
            payment: payment_name(e, methods),
            amount: e.amount.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a single expense as a detail view
pub fn format_expense_details(
    expense: &Expense,
    methods: &[PaymentMethod],
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Title:       {}\n", expense.title));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if let Some(sub) = &expense.subcategory {
        output.push_str(&format!("Subcategory: {}\n", sub));
    }

    output.push_str(&format!("Paid with:   {}\n", payment_name(expense, methods)));

    if !expense.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", expense.tags.join(", ")));
    }

    if let Some(location) = &expense.location {
        output.push_str(&format!("Location:    {}\n", location));
    }

    if let Some(description) = &expense.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    if let Some(rec) = &expense.recurring {
        output.push_str(&format!(
            "Recurring:   {} (next: {})\n",
            rec.frequency,
            rec.next_date.format(&settings.date_format)
        ));
    }

    output.push_str(&format!(
        "Essential:   {}\n",
        if expense.is_essential { "yes" } else { "no" }
    ));

    output
}

/// Truncate a string for display, appending an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethodId};
    use chrono::NaiveDate;

    fn sample(method: PaymentMethodId) -> Expense {
        Expense::new(
            "Lunch",
            Money::from_cents(1250),
            "Food & Dining",
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            method,
        )
    }

    #[test]
    fn test_empty_table() {
        let out = format_expense_table(&[], &[], &Settings::default());
        assert_eq!(out, "No expenses recorded.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let methods = PaymentMethod::defaults();
        let expense = sample(methods[0].id);

        let out = format_expense_table(&[expense], &methods, &Settings::default());
        assert!(out.contains("Lunch"));
        assert!(out.contains("$12.50"));
        assert!(out.contains("2025-03-10"));
        assert!(out.contains("Food & Dining"));
        assert!(out.contains(&methods[0].name));
    }

    #[test]
    fn test_configured_date_format_and_currency() {
        let methods = PaymentMethod::defaults();
        let expense = sample(methods[0].id);

        let settings = Settings {
            currency_symbol: "€".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        let out = format_expense_table(std::slice::from_ref(&expense), &methods, &settings);
        assert!(out.contains("10/03/2025"));
        assert!(out.contains("€12.50"));

        let details = format_expense_details(&expense, &methods, &settings);
        assert!(details.contains("10/03/2025"));
    }

    #[test]
    fn test_unknown_payment_method_label() {
        let expense = sample(PaymentMethodId::new());
        let out = format_expense_details(&expense, &[], &Settings::default());
        assert!(out.contains("Unknown"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title here", 10), "a very lo…");
    }
}

//! Plain-text report export
//!
//! Generates a summary document: overall totals, net balance, and the ten
//! most recent expenses.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::Money;
use crate::storage::Storage;

const RECENT_COUNT: usize = 10;

/// Write the expense report to `writer`
pub fn export_report<W: Write>(
    storage: &Storage,
    mut writer: W,
    generated_on: NaiveDate,
    currency: &str,
) -> TallyResult<()> {
    let expenses = storage.expenses.get_all()?;
    let income = storage.income.get_all()?;

    let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
    let total_income: Money = income.iter().map(|i| i.amount).sum();
    let net_balance = total_income - total_expenses;

    let mut out = String::new();
    out.push_str("Expense Report\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_on.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "Total expenses: {}\n",
        total_expenses.format_with_symbol(currency)
    ));
    out.push_str(&format!(
        "Total income:   {}\n",
        total_income.format_with_symbol(currency)
    ));
    out.push_str(&format!(
        "Net balance:    {}\n\n",
        net_balance.format_with_symbol(currency)
    ));

    out.push_str("Recent expenses:\n");
    if expenses.is_empty() {
        out.push_str("  (none)\n");
    }
    for expense in expenses.iter().take(RECENT_COUNT) {
        out.push_str(&format!(
            "  {}  {:28} {:18} {}\n",
            expense.date.format("%b %d"),
            expense.title,
            expense.category,
            expense.amount.format_with_symbol(currency)
        ));
    }

    writer
        .write_all(out.as_bytes())
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

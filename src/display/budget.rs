//! Budget display formatting
//!
//! Renders budget utilization with ASCII progress bars and status markers.

use crate::reports::{BudgetReport, BudgetStatus};

const BAR_WIDTH: usize = 24;

/// Render a utilization bar, capped at full width
fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn status_marker(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "",
        BudgetStatus::Warning => "⚠",
        BudgetStatus::Over => "✗ OVER",
    }
}

/// Format the budget report for the terminal
pub fn format_budget_report(report: &BudgetReport, currency: &str) -> String {
    if report.budgets.is_empty() {
        return "No budgets defined. Add one with 'tally budget add'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:8} {:>10} {:>10} {:>10}\n",
        "Category", "Period", "Limit", "Spent", "Remaining"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for b in &report.budgets {
        output.push_str(&format!(
            "{:20} {:8} {:>10} {:>10} {:>10}  {} {:>5.1}% {}\n",
            super::expense::truncate(&b.category, 20),
            b.period.to_string(),
            b.limit.format_with_symbol(currency),
            b.spent.format_with_symbol(currency),
            b.remaining.format_with_symbol(currency),
            bar(b.percentage),
            b.percentage,
            status_marker(b.status),
        ));
    }

    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:8} {:>10} {:>10} {:>10}\n",
        "TOTAL",
        "",
        report.total_limit.format_with_symbol(currency),
        report.total_spent.format_with_symbol(currency),
        (report.total_limit - report.total_spent).format_with_symbol(currency),
    ));

    output
}

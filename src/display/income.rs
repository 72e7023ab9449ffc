//! Income display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Income;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of income records as a table
pub fn format_income_table(income: &[Income], settings: &Settings) -> String {
    if income.is_empty() {
        return "No income recorded.\n".to_string();
    }

    let rows: Vec<IncomeRow> = income
        .iter()
        .map(|i| IncomeRow {
            id: i.id.to_string(),
            date: i.date.format(&settings.date_format).to_string(),
            title: super::expense::truncate(&i.title, 24),
            source: i.source.clone(),
            amount: i.amount.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

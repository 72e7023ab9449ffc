//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{self, SummaryView};
use crate::error::TallyResult;
use crate::reports::{BudgetReport, SpendingReport, TrendReport};
use crate::services::SummaryService;
use crate::storage::Storage;

const RECENT_COUNT: usize = 5;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overall balance, monthly totals, and recent activity
    Summary,

    /// Spending broken down by category and payment method
    Categories,

    /// Daily spending over the last 7 days
    Trend,

    /// Budget utilization per category
    Budgets,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let today = Local::now().date_naive();
    let currency = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary => {
            let service = SummaryService::new(storage);
            let view = SummaryView {
                total_balance: service.total_balance()?,
                monthly_income: service.monthly_income(today)?,
                monthly_spent: service.monthly_spent(today)?,
                total_budget_limit: service.total_budget_limit()?,
                recent: service.recent_expenses(RECENT_COUNT)?,
            };
            print!("{}", display::format_summary(&view, settings));
        }

        ReportCommands::Categories => {
            let report = SpendingReport::generate(storage)?;
            print!("{}", display::format_spending_report(&report, currency));
        }

        ReportCommands::Trend => {
            let report = TrendReport::generate(storage, today)?;
            print!("{}", display::format_trend_report(&report, currency));
        }

        ReportCommands::Budgets => {
            let report = BudgetReport::generate(storage, today)?;
            print!("{}", display::format_budget_report(&report, currency));
        }
    }

    Ok(())
}

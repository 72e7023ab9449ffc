//! Budget CLI commands

use std::str::FromStr;

use chrono::Local;
use clap::Subcommand;

use crate::cli::expense::parse_amount;
use crate::config::settings::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{Budget, BudgetPeriod};
use crate::reports::BudgetReport;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending limit for a category
    Add {
        /// Category name
        category: String,
        /// Spending limit (e.g., "500")
        limit: String,
        /// Budget period: weekly, monthly, or yearly
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },

    /// Show all budgets with current utilization
    List,

    /// Remove a category's budget
    Delete {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TallyResult<()> {
    let service = BudgetService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            period,
        } => {
            let limit = parse_amount(&limit)?;
            let period =
                BudgetPeriod::from_str(&period).map_err(TallyError::Validation)?;

            let budget = service.add(Budget::new(category, limit, period), today)?;
            println!(
                "Budget set: {} {} ({}), {} already spent",
                budget.category,
                budget.limit.format_with_symbol(&settings.currency_symbol),
                budget.period,
                budget.spent.format_with_symbol(&settings.currency_symbol),
            );
        }

        BudgetCommands::List => {
            let report = BudgetReport::generate(storage, today)?;
            print!(
                "{}",
                display::format_budget_report(&report, &settings.currency_symbol)
            );
        }

        BudgetCommands::Delete { category } => {
            if service.delete_by_category(&category)? {
                println!("Deleted budget for {}", category);
            } else {
                println!("No budget for category: {}", category);
            }
        }
    }

    Ok(())
}

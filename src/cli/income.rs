//! Income CLI commands

use std::str::FromStr;

use clap::Subcommand;

use chrono::Local;

use crate::cli::expense::{parse_amount, parse_date, parse_recurrence};
use crate::config::settings::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{Income, IncomeId, IncomePatch};
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Short title
        title: String,
        /// Amount (e.g., "2500.00")
        amount: String,
        /// Where the money came from (employer, client, ...)
        #[arg(short, long)]
        source: String,
        /// Income date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Repeat schedule: daily, weekly, monthly, or yearly
        #[arg(long, value_name = "FREQUENCY")]
        recurring: Option<String>,
        /// Next occurrence date (defaults to the income date)
        #[arg(long, requires = "recurring")]
        next_date: Option<String>,
    },

    /// List income records
    List {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Edit an income record (only the given fields change)
    Edit {
        /// Income ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Set a repeat schedule: daily, weekly, monthly, or yearly
        #[arg(long, value_name = "FREQUENCY")]
        recurring: Option<String>,
        /// Next occurrence date for the schedule
        #[arg(long, requires = "recurring")]
        next_date: Option<String>,
        /// Remove the repeat schedule
        #[arg(long, conflicts_with = "recurring")]
        no_recurring: bool,
    },

    /// Delete an income record
    Delete {
        /// Income ID
        id: String,
    },
}

/// Resolve an income id argument, accepting the short `inc-xxxxxxxx` form
fn resolve_id(storage: &Storage, s: &str) -> TallyResult<IncomeId> {
    if let Ok(id) = IncomeId::from_str(s) {
        if storage.income.get(id)?.is_some() {
            return Ok(id);
        }
    }

    let prefix = s.strip_prefix("inc-").unwrap_or(s);
    let matches: Vec<IncomeId> = storage
        .income
        .get_all()?
        .into_iter()
        .filter(|i| i.id.as_uuid().to_string().starts_with(prefix))
        .map(|i| i.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(TallyError::income_not_found(s)),
        _ => Err(TallyError::Validation(format!(
            "Ambiguous income id prefix: {}",
            s
        ))),
    }
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TallyResult<()> {
    let service = IncomeService::new(storage);
    let currency = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Add {
            title,
            amount,
            source,
            date,
            description,
            recurring,
            next_date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;

            let mut income = Income::new(title, amount, source, date);
            income.description = description;
            if let Some(frequency) = recurring {
                income.recurring =
                    Some(parse_recurrence(&frequency, next_date.as_deref(), date)?);
            }

            let income = service.add(income)?;
            println!(
                "Recorded income {} ({} on {})",
                income.id,
                income.amount.format_with_symbol(currency),
                income.date
            );
        }

        IncomeCommands::List { limit } => {
            let mut records = service.list()?;
            records.truncate(limit);
            print!("{}", display::format_income_table(&records, settings));
        }

        IncomeCommands::Edit {
            id,
            title,
            amount,
            source,
            date,
            description,
            recurring,
            next_date,
            no_recurring,
        } => {
            let id = resolve_id(storage, &id)?;

            let new_date = date.as_deref().map(|d| parse_date(Some(d))).transpose()?;
            let new_recurring = if no_recurring {
                Some(None)
            } else {
                match recurring {
                    Some(frequency) => {
                        let fallback = new_date.unwrap_or_else(|| Local::now().date_naive());
                        Some(Some(parse_recurrence(
                            &frequency,
                            next_date.as_deref(),
                            fallback,
                        )?))
                    }
                    None => None,
                }
            };

            let patch = IncomePatch {
                title,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                source,
                date: new_date,
                description: description.map(Some),
                recurring: new_recurring,
            };

            if patch.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            match service.update(id, patch)? {
                Some(income) => println!("Updated income {}", income.id),
                None => println!("Income not found: {}", id),
            }
        }

        IncomeCommands::Delete { id } => {
            let id = resolve_id(storage, &id)?;
            if service.delete(id)? {
                println!("Deleted income {}", id);
            } else {
                println!("Income not found: {}", id);
            }
        }
    }

    Ok(())
}

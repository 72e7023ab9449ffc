//! Expense CLI commands

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::models::{
    Expense, ExpenseId, ExpensePatch, Frequency, Money, PaymentMethodId, Recurrence,
};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Short title
        title: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Subcategory within the category
        #[arg(long)]
        subcategory: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Payment method name (defaults to Cash)
        #[arg(short, long, default_value = "Cash")]
        payment: String,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Mark the expense as essential
        #[arg(short, long)]
        essential: bool,
        /// Where the expense happened
        #[arg(short, long)]
        location: Option<String>,
        /// Repeat schedule: daily, weekly, monthly, or yearly
        #[arg(long, value_name = "FREQUENCY")]
        recurring: Option<String>,
        /// Next occurrence date (defaults to the expense date)
        #[arg(long, requires = "recurring")]
        next_date: Option<String>,
    },

    /// List expenses
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Show only titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one expense in detail
    Show {
        /// Expense ID
        id: String,
    },

    /// Edit an expense (only the given fields change)
    Edit {
        /// Expense ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        payment: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        essential: Option<bool>,
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

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub fn parse_date(arg: Option<&str>) -> TallyResult<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TallyError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a money argument, rejecting malformed input at the CLI boundary
pub fn parse_amount(s: &str) -> TallyResult<Money> {
    let amount =
        Money::parse(s).map_err(|e| TallyError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(TallyError::Validation(format!(
            "Amount cannot be negative: {}",
            s
        )));
    }
    Ok(amount)
}

/// Split a comma-separated tag list
fn parse_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Build a repeat schedule from CLI arguments
pub fn parse_recurrence(
    frequency: &str,
    next_date: Option<&str>,
    fallback: NaiveDate,
) -> TallyResult<Recurrence> {
    let frequency = Frequency::from_str(frequency).map_err(TallyError::Validation)?;
    let next_date = match next_date {
        Some(s) => parse_date(Some(s))?,
        None => fallback,
    };
    Ok(Recurrence::new(frequency, next_date))
}

/// Resolve a payment method name to its id
fn resolve_payment(storage: &Storage, name: &str) -> TallyResult<PaymentMethodId> {
    storage
        .payment_methods
        .get_by_name(name)?
        .map(|m| m.id)
        .ok_or(TallyError::NotFound {
            entity_type: "Payment method",
            identifier: name.to_string(),
        })
}

/// Resolve an expense id argument: full UUID, or the short `exp-xxxxxxxx`
/// form shown in listings (a unique hex prefix also works)
fn resolve_id(storage: &Storage, s: &str) -> TallyResult<ExpenseId> {
    if let Ok(id) = ExpenseId::from_str(s) {
        if storage.expenses.get(id)?.is_some() {
            return Ok(id);
        }
    }

    let prefix = s.strip_prefix("exp-").unwrap_or(s);
    let matches: Vec<ExpenseId> = storage
        .expenses
        .get_all()?
        .into_iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(prefix))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(TallyError::expense_not_found(s)),
        _ => Err(TallyError::Validation(format!(
            "Ambiguous expense id prefix: {}",
            s
        ))),
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TallyResult<()> {
    let service = ExpenseService::new(storage);
    let currency = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            subcategory,
            date,
            description,
            payment,
            tags,
            essential,
            location,
            recurring,
            next_date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;
            let payment_method = resolve_payment(storage, &payment)?;

            let mut expense = Expense::new(title, amount, category, date, payment_method);
            expense.subcategory = subcategory;
            expense.description = description;
            expense.location = location;
            expense.is_essential = essential;
            if let Some(tags) = tags {
                expense.tags = parse_tags(&tags);
            }
            if let Some(frequency) = recurring {
                expense.recurring =
                    Some(parse_recurrence(&frequency, next_date.as_deref(), date)?);
            }

            let expense = service.add(expense)?;
            println!(
                "Added expense {} ({} on {})",
                expense.id,
                expense.amount.format_with_symbol(currency),
                expense.date
            );
        }

        ExpenseCommands::List {
            category,
            search,
            limit,
        } => {
            let mut expenses = match category {
                Some(category) => service.list_by_category(&category)?,
                None => service.list()?,
            };
            if let Some(needle) = search {
                let needle = needle.to_lowercase();
                expenses.retain(|e| e.title.to_lowercase().contains(&needle));
            }
            expenses.truncate(limit);

            let methods = storage.payment_methods.get_all()?;
            print!(
                "{}",
                display::format_expense_table(&expenses, &methods, settings)
            );
        }

        ExpenseCommands::Show { id } => {
            let id = resolve_id(storage, &id)?;
            match service.get(id)? {
                Some(expense) => {
                    let methods = storage.payment_methods.get_all()?;
                    print!(
                        "{}",
                        display::format_expense_details(&expense, &methods, settings)
                    );
                }
                None => println!("Expense not found: {}", id),
            }
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            subcategory,
            date,
            description,
            payment,
            tags,
            location,
            essential,
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

            let patch = ExpensePatch {
                title,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                subcategory: subcategory.map(Some),
                date: new_date,
                description: description.map(Some),
                payment_method: payment
                    .as_deref()
                    .map(|p| resolve_payment(storage, p))
                    .transpose()?,
                tags: tags.as_deref().map(parse_tags),
                is_essential: essential,
                location: location.map(Some),
                recurring: new_recurring,
            };

            if patch.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }

            match service.update(id, patch)? {
                Some(expense) => println!("Updated expense {}", expense.id),
                None => println!("Expense not found: {}", id),
            }
        }

        ExpenseCommands::Delete { id } => {
            let id = resolve_id(storage, &id)?;
            if service.delete(id)? {
                println!("Deleted expense {}", id);
            } else {
                println!("Expense not found: {}", id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_rejects_garbage_and_negatives() {
        assert!(parse_amount("12.50").is_ok());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2025-03-10")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert!(parse_date(Some("03/10/2025")).is_err());
        assert!(parse_date(None).is_ok());
    }

    #[test]
    fn test_parse_recurrence() {
        let fallback = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let rec = parse_recurrence("monthly", None, fallback).unwrap();
        assert_eq!(rec.frequency, Frequency::Monthly);
        assert_eq!(rec.next_date, fallback);

        let rec = parse_recurrence("weekly", Some("2025-04-01"), fallback).unwrap();
        assert_eq!(rec.next_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());

        assert!(parse_recurrence("fortnightly", None, fallback).is_err());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("work, lunch ,,team"), vec!["work", "lunch", "team"]);
    }
}

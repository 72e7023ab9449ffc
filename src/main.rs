use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_export_command, handle_income_command, handle_payment_command,
    handle_report_command,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal expense and income tracker",
    long_about = "Tally tracks everyday expenses and income from the command \
                  line, keeps per-category budgets with live utilization, and \
                  produces spending reports and exports. All data is stored in \
                  JSON files you own."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(tally::cli::ExpenseCommands),

    /// Income management commands
    #[command(subcommand, alias = "inc")]
    Income(tally::cli::IncomeCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(tally::cli::BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(tally::cli::CategoryCommands),

    /// Payment method commands
    #[command(subcommand)]
    Payment(tally::cli::PaymentCommands),

    /// Reports over recorded data
    #[command(subcommand)]
    Report(tally::cli::ReportCommands),

    /// Export data as CSV, JSON, or a text report
    #[command(subcommand)]
    Export(tally::cli::ExportCommands),

    /// Initialize the data directory with default categories
    Init {
        /// Discard all recorded data and start over from the defaults
        #[arg(long)]
        reset: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Payment(cmd)) => {
            handle_payment_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init { reset }) => {
            println!("Initializing tally at: {}", paths.data_dir().display());
            if reset {
                tally::storage::init::reset_storage(&paths)?;
            } else {
                tally::storage::init::initialize_storage(&paths)?;
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  🍔 Food & Dining    🚗 Transportation  🛍️ Shopping");
            println!("  🎬 Entertainment    📄 Bills & Utilities  🏥 Healthcare");
            println!();
            println!("Run 'tally expense add' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Tally - personal expense and income tracker");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally init' to set up the data directory.");
        }
    }

    Ok(())
}

//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TallyError, TallyResult};
use crate::export;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as CSV
    Expenses {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump every collection as one JSON document
    All {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write a plain-text summary report
    Report {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(path: Option<&PathBuf>) -> TallyResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TallyError::Export(format!("Cannot create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> TallyResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let writer = open_output(output.as_ref())?;
            export::export_expenses_csv(storage, writer)?;
            if let Some(path) = output {
                eprintln!("Exported expenses to {}", path.display());
            }
        }

        ExportCommands::All { output, pretty } => {
            let writer = open_output(output.as_ref())?;
            export::export_all_json(storage, writer, pretty)?;
            if let Some(path) = output {
                eprintln!("Exported all data to {}", path.display());
            }
        }

        ExportCommands::Report { output } => {
            let writer = open_output(output.as_ref())?;
            export::export_report(
                storage,
                writer,
                Local::now().date_naive(),
                &settings.currency_symbol,
            )?;
            if let Some(path) = output {
                eprintln!("Wrote report to {}", path.display());
            }
        }
    }

    Ok(())
}

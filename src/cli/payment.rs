//! Payment method CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::storage::Storage;

/// Payment method subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// List payment methods
    List,
}

/// Handle a payment method command
pub fn handle_payment_command(storage: &Storage, cmd: PaymentCommands) -> TallyResult<()> {
    match cmd {
        PaymentCommands::List => {
            for method in storage.payment_methods.get_all()? {
                println!("{} {}", method.icon, method.name);
            }
        }
    }

    Ok(())
}

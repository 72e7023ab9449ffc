//! Category CLI commands

use clap::Subcommand;

use crate::error::TallyResult;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories and their subcategories
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TallyResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories = storage.categories.get_all()?;
            for category in categories {
                println!("{} {}", category.icon, category.name);
                if !category.subcategories.is_empty() {
                    println!("    {}", category.subcategories.join(", "));
                }
            }
        }
    }

    Ok(())
}

//! JSON export
//!
//! Dumps the full database (all five collections) as one JSON document.

use std::io::Write;

use serde::Serialize;

use crate::error::{TallyError, TallyResult};
use crate::models::{Budget, Category, Expense, Income, PaymentMethod};
use crate::storage::Storage;

/// Full database export
#[derive(Debug, Serialize)]
pub struct DatabaseExport {
    pub expenses: Vec<Expense>,
    pub income: Vec<Income>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
    pub payment_methods: Vec<PaymentMethod>,
}

impl DatabaseExport {
    /// Collect the current storage state
    pub fn collect(storage: &Storage) -> TallyResult<Self> {
        Ok(Self {
            expenses: storage.expenses.get_all()?,
            income: storage.income.get_all()?,
            budgets: storage.budgets.get_all()?,
            categories: storage.categories.get_all()?,
            payment_methods: storage.payment_methods.get_all()?,
        })
    }
}

/// Export the full database as JSON
pub fn export_all_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> TallyResult<()> {
    let export = DatabaseExport::collect(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| TallyError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;
    }

    Ok(())
}

//! CSV export
//!
//! Flattens the expense collection into a comma-separated table.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::storage::Storage;

/// Export all expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> TallyResult<()> {
    let methods = storage.payment_methods.get_all()?;
    let expenses = storage.expenses.get_all()?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Date",
            "Title",
            "Amount",
            "Category",
            "Subcategory",
            "Payment Method",
            "Location",
            "Tags",
            "Description",
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for expense in expenses {
        let method_name = methods
            .iter()
            .find(|m| m.id == expense.payment_method)
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        csv_writer
            .write_record([
                expense.date.format("%Y-%m-%d").to_string(),
                expense.title.clone(),
                expense.amount.to_string(),
                expense.category.clone(),
                expense.subcategory.clone().unwrap_or_default(),
                method_name,
                expense.location.clone().unwrap_or_default(),
                expense.tags.join(", "),
                expense.description.clone().unwrap_or_default(),
            ])
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::{Expense, Money, PaymentMethod, PaymentMethodId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .payment_methods
            .replace_all(PaymentMethod::defaults())
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_header_only_when_empty() {
        let (_tmp, storage) = setup();
        let mut buf = Vec::new();
        export_expenses_csv(&storage, &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Date,Title,Amount,Category"));
    }

    #[test]
    fn test_export_rows_and_quoting() {
        let (_tmp, storage) = setup();
        let cash = storage.payment_methods.get_by_name("Cash").unwrap().unwrap();

        let mut expense = Expense::new(
            "Lunch, with team",
            Money::from_cents(1250),
            "Food & Dining",
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            cash.id,
        );
        expense.tags = vec!["work".into(), "lunch".into()];
        storage.expenses.upsert(expense).unwrap();

        let mut buf = Vec::new();
        export_expenses_csv(&storage, &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().count(), 2);
        // Comma in the title forces quoting
        assert!(out.contains("\"Lunch, with team\""));
        assert!(out.contains("12.50"));
        assert!(out.contains("\"work, lunch\""));
        assert!(out.contains("Cash"));
    }

    #[test]
    fn test_export_unknown_payment_method() {
        let (_tmp, storage) = setup();

        storage
            .expenses
            .upsert(Expense::new(
                "Mystery",
                Money::from_cents(100),
                "Shopping",
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                PaymentMethodId::new(),
            ))
            .unwrap();

        let mut buf = Vec::new();
        export_expenses_csv(&storage, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Unknown"));
    }
}

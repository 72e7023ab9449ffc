//! Summary service
//!
//! Pure derived reads over the ledger: total balance, current-month totals,
//! and recent activity. Nothing here mutates state.

use chrono::{Datelike, NaiveDate};

use crate::error::TallyResult;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Service for derived ledger figures
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total balance: sum of all income minus sum of all expenses
    pub fn total_balance(&self) -> TallyResult<Money> {
        let income: Money = self.storage.income.get_all()?.iter().map(|i| i.amount).sum();
        let expenses: Money = self.storage.expenses.get_all()?.iter().map(|e| e.amount).sum();
        Ok(income - expenses)
    }

    /// Total spent in the calendar month containing `today`
    pub fn monthly_spent(&self, today: NaiveDate) -> TallyResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .iter()
            .filter(|e| same_month(e.date, today))
            .map(|e| e.amount)
            .sum())
    }

    /// Total income in the calendar month containing `today`
    pub fn monthly_income(&self, today: NaiveDate) -> TallyResult<Money> {
        Ok(self
            .storage
            .income
            .get_all()?
            .iter()
            .filter(|i| same_month(i.date, today))
            .map(|i| i.amount)
            .sum())
    }

    /// Sum of all budget limits
    pub fn total_budget_limit(&self) -> TallyResult<Money> {
        Ok(self.storage.budgets.get_all()?.iter().map(|b| b.limit).sum())
    }

    /// The most recent expenses, newest first, at most `count`
    pub fn recent_expenses(&self, count: usize) -> TallyResult<Vec<Expense>> {
        let mut all = self.storage.expenses.get_all()?;
        all.truncate(count);
        Ok(all)
    }
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.month() == today.month() && date.year() == today.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::{Expense, Income, PaymentMethodId};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, on: NaiveDate) -> Expense {
        Expense::new("x", Money::from_cents(cents), "Shopping", on, PaymentMethodId::new())
    }

    fn income(cents: i64, on: NaiveDate) -> Income {
        Income::new("pay", Money::from_cents(cents), "Salary", on)
    }

    #[test]
    fn test_total_balance() {
        let (_tmp, storage) = setup();

        storage.income.upsert(income(500000, date(2025, 3, 1))).unwrap();
        storage.income.upsert(income(100000, date(2025, 1, 1))).unwrap();
        storage.expenses.upsert(expense(120000, date(2025, 3, 5))).unwrap();
        storage.expenses.upsert(expense(30000, date(2024, 12, 5))).unwrap();

        let service = SummaryService::new(&storage);
        // 6000.00 income - 1500.00 expenses
        assert_eq!(service.total_balance().unwrap().cents(), 450000);
    }

    #[test]
    fn test_monthly_totals_filter_by_month() {
        let (_tmp, storage) = setup();
        let today = date(2025, 3, 15);

        storage.expenses.upsert(expense(10000, date(2025, 3, 10))).unwrap();
        storage.expenses.upsert(expense(5000, date(2025, 2, 10))).unwrap();
        // Same month, previous year
        storage.expenses.upsert(expense(7000, date(2024, 3, 10))).unwrap();
        storage.income.upsert(income(200000, date(2025, 3, 1))).unwrap();
        storage.income.upsert(income(100000, date(2025, 2, 1))).unwrap();

        let service = SummaryService::new(&storage);
        assert_eq!(service.monthly_spent(today).unwrap().cents(), 10000);
        assert_eq!(service.monthly_income(today).unwrap().cents(), 200000);
    }

    #[test]
    fn test_current_month_expense_moves_monthly_spent_by_its_amount() {
        let (_tmp, storage) = setup();
        let today = date(2025, 3, 15);
        let service = SummaryService::new(&storage);

        let before = service.monthly_spent(today).unwrap();
        storage.expenses.upsert(expense(4200, today)).unwrap();
        let after = service.monthly_spent(today).unwrap();
        assert_eq!((after - before).cents(), 4200);

        // An out-of-month expense leaves it unchanged
        storage.expenses.upsert(expense(9999, date(2025, 4, 1))).unwrap();
        assert_eq!(service.monthly_spent(today).unwrap(), after);
    }

    #[test]
    fn test_recent_expenses_bounded_and_ordered() {
        let (_tmp, storage) = setup();

        for day in 1..=8 {
            storage.expenses.upsert(expense(1000, date(2025, 3, day))).unwrap();
        }

        let service = SummaryService::new(&storage);
        let recent = service.recent_expenses(5).unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].date, date(2025, 3, 8));
        assert_eq!(recent[4].date, date(2025, 3, 4));
    }
}

//! Daily spending trend
//!
//! Totals per day for the trailing 7 days, today inclusive, oldest first.

use chrono::{Days, NaiveDate};

use crate::error::TallyResult;
use crate::models::Money;
use crate::storage::Storage;

/// Spending on a single day
#[derive(Debug, Clone)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub total: Money,
    pub count: usize,
}

/// Trailing 7-day spending trend
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// One entry per day, oldest first, today last
    pub days: Vec<DailySpending>,
    /// Largest daily total, for bar scaling
    pub max_daily: Money,
}

impl TrendReport {
    /// Generate the trend for the 7 days ending at `today`
    pub fn generate(storage: &Storage, today: NaiveDate) -> TallyResult<Self> {
        let expenses = storage.expenses.get_all()?;

        let mut days = Vec::with_capacity(7);
        for offset in (0..7).rev() {
            let date = today - Days::new(offset);
            let mut total = Money::zero();
            let mut count = 0;
            for expense in expenses.iter().filter(|e| e.date == date) {
                total += expense.amount;
                count += 1;
            }
            days.push(DailySpending { date, total, count });
        }

        let max_daily = days.iter().map(|d| d.total).max().unwrap_or_default();

        Ok(Self { days, max_daily })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::{Expense, PaymentMethodId};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn add(storage: &Storage, cents: i64, on: NaiveDate) {
        storage
            .expenses
            .upsert(Expense::new(
                "x",
                Money::from_cents(cents),
                "Shopping",
                on,
                PaymentMethodId::new(),
            ))
            .unwrap();
    }

    #[test]
    fn test_seven_days_oldest_first() {
        let (_tmp, storage) = setup();
        let today = date(15);

        add(&storage, 1000, today);
        add(&storage, 2000, today);
        add(&storage, 500, date(9));
        // Outside the window
        add(&storage, 9000, date(8));

        let report = TrendReport::generate(&storage, today).unwrap();
        assert_eq!(report.days.len(), 7);
        assert_eq!(report.days[0].date, date(9));
        assert_eq!(report.days[0].total.cents(), 500);
        assert_eq!(report.days[6].date, today);
        assert_eq!(report.days[6].total.cents(), 3000);
        assert_eq!(report.days[6].count, 2);
        assert_eq!(report.max_daily.cents(), 3000);
    }

    #[test]
    fn test_empty_days_are_zero() {
        let (_tmp, storage) = setup();
        let report = TrendReport::generate(&storage, date(15)).unwrap();

        assert_eq!(report.days.len(), 7);
        assert!(report.days.iter().all(|d| d.total.is_zero() && d.count == 0));
        assert!(report.max_daily.is_zero());
    }
}

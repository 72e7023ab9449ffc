//! Income model
//!
//! An income record mirrors an expense but carries a source instead of a
//! category and payment method.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::recurrence::Recurrence;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyTitle,
    NegativeAmount,
    EmptySource,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Income title cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::EmptySource => write!(f, "Income source cannot be empty"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single income record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    /// Unique identifier
    pub id: IncomeId,

    /// Short description shown in listings
    pub title: String,

    /// Amount received (always non-negative)
    pub amount: Money,

    /// Where the money came from (e.g. "Salary", "Freelance")
    pub source: String,

    /// Date the income was received
    pub date: NaiveDate,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional recurrence schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income record with a fresh identifier
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        source: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeId::new(),
            title: title.into(),
            amount,
            source: source.into(),
            date,
            description: None,
            recurring: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.title.trim().is_empty() {
            return Err(IncomeValidationError::EmptyTitle);
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        Ok(())
    }

    /// Merge a partial update into this record
    pub fn apply(&mut self, patch: IncomePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(recurring) = patch.recurring {
            self.recurring = recurring;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for an income record
#[derive(Debug, Clone, Default)]
pub struct IncomePatch {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub source: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
    pub recurring: Option<Option<Recurrence>>,
}

impl IncomePatch {
    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.source.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.recurring.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Income {
        Income::new(
            "March salary",
            Money::from_cents(500000),
            "Salary",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_income() {
        let inc = sample();
        assert_eq!(inc.source, "Salary");
        assert_eq!(inc.amount.cents(), 500000);
        assert!(inc.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut inc = sample();
        inc.amount = Money::from_cents(-100);
        assert_eq!(inc.validate(), Err(IncomeValidationError::NegativeAmount));

        let mut inc = sample();
        inc.source = " ".into();
        assert_eq!(inc.validate(), Err(IncomeValidationError::EmptySource));
    }

    #[test]
    fn test_apply_patch() {
        let mut inc = sample();
        inc.apply(IncomePatch {
            amount: Some(Money::from_cents(550000)),
            ..Default::default()
        });
        assert_eq!(inc.amount.cents(), 550000);
        assert_eq!(inc.title, "March salary");
    }
}

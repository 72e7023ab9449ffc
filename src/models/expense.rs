//! Expense model
//!
//! An expense is a single spending record: what was bought, how much it
//! cost, which category it belongs to, and how it was paid.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, PaymentMethodId};
use super::money::Money;
use super::recurrence::Recurrence;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    NegativeAmount,
    EmptyCategory,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Expense title cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single spending record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short description shown in listings
    pub title: String,

    /// Amount spent (always non-negative)
    pub amount: Money,

    /// Category name (matches a seeded category)
    pub category: String,

    /// Optional subcategory within the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Date of the expense
    pub date: NaiveDate,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How the expense was paid
    pub payment_method: PaymentMethodId,

    /// Ordered list of tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether this spending was essential
    #[serde(default)]
    pub is_essential: bool,

    /// Optional location where the expense happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Optional recurrence schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh identifier
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        payment_method: PaymentMethodId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            category: category.into(),
            subcategory: None,
            date,
            description: None,
            payment_method,
            tags: Vec::new(),
            is_essential: false,
            location: None,
            recurring: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }
        Ok(())
    }

    /// Merge a partial update into this expense
    ///
    /// Only fields present in the patch are touched. Bumps `updated_at`.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(subcategory) = patch.subcategory {
            self.subcategory = subcategory;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(payment_method) = patch.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(is_essential) = patch.is_essential {
            self.is_essential = is_essential;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(recurring) = patch.recurring {
            self.recurring = recurring;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for an expense
///
/// `None` means "leave unchanged". Optional record fields use a nested
/// `Option` so a patch can also clear them.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub subcategory: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
    pub payment_method: Option<PaymentMethodId>,
    pub tags: Option<Vec<String>>,
    pub is_essential: Option<bool>,
    pub location: Option<Option<String>>,
    pub recurring: Option<Option<Recurrence>>,
}

impl ExpensePatch {
    /// Check whether the patch changes anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.payment_method.is_none()
            && self.tags.is_none()
            && self.is_essential.is_none()
            && self.location.is_none()
            && self.recurring.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            "Lunch",
            Money::from_cents(1250),
            "Food & Dining",
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            PaymentMethodId::new(),
        )
    }

    #[test]
    fn test_new_expense() {
        let exp = sample();
        assert_eq!(exp.title, "Lunch");
        assert_eq!(exp.amount.cents(), 1250);
        assert!(exp.tags.is_empty());
        assert!(!exp.is_essential);
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut exp = sample();
        exp.title = "   ".into();
        assert_eq!(exp.validate(), Err(ExpenseValidationError::EmptyTitle));

        let mut exp = sample();
        exp.amount = Money::from_cents(-1);
        assert_eq!(exp.validate(), Err(ExpenseValidationError::NegativeAmount));

        let mut exp = sample();
        exp.category = String::new();
        assert_eq!(exp.validate(), Err(ExpenseValidationError::EmptyCategory));
    }

    #[test]
    fn test_apply_patch_merges_only_named_fields() {
        let mut exp = sample();
        let original_category = exp.category.clone();

        exp.apply(ExpensePatch {
            amount: Some(Money::from_cents(2000)),
            location: Some(Some("Downtown".into())),
            ..Default::default()
        });

        assert_eq!(exp.amount.cents(), 2000);
        assert_eq!(exp.location.as_deref(), Some("Downtown"));
        assert_eq!(exp.category, original_category);
        assert_eq!(exp.title, "Lunch");
    }

    #[test]
    fn test_apply_patch_can_clear_optional_field() {
        let mut exp = sample();
        exp.description = Some("team lunch".into());

        exp.apply(ExpensePatch {
            description: Some(None),
            ..Default::default()
        });

        assert!(exp.description.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ExpensePatch::default().is_empty());
        let patch = ExpensePatch {
            title: Some("x".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let exp = sample();
        let json = serde_json::to_string(&exp).unwrap();
        let parsed: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, exp.id);
        assert_eq!(parsed.amount, exp.amount);
        assert_eq!(parsed.category, exp.category);
    }
}

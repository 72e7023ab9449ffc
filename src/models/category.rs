//! Category model
//!
//! Categories are static reference data seeded at init time. Expenses refer
//! to them by name; a missing lookup falls back to a default display value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category with display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (referenced by expenses and budgets)
    pub name: String,

    /// Emoji icon shown in listings
    pub icon: String,

    /// Hex color for display
    pub color: String,

    /// Suggested subcategories
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl Category {
    /// Create a new category
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        subcategories: Vec<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            subcategories,
        }
    }

    /// The default seed categories
    pub fn defaults() -> Vec<Category> {
        let strs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        vec![
            Category::new(
                "Food & Dining",
                "🍽️",
                "#FF6B6B",
                strs(&["Restaurants", "Groceries", "Fast Food", "Coffee"]),
            ),
            Category::new(
                "Transportation",
                "🚗",
                "#4ECDC4",
                strs(&["Fuel", "Public Transport", "Taxi/Uber", "Parking"]),
            ),
            Category::new(
                "Entertainment",
                "🎬",
                "#45B7D1",
                strs(&["Movies", "Games", "Streaming", "Events"]),
            ),
            Category::new(
                "Shopping",
                "🛍️",
                "#96CEB4",
                strs(&["Clothing", "Electronics", "Books", "Gifts"]),
            ),
            Category::new(
                "Bills & Utilities",
                "📄",
                "#FFEAA7",
                strs(&["Electricity", "Water", "Internet", "Phone"]),
            ),
            Category::new(
                "Healthcare",
                "🏥",
                "#FD79A8",
                strs(&["Medicine", "Doctor", "Insurance", "Fitness"]),
            ),
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cats = Category::defaults();
        assert_eq!(cats.len(), 6);
        assert!(cats.iter().any(|c| c.name == "Food & Dining"));
        assert!(cats.iter().all(|c| !c.subcategories.is_empty()));
    }

    #[test]
    fn test_display() {
        let cat = Category::new("Travel", "✈️", "#123456", vec![]);
        assert_eq!(format!("{}", cat), "✈️ Travel");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let cat = Category::defaults().remove(0);
        let json = serde_json::to_string(&cat).unwrap();
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, cat.name);
        assert_eq!(parsed.subcategories, cat.subcategories);
    }
}

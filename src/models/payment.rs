//! Payment method model
//!
//! Payment methods are static reference data seeded at init time and looked
//! up by id from expenses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PaymentMethodId;

/// Broad class of a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodKind {
    Cash,
    Card,
    Digital,
    Bank,
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethodKind::Cash => "cash",
            PaymentMethodKind::Card => "card",
            PaymentMethodKind::Digital => "digital",
            PaymentMethodKind::Bank => "bank",
        };
        write!(f, "{}", s)
    }
}

/// A way of paying for an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Unique identifier (referenced by expenses)
    pub id: PaymentMethodId,

    /// Display name
    pub name: String,

    /// Broad class of this method
    pub kind: PaymentMethodKind,

    /// Emoji icon shown in listings
    pub icon: String,
}

impl PaymentMethod {
    /// Create a new payment method
    pub fn new(
        name: impl Into<String>,
        kind: PaymentMethodKind,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: PaymentMethodId::new(),
            name: name.into(),
            kind,
            icon: icon.into(),
        }
    }

    /// The default seed payment methods
    pub fn defaults() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::new("Cash", PaymentMethodKind::Cash, "💵"),
            PaymentMethod::new("Credit Card", PaymentMethodKind::Card, "💳"),
            PaymentMethod::new("UPI", PaymentMethodKind::Digital, "📱"),
            PaymentMethod::new("Bank Transfer", PaymentMethodKind::Bank, "🏦"),
        ]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let methods = PaymentMethod::defaults();
        assert_eq!(methods.len(), 4);
        assert!(methods.iter().any(|m| m.kind == PaymentMethodKind::Cash));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PaymentMethodKind::Digital).unwrap();
        assert_eq!(json, "\"digital\"");
    }
}

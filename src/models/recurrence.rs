//! Recurrence descriptor for repeating expenses and income
//!
//! A recurrence only records the schedule; nothing materializes future
//! entries automatically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a recurring record repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

/// Schedule attached to a recurring expense or income record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// How often the record repeats
    pub frequency: Frequency,

    /// The next date the record is expected to occur
    pub next_date: NaiveDate,

    /// Optional end of the schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Recurrence {
    /// Create a new open-ended recurrence
    pub fn new(frequency: Frequency, next_date: NaiveDate) -> Self {
        Self {
            frequency,
            next_date,
            end_date: None,
        }
    }

    /// Check whether the schedule is still active on the given date
    pub fn is_active(&self, today: NaiveDate) -> bool {
        match self.end_date {
            Some(end) => today <= end,
            None => true,
        }
    }
}

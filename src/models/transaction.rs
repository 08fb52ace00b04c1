use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::{BudgetError, Result};

/// A single income or expense entry. Replaced wholesale on edit, except the
/// timestamp, which always survives from creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: Decimal,
    #[serde(rename = "desc")]
    pub description: String,
    pub category: Category,
    /// Local creation time, "YYYY-MM-DD HH:MM:SS".
    pub date: String,
}

impl Transaction {
    /// Validates and stamps the record with the current instant.
    pub fn new(amount: Decimal, description: &str, category: Category) -> Result<Self> {
        Self::with_date(
            amount,
            description,
            category,
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        )
    }

    pub(crate) fn with_date(
        amount: Decimal,
        description: &str,
        category: Category,
        date: String,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(BudgetError::Validation(format!(
                "amount must be positive, got {amount}"
            )));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(BudgetError::Validation(
                "description must not be empty".into(),
            ));
        }
        Ok(Self {
            amount,
            description: description.to_string(),
            category,
            date,
        })
    }

    /// "YYYY-MM-DD" prefix, for display.
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }

    /// Month matching is a plain string-prefix test against the timestamp.
    pub fn matches_month(&self, filter: &str) -> bool {
        self.date.starts_with(filter)
    }
}

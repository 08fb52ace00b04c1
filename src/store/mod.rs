use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};
use crate::models::{Category, Transaction};

#[cfg(test)]
mod tests;

/// Which of the two transaction sequences an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_lowercase())
    }
}

/// The whole budget, held in memory and persisted as one snapshot. Entries
/// are addressed by position within their sequence; order is append order
/// and never changes except when a delete shifts later entries down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetStore {
    #[serde(default)]
    pub income: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
    /// Zero means no goal set.
    #[serde(default)]
    pub savings_goal: Decimal,
}

impl BudgetStore {
    pub fn add_income(
        &mut self,
        amount: Decimal,
        description: &str,
        category: Category,
    ) -> Result<&Transaction> {
        let txn = Transaction::new(amount, description, category)?;
        self.income.push(txn);
        let idx = self.income.len() - 1;
        Ok(&self.income[idx])
    }

    pub fn add_expense(
        &mut self,
        amount: Decimal,
        description: &str,
        category: Category,
    ) -> Result<&Transaction> {
        let txn = Transaction::new(amount, description, category)?;
        self.expenses.push(txn);
        let idx = self.expenses.len() - 1;
        Ok(&self.expenses[idx])
    }

    pub fn add(
        &mut self,
        kind: EntryKind,
        amount: Decimal,
        description: &str,
        category: Category,
    ) -> Result<&Transaction> {
        match kind {
            EntryKind::Income => self.add_income(amount, description, category),
            EntryKind::Expense => self.add_expense(amount, description, category),
        }
    }

    pub fn set_savings_goal(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(BudgetError::Validation(format!(
                "savings goal must be positive, got {amount}"
            )));
        }
        self.savings_goal = amount;
        Ok(())
    }

    /// Replaces the entry at `index`, keeping its original timestamp.
    /// The store is untouched on any error.
    pub fn edit(
        &mut self,
        kind: EntryKind,
        index: usize,
        amount: Decimal,
        description: &str,
        category: Category,
    ) -> Result<&Transaction> {
        let seq = self.entries_mut(kind);
        let Some(old) = seq.get(index) else {
            return Err(BudgetError::OutOfBounds { kind, index });
        };
        let replacement = Transaction::with_date(amount, description, category, old.date.clone())?;
        seq[index] = replacement;
        Ok(&seq[index])
    }

    /// Removes and returns the entry at `index`; later entries shift down.
    pub fn delete(&mut self, kind: EntryKind, index: usize) -> Result<Transaction> {
        let seq = self.entries_mut(kind);
        if index >= seq.len() {
            return Err(BudgetError::OutOfBounds { kind, index });
        }
        Ok(seq.remove(index))
    }

    pub fn entries(&self, kind: EntryKind) -> &[Transaction] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Transaction> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    // All-time totals, used by the alert thresholds. Month filtering never
    // applies here.

    pub fn total_income(&self) -> Decimal {
        self.income.iter().map(|t| t.amount).sum()
    }

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|t| t.amount).sum()
    }

    pub fn balance(&self) -> Decimal {
        self.total_income() - self.total_expenses()
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}

use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::{Category, Transaction};
use crate::store::BudgetStore;

#[cfg(test)]
mod tests;

/// How many of the latest matching entries a summary carries per sequence.
pub const RECENT_LIMIT: usize = 3;

// A usable filter is ASCII digits and hyphens, e.g. "2024", "2024-05",
// "2024-05-17". Anything else falls back to the current month.
#[allow(clippy::expect_used)]
static FILTER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9-]+$").expect("literal pattern"));

pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

pub fn resolve_month(filter: Option<&str>) -> String {
    match filter {
        Some(f) if !f.is_empty() && FILTER_SHAPE.is_match(f) => f.to_string(),
        _ => current_month(),
    }
}

/// Month-scoped view of the store. Everything here is derived; mutations go
/// through `BudgetStore` and the caller re-summarizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub month: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    /// All five categories in declaration order, zero when unmatched.
    pub by_category: Vec<(Category, Decimal)>,
    pub savings_goal: Decimal,
    /// Balance clamped to [0, goal]; zero when no goal is set.
    pub savings_progress: Decimal,
    pub recent_income: Vec<Transaction>,
    pub recent_expenses: Vec<Transaction>,
}

impl Summary {
    pub fn has_data(&self) -> bool {
        self.total_income != Decimal::ZERO || self.total_expenses != Decimal::ZERO
    }
}

/// Data for the chart screen: one income bar plus one bar per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub month: String,
    pub total_income: Decimal,
    pub by_category: Vec<(Category, Decimal)>,
}

impl ChartSeries {
    pub fn has_data(&self) -> bool {
        self.total_income != Decimal::ZERO
            || self.by_category.iter().any(|(_, amt)| *amt != Decimal::ZERO)
    }
}

pub fn summarize(store: &BudgetStore, filter: Option<&str>) -> Summary {
    let month = resolve_month(filter);

    let income: Vec<&Transaction> = store
        .income
        .iter()
        .filter(|t| t.matches_month(&month))
        .collect();
    let expenses: Vec<&Transaction> = store
        .expenses
        .iter()
        .filter(|t| t.matches_month(&month))
        .collect();

    let total_income: Decimal = income.iter().map(|t| t.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|t| t.amount).sum();
    let balance = total_income - total_expenses;

    let by_category = category_totals(&expenses);

    let savings_progress = if store.savings_goal > Decimal::ZERO {
        balance.max(Decimal::ZERO).min(store.savings_goal)
    } else {
        Decimal::ZERO
    };

    Summary {
        month,
        total_income,
        total_expenses,
        balance,
        by_category,
        savings_goal: store.savings_goal,
        savings_progress,
        recent_income: last_n(&income, RECENT_LIMIT),
        recent_expenses: last_n(&expenses, RECENT_LIMIT),
    }
}

pub fn chart_series(store: &BudgetStore, filter: Option<&str>) -> ChartSeries {
    let month = resolve_month(filter);

    let total_income: Decimal = store
        .income
        .iter()
        .filter(|t| t.matches_month(&month))
        .map(|t| t.amount)
        .sum();
    let expenses: Vec<&Transaction> = store
        .expenses
        .iter()
        .filter(|t| t.matches_month(&month))
        .collect();

    ChartSeries {
        month,
        total_income,
        by_category: category_totals(&expenses),
    }
}

fn category_totals(expenses: &[&Transaction]) -> Vec<(Category, Decimal)> {
    Category::all()
        .iter()
        .map(|&cat| {
            let total = expenses
                .iter()
                .filter(|t| t.category == cat)
                .map(|t| t.amount)
                .sum();
            (cat, total)
        })
        .collect()
}

/// Last `n` in original sequence order.
fn last_n(entries: &[&Transaction], n: usize) -> Vec<Transaction> {
    entries[entries.len().saturating_sub(n)..]
        .iter()
        .map(|t| (*t).clone())
        .collect()
}

#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::error::BudgetError;

fn seeded() -> BudgetStore {
    let mut store = BudgetStore::default();
    store.add_income(dec!(1000), "Salary", Category::Other).unwrap();
    store.add_income(dec!(200), "Side gig", Category::Other).unwrap();
    store.add_expense(dec!(45.50), "Groceries", Category::Food).unwrap();
    store.add_expense(dec!(60), "Electric bill", Category::Bills).unwrap();
    store
}

#[test]
fn adds_append_in_order() {
    let store = seeded();
    assert_eq!(store.income.len(), 2);
    assert_eq!(store.income[0].description, "Salary");
    assert_eq!(store.income[1].description, "Side gig");
    assert_eq!(store.expenses[0].description, "Groceries");
    assert_eq!(store.len(), 4);
    assert!(!store.is_empty());
}

#[test]
fn add_rejects_bad_input_without_mutating() {
    let mut store = seeded();
    let before = store.clone();
    assert!(store.add_income(dec!(-1), "Bad", Category::Other).is_err());
    assert!(store.add_expense(dec!(10), "  ", Category::Other).is_err());
    assert_eq!(store, before);
}

#[test]
fn totals_and_balance() {
    let store = seeded();
    assert_eq!(store.total_income(), dec!(1200));
    assert_eq!(store.total_expenses(), dec!(105.50));
    assert_eq!(store.balance(), dec!(1094.50));
}

#[test]
fn set_savings_goal_rejects_non_positive() {
    let mut store = seeded();
    store.set_savings_goal(dec!(500)).unwrap();
    assert_eq!(store.savings_goal, dec!(500));

    let err = store.set_savings_goal(dec!(-5)).unwrap_err();
    assert!(matches!(err, BudgetError::Validation(_)));
    assert_eq!(store.savings_goal, dec!(500));

    assert!(store.set_savings_goal(dec!(0)).is_err());
}

#[test]
fn edit_replaces_fields_but_keeps_date_and_position() {
    let mut store = seeded();
    let original_date = store.expenses[0].date.clone();
    let edited = store
        .edit(EntryKind::Expense, 0, dec!(50), "Weekly groceries", Category::Food)
        .unwrap();
    assert_eq!(edited.amount, dec!(50));
    assert_eq!(edited.description, "Weekly groceries");
    assert_eq!(edited.date, original_date);
    assert_eq!(store.expenses[0].description, "Weekly groceries");
    assert_eq!(store.expenses[1].description, "Electric bill");
}

#[test]
fn edit_out_of_range_leaves_store_unchanged() {
    let mut store = seeded();
    let before = store.clone();
    let err = store
        .edit(EntryKind::Income, 9, dec!(1), "x", Category::Other)
        .unwrap_err();
    assert!(matches!(
        err,
        BudgetError::OutOfBounds { kind: EntryKind::Income, index: 9 }
    ));
    assert_eq!(store, before);
}

#[test]
fn edit_with_invalid_amount_leaves_store_unchanged() {
    let mut store = seeded();
    let before = store.clone();
    let err = store
        .edit(EntryKind::Expense, 0, dec!(0), "x", Category::Other)
        .unwrap_err();
    assert!(matches!(err, BudgetError::Validation(_)));
    assert_eq!(store, before);
}

#[test]
fn delete_shifts_later_entries_down() {
    let mut store = seeded();
    let removed = store.delete(EntryKind::Expense, 0).unwrap();
    assert_eq!(removed.description, "Groceries");
    assert_eq!(store.expenses.len(), 1);
    assert_eq!(store.expenses[0].description, "Electric bill");
}

#[test]
fn delete_out_of_range_leaves_store_unchanged() {
    let mut store = seeded();
    let before = store.clone();
    let err = store.delete(EntryKind::Income, 5).unwrap_err();
    assert!(matches!(
        err,
        BudgetError::OutOfBounds { kind: EntryKind::Income, index: 5 }
    ));
    assert_eq!(store, before);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut store = seeded();
    store.set_savings_goal(dec!(750.25)).unwrap();
    let json = serde_json::to_string(&store).unwrap();
    let back: BudgetStore = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store);
}

#[test]
fn snapshot_missing_fields_default() {
    let store: BudgetStore = serde_json::from_str("{}").unwrap();
    assert_eq!(store, BudgetStore::default());
    assert_eq!(store.savings_goal, Decimal::ZERO);
}

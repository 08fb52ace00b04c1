#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::error::BudgetError;
use crate::models::Category;

fn seeded() -> BudgetStore {
    let mut store = BudgetStore::default();
    store.add_income(dec!(1200.75), "Salary", Category::Other).unwrap();
    store.add_expense(dec!(45.50), "Groceries", Category::Food).unwrap();
    store.add_expense(dec!(60), "Electric bill", Category::Bills).unwrap();
    store.set_savings_goal(dec!(500)).unwrap();
    store
}

#[test]
fn load_before_any_save_is_empty() {
    let storage = Storage::open_in_memory().unwrap();
    assert_eq!(storage.load().unwrap(), BudgetStore::default());
}

#[test]
fn save_then_load_round_trips() {
    let storage = Storage::open_in_memory().unwrap();
    let store = seeded();
    storage.save(&store).unwrap();
    assert_eq!(storage.load().unwrap(), store);
}

#[test]
fn save_overwrites_previous_snapshot() {
    let storage = Storage::open_in_memory().unwrap();
    let mut store = seeded();
    storage.save(&store).unwrap();

    store.delete(crate::store::EntryKind::Expense, 0).unwrap();
    storage.save(&store).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.expenses.len(), 1);
    assert_eq!(loaded, store);
}

#[test]
fn corrupt_snapshot_is_an_error() {
    let storage = Storage::open_in_memory().unwrap();
    storage.raw_write(1, "{not json").unwrap();
    let err = storage.load().unwrap_err();
    assert!(matches!(err, BudgetError::Encode(_)));
}

#[test]
fn newer_format_is_rejected() {
    let storage = Storage::open_in_memory().unwrap();
    storage.raw_write(99, "{}").unwrap();
    let err = storage.load().unwrap_err();
    assert!(matches!(err, BudgetError::UnsupportedFormat(99)));
}

#[test]
fn persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.db");

    let store = seeded();
    {
        let storage = Storage::open(&path).unwrap();
        storage.save(&store).unwrap();
    }

    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), store);
}

#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::Transaction;

fn txn(amount: Decimal, desc: &str, category: Category, date: &str) -> Transaction {
    Transaction::with_date(amount, desc, category, date.into()).unwrap()
}

fn may_2024_store() -> BudgetStore {
    let mut store = BudgetStore::default();
    store.income.push(txn(dec!(1000), "Salary", Category::Other, "2024-05-01 09:00:00"));
    store.expenses.push(txn(dec!(900), "Rent", Category::Bills, "2024-05-02 10:00:00"));
    store
}

#[test]
fn filter_shape_accepts_digits_and_hyphens() {
    assert_eq!(resolve_month(Some("2024-05")), "2024-05");
    assert_eq!(resolve_month(Some("2024")), "2024");
    assert_eq!(resolve_month(Some("2024-05-17")), "2024-05-17");
}

#[test]
fn bad_filters_fall_back_to_current_month() {
    let now = current_month();
    assert_eq!(resolve_month(None), now);
    assert_eq!(resolve_month(Some("")), now);
    assert_eq!(resolve_month(Some("May 2024")), now);
    assert_eq!(resolve_month(Some("2024_05")), now);
    assert_eq!(resolve_month(Some("2024-05 ")), now);
}

#[test]
fn may_2024_summary_totals() {
    let store = may_2024_store();
    let summary = summarize(&store, Some("2024-05"));
    assert_eq!(summary.month, "2024-05");
    assert_eq!(summary.total_income, dec!(1000));
    assert_eq!(summary.total_expenses, dec!(900));
    assert_eq!(summary.balance, dec!(100));
    assert_eq!(summary.by_category[2], (Category::Bills, dec!(900)));
    assert!(summary.has_data());
}

#[test]
fn filter_excludes_other_months() {
    let mut store = may_2024_store();
    store.income.push(txn(dec!(500), "Bonus", Category::Other, "2024-06-01 09:00:00"));
    let summary = summarize(&store, Some("2024-05"));
    assert_eq!(summary.total_income, dec!(1000));

    let june = summarize(&store, Some("2024-06"));
    assert_eq!(june.total_income, dec!(500));
    assert_eq!(june.total_expenses, Decimal::ZERO);
}

#[test]
fn year_filter_matches_whole_year() {
    let mut store = may_2024_store();
    store.income.push(txn(dec!(500), "Bonus", Category::Other, "2024-06-01 09:00:00"));
    let summary = summarize(&store, Some("2024"));
    assert_eq!(summary.total_income, dec!(1500));
}

#[test]
fn by_category_lists_all_five_and_sums_to_total() {
    let mut store = may_2024_store();
    store.expenses.push(txn(dec!(45.50), "Groceries", Category::Food, "2024-05-03 18:00:00"));
    store.expenses.push(txn(dec!(20), "Movie", Category::Entertainment, "2024-05-04 20:00:00"));

    let summary = summarize(&store, Some("2024-05"));
    assert_eq!(summary.by_category.len(), 5);
    assert_eq!(
        summary.by_category.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
        Category::all().to_vec()
    );

    let by_cat_total: Decimal = summary.by_category.iter().map(|(_, amt)| *amt).sum();
    assert_eq!(by_cat_total, summary.total_expenses);

    assert_eq!(summary.by_category[0], (Category::Food, dec!(45.50)));
    assert_eq!(summary.by_category[3], (Category::Shopping, Decimal::ZERO));
}

#[test]
fn savings_progress_clamps_to_goal() {
    let mut store = may_2024_store();
    store.savings_goal = dec!(50);
    // balance 100 > goal 50
    let summary = summarize(&store, Some("2024-05"));
    assert_eq!(summary.savings_progress, dec!(50));
}

#[test]
fn savings_progress_floors_at_zero() {
    let mut store = may_2024_store();
    store.savings_goal = dec!(500);
    store.expenses.push(txn(dec!(200), "Overspend", Category::Other, "2024-05-20 12:00:00"));
    // balance -100
    let summary = summarize(&store, Some("2024-05"));
    assert_eq!(summary.savings_progress, Decimal::ZERO);
}

#[test]
fn no_goal_means_zero_progress() {
    let summary = summarize(&may_2024_store(), Some("2024-05"));
    assert_eq!(summary.savings_goal, Decimal::ZERO);
    assert_eq!(summary.savings_progress, Decimal::ZERO);
}

#[test]
fn recents_are_last_three_in_original_order() {
    let mut store = BudgetStore::default();
    for (i, day) in ["01", "02", "03", "04"].iter().enumerate() {
        store.expenses.push(txn(
            Decimal::from(i as i64 + 1),
            &format!("e{day}"),
            Category::Other,
            &format!("2024-05-{day} 12:00:00"),
        ));
    }
    let summary = summarize(&store, Some("2024-05"));
    let names: Vec<&str> = summary
        .recent_expenses
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(names, vec!["e02", "e03", "e04"]);
    assert!(summary.recent_income.is_empty());
}

#[test]
fn empty_month_has_no_data() {
    let summary = summarize(&may_2024_store(), Some("1999-01"));
    assert!(!summary.has_data());
    assert_eq!(summary.balance, Decimal::ZERO);
    assert!(summary.recent_income.is_empty());
    assert!(summary.recent_expenses.is_empty());
}

#[test]
fn chart_series_mirrors_summary_shape() {
    let mut store = may_2024_store();
    store.expenses.push(txn(dec!(30), "Shoes", Category::Shopping, "2024-05-10 15:00:00"));
    let series = chart_series(&store, Some("2024-05"));
    assert_eq!(series.month, "2024-05");
    assert_eq!(series.total_income, dec!(1000));
    assert_eq!(series.by_category.len(), 5);
    assert!(series.has_data());

    let empty = chart_series(&BudgetStore::default(), Some("2024-05"));
    assert!(!empty.has_data());
}

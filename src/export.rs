use std::path::Path;

use crate::error::Result;
use crate::models::Transaction;
use crate::store::{BudgetStore, EntryKind};

pub const EXPORT_HEADER: [&str; 5] = ["Type", "Description", "Amount", "Category", "Date"];

/// Writes the whole store to `path`: header row, then income entries, then
/// expenses, each in sequence order. Returns the number of data rows.
pub fn export_csv(store: &BudgetStore, path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(EXPORT_HEADER)?;
    let mut count = 0;
    for txn in &store.income {
        write_row(&mut writer, EntryKind::Income, txn)?;
        count += 1;
    }
    for txn in &store.expenses {
        write_row(&mut writer, EntryKind::Expense, txn)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

fn write_row<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    kind: EntryKind,
    txn: &Transaction,
) -> Result<()> {
    let amount = txn.amount.to_string();
    writer.write_record([
        kind.as_str(),
        txn.description.as_str(),
        amount.as_str(),
        txn.category.as_str(),
        txn.date.as_str(),
    ])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Category;

    #[test]
    fn header_then_income_then_expenses() {
        let mut store = BudgetStore::default();
        store.add_expense(dec!(45.50), "Groceries", Category::Food).unwrap();
        store.add_income(dec!(1000), "Salary", Category::Other).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let count = export_csv(&store, &path).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Type,Description,Amount,Category,Date");
        assert!(lines[1].starts_with("Income,Salary,1000,Other,"));
        assert!(lines[2].starts_with("Expense,Groceries,45.50,Food,"));
    }

    #[test]
    fn empty_store_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let count = export_csv(&BudgetStore::default(), &path).unwrap();
        assert_eq!(count, 0);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "Type,Description,Amount,Category,Date");
    }
}

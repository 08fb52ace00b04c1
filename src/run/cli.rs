use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::alert;
use crate::export;
use crate::report;
use crate::storage::Storage;
use crate::store::{BudgetStore, EntryKind};
use crate::ui::commands::parse_entry_args;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut BudgetStore, storage: &Storage) -> Result<()> {
    match args[1].as_str() {
        "income" | "i" => cli_add(EntryKind::Income, &args[2..], store, storage),
        "expense" | "e" => cli_add(EntryKind::Expense, &args[2..], store, storage),
        "goal" | "g" => cli_goal(&args[2..], store, storage),
        "summary" | "s" => {
            cli_summary(args.get(2).map(String::as_str), store);
            Ok(())
        }
        "export" => cli_export(args.get(2).map(String::as_str), store),
        "alerts" => {
            cli_alerts(store);
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("hausbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}")
        }
    }
}

fn cli_add(
    kind: EntryKind,
    args: &[String],
    store: &mut BudgetStore,
    storage: &Storage,
) -> Result<()> {
    let joined = args.join(" ");
    let (amount, description, category) = parse_entry_args(&joined)
        .map_err(|msg| anyhow::anyhow!("{msg}"))?;

    let txn = store.add(kind, amount, &description, category)?;
    println!(
        "Added {kind}: {} ({}) [{}]",
        txn.description,
        format_amount(txn.amount),
        txn.category
    );

    storage.save(store)?;
    cli_alerts(store);
    Ok(())
}

fn cli_goal(args: &[String], store: &mut BudgetStore, storage: &Storage) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: hausbudget goal <amount>"))?;
    let amount =
        Decimal::from_str(raw).map_err(|_| anyhow::anyhow!("Invalid amount: {raw}"))?;

    store.set_savings_goal(amount)?;
    println!("Savings goal set to {}", format_amount(amount));

    storage.save(store)?;
    cli_alerts(store);
    Ok(())
}

fn cli_summary(filter: Option<&str>, store: &BudgetStore) {
    let summary = report::summarize(store, filter);
    let rule = "─".repeat(44);

    println!("Budget summary for {}", summary.month);
    println!("{rule}");

    if !summary.has_data() {
        println!("No transactions for this month.");
        return;
    }

    println!("  Income:    {:>14}", format_amount(summary.total_income));
    println!("  Expenses:  {:>14}", format_amount(summary.total_expenses));
    println!("  Balance:   {:>14}", format_amount(summary.balance));
    if summary.savings_goal > Decimal::ZERO {
        println!(
            "  Savings:   {:>14} of {} goal",
            format_amount(summary.savings_progress),
            format_amount(summary.savings_goal)
        );
    }

    println!("{rule}");
    println!("Expenses by category");
    for (cat, amount) in &summary.by_category {
        println!("  {:<14} {:>14}", cat.as_str(), format_amount(*amount));
    }

    if !summary.recent_income.is_empty() || !summary.recent_expenses.is_empty() {
        println!("{rule}");
        println!("Recent transactions");
        for txn in &summary.recent_income {
            println!(
                "  + {:>12}  {:<24} {}",
                format_amount(txn.amount),
                txn.description,
                txn.day()
            );
        }
        for txn in &summary.recent_expenses {
            println!(
                "  - {:>12}  {:<24} {}",
                format_amount(txn.amount),
                txn.description,
                txn.day()
            );
        }
    }
}

fn cli_export(path: Option<&str>, store: &BudgetStore) -> Result<()> {
    if store.is_empty() {
        println!("No entries to export");
        return Ok(());
    }
    let path = match path {
        Some(p) => shellexpand(p),
        None => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/hausbudget-export.csv")
        }
    };

    let count = export::export_csv(store, Path::new(&path))?;
    println!("Exported {count} entries to {path}");
    Ok(())
}

fn cli_alerts(store: &BudgetStore) {
    for alert in alert::evaluate(store) {
        println!("! {}", alert.message());
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return format!("{home}/{rest}");
        }
    }
    path.to_string()
}

fn print_usage() {
    println!("hausbudget - terminal budget planner");
    println!();
    println!("Usage:");
    println!("  hausbudget                       Launch the interactive TUI");
    println!("  hausbudget income <amt> <desc> [category]   Add income");
    println!("  hausbudget expense <amt> <desc> [category]  Add an expense");
    println!("  hausbudget goal <amt>            Set the savings goal");
    println!("  hausbudget summary [month]       Print a summary (e.g. 2024-05)");
    println!("  hausbudget export [path]         Export all entries to CSV");
    println!("  hausbudget alerts                Print active budget alerts");
    println!("  hausbudget --version             Print version");
    println!();
    println!("Categories: Food, Entertainment, Bills, Shopping, Other");
}

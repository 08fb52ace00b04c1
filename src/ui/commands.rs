use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::export;
use crate::models::Category;
use crate::storage::Storage;
use crate::store::{BudgetStore, EntryKind};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut BudgetStore, &Storage) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Hausbudget", cmd_quit, r);
    register_command!("quit", "Quit Hausbudget", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("history", "Go to History", cmd_history, r);
    register_command!("c", "Go to Chart", cmd_chart, r);
    register_command!("chart", "Go to Chart", cmd_chart, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "income",
        "Add income (e.g. :income 1200 Salary)",
        cmd_income,
        r
    );
    register_command!("i", "Add income (e.g. :i 1200 Salary)", cmd_income, r);
    register_command!(
        "expense",
        "Add expense (e.g. :expense 45.50 Groceries Food)",
        cmd_expense,
        r
    );
    register_command!("e", "Add expense (e.g. :e 45.50 Groceries Food)", cmd_expense, r);
    register_command!("goal", "Set savings goal (e.g. :goal 500)", cmd_goal, r);
    register_command!("g", "Set savings goal (e.g. :g 500)", cmd_goal, r);
    register_command!("month", "Set month (e.g. :month 2024-01)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2024-01)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "edit",
        "Edit selected entry (e.g. :edit 50 Weekly groceries Food)",
        cmd_edit,
        r
    );
    register_command!("delete", "Delete selected entry", cmd_delete, r);
    register_command!(
        "export",
        "Export everything to CSV (e.g. :export ~/budget.csv)",
        cmd_export,
        r
    );
    register_command!("theme", "Toggle dark/light theme", cmd_theme, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store, storage)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `<amount> <description...> [category]` - the trailing token is only taken
/// as a category when it names one and a description remains.
pub(crate) fn parse_entry_args(args: &str) -> Result<(Decimal, String, Category), String> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err("Expected: <amount> <description> [category]".into());
    }
    let amount =
        Decimal::from_str(tokens[0]).map_err(|_| format!("Invalid amount: {}", tokens[0]))?;
    let (desc_tokens, category) = match tokens.last().and_then(|t| Category::parse(t)) {
        Some(cat) if tokens.len() > 2 => (&tokens[1..tokens.len() - 1], cat),
        _ => (&tokens[1..], Category::Other),
    };
    Ok((amount, desc_tokens.join(" "), category))
}

/// Persist after a successful mutation, refresh the derived views, and fold
/// any active alerts into the status line.
pub(crate) fn commit(app: &mut App, store: &mut BudgetStore, storage: &Storage, success: String) {
    let mut msg = success;
    if let Err(e) = storage.save(store) {
        msg.push_str(&format!(" (save failed: {e})"));
    }
    app.refresh(store);
    for alert in &app.alerts {
        msg.push_str(" | ");
        msg.push_str(alert.message());
    }
    app.set_status(msg);
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_history(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.screen = Screen::History;
    Ok(())
}

fn cmd_chart(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.screen = Screen::Chart;
    Ok(())
}

fn cmd_help(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    add_entry(EntryKind::Income, args, app, store, storage)
}

fn cmd_expense(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    add_entry(EntryKind::Expense, args, app, store, storage)
}

fn add_entry(
    kind: EntryKind,
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!("Usage: :{kind} <amount> <description> [category]"));
        return Ok(());
    }

    let (amount, description, category) = match parse_entry_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    match store.add(kind, amount, &description, category) {
        Ok(txn) => {
            let msg = format!(
                "Added {kind}: {} ({}) [{}]",
                txn.description,
                super::util::format_amount(txn.amount),
                txn.category
            );
            commit(app, store, storage, msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_goal(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :goal <amount>");
        return Ok(());
    }

    let amount = match Decimal::from_str(args.trim()) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {args}"));
            return Ok(());
        }
    };

    match store.set_savings_goal(amount) {
        Ok(()) => {
            let msg = format!(
                "Savings goal set to {}",
                super::util::format_amount(amount)
            );
            commit(app, store, storage, msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_month(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    if args.is_empty() {
        // No args → back to the current month
        app.month_filter = None;
        app.refresh(store);
        app.set_status(format!("Showing current month: {}", app.active_month()));
        return Ok(());
    }

    // Accept formats like "2024-01", "2024-1", "01", "1"
    let month = if args.len() <= 2 {
        let year = app.month_filter.as_ref().map_or_else(
            || chrono::Local::now().format("%Y").to_string(),
            |m| m[..4].to_string(),
        );
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    // Validate by parsing as an actual date; re-formatting canonicalizes
    // short forms like "2024-1" to "2024-01" so the prefix filter matches
    match chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d") {
        Ok(date) => {
            let m = date.format("%Y-%m").to_string();
            app.set_status(format!("Switched to month: {m}"));
            app.month_filter = Some(m);
            app.refresh(store);
        }
        Err(_) => {
            app.set_status("Invalid month format. Use YYYY-MM (e.g. 2024-01)");
        }
    }

    Ok(())
}

fn cmd_next_month(
    _args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    advance_month(app, store, 1);
    Ok(())
}

fn cmd_prev_month(
    _args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    advance_month(app, store, -1);
    Ok(())
}

fn advance_month(app: &mut App, store: &mut BudgetStore, delta: i32) {
    let base = app.active_month();
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&format!("{base}-01"), "%Y-%m-%d") {
        let new_date = if delta > 0 {
            date.checked_add_months(chrono::Months::new(1))
        } else {
            date.checked_sub_months(chrono::Months::new(1))
        };

        if let Some(d) = new_date {
            let m = d.format("%Y-%m").to_string();
            app.set_status(format!("Month: {m}"));
            app.month_filter = Some(m);
            app.refresh(store);
        }
    }
}

fn cmd_edit(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    storage: &Storage,
) -> anyhow::Result<()> {
    if app.screen != Screen::History || app.rows.is_empty() {
        app.set_status("Open History and select an entry first");
        return Ok(());
    }

    if args.is_empty() {
        app.set_status("Usage: :edit <amount> <description> [category]");
        return Ok(());
    }

    let (amount, description, category) = match parse_entry_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };

    let Some(row) = app.selected_row() else {
        app.set_status("No entry selected");
        return Ok(());
    };

    match store.edit(row.kind, row.index, amount, &description, category) {
        Ok(txn) => {
            let msg = format!(
                "Updated {}: {} ({})",
                row.kind,
                txn.description,
                super::util::format_amount(txn.amount)
            );
            commit(app, store, storage, msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_delete(
    _args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    if app.screen != Screen::History || app.rows.is_empty() {
        app.set_status("Open History and select an entry first");
        return Ok(());
    }

    let Some(row) = app.selected_row() else {
        app.set_status("No entry selected");
        return Ok(());
    };

    if let Some(txn) = store.entries(row.kind).get(row.index) {
        let description = txn.description.clone();
        app.confirm_message = format!("Delete '{description}'?");
        app.pending_action = Some(PendingAction::DeleteEntry {
            kind: row.kind,
            index: row.index,
            description,
        });
        app.input_mode = InputMode::Confirm;
    }

    Ok(())
}

fn cmd_export(
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    if store.is_empty() {
        app.set_status("No entries to export");
        return Ok(());
    }

    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/hausbudget-export.csv")
    } else {
        crate::run::shellexpand(args)
    };

    match export::export_csv(store, Path::new(&path)) {
        Ok(count) => app.set_status(format!("Exported {count} entries to {path}")),
        Err(e) => app.set_status(format!("Export failed: {e}")),
    }
    Ok(())
}

fn cmd_theme(
    _args: &str,
    app: &mut App,
    _store: &mut BudgetStore,
    _storage: &Storage,
) -> anyhow::Result<()> {
    app.theme = app.theme.toggle();
    app.set_status(format!("Theme: {}", app.theme.name()));
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_and_description() {
        let (amount, desc, cat) = parse_entry_args("1200 Salary").unwrap();
        assert_eq!(amount, dec!(1200));
        assert_eq!(desc, "Salary");
        assert_eq!(cat, Category::Other);
    }

    #[test]
    fn parse_trailing_category() {
        let (amount, desc, cat) = parse_entry_args("45.50 Weekly groceries food").unwrap();
        assert_eq!(amount, dec!(45.50));
        assert_eq!(desc, "Weekly groceries");
        assert_eq!(cat, Category::Food);
    }

    #[test]
    fn lone_category_word_is_a_description() {
        // "Food" has nothing before it to describe, so it stays the description
        let (_, desc, cat) = parse_entry_args("10 Food").unwrap();
        assert_eq!(desc, "Food");
        assert_eq!(cat, Category::Other);
    }

    #[test]
    fn parse_rejects_bad_amount_and_missing_description() {
        assert!(parse_entry_args("abc Lunch").is_err());
        assert!(parse_entry_args("12.50").is_err());
        assert!(parse_entry_args("").is_err());
    }

    #[test]
    fn month_command_canonicalizes_short_forms() {
        let mut store = BudgetStore::default();
        let storage = Storage::open_in_memory().unwrap();
        let mut app = App::new(&store);

        handle_command("month 2024-1", &mut app, &mut store, &storage).unwrap();
        assert_eq!(app.month_filter.as_deref(), Some("2024-01"));
        assert_eq!(app.status_message, "Switched to month: 2024-01");

        // Invalid months are rejected and leave the filter alone
        handle_command("month 2024-13", &mut app, &mut store, &storage).unwrap();
        assert_eq!(app.month_filter.as_deref(), Some("2024-01"));
    }

    #[test]
    fn export_with_no_entries_writes_nothing() {
        let mut store = BudgetStore::default();
        let storage = Storage::open_in_memory().unwrap();
        let mut app = App::new(&store);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        handle_command(
            &format!("export {}", path.display()),
            &mut app,
            &mut store,
            &storage,
        )
        .unwrap();

        assert_eq!(app.status_message, "No entries to export");
        assert!(!path.exists());
    }

    #[test]
    fn suggestions_prefer_named_commands() {
        assert_eq!(find_closest("exprot"), "export");
        assert_eq!(find_closest("incom"), "income");
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("month", "month"), 0);
    }
}

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::{BudgetStore, EntryKind};
use crate::ui::app::App;
use crate::ui::util::{format_amount, truncate};

/// Full transaction list, income rows first, cursor-addressable for
/// `:edit` and `:delete`.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, store: &BudgetStore) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" History ", theme.title_style()));

    if app.rows.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Add one with :income or :expense",
            theme.dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            " {:<8} {:<11} {:<32} {:<14} {:>13}",
            "Type", "Date", "Description", "Category", "Amount"
        ),
        theme.title_style(),
    ))];

    let page = area.height.saturating_sub(3) as usize;
    let end = (app.history_scroll + page.max(1)).min(app.rows.len());

    for (i, row) in app
        .rows
        .iter()
        .enumerate()
        .take(end)
        .skip(app.history_scroll)
    {
        let Some(txn) = store.entries(row.kind).get(row.index) else {
            continue;
        };

        let amount = match row.kind {
            EntryKind::Income => format!("+{}", format_amount(txn.amount)),
            EntryKind::Expense => format!("-{}", format_amount(txn.amount)),
        };
        let text = format!(
            " {:<8} {:<11} {:<32} {:<14} {:>13}",
            row.kind.as_str(),
            txn.day(),
            truncate(&txn.description, 32),
            txn.category.as_str(),
            amount,
        );

        let style = if i == app.history_index {
            theme.selected_style()
        } else if row.kind == EntryKind::Income {
            theme.income_style()
        } else if i % 2 == 1 {
            theme.alt_row_style()
        } else {
            theme.normal_style()
        };

        lines.push(Line::from(Span::styled(text, style)));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

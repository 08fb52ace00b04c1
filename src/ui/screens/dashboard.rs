use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Breakdown + recents
            Constraint::Length(4), // Alerts
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_middle(f, chunks[1], app);
    render_alerts(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let summary = &app.summary;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        app,
        "Income",
        summary.total_income,
        theme.green,
        Some(summary.month.clone()),
    );
    render_card(
        f,
        cards[1],
        app,
        "Expenses",
        summary.total_expenses,
        theme.red,
        None,
    );
    render_card(
        f,
        cards[2],
        app,
        "Balance",
        summary.balance,
        if summary.balance >= Decimal::ZERO {
            theme.green
        } else {
            theme.red
        },
        None,
    );

    let goal_subtitle = if summary.savings_goal > Decimal::ZERO {
        Some(format!("of {} goal", format_amount(summary.savings_goal)))
    } else {
        Some("no goal set (:goal)".into())
    };
    render_card(
        f,
        cards[3],
        app,
        "Savings",
        summary.savings_progress,
        theme.yellow,
        goal_subtitle,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let theme = &app.theme;
    let display = format_amount(amount);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(format!(" {title} "), theme.title_style()));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme.dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_middle(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    if !app.summary.has_data() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(Span::styled(" This Month ", theme.title_style()));
        let msg = Paragraph::new(Line::from(Span::styled(
            format!(
                "No transactions for {}. Add one with :income or :expense",
                app.summary.month
            ),
            theme.dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_category_breakdown(f, halves[0], app);
    render_recents(f, halves[1], app);
}

fn render_category_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines: Vec<Line> = app
        .summary
        .by_category
        .iter()
        .map(|(cat, amount)| {
            let style = if *amount > Decimal::ZERO {
                theme.normal_style()
            } else {
                theme.dim_style()
            };
            Line::from(Span::styled(
                format!("  {:<14} {:>14}", cat.as_str(), format_amount(*amount)),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Expenses by Category ", theme.title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_recents(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    for txn in &app.summary.recent_income {
        lines.push(Line::from(Span::styled(
            format!(
                "  + {:>12}  {:<20} {}",
                format_amount(txn.amount),
                truncate(&txn.description, 20),
                txn.day()
            ),
            theme.income_style(),
        )));
    }
    for txn in &app.summary.recent_expenses {
        lines.push(Line::from(Span::styled(
            format!(
                "  - {:>12}  {:<20} {}",
                format_amount(txn.amount),
                truncate(&txn.description, 20),
                txn.day()
            ),
            theme.expense_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Recent Transactions ", theme.title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines: Vec<Line> = if app.alerts.is_empty() {
        vec![Line::from(Span::styled("  No alerts", theme.dim_style()))]
    } else {
        app.alerts
            .iter()
            .map(|alert| {
                Line::from(Span::styled(
                    format!("  ! {}", alert.message()),
                    Style::default()
                        .fg(theme.yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Alerts ", theme.title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
